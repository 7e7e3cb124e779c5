/// DOM hooks and timing for the browser front-end.
///
/// The host page's stylesheet targets these ids and classes; keep them in sync
/// with it when renaming.
// Elements created on mount
pub const CANVAS_ID: &str = "imt-bg-canvas";
pub const HALO_ID: &str = "imt-cursor-halo";
pub const BRAIN_ID: &str = "imt-holo-brain";
pub const RADAR_ID: &str = "imt-radar-scan";

// Inline style keeping the canvas behind the chat and out of hit-testing
pub const CANVAS_STYLE: &str = "position:fixed;inset:0;z-index:0;width:100%;height:100%;pointer-events:none;opacity:0.95";

// Classes and properties written back to the page
pub const BRAIN_PULSE_CLASS: &str = "imt-brain-pulse";
pub const RADAR_PULSE_CLASS: &str = "imt-radar-pulse";
pub const TYPING_CLASS: &str = "imt-typing";
pub const AUDIO_LEVEL_PROPERTY: &str = "--audio-level";

// Host page observation
pub const OBSERVE_ROOT_SELECTOR: &str = "#root";
pub const TYPING_SELECTOR: &str = r#"[data-testid*="typing" i], .typing, .cl-typing, .loader"#;
// An added node counts as a typing indicator on a wider match than the poll uses
pub const TYPING_MATCH_SELECTOR: &str =
    r#"[data-testid*="typing" i], .typing, .cl-typing, .loader, [aria-live="polite"]"#;
pub const TYPING_POLL_MS: i32 = 800;

// Backing store never drops below one device pixel per CSS pixel
pub const MIN_DEVICE_PIXEL_RATIO: f64 = 1.0;
