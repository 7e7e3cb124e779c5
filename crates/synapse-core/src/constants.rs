use crate::scene::Rgba;

// Visual tuning constants shared by the engine and its hosts.

// Frame timing
pub const REFERENCE_FPS: f32 = 60.0; // dt scale of 1.0 == one frame at this rate
pub const MAX_FRAME_SCALE: f32 = 4.0; // clamp for long stalls (hidden tab, debugger)

// Graph layout defaults
pub const DEFAULT_GRID_SPACING: f32 = 76.0;
pub const DEFAULT_NODE_JITTER: f32 = 22.0;
pub const DEFAULT_LINK_CHANCE: f32 = 0.22;
pub const DEFAULT_MAX_LINKS_PER_NODE: u32 = 3;
pub const DEFAULT_LINK_REACH: f32 = 1.2; // multiple of grid spacing
// Linking is quadratic in node count; larger grids are not built at all.
pub const MAX_GRAPH_NODES: usize = 20_000;

// Pulses
pub const DEFAULT_PULSE_COUNT: usize = 100;
pub const DEFAULT_PULSE_SPEED: f32 = 0.28;
pub const PULSE_SPEED_JITTER: (f32, f32) = (0.6, 1.4); // multiplier range on base speed
pub const PULSE_SIZE_RANGE: (f32, f32) = (1.4, 3.8);
pub const PULSE_BASE_INCREMENT: f32 = 0.0035; // progress per frame at speed 1.0
pub const PULSE_AUDIO_GAIN: f32 = 0.004;
pub const PULSE_GLOW_RADIUS: f32 = 18.0;
pub const PULSE_GLOW_AUDIO_GAIN: f32 = 14.0;
pub const PULSE_GLOW_HALF_EXTENT: f32 = 22.0;
pub const PULSE_CORE_AUDIO_GAIN: f32 = 2.2;

// Sparks
pub const SPARK_INITIAL_RADIUS: f32 = 20.0;
pub const SPARK_LIFETIME: f32 = 30.0;
pub const SPARK_LIFE_STEP: f32 = 1.0;
pub const SPARK_GROWTH_BASE: f32 = 1.2;
pub const SPARK_GROWTH_AUDIO_GAIN: f32 = 1.8;
pub const SPARK_PEAK_ALPHA: f32 = 0.45;

// Synthetic audio level
pub const AUDIO_LEVEL_REST: f32 = 0.12;
pub const AUDIO_EASE: f32 = 0.08; // fraction of the gap closed per frame
pub const IDLE_PHASE_STEP: f32 = 0.03; // radians per frame
pub const IDLE_AMPLITUDE: f32 = 0.05;

// Background
pub const BACKGROUND_BOOST_MIN: f32 = 0.1;
pub const BACKGROUND_BOOST_MAX: f32 = 0.9;
pub const BACKGROUND_FOCUS: (f32, f32) = (0.5, 0.2); // gradient centre, fraction of viewport
pub const BACKGROUND_INNER_RADIUS: f32 = 10.0;

// Edges and nodes
pub const EDGE_ALPHA_BASE: f32 = 0.6;
pub const EDGE_ALPHA_AUDIO_GAIN: f32 = 0.3;
pub const EDGE_LINE_WIDTH: f32 = 1.0;
pub const NODE_SIZE: f32 = 2.0;

// Cursor halo
pub const HALO_EASE: f32 = 0.08;

// Palette
pub const BACKGROUND_INNER: Rgba = Rgba::new(0, 210, 255, 0.1); // alpha raised by audio level
pub const BACKGROUND_INNER_AUDIO_GAIN: f32 = 0.3;
pub const BACKGROUND_MID: Rgba = Rgba::new(0, 90, 150, 0.12);
pub const BACKGROUND_MID_OFFSET: f32 = 0.45;
pub const BACKGROUND_OUTER: Rgba = Rgba::new(0, 0, 0, 0.82);
pub const EDGE_COLOR: Rgba = Rgba::new(60, 210, 255, 0.3);
pub const NODE_COLOR: Rgba = Rgba::new(120, 230, 255, 0.65);
pub const GLOW_COLOR: Rgba = Rgba::new(0, 255, 240, 0.95); // pulse and spark glow
pub const PULSE_CORE_COLOR: Rgba = Rgba::new(190, 255, 255, 0.95);
