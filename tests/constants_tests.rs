// Host-side tests for constants and their relationships.
// The front-end crate is wasm-only, so its constants file is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use synapse_core::constants::*;
use synapse_core::EngineConfig;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_config_mirrors_constants() {
    let c = EngineConfig::default();
    assert_eq!(c.grid_spacing, DEFAULT_GRID_SPACING);
    assert_eq!(c.node_jitter, DEFAULT_NODE_JITTER);
    assert_eq!(c.link_chance, DEFAULT_LINK_CHANCE);
    assert_eq!(c.max_links_per_node, DEFAULT_MAX_LINKS_PER_NODE);
    assert_eq!(c.pulse_count, DEFAULT_PULSE_COUNT);
    assert_eq!(c.pulse_speed, DEFAULT_PULSE_SPEED);
    assert!((c.max_link_distance() - 91.2).abs() < 1e-4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_and_ranges_are_sane() {
    // Easing fractions close part of the gap, never overshoot
    assert!(AUDIO_EASE > 0.0 && AUDIO_EASE < 1.0);
    assert!(HALO_EASE > 0.0 && HALO_EASE < 1.0);

    // Jitter below half the grid keeps nodes in their own cell
    assert!(DEFAULT_NODE_JITTER * 2.0 < DEFAULT_GRID_SPACING);

    assert!(PULSE_SPEED_JITTER.0 < PULSE_SPEED_JITTER.1);
    assert!(PULSE_SIZE_RANGE.0 < PULSE_SIZE_RANGE.1);
    assert!(BACKGROUND_BOOST_MIN < BACKGROUND_BOOST_MAX);
    assert!(SPARK_LIFETIME > 0.0 && SPARK_LIFE_STEP > 0.0);

    // Idle oscillation never drives the level negative
    assert!(AUDIO_LEVEL_REST - IDLE_AMPLITUDE > 0.0);
    assert!(MAX_FRAME_SCALE >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_square_covers_the_resting_glow() {
    let resting = PULSE_GLOW_RADIUS + AUDIO_LEVEL_REST * PULSE_GLOW_AUDIO_GAIN;
    assert!(PULSE_GLOW_HALF_EXTENT >= resting);
}

#[test]
fn dom_hooks_share_a_prefix() {
    for id in [CANVAS_ID, HALO_ID, BRAIN_ID, RADAR_ID] {
        assert!(id.starts_with("imt-"), "{id}");
    }
    for class in [BRAIN_PULSE_CLASS, RADAR_PULSE_CLASS, TYPING_CLASS] {
        assert!(class.starts_with("imt-"), "{class}");
    }
    assert!(AUDIO_LEVEL_PROPERTY.starts_with("--"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn typing_selectors_nest() {
    assert!(TYPING_MATCH_SELECTOR.starts_with(TYPING_SELECTOR));
    assert!(TYPING_MATCH_SELECTOR.len() > TYPING_SELECTOR.len());
    assert!(TYPING_POLL_MS > 0);
    assert!(MIN_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(CANVAS_STYLE.contains("pointer-events:none"));
}
