//! Runtime options for the backdrop engine.
//!
//! Defaults reproduce the tuned look of the live backdrop. Tests shrink or
//! pin individual knobs through the `with_*` helpers.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid spacing must be positive and finite, got {0}")]
    GridSpacing(f32),
    #[error("node jitter must be non-negative and finite, got {0}")]
    NodeJitter(f32),
    #[error("link chance must lie in [0, 1], got {0}")]
    LinkChance(f32),
    #[error("link reach must be positive and finite, got {0}")]
    LinkReach(f32),
    #[error("pulse speed must be non-negative and finite, got {0}")]
    PulseSpeed(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Distance in CSS pixels between grid intersections.
    pub grid_spacing: f32,
    /// Maximum per-axis offset applied to each node.
    pub node_jitter: f32,
    /// Probability that two nodes within reach get linked.
    pub link_chance: f32,
    pub max_links_per_node: u32,
    /// Link distance limit as a multiple of `grid_spacing`.
    pub link_reach: f32,
    pub pulse_count: usize,
    pub pulse_speed: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_spacing: DEFAULT_GRID_SPACING,
            node_jitter: DEFAULT_NODE_JITTER,
            link_chance: DEFAULT_LINK_CHANCE,
            max_links_per_node: DEFAULT_MAX_LINKS_PER_NODE,
            link_reach: DEFAULT_LINK_REACH,
            pulse_count: DEFAULT_PULSE_COUNT,
            pulse_speed: DEFAULT_PULSE_SPEED,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(ConfigError::GridSpacing(self.grid_spacing));
        }
        if !(self.node_jitter.is_finite() && self.node_jitter >= 0.0) {
            return Err(ConfigError::NodeJitter(self.node_jitter));
        }
        if !(0.0..=1.0).contains(&self.link_chance) {
            return Err(ConfigError::LinkChance(self.link_chance));
        }
        if !(self.link_reach.is_finite() && self.link_reach > 0.0) {
            return Err(ConfigError::LinkReach(self.link_reach));
        }
        if !(self.pulse_speed.is_finite() && self.pulse_speed >= 0.0) {
            return Err(ConfigError::PulseSpeed(self.pulse_speed));
        }
        Ok(())
    }

    /// Longest edge the builder may create.
    #[inline]
    pub fn max_link_distance(&self) -> f32 {
        self.grid_spacing * self.link_reach
    }

    pub fn with_grid_spacing(mut self, spacing: f32) -> Self {
        self.grid_spacing = spacing;
        self
    }

    pub fn with_node_jitter(mut self, jitter: f32) -> Self {
        self.node_jitter = jitter;
        self
    }

    pub fn with_link_chance(mut self, chance: f32) -> Self {
        self.link_chance = chance;
        self
    }

    pub fn with_max_links_per_node(mut self, max_links: u32) -> Self {
        self.max_links_per_node = max_links;
        self
    }

    pub fn with_link_reach(mut self, reach: f32) -> Self {
        self.link_reach = reach;
        self
    }

    pub fn with_pulse_count(mut self, count: usize) -> Self {
        self.pulse_count = count;
        self
    }

    pub fn with_pulse_speed(mut self, speed: f32) -> Self {
        self.pulse_speed = speed;
        self
    }
}
