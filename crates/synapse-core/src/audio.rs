//! Synthetic "audio level" that modulates the whole scene.
//!
//! Nothing listens to a microphone. The level idles at a resting value and,
//! once armed by a user gesture, breathes around it with a slow sine.

use crate::constants::*;

/// Fraction of the remaining gap to close after `dt` reference frames when
/// `per_frame` is closed each frame.
#[inline]
pub fn ease_factor(per_frame: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - per_frame).powf(dt)
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioLevel {
    pub level: f32,
    pub target: f32,
}

impl Default for AudioLevel {
    fn default() -> Self {
        Self {
            level: AUDIO_LEVEL_REST,
            target: AUDIO_LEVEL_REST,
        }
    }
}

impl AudioLevel {
    pub fn ease(&mut self, dt: f32) -> f32 {
        self.level += (self.target - self.level) * ease_factor(AUDIO_EASE, dt);
        self.level
    }

    /// Value published as the `--audio-level` CSS property.
    pub fn css_value(&self) -> String {
        format!("{:.3}", self.level)
    }
}

/// Slow sine producing the idle audio target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdleOscillator {
    pub phase: f32,
}

impl IdleOscillator {
    pub fn step(&mut self, dt: f32) -> f32 {
        self.phase += IDLE_PHASE_STEP * dt;
        self.target()
    }

    #[inline]
    pub fn target(&self) -> f32 {
        AUDIO_LEVEL_REST + self.phase.sin() * IDLE_AMPLITUDE
    }
}
