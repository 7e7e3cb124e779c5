use crate::audio::ease_factor;
use crate::constants::HALO_EASE;
use glam::Vec2;

/// Soft glow trailing the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Halo {
    pub pos: Vec2,
    pub target: Vec2,
}

impl Halo {
    /// Halo resting at the origin, drifting toward `target`.
    pub fn new(target: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            target,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn step(&mut self, dt: f32) -> Vec2 {
        self.pos += (self.target - self.pos) * ease_factor(HALO_EASE, dt);
        self.pos
    }

    /// CSS `transform` value placing the halo element.
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.pos.x, self.pos.y)
    }
}
