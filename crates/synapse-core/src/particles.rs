//! Pulses looping along graph edges and short-lived spark bursts.

use crate::constants::*;
use crate::graph::Graph;
use glam::Vec2;
use rand::Rng;

/// Particle travelling repeatedly along one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Pulse {
    /// Index into the owning graph's edge list.
    pub edge: usize,
    /// Position along the edge, always in [0, 1).
    pub progress: f32,
    pub speed: f32,
    pub size: f32,
}

impl Pulse {
    #[inline]
    pub fn position(&self, graph: &Graph) -> Vec2 {
        let (a, b) = graph.endpoints(graph.edges[self.edge]);
        a.lerp(b, self.progress)
    }
}

/// Radial burst fading out over `max_life` frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub radius: f32,
    pub life: f32,
    pub max_life: f32,
}

impl Spark {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: SPARK_INITIAL_RADIUS,
            life: SPARK_LIFETIME,
            max_life: SPARK_LIFETIME,
        }
    }

    /// Remaining life as a fraction of the initial lifetime.
    #[inline]
    pub fn fade(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Draws a fresh pulse pool from the graph's edges, sampling with replacement.
pub fn refill_pulses<R: Rng + ?Sized>(
    graph: &Graph,
    target_count: usize,
    base_speed: f32,
    rng: &mut R,
) -> Vec<Pulse> {
    if graph.edges.is_empty() {
        return Vec::new();
    }
    let (speed_lo, speed_hi) = PULSE_SPEED_JITTER;
    let (size_lo, size_hi) = PULSE_SIZE_RANGE;
    (0..target_count)
        .map(|_| Pulse {
            edge: rng.gen_range(0..graph.edges.len()),
            progress: rng.gen_range(0.0..1.0),
            speed: base_speed * rng.gen_range(speed_lo..speed_hi),
            size: rng.gen_range(size_lo..size_hi),
        })
        .collect()
}

/// Moves every pulse along its edge; `dt` is measured in reference frames.
pub fn advance_pulses(pulses: &mut [Pulse], dt: f32, audio_level: f32) {
    let step = (PULSE_BASE_INCREMENT + audio_level * PULSE_AUDIO_GAIN) * dt;
    for p in pulses.iter_mut() {
        p.progress += p.speed * step;
        if p.progress >= 1.0 || p.progress.is_nan() {
            p.progress = 0.0;
        }
    }
}

/// Spark at the midpoint of a random edge, or `None` without edges.
pub fn spawn_spark<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Option<Spark> {
    if graph.edges.is_empty() {
        return None;
    }
    let edge = graph.edges[rng.gen_range(0..graph.edges.len())];
    Some(Spark::new(graph.midpoint(edge)))
}

/// Ages and grows sparks, dropping the ones that burned out. Order is not kept.
pub fn advance_sparks(sparks: &mut Vec<Spark>, dt: f32, audio_level: f32) {
    let growth = (SPARK_GROWTH_BASE + audio_level * SPARK_GROWTH_AUDIO_GAIN) * dt;
    let mut i = sparks.len();
    while i > 0 {
        i -= 1;
        let s = &mut sparks[i];
        s.life -= SPARK_LIFE_STEP * dt;
        s.radius += growth;
        if s.life <= 0.0 {
            sparks.swap_remove(i);
        }
    }
}
