use crate::audio::{AudioLevel, IdleOscillator};
use crate::bridge::{EngineEvent, Reaction};
use crate::config::{ConfigError, EngineConfig};
use crate::constants::*;
use crate::graph::{self, Graph};
use crate::particles::{self, Pulse, Spark};
use crate::scene::{BlendMode, DrawCmd, RadialGradient, Rect};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Converts a wall-clock frame delta into reference frames, clamped so a long
/// stall cannot fling particles across the screen.
#[inline]
pub fn frame_scale(dt: Duration) -> f32 {
    (dt.as_secs_f32() * REFERENCE_FPS).clamp(0.0, MAX_FRAME_SCALE)
}

/// Owns every animation pool plus the random source that feeds them.
pub struct Engine<R: Rng = StdRng> {
    config: EngineConfig,
    viewport: Vec2,
    graph: Graph,
    pulses: Vec<Pulse>,
    sparks: Vec<Spark>,
    audio: AudioLevel,
    idle: Option<IdleOscillator>,
    typing: Option<bool>,
    rng: R,
}

impl Engine<StdRng> {
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("[engine] rejected config: {e}");
            return Err(e);
        }
        Ok(Self {
            config,
            viewport: Vec2::ZERO,
            graph: Graph::default(),
            pulses: Vec::new(),
            sparks: Vec::new(),
            audio: AudioLevel::default(),
            idle: None,
            typing: None,
            rng,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn audio(&self) -> &AudioLevel {
        &self.audio
    }

    pub fn audio_level(&self) -> f32 {
        self.audio.level
    }

    /// Overrides the audio target; the idle oscillator rewrites it each frame
    /// once armed.
    pub fn set_audio_target(&mut self, target: f32) {
        self.audio.target = target;
    }

    pub fn idle_armed(&self) -> bool {
        self.idle.is_some()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.unwrap_or(false)
    }

    /// Rebuilds graph and pulses for a new viewport size (CSS pixels).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
        self.rebuild();
    }

    /// Replaces nodes, edges and pulses in one go so no pulse outlives its edge.
    pub fn rebuild(&mut self) {
        let graph = graph::build(&self.config, self.viewport.x, self.viewport.y, &mut self.rng);
        let pulses = particles::refill_pulses(
            &graph,
            self.config.pulse_count,
            self.config.pulse_speed,
            &mut self.rng,
        );
        log::debug!(
            "[engine] rebuilt {}x{}: nodes={} edges={} pulses={}",
            self.viewport.x,
            self.viewport.y,
            graph.nodes.len(),
            graph.edges.len(),
            pulses.len()
        );
        self.graph = graph;
        self.pulses = pulses;
    }

    /// Adds a spark on a random edge. Returns false when there are no edges.
    pub fn spawn_spark(&mut self) -> bool {
        match particles::spawn_spark(&self.graph, &mut self.rng) {
            Some(spark) => {
                self.sparks.push(spark);
                true
            }
            None => false,
        }
    }

    pub fn notify(&mut self, event: EngineEvent) -> Option<Reaction> {
        match event {
            EngineEvent::Activity => {
                self.spawn_spark();
                Some(Reaction::PulseDecor)
            }
            EngineEvent::Typing(on) => {
                if self.typing == Some(on) {
                    return None;
                }
                self.typing = Some(on);
                Some(Reaction::SetTyping(on))
            }
            EngineEvent::TypingSnapshot(on) => {
                self.typing = Some(on);
                Some(Reaction::SetTyping(on))
            }
            EngineEvent::Gesture => {
                if self.idle.is_none() {
                    log::info!("[engine] idle pulse armed");
                    self.idle = Some(IdleOscillator::default());
                }
                None
            }
        }
    }

    /// Advances one display frame and appends its paint commands to `out`.
    /// Returns the eased audio level for the host to publish.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<DrawCmd>) -> f32 {
        self.step(frame_scale(dt), out)
    }

    /// Same as [`Engine::tick`] with `dt` already in reference frames.
    pub fn step(&mut self, dt: f32, out: &mut Vec<DrawCmd>) -> f32 {
        if let Some(idle) = &mut self.idle {
            self.audio.target = idle.step(dt);
        }
        let level = self.audio.level;

        out.push(DrawCmd::Clear {
            width: self.viewport.x,
            height: self.viewport.y,
        });
        self.paint_background(level, out);
        self.paint_graph(level, out);

        out.push(DrawCmd::Blend(BlendMode::Additive));
        particles::advance_pulses(&mut self.pulses, dt, level);
        self.paint_pulses(level, out);
        particles::advance_sparks(&mut self.sparks, dt, level);
        self.paint_sparks(out);
        out.push(DrawCmd::Blend(BlendMode::Normal));

        self.audio.ease(dt)
    }

    fn paint_background(&self, level: f32, out: &mut Vec<DrawCmd>) {
        let (w, h) = (self.viewport.x, self.viewport.y);
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let boost = level.clamp(BACKGROUND_BOOST_MIN, BACKGROUND_BOOST_MAX);
        let inner_alpha = BACKGROUND_INNER.a + boost * BACKGROUND_INNER_AUDIO_GAIN;
        let center = Vec2::new(w * BACKGROUND_FOCUS.0, h * BACKGROUND_FOCUS.1);
        let gradient = RadialGradient::new(center, BACKGROUND_INNER_RADIUS, w.max(h))
            .stop(0.0, BACKGROUND_INNER.with_alpha(inner_alpha))
            .stop(BACKGROUND_MID_OFFSET, BACKGROUND_MID)
            .stop(1.0, BACKGROUND_OUTER);
        out.push(DrawCmd::FillRadial {
            gradient,
            rect: Rect::new(0.0, 0.0, w, h),
        });
    }

    fn paint_graph(&self, level: f32, out: &mut Vec<DrawCmd>) {
        if !self.graph.edges.is_empty() {
            let segments = self
                .graph
                .edges
                .iter()
                .map(|&e| self.graph.endpoints(e))
                .collect();
            out.push(DrawCmd::StrokeSegments {
                segments,
                color: EDGE_COLOR,
                line_width: EDGE_LINE_WIDTH,
                alpha: EDGE_ALPHA_BASE + level * EDGE_ALPHA_AUDIO_GAIN,
            });
        }
        if !self.graph.nodes.is_empty() {
            let rects = self
                .graph
                .nodes
                .iter()
                .map(|n| Rect::centered(n.pos, NODE_SIZE * 0.5))
                .collect();
            out.push(DrawCmd::FillRects {
                rects,
                color: NODE_COLOR,
            });
        }
    }

    fn paint_pulses(&self, level: f32, out: &mut Vec<DrawCmd>) {
        let glow_radius = PULSE_GLOW_RADIUS + level * PULSE_GLOW_AUDIO_GAIN;
        for p in &self.pulses {
            let center = p.position(&self.graph);
            let gradient = RadialGradient::new(center, 0.0, glow_radius)
                .stop(0.0, GLOW_COLOR)
                .stop(1.0, GLOW_COLOR.with_alpha(0.0));
            out.push(DrawCmd::FillRadial {
                gradient,
                rect: Rect::centered(center, PULSE_GLOW_HALF_EXTENT),
            });
            out.push(DrawCmd::FillCircle {
                center,
                radius: p.size + level * PULSE_CORE_AUDIO_GAIN,
                color: PULSE_CORE_COLOR,
            });
        }
    }

    fn paint_sparks(&self, out: &mut Vec<DrawCmd>) {
        for s in &self.sparks {
            let gradient = RadialGradient::new(s.pos, 0.0, s.radius)
                .stop(0.0, GLOW_COLOR.with_alpha(SPARK_PEAK_ALPHA * s.fade()))
                .stop(1.0, GLOW_COLOR.with_alpha(0.0));
            out.push(DrawCmd::FillRadial {
                gradient,
                rect: Rect::centered(s.pos, s.radius),
            });
        }
    }
}
