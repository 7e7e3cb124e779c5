//! Display list handed from the engine to whatever owns the drawing surface.
//!
//! The engine never touches a canvas. Each frame it appends [`DrawCmd`]s in
//! paint order; the web front-end replays them on a `CanvasRenderingContext2d`.

use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. `rgba(0, 210, 255, 0.130)`.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Concentric radial gradient (both circles share `center`).
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: SmallVec<[GradientStop; 3]>,
}

impl RadialGradient {
    pub fn new(center: Vec2, inner_radius: f32, outer_radius: f32) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops: SmallVec::new(),
        }
    }

    pub fn stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * half` centred on `center`.
    pub fn centered(center: Vec2, half: f32) -> Self {
        Self::new(center.x - half, center.y - half, half * 2.0, half * 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Canvas `source-over`.
    Normal,
    /// Canvas `lighter`.
    Additive,
}

impl BlendMode {
    pub fn composite_operation(self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Additive => "lighter",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f32,
        height: f32,
    },
    FillRadial {
        gradient: RadialGradient,
        rect: Rect,
    },
    StrokeSegments {
        segments: Vec<(Vec2, Vec2)>,
        color: Rgba,
        line_width: f32,
        alpha: f32,
    },
    FillRects {
        rects: Vec<Rect>,
        color: Rgba,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Blend(BlendMode),
}
