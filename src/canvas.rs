use std::f64::consts::TAU;
use synapse_core::{DrawCmd, RadialGradient, Rect};
use web_sys as web;

/// Paints one frame's display list onto a 2D context.
pub fn replay(ctx: &web::CanvasRenderingContext2d, commands: &[DrawCmd]) {
    for cmd in commands {
        match cmd {
            DrawCmd::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCmd::FillRadial { gradient, rect } => {
                if let Some(g) = radial(ctx, gradient) {
                    ctx.set_fill_style_canvas_gradient(&g);
                    fill_rect(ctx, rect);
                }
            }
            DrawCmd::StrokeSegments {
                segments,
                color,
                line_width,
                alpha,
            } => {
                ctx.save();
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_line_width(*line_width as f64);
                ctx.set_stroke_style_str(&color.css());
                ctx.begin_path();
                for (a, b) in segments {
                    ctx.move_to(a.x as f64, a.y as f64);
                    ctx.line_to(b.x as f64, b.y as f64);
                }
                ctx.stroke();
                ctx.restore();
            }
            DrawCmd::FillRects { rects, color } => {
                ctx.set_fill_style_str(&color.css());
                for r in rects {
                    fill_rect(ctx, r);
                }
            }
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.begin_path();
                _ = ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    radius.max(0.0) as f64,
                    0.0,
                    TAU,
                );
                ctx.fill();
            }
            DrawCmd::Blend(mode) => {
                _ = ctx.set_global_composite_operation(mode.composite_operation());
            }
        }
    }
}

#[inline]
fn fill_rect(ctx: &web::CanvasRenderingContext2d, r: &Rect) {
    ctx.fill_rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
}

fn radial(
    ctx: &web::CanvasRenderingContext2d,
    gradient: &RadialGradient,
) -> Option<web::CanvasGradient> {
    let (x, y) = (gradient.center.x as f64, gradient.center.y as f64);
    let g = ctx
        .create_radial_gradient(
            x,
            y,
            gradient.inner_radius.max(0.0) as f64,
            x,
            y,
            gradient.outer_radius.max(0.0) as f64,
        )
        .ok()?;
    for stop in &gradient.stops {
        g.add_color_stop(stop.offset, &stop.color.css()).ok()?;
    }
    Some(g)
}
