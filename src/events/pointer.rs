use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use synapse_core::{Engine, EngineEvent, Halo};
use web_sys as web;

/// Keeps the halo target on the pointer.
pub fn wire_pointer_tracking(window: &web::Window, halo: Rc<RefCell<Halo>>) {
    dom::add_listener(window, "mousemove", true, false, move |ev: web::MouseEvent| {
        halo.borrow_mut()
            .set_target(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    });
}

/// Rebuilds the graph whenever the viewport changes size.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    engine: Rc<RefCell<Engine>>,
) {
    let win = window.clone();
    dom::add_listener(window, "resize", true, false, move |_: web::Event| {
        let (w, h) = dom::sync_canvas_backing_size(&win, &canvas, &ctx);
        engine.borrow_mut().resize(w, h);
    });
}

// First click arms the idle audio pulse; keyboard.rs covers keydown.
pub fn wire_click_gesture(window: &web::Window, engine: Rc<RefCell<Engine>>) {
    dom::add_listener(window, "click", false, true, move |_: web::MouseEvent| {
        engine.borrow_mut().notify(EngineEvent::Gesture);
    });
}
