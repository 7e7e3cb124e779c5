use crate::canvas;
use crate::constants::AUDIO_LEVEL_PROPERTY;
use crate::overlay::Overlays;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use synapse_core::{frame_scale, DrawCmd, Engine, Halo};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub halo: Rc<RefCell<Halo>>,
    pub overlays: Rc<Overlays>,
    pub ctx: web::CanvasRenderingContext2d,
    pub body: web::HtmlElement,
    pub commands: Vec<DrawCmd>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.commands.clear();
        let level_css = {
            let mut engine = self.engine.borrow_mut();
            engine.tick(dt, &mut self.commands);
            engine.audio().css_value()
        };
        canvas::replay(&self.ctx, &self.commands);
        _ = self
            .body
            .style()
            .set_property(AUDIO_LEVEL_PROPERTY, &level_css);

        let transform = {
            let mut halo = self.halo.borrow_mut();
            halo.step(frame_scale(dt));
            halo.css_transform()
        };
        self.overlays.place_halo(&transform);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
