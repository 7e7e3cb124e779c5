use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use synapse_core::{Engine, EngineEvent};
use web_sys as web;

/// Any first keypress counts as the user gesture that arms the idle pulse.
pub fn wire_key_gesture(window: &web::Window, engine: Rc<RefCell<Engine>>) {
    dom::add_listener(window, "keydown", false, true, move |_: web::Event| {
        engine.borrow_mut().notify(EngineEvent::Gesture);
    });
}
