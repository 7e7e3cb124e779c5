use crate::constants::MIN_DEVICE_PIXEL_RATIO;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn create_div(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("create div #{id}: {:?}", e))?;
    el.set_id(id);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Viewport size in whole CSS pixels.
pub fn viewport_css_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).floor() as f32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Sizes the canvas backing store to the viewport times the device pixel
/// ratio and scales the context so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let dpr = window.device_pixel_ratio().max(MIN_DEVICE_PIXEL_RATIO);
    let (w, h) = viewport_css_size(window);
    canvas.set_width((w as f64 * dpr).floor() as u32);
    canvas.set_height((h as f64 * dpr).floor() as u32);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (w, h)
}

/// Removes and re-adds `class` so its CSS animation plays again.
pub fn restart_class(el: &web::HtmlElement, class: &str) {
    let cl = el.class_list();
    _ = cl.remove_1(class);
    // reading layout forces a reflow between the two class changes
    let _ = el.offset_width();
    _ = cl.add_1(class);
}

pub fn add_listener<E>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    once: bool,
    mut handler: impl FnMut(E) + 'static,
) where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    opts.set_once(once);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("{event} listener error: {:?}", e);
    }
    closure.forget();
}
