#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use synapse_core::{Engine, EngineConfig, Halo};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod observer;
mod overlay;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("synapse-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn mount_canvas(
    document: &web::Document,
    body: &web::HtmlElement,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    body.append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    Ok((canvas, ctx))
}

fn init() -> anyhow::Result<()> {
    // Injected scripts can be evaluated twice; only the first run mounts.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    if document.get_element_by_id(CANVAS_ID).is_some() {
        log::info!("#{CANVAS_ID} already present, skipping mount");
        return Ok(());
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    let (canvas, ctx) = mount_canvas(&document, &body)?;
    let overlays = Rc::new(overlay::mount(&document, &body)?);

    let engine = Rc::new(RefCell::new(Engine::new(
        EngineConfig::default(),
        StdRng::from_entropy(),
    )?));
    let (w, h) = dom::sync_canvas_backing_size(&window, &canvas, &ctx);
    engine.borrow_mut().resize(w, h);
    {
        let e = engine.borrow();
        log::info!(
            "[engine] viewport={}x{} nodes={} edges={} pulses={}",
            w,
            h,
            e.graph().nodes.len(),
            e.graph().edges.len(),
            e.pulses().len()
        );
    }
    let halo = Rc::new(RefCell::new(Halo::new(Vec2::new(w * 0.5, h * 0.5))));

    events::wire_resize(&window, canvas.clone(), ctx.clone(), engine.clone());
    events::wire_pointer_tracking(&window, halo.clone());
    events::wire_click_gesture(&window, engine.clone());
    events::wire_key_gesture(&window, engine.clone());

    let wiring = observer::BridgeWiring {
        document: document.clone(),
        body: body.clone(),
        engine: engine.clone(),
        overlays: overlays.clone(),
    };
    observer::wire_mutation_observer(&wiring);
    observer::wire_typing_poll(&window, &wiring);

    // Render loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        halo,
        overlays,
        ctx,
        body,
        commands: Vec::new(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
