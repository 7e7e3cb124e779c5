//! Watches the chat page and forwards what it sees to the engine.

use crate::constants::*;
use crate::overlay::Overlays;
use std::cell::RefCell;
use std::rc::Rc;
use synapse_core::{bridge, AddedNode, Engine, EngineEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct BridgeWiring {
    pub document: web::Document,
    pub body: web::HtmlElement,
    pub engine: Rc<RefCell<Engine>>,
    pub overlays: Rc<Overlays>,
}

impl BridgeWiring {
    fn deliver(&self, event: EngineEvent) {
        let reaction = self.engine.borrow_mut().notify(event);
        if let Some(r) = reaction {
            self.overlays.apply(&self.body, r);
        }
    }
}

fn describe_node(node: &web::Node) -> AddedNode {
    match node.dyn_ref::<web::HtmlElement>() {
        Some(el) => AddedNode {
            is_element: true,
            matches_typing: el.matches(TYPING_MATCH_SELECTOR).unwrap_or(false),
            contains_typing: matches!(el.query_selector(TYPING_SELECTOR), Ok(Some(_))),
        },
        None => AddedNode::default(),
    }
}

fn added_nodes(records: &js_sys::Array) -> Vec<AddedNode> {
    let mut out = Vec::new();
    for rec in records.iter() {
        let Ok(rec) = rec.dyn_into::<web::MutationRecord>() else {
            continue;
        };
        let list = rec.added_nodes();
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                out.push(describe_node(&node));
            }
        }
    }
    out
}

/// Observes the chat root for added nodes. Missing root: nothing to watch.
pub fn wire_mutation_observer(w: &BridgeWiring) {
    let root = match w.document.query_selector(OBSERVE_ROOT_SELECTOR) {
        Ok(Some(root)) => root,
        _ => {
            log::warn!("[bridge] no {OBSERVE_ROOT_SELECTOR} to observe");
            return;
        }
    };
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(
        move |records: js_sys::Array, _obs: web::MutationObserver| {
            for event in bridge::classify(added_nodes(&records)) {
                wiring.deliver(event);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
    let observer = match web::MutationObserver::new(closure.as_ref().unchecked_ref()) {
        Ok(o) => o,
        Err(e) => {
            log::error!("MutationObserver error: {:?}", e);
            return;
        }
    };
    let init = web::MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    if let Err(e) = observer.observe_with_options(&root, &init) {
        log::error!("observe error: {:?}", e);
        return;
    }
    closure.forget();
}

/// Re-checks for a typing indicator on a timer. Every result is re-applied,
/// which clears the flag again and restores it if the page removed it.
pub fn wire_typing_poll(window: &web::Window, w: &BridgeWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let present = matches!(wiring.document.query_selector(TYPING_SELECTOR), Ok(Some(_)));
        wiring.deliver(EngineEvent::TypingSnapshot(present));
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TYPING_POLL_MS,
    ) {
        log::error!("typing poll error: {:?}", e);
        return;
    }
    closure.forget();
}
