use crate::constants::*;
use crate::dom;
use synapse_core::Reaction;
use web_sys as web;

/// Decorative elements layered over the page. Their look comes from the
/// host stylesheet; this module only creates them and flips their classes.
pub struct Overlays {
    pub halo: web::HtmlElement,
    pub brain: web::HtmlElement,
    pub radar: web::HtmlElement,
}

pub fn mount(document: &web::Document, body: &web::HtmlElement) -> anyhow::Result<Overlays> {
    let halo = dom::create_div(document, HALO_ID)?;
    let brain = dom::create_div(document, BRAIN_ID)?;
    let radar = dom::create_div(document, RADAR_ID)?;
    for el in [&halo, &brain, &radar] {
        body.append_child(el)
            .map_err(|e| anyhow::anyhow!("append #{}: {:?}", el.id(), e))?;
    }
    Ok(Overlays { halo, brain, radar })
}

impl Overlays {
    pub fn apply(&self, body: &web::HtmlElement, reaction: Reaction) {
        match reaction {
            Reaction::PulseDecor => {
                dom::restart_class(&self.brain, BRAIN_PULSE_CLASS);
                dom::restart_class(&self.radar, RADAR_PULSE_CLASS);
            }
            Reaction::SetTyping(on) => {
                _ = body.class_list().toggle_with_force(TYPING_CLASS, on);
            }
        }
    }

    #[inline]
    pub fn place_halo(&self, transform: &str) {
        _ = self.halo.style().set_property("transform", transform);
    }
}
