// Host-side tests for mutation classification and the cursor halo.

use glam::Vec2;
use synapse_core::{classify, AddedNode, EngineEvent, Halo};

const TEXT: AddedNode = AddedNode {
    is_element: false,
    matches_typing: false,
    contains_typing: false,
};

const MESSAGE: AddedNode = AddedNode {
    is_element: true,
    matches_typing: false,
    contains_typing: false,
};

#[test]
fn no_added_nodes_means_no_events() {
    assert!(classify(Vec::<AddedNode>::new()).is_empty());
}

#[test]
fn any_added_node_is_activity() {
    assert_eq!(classify([TEXT]), vec![EngineEvent::Activity]);
    assert_eq!(classify([MESSAGE, MESSAGE]), vec![EngineEvent::Activity]);
}

#[test]
fn typing_indicator_reports_typing_once_per_batch() {
    let loader = AddedNode {
        matches_typing: true,
        ..MESSAGE
    };
    let wrapper = AddedNode {
        contains_typing: true,
        ..MESSAGE
    };
    assert_eq!(
        classify([MESSAGE, loader, wrapper]),
        vec![EngineEvent::Activity, EngineEvent::Typing(true)]
    );
}

#[test]
fn non_elements_never_count_as_typing() {
    let odd = AddedNode {
        is_element: false,
        matches_typing: true,
        contains_typing: true,
    };
    assert!(!odd.shows_typing());
    assert_eq!(classify([odd]), vec![EngineEvent::Activity]);
}

#[test]
fn halo_starts_at_origin_and_eases_toward_target() {
    let mut halo = Halo::new(Vec2::new(100.0, 50.0));
    assert_eq!(halo.pos, Vec2::ZERO);
    let first = halo.step(1.0);
    assert!((first.x - 8.0).abs() < 1e-3);
    assert!((first.y - 4.0).abs() < 1e-3);

    for _ in 0..200 {
        halo.step(1.0);
    }
    assert!(halo.pos.distance(Vec2::new(100.0, 50.0)) < 0.01);
}

#[test]
fn halo_retargets_and_formats_transform() {
    let mut halo = Halo::new(Vec2::ZERO);
    assert_eq!(halo.css_transform(), "translate(0px, 0px)");
    halo.set_target(Vec2::new(-40.0, 20.0));
    halo.step(0.0);
    assert_eq!(halo.pos, Vec2::ZERO, "no time, no movement");
    halo.step(2.0);
    assert!(halo.pos.x < 0.0 && halo.pos.y > 0.0);
    let css = halo.css_transform();
    assert!(css.starts_with("translate(-") && css.ends_with("px)"));
}
