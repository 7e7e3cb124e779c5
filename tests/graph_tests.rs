// Host-side tests for the graph builder.

use rand::rngs::StdRng;
use rand::SeedableRng;
use synapse_core::graph::{build, grid_dims};
use synapse_core::constants::MAX_GRAPH_NODES;
use synapse_core::{Edge, EngineConfig, Graph, Node};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn degrees_from_edges(graph: &Graph) -> Vec<u32> {
    let mut deg = vec![0u32; graph.nodes.len()];
    for e in &graph.edges {
        deg[e.a] += 1;
        deg[e.b] += 1;
    }
    deg
}

#[test]
fn grid_dims_for_800_by_600() {
    assert_eq!(grid_dims(800.0, 600.0, 76.0), (12, 9));
}

#[test]
fn default_build_for_800_by_600_has_108_nodes() {
    let graph = build(&EngineConfig::default(), 800.0, 600.0, &mut rng(1));
    assert_eq!(graph.nodes.len(), 108);
    assert!(!graph.edges.is_empty(), "expected a sparse but non-empty mesh");
}

#[test]
fn nodes_stay_within_jitter_of_their_intersection() {
    let config = EngineConfig::default();
    let graph = build(&config, 800.0, 600.0, &mut rng(7));
    let (cols, _) = grid_dims(800.0, 600.0, config.grid_spacing);
    for (i, n) in graph.nodes.iter().enumerate() {
        let gx = (i % cols) as f32 * config.grid_spacing;
        let gy = (i / cols) as f32 * config.grid_spacing;
        assert!((n.pos.x - gx).abs() <= config.node_jitter + 1e-3);
        assert!((n.pos.y - gy).abs() <= config.node_jitter + 1e-3);
    }
}

#[test]
fn zero_jitter_places_nodes_on_the_grid() {
    let config = EngineConfig::default().with_node_jitter(0.0);
    let graph = build(&config, 152.0, 76.0, &mut rng(3));
    let positions: Vec<(f32, f32)> = graph.nodes.iter().map(|n| (n.pos.x, n.pos.y)).collect();
    assert_eq!(
        positions,
        vec![
            (0.0, 0.0),
            (76.0, 0.0),
            (152.0, 0.0),
            (0.0, 76.0),
            (76.0, 76.0),
            (152.0, 76.0),
        ]
    );
}

#[test]
fn degree_cap_and_reach_hold_for_default_config() {
    let config = EngineConfig::default();
    for (seed, (w, h)) in [(1, (800.0, 600.0)), (2, (1920.0, 1080.0)), (3, (320.0, 640.0))] {
        let graph = build(&config, w, h, &mut rng(seed));
        for n in &graph.nodes {
            assert!(n.degree <= config.max_links_per_node);
        }
        for e in &graph.edges {
            assert!(graph.edge_length(*e) < config.max_link_distance());
            assert!(e.a < e.b, "edges are generated with a < b");
        }
    }
}

#[test]
fn degree_counters_match_edge_incidence() {
    let graph = build(&EngineConfig::default(), 1024.0, 768.0, &mut rng(11));
    let counted = degrees_from_edges(&graph);
    let stored: Vec<u32> = graph.nodes.iter().map(|n| n.degree).collect();
    assert_eq!(counted, stored);
}

#[test]
fn certain_links_without_jitter_only_join_orthogonal_neighbours() {
    let config = EngineConfig::default()
        .with_node_jitter(0.0)
        .with_link_chance(1.0);
    let graph = build(&config, 760.0, 532.0, &mut rng(5));
    assert!(!graph.edges.is_empty());
    for e in &graph.edges {
        // diagonals (~107px) exceed the 91.2px reach
        assert!((graph.edge_length(*e) - config.grid_spacing).abs() < 1e-3);
    }
}

#[test]
fn zero_link_chance_or_zero_cap_produces_no_edges() {
    let none = EngineConfig::default().with_link_chance(0.0);
    assert!(build(&none, 800.0, 600.0, &mut rng(1)).edges.is_empty());

    let capped = EngineConfig::default().with_max_links_per_node(0);
    let graph = build(&capped, 800.0, 600.0, &mut rng(1));
    assert_eq!(graph.nodes.len(), 108);
    assert!(graph.edges.is_empty());
}

#[test]
fn degenerate_viewports_give_an_empty_graph() {
    let config = EngineConfig::default();
    for (w, h) in [
        (0.0, 0.0),
        (800.0, 0.0),
        (0.0, 600.0),
        (-10.0, 600.0),
        (f32::NAN, 600.0),
        (800.0, f32::INFINITY),
    ] {
        let graph = build(&config, w, h, &mut rng(9));
        assert!(graph.is_empty(), "viewport {w}x{h} should be empty");
        assert!(graph.edges.is_empty());
    }
}

#[test]
fn huge_viewports_degrade_to_an_empty_graph() {
    let config = EngineConfig::default();
    for (w, h) in [(1.0e20, 600.0), (800.0, 1.0e20), (1.0e7, 1.0e7), (f32::MAX, f32::MAX)] {
        let graph = build(&config, w, h, &mut rng(3));
        assert!(graph.is_empty(), "viewport {w}x{h} should be empty");
        assert!(graph.edges.is_empty());
    }
}

#[test]
fn grid_dims_rejects_axes_past_the_node_cap() {
    assert_eq!(grid_dims(1.0e20, 600.0, 76.0), (0, 0));
    assert_eq!(grid_dims(MAX_GRAPH_NODES as f32, 1.0, 1.0), (0, 0));
    assert_eq!(
        grid_dims((MAX_GRAPH_NODES - 1) as f32, 1.0, 1.0),
        (MAX_GRAPH_NODES, 2)
    );
}

#[test]
fn grids_over_the_node_cap_are_not_built() {
    let config = EngineConfig::default().with_grid_spacing(1.0);
    // 200 x 101 intersections is just over the cap.
    let graph = build(&config, 199.0, 100.0, &mut rng(4));
    assert!(graph.is_empty());

    let graph = build(&config, 99.0, 49.0, &mut rng(4));
    assert_eq!(graph.nodes.len(), 100 * 50);
}

#[test]
fn same_seed_same_graph() {
    let config = EngineConfig::default();
    let a = build(&config, 1280.0, 720.0, &mut rng(42));
    let b = build(&config, 1280.0, 720.0, &mut rng(42));
    assert_eq!(a, b);

    let c = build(&config, 1280.0, 720.0, &mut rng(43));
    assert_eq!(a.nodes.len(), c.nodes.len());
    assert_ne!(a, c, "different seeds should jitter differently");
}

#[test]
fn graph_helpers_use_node_positions() {
    let graph = Graph {
        nodes: vec![
            Node {
                pos: glam::Vec2::new(0.0, 0.0),
                degree: 1,
            },
            Node {
                pos: glam::Vec2::new(30.0, 40.0),
                degree: 1,
            },
        ],
        edges: vec![Edge { a: 0, b: 1 }],
    };
    let e = graph.edges[0];
    assert_eq!(graph.edge_length(e), 50.0);
    assert_eq!(graph.midpoint(e), glam::Vec2::new(15.0, 20.0));
}
