//! Jittered grid graph that the pulses travel along.
//!
//! Nodes sit near the intersections of a regular grid covering the viewport.
//! Edges are added greedily in generation order between nodes that are close
//! enough, each pair rolling once against `link_chance`, until every node has
//! reached `max_links_per_node` or the pairs run out. The greedy order leaves
//! late nodes with fewer free slots, which gives the mesh its uneven density.

use crate::config::EngineConfig;
use crate::constants::MAX_GRAPH_NODES;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub degree: u32,
}

/// Undirected link between two entries of [`Graph::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Endpoint positions of an edge.
    #[inline]
    pub fn endpoints(&self, edge: Edge) -> (Vec2, Vec2) {
        (self.nodes[edge.a].pos, self.nodes[edge.b].pos)
    }

    #[inline]
    pub fn midpoint(&self, edge: Edge) -> Vec2 {
        let (a, b) = self.endpoints(edge);
        (a + b) * 0.5
    }

    #[inline]
    pub fn edge_length(&self, edge: Edge) -> f32 {
        let (a, b) = self.endpoints(edge);
        a.distance(b)
    }
}

/// Number of grid columns and rows (intersections, not cells) for a viewport.
///
/// `(0, 0)` when the viewport is degenerate or either axis alone would exceed
/// [`MAX_GRAPH_NODES`].
pub fn grid_dims(width: f32, height: f32, spacing: f32) -> (usize, usize) {
    if !viewport_is_drawable(width, height) || !spacing.is_finite() || spacing <= 0.0 {
        return (0, 0);
    }
    match (axis_points(width, spacing), axis_points(height, spacing)) {
        (Some(cols), Some(rows)) => (cols, rows),
        _ => (0, 0),
    }
}

fn axis_points(extent: f32, spacing: f32) -> Option<usize> {
    let cells = (extent / spacing).ceil();
    if !cells.is_finite() || cells >= MAX_GRAPH_NODES as f32 {
        return None;
    }
    (cells as usize).checked_add(1)
}

#[inline]
fn viewport_is_drawable(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

pub fn build<R: Rng + ?Sized>(
    config: &EngineConfig,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Graph {
    let (cols, rows) = grid_dims(width, height, config.grid_spacing);
    if cols == 0 || rows == 0 {
        if viewport_is_drawable(width, height) {
            log::warn!("[graph] {width}x{height} viewport too large for a grid, skipping");
        }
        return Graph::default();
    }
    let Some(count) = cols.checked_mul(rows).filter(|&n| n <= MAX_GRAPH_NODES) else {
        log::warn!("[graph] {cols}x{rows} grid exceeds {MAX_GRAPH_NODES} nodes, skipping");
        return Graph::default();
    };

    let spacing = config.grid_spacing;
    let jitter = config.node_jitter.max(0.0);
    let mut nodes = Vec::with_capacity(count);
    for y in 0..rows {
        for x in 0..cols {
            let jx = rng.gen_range(-jitter..=jitter);
            let jy = rng.gen_range(-jitter..=jitter);
            nodes.push(Node {
                pos: Vec2::new(x as f32 * spacing + jx, y as f32 * spacing + jy),
                degree: 0,
            });
        }
    }

    let edges = link_nodes(&mut nodes, config, rng);
    Graph { nodes, edges }
}

fn link_nodes<R: Rng + ?Sized>(
    nodes: &mut [Node],
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<Edge> {
    let cap = config.max_links_per_node;
    let reach = config.max_link_distance();
    let mut edges = Vec::new();

    for i in 0..nodes.len() {
        if nodes[i].degree >= cap {
            continue;
        }
        for j in (i + 1)..nodes.len() {
            if nodes[j].degree >= cap {
                continue;
            }
            let dist = nodes[i].pos.distance(nodes[j].pos);
            // Roll only for pairs within reach so seeds stay comparable.
            if dist < reach && rng.gen::<f32>() < config.link_chance {
                edges.push(Edge { a: i, b: j });
                nodes[i].degree += 1;
                nodes[j].degree += 1;
                if nodes[i].degree >= cap {
                    break;
                }
            }
        }
    }
    edges
}
