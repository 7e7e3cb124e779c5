//! Host-agnostic engine behind the synapse backdrop: a jittered node graph,
//! pulses looping along its edges, sparks fired by chat activity, and a
//! synthetic audio level that modulates all of it.

pub mod audio;
pub mod bridge;
pub mod config;
pub mod constants;
pub mod engine;
pub mod graph;
pub mod halo;
pub mod particles;
pub mod scene;

pub use audio::*;
pub use bridge::*;
pub use config::*;
pub use engine::*;
pub use graph::{Edge, Graph, Node};
pub use halo::*;
pub use particles::*;
pub use scene::*;
