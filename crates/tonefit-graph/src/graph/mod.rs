//! Graph storage and domain loading.

pub mod domain;
pub mod stable_graph;

pub use domain::DomainSpec;
pub use stable_graph::{GraphNode, IndexedGraph};
