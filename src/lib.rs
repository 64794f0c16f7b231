//! Indoor floor plan routing
//!
//! Models a fixed indoor map as a weighted graph of named locations and
//! answers lowest-cost route queries between them. Edge weights derive from
//! Euclidean distance, scaled by per-connection multipliers that prefer
//! shortcuts or penalize undesirable corridors.

pub mod errors;
pub mod floorplan;
pub mod geometry;
pub mod graph;
pub mod route;

pub(crate) mod collections;

pub use errors::GraphError;
pub use graph::{Connection, Graph, Location, LocationKind, WeightMap};
pub use route::{CostMap, Route, costs_from, shortest_path};
