//! Dependency graph model
//!
//! This module holds the ID nodes of a dependency graph together with
//! their timing statistics, and the read-only view exporters consume.

pub mod depsgraph;
pub mod node;

// Re-export commonly used items
pub use depsgraph::{Depsgraph, NodeTiming, StatsSource};
pub use node::{IdNode, NodeStats, NodeTimer, strip_type_tag};
