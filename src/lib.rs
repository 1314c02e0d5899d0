//! depstats - export dependency graph node timings as gnuplot scripts
//!
//! The library exposes a small dependency graph model whose ID nodes carry
//! timing statistics, and an exporter that writes those timings as a gnuplot
//! script drawing one horizontal bar per measured node.
//!
//! ```
//! use depstats::{Depsgraph, export_stats_gnuplot};
//!
//! let mut graph = Depsgraph::new();
//! graph.add_node_with_time("OBCube", 0.012);
//! graph.add_node("MEMesh"); // not measured, left out of the chart
//!
//! let mut script = Vec::new();
//! export_stats_gnuplot(Some(&graph), &mut script, Some("Frame 1"), "frame1.png");
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod graph;
pub mod reporting;
pub mod ui;

// Re-export commonly used items for convenience
pub use config::Config;
pub use crate::core::{DepStatsError, Result};
pub use export::{GnuplotExporter, PlotSettings, export_stats_gnuplot, write_stats_gnuplot};
pub use graph::{Depsgraph, IdNode, NodeStats, StatsSource};
