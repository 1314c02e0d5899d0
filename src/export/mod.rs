//! Script export
//!
//! This module turns graph timing statistics into plotting scripts.

pub mod gnuplot;
pub mod writer;

// Re-export commonly used items
pub use gnuplot::{
    ExportSummary, GnuplotExporter, PlotSettings, export_stats_gnuplot, write_stats_gnuplot,
};
pub use writer::ScriptWriter;
