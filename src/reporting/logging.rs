use crate::config::Config;
use crate::export::ExportSummary;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // Logs go to stderr so a script written to stdout stays clean.
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let settings = config.plot_settings();
    let label = config.label.as_deref().unwrap_or("");
    let script_output = config.script_output.as_deref().unwrap_or("<stdout>");

    info!(
        "Configuration: image={}, script={script_output}, label={label:?}",
        config.image_output_or_default()
    );
    info!(
        "Layout: {}x{}, color={}",
        settings.width, settings.height, settings.bar_color
    );
}

/// Log what was loaded from a stats dump
pub fn log_graph_info(path: &Path, node_count: usize, measured: usize) {
    info!(
        "Loaded {node_count} node(s) from {}, {measured} with recorded time",
        path.display()
    );
}

/// Log nodes dropped by exclude patterns
pub fn log_filtered_nodes(excluded: &[String]) {
    if excluded.is_empty() {
        return;
    }
    info!("Excluded {} node(s) by pattern", excluded.len());
    for (i, name) in excluded.iter().enumerate() {
        debug!("  {}. {}", i + 1, name);
    }
}

/// Log export completion
pub fn log_export_complete(target: &str, summary: &ExportSummary) {
    info!(
        "Wrote {} record(s) in {} line(s) to {target}",
        summary.records, summary.lines
    );
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
