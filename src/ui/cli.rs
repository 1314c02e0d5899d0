// Command-line interface definitions and parsing for depstats

use crate::config::CliConfig;
use crate::core::constants::plot;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON stats dump of the dependency graph
    pub stats: String,

    // Chart
    /// Write the script to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Chart")]
    pub output: Option<String>,

    /// Image file gnuplot should render (default: depstats.png)
    #[arg(long, value_name = "FILE", help_heading = "Chart")]
    pub image: Option<String>,

    /// Chart title
    #[arg(short = 'l', long, value_name = "TEXT", help_heading = "Chart")]
    pub label: Option<String>,

    // Layout
    /// Image width in pixels (default: 1920)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..=plot::MAX_DIMENSION as i64), help_heading = "Layout")]
    pub width: Option<u32>,

    /// Image height in pixels (default: 1080)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..=plot::MAX_DIMENSION as i64), help_heading = "Layout")]
    pub height: Option<u32>,

    /// Bar color as #RRGGBB (default: #406090)
    #[arg(long, value_name = "HEX", help_heading = "Layout")]
    pub color: Option<String>,

    // Filtering
    /// Node names to leave out (regex, repeatable)
    #[arg(long, value_name = "REGEX", help_heading = "Filtering")]
    pub exclude_pattern: Vec<String>,

    // Output & Verbosity
    /// Suppress all log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments to a CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let exclude_patterns = if cli.exclude_pattern.is_empty() {
        None
    } else {
        Some(cli.exclude_pattern.clone())
    };

    CliConfig {
        label: cli.label.clone(),
        image_output: cli.image.clone(),
        script_output: cli.output.clone(),
        terminal_width: cli.width,
        terminal_height: cli.height,
        bar_color: cli.color.clone(),
        exclude_patterns,
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
