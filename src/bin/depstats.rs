use clap::Parser;
use depstats::config::{CliConfig, Config};
use depstats::export::{ExportSummary, GnuplotExporter};
use depstats::graph::Depsgraph;
use depstats::reporting::logging;
use depstats::ui::{Cli, cli_to_config};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    match run_depstats_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main export logic extracted from main() for testing
pub fn run_depstats_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let mut graph = load_graph(Path::new(&cli.stats))?;
    apply_exclude_patterns(&mut graph, &config)?;

    let exporter = GnuplotExporter::new(config.plot_settings());
    let summary = match config.script_output.as_deref() {
        Some(path) => {
            let summary = write_script_to_file(&exporter, &graph, &config, Path::new(path))?;
            logging::log_export_complete(path, &summary);
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let summary = write_script(&exporter, &graph, &config, &mut handle)?;
            logging::log_export_complete("<stdout>", &summary);
            summary
        }
    };

    if summary.records == 0 {
        logging::log_warning("No node has a recorded time, the chart will be empty");
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::parse_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Validate after the merge so CLI values can override bad file values
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Load the stats dump into a graph
pub fn load_graph(path: &Path) -> Result<Depsgraph, Box<dyn std::error::Error>> {
    let graph = Depsgraph::load_from_file(path).inspect_err(|e| {
        logging::log_error(
            &format!("Could not load stats from '{}'", path.display()),
            Some(e),
        );
    })?;

    logging::log_graph_info(path, graph.len(), graph.measured_count());
    Ok(graph)
}

/// Drop nodes whose display name matches any exclude pattern
pub fn apply_exclude_patterns(
    graph: &mut Depsgraph,
    config: &Config,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let patterns = config.compile_exclude_patterns()?;
    if patterns.is_empty() {
        return Ok(Vec::new());
    }

    let mut excluded = Vec::new();
    graph.retain(|node| {
        let matched = patterns
            .iter()
            .any(|pattern| pattern.is_match(node.display_name()));
        if matched {
            excluded.push(node.name.clone());
        }
        !matched
    });

    logging::log_filtered_nodes(&excluded);
    Ok(excluded)
}

/// Write the script into a stream, flushing it afterwards
pub fn write_script<W: Write + ?Sized>(
    exporter: &GnuplotExporter,
    graph: &Depsgraph,
    config: &Config,
    out: &mut W,
) -> Result<ExportSummary, Box<dyn std::error::Error>> {
    let summary = exporter.try_export(
        Some(graph),
        out,
        config.label.as_deref(),
        config.image_output_or_default(),
    )?;
    out.flush()?;
    Ok(summary)
}

/// Create (or truncate) the script file and write into it
pub fn write_script_to_file(
    exporter: &GnuplotExporter,
    graph: &Depsgraph,
    config: &Config,
    path: &Path,
) -> Result<ExportSummary, Box<dyn std::error::Error>> {
    let file = File::create(path).inspect_err(|e| {
        logging::log_error(
            &format!("Could not create script file '{}'", path.display()),
            Some(e),
        );
    })?;
    let mut writer = BufWriter::new(file);
    write_script(exporter, graph, config, &mut writer)
}
