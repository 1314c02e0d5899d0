use log::{debug, warn};
use std::fmt;
use std::io::Write;

use super::writer::ScriptWriter;
use crate::core::constants::{plot, script};
use crate::core::error::Result;
use crate::graph::StatsSource;

/// Layout of the rendered chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bar fill color as `#RRGGBB`
    pub bar_color: String,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: plot::DEFAULT_WIDTH,
            height: plot::DEFAULT_HEIGHT,
            bar_color: plot::DEFAULT_BAR_COLOR.to_string(),
        }
    }
}

/// What an export call wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Data records, one per measured node
    pub records: usize,
    /// Total lines including markers and directives
    pub lines: usize,
}

/// Seconds formatted like printf's `%f`, including the lowercase
/// `nan`/`inf` spellings gnuplot reads back
struct Seconds(f64);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self.0;
        if time.is_nan() {
            f.write_str("nan")
        } else if time.is_infinite() {
            f.write_str(if time > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{time:.6}")
        }
    }
}

/// Writes node timings as a gnuplot script drawing one horizontal bar per node
#[derive(Debug, Clone, Default)]
pub struct GnuplotExporter {
    settings: PlotSettings,
}

impl GnuplotExporter {
    pub fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    /// Write the script, returning the first stream error.
    ///
    /// An absent graph writes nothing. The stream is neither flushed nor closed.
    pub fn try_export<G, W>(
        &self,
        graph: Option<&G>,
        out: &mut W,
        label: Option<&str>,
        output_filename: &str,
    ) -> Result<ExportSummary>
    where
        G: StatsSource + ?Sized,
        W: Write + ?Sized,
    {
        let Some(graph) = graph else {
            return Ok(ExportSummary::default());
        };

        let mut writer = ScriptWriter::new(out);
        let records = Self::write_stats_data(graph, &mut writer);
        self.write_directives(&mut writer, label, output_filename);

        let lines = writer.lines_written();
        writer.finish()?;

        debug!("Wrote gnuplot script: {records} record(s), {lines} line(s)");
        Ok(ExportSummary { records, lines })
    }

    /// Write the script, ignoring stream errors apart from logging them
    pub fn export<G, W>(
        &self,
        graph: Option<&G>,
        out: &mut W,
        label: Option<&str>,
        output_filename: &str,
    ) where
        G: StatsSource + ?Sized,
        W: Write + ?Sized,
    {
        if let Err(err) = self.try_export(graph, out, label, output_filename) {
            warn!("Failed to write gnuplot stats script: {err}");
        }
    }

    /// Render the script into a string
    pub fn render_to_string<G>(
        &self,
        graph: Option<&G>,
        label: Option<&str>,
        output_filename: &str,
    ) -> String
    where
        G: StatsSource + ?Sized,
    {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        self.export(graph, &mut out, label, output_filename);
        String::from_utf8_lossy(&out).into_owned()
    }

    fn write_stats_data<G, W>(graph: &G, writer: &mut ScriptWriter<'_, W>) -> usize
    where
        G: StatsSource + ?Sized,
        W: Write + ?Sized,
    {
        writer.line(format_args!("{}", script::DATA_BLOCK_BEGIN));
        let mut records = 0;
        // Nodes stay in graph order, unsorted.
        for timing in graph.node_timings() {
            if writer.has_failed() {
                break;
            }
            if timing.time == 0.0 {
                continue;
            }
            writer.line(format_args!(
                "\"{}\",{}",
                timing.display_name(),
                Seconds(timing.time)
            ));
            records += 1;
        }
        writer.line(format_args!("{}", script::DATA_BLOCK_END));
        records
    }

    fn write_directives<W>(
        &self,
        writer: &mut ScriptWriter<'_, W>,
        label: Option<&str>,
        output_filename: &str,
    ) where
        W: Write + ?Sized,
    {
        if let Some(label) = label.filter(|label| !label.is_empty()) {
            writer.line(format_args!("set title \"{label}\""));
        }
        writer.line(format_args!(
            "set terminal {} size {},{}",
            script::TERMINAL,
            self.settings.width,
            self.settings.height
        ));
        writer.line(format_args!("set output \"{output_filename}\""));
        writer.line(format_args!("{}", script::SET_GRID));
        writer.line(format_args!("{}", script::SET_SEPARATOR));
        writer.line(format_args!("{}", script::SET_FILL));
        writer.line(format_args!(
            "{} lt rgb \"{}\"",
            script::PLOT_USING,
            self.settings.bar_color
        ));
    }
}

/// Write the timing statistics of `graph` as a gnuplot script to `out`.
///
/// Does nothing when `graph` is `None`. The title directive is only written
/// for a non-empty `label`. Stream errors are logged and otherwise ignored;
/// use [`write_stats_gnuplot`] to observe them.
///
/// # Examples
/// ```
/// use depstats::export::export_stats_gnuplot;
/// use depstats::graph::Depsgraph;
///
/// let mut graph = Depsgraph::new();
/// graph.add_node_with_time("OBCube", 1.5);
///
/// let mut out = Vec::new();
/// export_stats_gnuplot(Some(&graph), &mut out, Some("Frame Stats"), "out.png");
///
/// let script = String::from_utf8(out).unwrap();
/// assert!(script.starts_with("$data << EOD\r\n\"Cube\",1.500000\r\nEOD\r\n"));
/// ```
pub fn export_stats_gnuplot<G, W>(
    graph: Option<&G>,
    out: &mut W,
    label: Option<&str>,
    output_filename: &str,
) where
    G: StatsSource + ?Sized,
    W: Write + ?Sized,
{
    GnuplotExporter::default().export(graph, out, label, output_filename);
}

/// Like [`export_stats_gnuplot`], but returns the first stream error
pub fn write_stats_gnuplot<G, W>(
    graph: Option<&G>,
    out: &mut W,
    label: Option<&str>,
    output_filename: &str,
) -> Result<ExportSummary>
where
    G: StatsSource + ?Sized,
    W: Write + ?Sized,
{
    GnuplotExporter::default().try_export(graph, out, label, output_filename)
}
