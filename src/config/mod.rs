//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{files, plot};
use crate::core::error::{DepStatsError, Result};
use crate::export::PlotSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chart title, omitted when empty
    pub label: Option<String>,

    /// Image file the generated script tells gnuplot to write
    pub image_output: Option<String>,

    /// Where to write the script (stdout when unset)
    pub script_output: Option<String>,

    /// Image width in pixels
    pub terminal_width: Option<u32>,

    /// Image height in pixels
    pub terminal_height: Option<u32>,

    /// Bar fill color as #RRGGBB
    pub bar_color: Option<String>,

    /// Node name patterns to leave out of the chart (regex, matched against display names)
    pub exclude_patterns: Option<Vec<String>>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: None,
            image_output: Some(files::DEFAULT_IMAGE_OUTPUT.to_string()),
            script_output: None, // stdout
            terminal_width: Some(plot::DEFAULT_WIDTH),
            terminal_height: Some(plot::DEFAULT_HEIGHT),
            bar_color: Some(plot::DEFAULT_BAR_COLOR.to_string()),
            exclude_patterns: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file without validating its values.
    ///
    /// Callers merging CLI overrides validate the merged result instead.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DepStatsError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            DepStatsError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Try to find and read a config file in standard locations.
    ///
    /// Values are not validated here; see [`Config::parse_file`].
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::parse_file(files::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=files::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), files::CONFIG_FILE_NAME);
            if let Ok(config) = Self::parse_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Chart
        if let Some(ref label) = cli_config.label {
            self.label = Some(label.clone());
        }
        if let Some(ref image_output) = cli_config.image_output {
            self.image_output = Some(image_output.clone());
        }
        if let Some(ref script_output) = cli_config.script_output {
            self.script_output = Some(script_output.clone());
        }

        // Layout
        if let Some(width) = cli_config.terminal_width {
            self.terminal_width = Some(width);
        }
        if let Some(height) = cli_config.terminal_height {
            self.terminal_height = Some(height);
        }
        if let Some(ref color) = cli_config.bar_color {
            self.bar_color = Some(color.clone());
        }

        // Filtering
        if let Some(ref exclude_patterns) = cli_config.exclude_patterns {
            self.exclude_patterns = Some(exclude_patterns.clone());
        }

        // Output
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Compile exclude patterns into regex objects
    pub fn compile_exclude_patterns(&self) -> Result<Vec<Regex>> {
        let mut compiled = Vec::new();
        if let Some(ref patterns) = self.exclude_patterns {
            for pattern in patterns {
                compiled.push(Regex::new(pattern)?);
            }
        }
        Ok(compiled)
    }

    /// Chart layout, falling back to defaults for unset values
    pub fn plot_settings(&self) -> PlotSettings {
        PlotSettings {
            width: self.terminal_width.unwrap_or(plot::DEFAULT_WIDTH),
            height: self.terminal_height.unwrap_or(plot::DEFAULT_HEIGHT),
            bar_color: self
                .bar_color
                .clone()
                .unwrap_or_else(|| plot::DEFAULT_BAR_COLOR.to_string()),
        }
    }

    /// Image path written into the script
    pub fn image_output_or_default(&self) -> &str {
        self.image_output
            .as_deref()
            .unwrap_or(files::DEFAULT_IMAGE_OUTPUT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.terminal_width),
            ("height", self.terminal_height),
        ] {
            if let Some(value) = value
                && !(1..=plot::MAX_DIMENSION).contains(&value)
            {
                return Err(DepStatsError::Config(format!(
                    "Terminal {name} of {value} pixels is invalid. Expected a value between 1-{}.",
                    plot::MAX_DIMENSION
                )));
            }
        }

        if let Some(ref color) = self.bar_color {
            let hex_color = Regex::new(r"^#[0-9a-fA-F]{6}$")?;
            if !hex_color.is_match(color) {
                return Err(DepStatsError::Config(format!(
                    "Bar color '{color}' is invalid. Expected a hex color such as {}.",
                    plot::DEFAULT_BAR_COLOR
                )));
            }
        }

        if let Some(ref image_output) = self.image_output
            && image_output.trim().is_empty()
        {
            return Err(DepStatsError::Config(
                "Image output path cannot be empty.".to_string(),
            ));
        }

        // Validate exclude patterns by trying to compile them
        self.compile_exclude_patterns()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Chart
    pub label: Option<String>,         // --label
    pub image_output: Option<String>,  // --image
    pub script_output: Option<String>, // --output

    // Layout
    pub terminal_width: Option<u32>,  // --width
    pub terminal_height: Option<u32>, // --height
    pub bar_color: Option<String>,    // --color

    // Filtering
    pub exclude_patterns: Option<Vec<String>>, // --exclude-pattern

    // Output
    pub quiet: bool,   // --quiet
    pub verbose: bool, // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.label, None);
        assert_eq!(
            config.image_output,
            Some(files::DEFAULT_IMAGE_OUTPUT.to_string())
        );
        assert_eq!(config.script_output, None);
        assert_eq!(config.plot_settings(), PlotSettings::default());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"label = \"Frame Stats\"\nterminal_width = 800\nbar_color = \"#aabbcc\"")?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.label, Some("Frame Stats".to_string()));
        assert_eq!(config.terminal_width, Some(800));
        assert_eq!(config.terminal_height, None);

        let settings = config.plot_settings();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, plot::DEFAULT_HEIGHT);
        assert_eq!(settings.bar_color, "#aabbcc");

        Ok(())
    }

    #[test]
    fn test_config_load_from_file_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"label = [unterminated")?;

        let result = Config::load_from_file(file.path());
        assert!(matches!(result, Err(DepStatsError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_config_load_from_file_nonexistent() {
        let result = Config::load_from_file("/nonexistent/.depstats.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_file_runs_validation() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"terminal_height = 0")?;

        assert!(Config::load_from_file(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_config_parse_file_defers_validation() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"bar_color = \"blue\"")?;

        let mut config = Config::parse_file(file.path())?;
        assert_eq!(config.bar_color, Some("blue".to_string()));
        assert!(config.validate().is_err());

        let cli_config = CliConfig {
            bar_color: Some("#ff0000".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&cli_config);
        config.validate()?;
        assert_eq!(config.plot_settings().bar_color, "#ff0000");

        Ok(())
    }

    #[test]
    fn test_config_parse_file_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"bar_color = ")?;

        let result = Config::parse_file(file.path());
        assert!(matches!(result, Err(DepStatsError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_config_load_from_standard_locations() {
        // No config file in the test environment, so defaults are expected
        let config = Config::load_from_standard_locations();
        assert!(config.image_output.is_some());
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            label: Some("Frame 12".to_string()),
            image_output: Some("frame12.png".to_string()),
            terminal_width: Some(1280),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.label, Some("Frame 12".to_string()));
        assert_eq!(config.image_output_or_default(), "frame12.png");
        assert_eq!(config.terminal_width, Some(1280));
        assert_eq!(config.terminal_height, Some(plot::DEFAULT_HEIGHT));
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_config_merge_preserves_unset_values() {
        let mut config = Config {
            label: Some("From file".to_string()),
            bar_color: Some("#123456".to_string()),
            exclude_patterns: Some(vec!["^Camera".to_string()]),
            ..Default::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.label, Some("From file".to_string()));
        assert_eq!(config.bar_color, Some("#123456".to_string()));
        assert_eq!(config.exclude_patterns, Some(vec!["^Camera".to_string()]));
        assert_eq!(config.verbose, Some(false));
    }

    #[test]
    fn test_image_output_or_default() {
        let config = Config {
            image_output: None,
            ..Default::default()
        };
        assert_eq!(config.image_output_or_default(), files::DEFAULT_IMAGE_OUTPUT);
    }

    #[test]
    fn test_compile_exclude_patterns() -> Result<()> {
        let config = Config {
            exclude_patterns: Some(vec![r"^Camera".to_string(), r"\.001$".to_string()]),
            ..Default::default()
        };

        let patterns = config.compile_exclude_patterns()?;
        assert_eq!(patterns.len(), 2);
        assert!(patterns[0].is_match("Camera"));
        assert!(!patterns[0].is_match("Cube"));
        assert!(patterns[1].is_match("Cube.001"));

        Ok(())
    }

    #[test]
    fn test_compile_exclude_patterns_invalid_regex() {
        let config = Config {
            exclude_patterns: Some(vec![r"[invalid regex".to_string()]),
            ..Default::default()
        };

        assert!(config.compile_exclude_patterns().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_valid_config() -> Result<()> {
        Config::default().validate()?;

        let config = Config {
            terminal_width: Some(1),
            terminal_height: Some(plot::MAX_DIMENSION),
            bar_color: Some("#ABCdef".to_string()),
            ..Default::default()
        };
        config.validate()
    }

    #[test]
    fn test_config_validation_invalid_dimensions() {
        let config = Config {
            terminal_width: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            terminal_height: Some(plot::MAX_DIMENSION + 1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_color() {
        for color in ["406090", "#40609", "#40609g", "blue"] {
            let config = Config {
                bar_color: Some(color.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{color} should be rejected");
        }
    }

    #[test]
    fn test_config_validation_empty_image_output() {
        let config = Config {
            image_output: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_config_default() {
        let cli_config = CliConfig::default();
        assert!(cli_config.label.is_none());
        assert!(cli_config.exclude_patterns.is_none());
        assert!(!cli_config.quiet);
        assert!(!cli_config.verbose);
        assert!(!cli_config.no_config);
    }
}
