use std::fmt;

/// Error types for depstats operations
#[derive(Debug)]
pub enum DepStatsError {
    /// IO error (reading stats dumps, writing scripts)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Stats dump could not be parsed
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Regex compilation error
    Regex(regex::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for DepStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepStatsError::Io(err) => write!(f, "IO error: {err}"),
            DepStatsError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DepStatsError::Json(err) => write!(f, "Stats parsing error: {err}"),
            DepStatsError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            DepStatsError::Regex(err) => write!(f, "Regex error: {err}"),
            DepStatsError::FileNotFound(path) => write!(f, "File not found: {path}"),
            DepStatsError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for DepStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DepStatsError::Io(err) => Some(err),
            DepStatsError::Json(err) => Some(err),
            DepStatsError::TomlParsing(err) => Some(err),
            DepStatsError::Regex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DepStatsError {
    fn from(err: std::io::Error) -> Self {
        DepStatsError::Io(err)
    }
}

impl From<serde_json::Error> for DepStatsError {
    fn from(err: serde_json::Error) -> Self {
        DepStatsError::Json(err)
    }
}

impl From<toml::de::Error> for DepStatsError {
    fn from(err: toml::de::Error) -> Self {
        DepStatsError::TomlParsing(err)
    }
}

impl From<regex::Error> for DepStatsError {
    fn from(err: regex::Error) -> Self {
        DepStatsError::Regex(err)
    }
}

/// Type alias for Results using DepStatsError
pub type Result<T> = std::result::Result<T, DepStatsError>;
