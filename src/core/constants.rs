/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the gnuplot script fragments, default values and
/// file names used across the application.
/// Gnuplot script constants
pub mod script {
    /// Line terminator used for every emitted line, independent of the host platform
    pub const NEWLINE: &str = "\r\n";
    /// Opening marker of the inline data block
    pub const DATA_BLOCK_BEGIN: &str = "$data << EOD";
    /// Closing marker of the inline data block
    pub const DATA_BLOCK_END: &str = "EOD";
    /// Terminal driver used to render the raster image
    pub const TERMINAL: &str = "pngcairo";
    /// Directive enabling the background grid
    pub const SET_GRID: &str = "set grid";
    /// Directive making gnuplot read the data block as comma separated
    pub const SET_SEPARATOR: &str = "set datafile separator ','";
    /// Directive enabling solid box filling
    pub const SET_FILL: &str = "set style fill solid";
    /// Plot command body, without the trailing color
    pub const PLOT_USING: &str =
        "plot \"$data\" using ($2*0.5):0:($2*0.5):(0.2):yticlabels(1) with boxxyerrorbars t ''";
}

/// Plot layout defaults
pub mod plot {
    /// Default image width in pixels
    pub const DEFAULT_WIDTH: u32 = 1920;
    /// Default image height in pixels
    pub const DEFAULT_HEIGHT: u32 = 1080;
    /// Largest accepted image dimension in pixels
    pub const MAX_DIMENSION: u32 = 16384;
    /// Default fill color of the bars
    pub const DEFAULT_BAR_COLOR: &str = "#406090";
}

/// Dependency graph node constants
pub mod nodes {
    /// Number of leading characters in an ID name that encode its type
    pub const TYPE_TAG_LEN: usize = 2;
}

/// File name constants
pub mod files {
    /// Configuration file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".depstats.toml";
    /// How many parent directories to search for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Image file name used when none is configured
    pub const DEFAULT_IMAGE_OUTPUT: &str = "depstats.png";
}
