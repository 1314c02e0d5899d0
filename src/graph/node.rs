use std::time::{Duration, Instant};

use crate::core::constants::nodes::TYPE_TAG_LEN;

/// Timing statistics recorded for a single graph node
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeStats {
    /// Time spent evaluating the node during the last update, in seconds
    pub current_time: f64,
}

impl NodeStats {
    pub fn new(current_time: f64) -> Self {
        Self { current_time }
    }

    /// Forget the recorded time, marking the node as not measured
    pub fn reset(&mut self) {
        self.current_time = 0.0;
    }

    /// Accumulate an evaluation duration
    pub fn add_time(&mut self, duration: Duration) {
        self.current_time += duration.as_secs_f64();
    }

    /// A zero time means the node has not been measured yet
    pub fn is_measured(&self) -> bool {
        self.current_time != 0.0
    }
}

/// A node of the dependency graph representing one ID datablock.
///
/// The name keeps its type tag (`OBCube`, `MEMesh`); use
/// [`IdNode::display_name`] for the human readable part.
#[derive(Debug, Clone, PartialEq)]
pub struct IdNode {
    pub name: String,
    pub stats: NodeStats,
}

impl IdNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: NodeStats::default(),
        }
    }

    pub fn with_time(name: impl Into<String>, current_time: f64) -> Self {
        Self {
            name: name.into(),
            stats: NodeStats::new(current_time),
        }
    }

    /// Name without the type tag prefix
    pub fn display_name(&self) -> &str {
        strip_type_tag(&self.name)
    }
}

/// Strip the leading type tag from an ID name.
///
/// Names shorter than the tag yield an empty string.
///
/// # Examples
/// ```
/// use depstats::graph::strip_type_tag;
///
/// assert_eq!(strip_type_tag("OBCube"), "Cube");
/// assert_eq!(strip_type_tag("OB"), "");
/// ```
pub fn strip_type_tag(name: &str) -> &str {
    name.char_indices()
        .nth(TYPE_TAG_LEN)
        .map_or("", |(idx, _)| &name[idx..])
}

/// Timer for measuring how long a node takes to evaluate
pub struct NodeTimer {
    node: String,
    start_time: Instant,
}

impl NodeTimer {
    /// Start timing the node with the given ID name
    pub fn start(node: &str) -> Self {
        Self {
            node: node.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    /// Stop timing and return the node name with the elapsed time
    pub fn finish(self) -> (String, Duration) {
        (self.node, self.start_time.elapsed())
    }
}
