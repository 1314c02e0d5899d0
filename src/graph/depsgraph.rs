use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::node::{IdNode, NodeTimer, strip_type_tag};
use crate::core::error::{DepStatsError, Result};

/// Timing of one node as seen by consumers of a [`StatsSource`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTiming<'a> {
    /// Full ID name including the type tag
    pub name: &'a str,
    /// Recorded time in seconds, zero when not measured
    pub time: f64,
}

impl NodeTiming<'_> {
    pub fn display_name(&self) -> &str {
        strip_type_tag(self.name)
    }
}

/// Read-only access to the per-node timings of a graph, in the graph's own order
pub trait StatsSource {
    fn node_timings(&self) -> Box<dyn Iterator<Item = NodeTiming<'_>> + '_>;
}

impl StatsSource for [IdNode] {
    fn node_timings(&self) -> Box<dyn Iterator<Item = NodeTiming<'_>> + '_> {
        Box::new(self.iter().map(|node| NodeTiming {
            name: &node.name,
            time: node.stats.current_time,
        }))
    }
}

/// On-disk layout of a stats dump
#[derive(Debug, Default, Serialize, Deserialize)]
struct StatsDump {
    #[serde(default)]
    nodes: Vec<NodeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    name: String,
    #[serde(default)]
    current_time: f64,
}

/// Dependency graph holding ID nodes in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Depsgraph {
    id_nodes: Vec<IdNode>,
}

impl Depsgraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or return the existing one with the same name
    pub fn add_node(&mut self, name: &str) -> &mut IdNode {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.id_nodes.push(IdNode::new(name));
                self.id_nodes.len() - 1
            }
        };
        &mut self.id_nodes[idx]
    }

    /// Add a node and overwrite its recorded time
    pub fn add_node_with_time(&mut self, name: &str, current_time: f64) -> &mut IdNode {
        let node = self.add_node(name);
        node.stats.current_time = current_time;
        node
    }

    pub fn find(&self, name: &str) -> Option<&IdNode> {
        self.id_nodes.iter().find(|node| node.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut IdNode> {
        self.id_nodes.iter_mut().find(|node| node.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.id_nodes.iter().position(|node| node.name == name)
    }

    pub fn len(&self) -> usize {
        self.id_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_nodes.is_empty()
    }

    pub fn id_nodes(&self) -> &[IdNode] {
        &self.id_nodes
    }

    /// Number of nodes with a nonzero recorded time
    pub fn measured_count(&self) -> usize {
        self.id_nodes
            .iter()
            .filter(|node| node.stats.is_measured())
            .count()
    }

    /// Add an evaluation duration to the named node.
    ///
    /// Returns `false` when no such node exists.
    pub fn record_time(&mut self, name: &str, duration: Duration) -> bool {
        match self.find_mut(name) {
            Some(node) => {
                node.stats.add_time(duration);
                true
            }
            None => false,
        }
    }

    /// Run `evaluate` for the named node and add its wall time to the node.
    ///
    /// The node is created if the graph does not have it yet.
    pub fn time_evaluation<T, F>(&mut self, name: &str, evaluate: F) -> T
    where
        F: FnOnce() -> T,
    {
        let timer = NodeTimer::start(name);
        let value = evaluate();
        let (node, elapsed) = timer.finish();

        self.add_node(&node);
        self.record_time(&node, elapsed);
        value
    }

    /// Reset the statistics of every node
    pub fn reset_stats(&mut self) {
        for node in &mut self.id_nodes {
            node.stats.reset();
        }
    }

    /// Keep only the nodes matching the predicate, preserving order
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&IdNode) -> bool,
    {
        self.id_nodes.retain(f);
    }

    /// Parse a JSON stats dump
    pub fn from_json_str(content: &str) -> Result<Self> {
        let dump: StatsDump = serde_json::from_str(content)?;
        let mut graph = Self::new();
        for record in dump.nodes {
            graph.add_node_with_time(&record.name, record.current_time);
        }
        Ok(graph)
    }

    /// Load a JSON stats dump from disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DepStatsError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let graph = Self::from_json_str(&content)?;
        debug!(
            "Loaded {} node(s) from '{}', {} measured",
            graph.len(),
            path.display(),
            graph.measured_count()
        );
        Ok(graph)
    }

    /// Serialize the graph back into the stats dump format
    pub fn to_json_string(&self) -> Result<String> {
        let dump = StatsDump {
            nodes: self
                .id_nodes
                .iter()
                .map(|node| NodeRecord {
                    name: node.name.clone(),
                    current_time: node.stats.current_time,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&dump)?)
    }
}

impl StatsSource for Depsgraph {
    fn node_timings(&self) -> Box<dyn Iterator<Item = NodeTiming<'_>> + '_> {
        self.id_nodes.as_slice().node_timings()
    }
}

impl FromIterator<IdNode> for Depsgraph {
    fn from_iter<I: IntoIterator<Item = IdNode>>(iter: I) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.add_node_with_time(&node.name, node.stats.current_time);
        }
        graph
    }
}
