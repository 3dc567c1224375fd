//! Edge-list parsing, adjacency construction, and root discovery.
//!
//! The input format is the one produced by module-resolution tooling: one
//! edge per non-blank line, two whitespace-separated labels meaning
//! "source requires destination". Labels are opaque; a trailing
//! `@version` suffix only matters to the [`crate::version`] module.

use std::collections::{BTreeMap, HashSet};
use std::io::BufRead;

use crate::error::{Error, Result};

/// A single "source requires destination" edge, as read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// The requiring node.
    pub from: String,
    /// The required node.
    pub to: String,
}

/// A dependency graph built from a "parent child" edge list.
///
/// Edge occurrences keep input order, duplicates included, so the full
/// rendering can mirror the input exactly. Adjacency children likewise
/// keep input order. Sources iterate in sorted label order, which makes
/// every operation over the graph deterministic regardless of input
/// shuffling within a node's fan-out.
#[derive(Debug, Default)]
pub struct DepGraph {
    edges: Vec<Edge>,
    adjacency: BTreeMap<String, Vec<String>>,
    nodes: Vec<String>,
}

impl DepGraph {
    /// Parse a dependency graph from an edge-list reader.
    ///
    /// Blank lines are skipped. Any other line must contain exactly two
    /// whitespace-separated tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for a malformed line, [`Error::EmptyInput`]
    /// when no usable line exists, and [`Error::Io`] if reading fails.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut graph = Self::default();
        let mut seen = HashSet::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [from, to] => graph.insert_edge(from, to, &mut seen),
                _ => {
                    return Err(Error::Format {
                        line: line.to_string(),
                        count: tokens.len(),
                    });
                }
            }
        }

        if graph.edges.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(graph)
    }

    fn insert_edge(&mut self, from: &str, to: &str, seen: &mut HashSet<String>) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        for node in [from, to] {
            if seen.insert(node.to_string()) {
                self.nodes.push(node.to_string());
            }
        }
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    /// Every edge occurrence, in input order, duplicates included.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Children of `node` in input order, or an empty slice for a node
    /// without outgoing edges.
    #[must_use]
    pub fn children(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Every distinct node label appearing as an edge endpoint, in
    /// first-seen order (a line's source before its destination).
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Find the root using the default predicate: a label with no `@`
    /// version suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRoot`] when no source label satisfies the
    /// predicate.
    pub fn find_root(&self) -> Result<&str> {
        self.find_root_with(|label| !label.contains('@'))
    }

    /// Find the root using an explicit predicate.
    ///
    /// Candidates are edge sources only; a node that never requires
    /// anything cannot be the top of the graph. When several sources
    /// match, the lexicographically smallest label wins, so the result
    /// never depends on input line order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRoot`] when no source label satisfies the
    /// predicate.
    pub fn find_root_with(&self, is_root: impl Fn(&str) -> bool) -> Result<&str> {
        self.adjacency
            .keys()
            .map(String::as_str)
            .find(|label| is_root(label))
            .ok_or(Error::NoRoot)
    }
}
