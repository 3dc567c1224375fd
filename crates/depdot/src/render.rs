//! DOT and edge-list rendering, plus the top-level conversion entry point.
//!
//! Full mode mirrors the input edge-for-edge as a DOT digraph and colors
//! every versioned node by its [`VersionClass`]. Filtered mode instead
//! emits the plain edge list produced by the path extractor. The two
//! renderings are independent contracts; the entry point dispatches on
//! whether a destination was supplied.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::DepGraph;
use crate::paths::{self, PathEdge};
use crate::version::{self, VersionClass};

/// Convert an edge-list dependency graph on `input` into a graph
/// description on `output`.
///
/// An empty `dest` renders the full graph as DOT with version
/// highlighting. A non-empty `dest` renders only the edges lying on
/// simple paths from the root to nodes whose label contains `dest`, as a
/// plain edge list.
///
/// # Errors
///
/// Propagates every parse, root-discovery, extraction, and write failure;
/// no output is produced before the graph work has completed.
pub fn render(input: impl BufRead, output: impl Write, dest: &str) -> Result<()> {
    render_with_root(input, output, dest, |label| !label.contains('@'))
}

/// Like [`render`], with an explicit root predicate for the filtered
/// mode.
///
/// # Errors
///
/// Same contract as [`render`].
pub fn render_with_root(
    input: impl BufRead,
    mut output: impl Write,
    dest: &str,
    is_root: impl Fn(&str) -> bool,
) -> Result<()> {
    let graph = DepGraph::from_reader(input)?;
    debug!(edges = graph.edges().len(), "parsed dependency graph");

    if dest.is_empty() {
        let classes = version::classify(&graph);
        return render_full(&mut output, &graph, &classes);
    }

    let root = graph.find_root_with(is_root)?;
    let found = paths::all_paths(&graph, root, |label| label.contains(dest))?;
    let edges = paths::edges_on_paths(&found);
    render_filtered(&mut output, &edges)
}

/// Render the whole graph as a DOT digraph.
///
/// One edge statement per input occurrence, in input order, followed by
/// one style statement per classified node in first-seen order. Selected
/// versions are filled green, superseded ones gray; unversioned nodes
/// keep the default style.
///
/// # Errors
///
/// Returns [`Error::Write`] naming the in-flight statement if the output
/// rejects a write.
pub fn render_full(
    output: &mut impl Write,
    graph: &DepGraph,
    classes: &[(String, VersionClass)],
) -> Result<()> {
    write_statement(output, "digraph depgraph {")?;
    write_statement(output, "\tnode [ shape=rectangle fontsize=12 ]")?;
    for edge in graph.edges() {
        write_statement(output, &format!("\t\"{}\" -> \"{}\"", edge.from, edge.to))?;
    }
    for (label, class) in classes {
        let color = match class {
            VersionClass::Selected => "green",
            VersionClass::Superseded => "gray",
        };
        write_statement(
            output,
            &format!("\t\"{label}\" [style = filled, fillcolor = {color}]"),
        )?;
    }
    write_statement(output, "}")
}

/// Render a deduplicated path edge list as plain `source destination`
/// lines, one per edge, with no preamble or styling.
///
/// # Errors
///
/// Returns [`Error::Write`] naming the in-flight statement if the output
/// rejects a write.
pub fn render_filtered(output: &mut impl Write, edges: &[PathEdge]) -> Result<()> {
    for (from, to) in edges {
        write_statement(output, &format!("{from} {to}"))?;
    }
    Ok(())
}

fn write_statement(output: &mut impl Write, statement: &str) -> Result<()> {
    writeln!(output, "{statement}").map_err(|source| Error::Write {
        statement: statement.trim_start().to_string(),
        source,
    })
}
