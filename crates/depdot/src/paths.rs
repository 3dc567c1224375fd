//! All-simple-paths extraction from the dependency graph.
//!
//! Answers "why is this module in my build?": every simple path from the
//! root to a node matching the destination predicate, flattened to a
//! deduplicated edge list.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::DepGraph;

/// An ordered pair of labels taken from consecutive path positions.
pub type PathEdge = (String, String);

/// Enumerate every simple path from `root` to a node satisfying
/// `is_dest`, in depth-first discovery order.
///
/// A matching node completes its path and is never expanded further, even
/// when it has outgoing edges. A node may not repeat within one path but
/// may appear on any number of separate paths, so diamond shapes
/// contribute one path per branch. Children are visited in adjacency
/// (input) order, which makes the result fully deterministic.
///
/// The search uses an explicit stack of (children, next-index) frames
/// rather than native recursion, so path depth is bounded by memory, not
/// by the thread stack.
///
/// # Errors
///
/// Returns [`Error::NoPath`] when no path reaches a matching node.
pub fn all_paths(
    graph: &DepGraph,
    root: &str,
    is_dest: impl Fn(&str) -> bool,
) -> Result<Vec<Vec<String>>> {
    // A matching root is a complete single-node path; matches are never
    // expanded.
    if is_dest(root) {
        return Ok(vec![vec![root.to_string()]]);
    }

    let mut paths: Vec<Vec<String>> = Vec::new();
    let mut path = vec![root.to_string()];
    let mut on_path: HashSet<String> = HashSet::new();
    on_path.insert(root.to_string());
    let mut stack: Vec<(&[String], usize)> = vec![(graph.children(root), 0)];

    while let Some((children, next)) = stack.last_mut() {
        let Some(child) = children.get(*next).cloned() else {
            // Frame exhausted: backtrack and free the node for reuse on
            // sibling branches.
            stack.pop();
            if let Some(done) = path.pop() {
                on_path.remove(&done);
            }
            continue;
        };
        *next += 1;

        if on_path.contains(&child) {
            continue;
        }
        if is_dest(&child) {
            let mut complete = path.clone();
            complete.push(child);
            paths.push(complete);
            continue;
        }

        on_path.insert(child.clone());
        path.push(child.clone());
        stack.push((graph.children(&child), 0));
    }

    if paths.is_empty() {
        return Err(Error::NoPath);
    }
    debug!(paths = paths.len(), %root, "path extraction complete");
    Ok(paths)
}

/// Flatten `paths` into consecutive-pair edges, concatenated in path
/// discovery order, with exact duplicates removed keeping the first
/// occurrence.
#[must_use]
pub fn edges_on_paths(paths: &[Vec<String>]) -> Vec<PathEdge> {
    let mut edges: Vec<PathEdge> = Vec::new();
    for path in paths {
        for pair in path.windows(2) {
            if let [from, to] = pair {
                let edge = (from.clone(), to.clone());
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }
    }
    edges
}
