//! Depdot - dependency graph edge lists to Graphviz DOT.
//!
//! Depdot reads the "parent child" edge list emitted by module-resolution
//! tooling and renders it for visualization. It answers two questions:
//!
//! - **Which version won?** Full mode emits the whole graph as DOT, with
//!   the selected (maximum) version of every module filled green and the
//!   superseded versions gray.
//! - **Why is this here?** Filtered mode emits only the edges lying on
//!   simple paths from the graph's root to nodes whose label contains a
//!   destination substring.
//!
//! The [`render`] function is the single entry point; the modules beneath
//! it are usable on their own for graph inspection.

#![forbid(unsafe_code)]

pub mod error;
pub mod graph;
pub mod paths;
pub mod render;
pub mod version;

pub use error::{Error, Result};
pub use render::{render, render_with_root};
