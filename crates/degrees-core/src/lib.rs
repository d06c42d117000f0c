//! Degrees Core Library
//!
//! Directed-graph engine and breadth-first shortest-path search for the
//! degrees connection finder.

pub mod error;
pub mod graph;
pub mod logging;
