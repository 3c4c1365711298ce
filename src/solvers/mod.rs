//! Solvers for the two-hop coloring problem.

/// coloring of binary functional graphs (nodes at distance 1 or 2 differ)
pub mod coloring;
