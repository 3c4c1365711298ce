//! Two-hop coloring of binary functional graphs (mascot maze) with 13 colors

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// maze instance (binary functional graph), proximity sets and checker
pub mod maze;

/// the 13 letters used to print colors
pub mod palette;

/// errors raised while reading inputs
pub mod error;

/// read/write problem sets and answer files
pub mod problem_set;

/// random instance generators
pub mod generate;

/// solves whole problem sets, checks answer files
pub mod batch;

/// helper and utility methods for executables
pub mod util;

/// solvers for the two-hop coloring problem
pub mod solvers;
