//! # tsp-construct
//!
//! Greedy tour-construction heuristics for the Euclidean Traveling
//! Salesman Problem. Tours are built incrementally with local
//! cost-minimizing insertion rules; no local search and no optimality
//! guarantees, just fast constructive baselines.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, TspInstance, Tour)
//! - [`distance`] — Rounded Euclidean distance
//! - [`io`] — Instance file parsing and solution output
//! - [`constructive`] — Construction heuristics (nearest-next, random nearest-insertion, random tour)
//! - [`evaluation`] — From-scratch cyclic cost evaluation
//! - [`batch`] — Repeated-run cost aggregation

pub mod batch;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod io;
pub mod models;
