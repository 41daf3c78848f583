//! # traverse-util
//!
//! Small utilities for routing-graph engines: a compact integer encoding of
//! directed edge traversals, a bounded-parallel batch runner, and a uniform
//! range sampler.
//!
//! ## Edge keys
//!
//! An undirected edge can be traversed forward or in reverse. Instead of an
//! `(edge_id, direction)` pair, both are packed into one integer key whose
//! parity carries the direction: `key = edge_id * 2 + direction`. Adjacency
//! structures can then index per-traversal arrays directly by key.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use traverse::{create_edge_key, edge_from_edge_key, reverse_edge_key, run_concurrently};
//!
//! // Encode a traversal of edge 42 and recover its parts.
//! let fwd = create_edge_key(42, false);
//! assert_eq!(fwd, 84);
//! assert_eq!(edge_from_edge_key(fwd), 42);
//! assert_eq!(reverse_edge_key(fwd), create_edge_key(42, true));
//!
//! // Run a batch of independent jobs with at most 4 workers.
//! let counter = AtomicUsize::new(0);
//! run_concurrently(
//!     (0..8).map(|_| || { counter.fetch_add(1, Ordering::Relaxed); }),
//!     4,
//! )?;
//! assert_eq!(counter.load(Ordering::Relaxed), 8);
//! # Ok::<(), traverse::BatchError>(())
//! ```

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod concurrent;
pub mod edge_key;
pub mod random;

pub use concurrent::{BatchError, run_concurrently};
pub use edge_key::{
    EdgeId, EdgeKey, EdgeKeyError, MAX_EDGE_ID, create_edge_key, edge_from_edge_key,
    reverse_edge_key, try_create_edge_key,
};
pub use random::{RangeError, random_double_in_range};
