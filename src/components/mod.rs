/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Connected-components kernels.
//!
//! Four kernels compute the same partition of the nodes of an undirected
//! graph into connected components, writing into a caller-allocated label
//! vector of length [`num_nodes`](crate::graphs::csr::CsrGraph::num_nodes):
//!
//! - [`bfs`] labels nodes by repeated breadth-first visits with dense
//!   component indices in discovery order; it is sequential, deterministic,
//!   and serves as the correctness baseline for the others;
//! - [`lp_seq`] is a sequential label propagation with an active-node
//!   frontier; on return every node is labelled with the minimum node
//!   identifier reachable from it;
//! - [`lp_par`] parallelizes label propagation on a work-stealing
//!   [`ThreadPool`](rayon::ThreadPool);
//! - [`lp_pool`] parallelizes label propagation on an explicit pool of
//!   worker threads coordinated by a barrier, with a static or dynamic
//!   [`Schedule`].
//!
//! The label-propagation kernels all converge to the same labels, so their
//! outputs can be compared directly; comparing them with [`bfs`] requires
//! [canonicalization](labels::canonicalize), which renames any labelling to
//! dense indices in order of first appearance.
//!
//! The graph must contain the reverse of every arc, as produced by
//! [`CsrGraph::from_arcs`](crate::graphs::csr::CsrGraph::from_arcs) with
//! symmetrization enabled; self-loops are harmless but wasted work.
//!
//! # Examples
//!
//! ```
//! use concomp::prelude::*;
//! use concomp::components::labels;
//! use dsi_progress_logger::no_logging;
//!
//! let graph = CsrGraph::from_arcs(4, [(0, 1), (1, 2)], true, true)?;
//!
//! let mut bfs_labels = vec![0; 4];
//! assert_eq!(bfs(&graph, &mut bfs_labels, no_logging![]), 2);
//! assert_eq!(bfs_labels, vec![0, 0, 0, 1]);
//!
//! let mut lp_labels = vec![0; 4];
//! lp_seq(&graph, &mut lp_labels, no_logging![]);
//! assert_eq!(lp_labels, vec![0, 0, 0, 3]);
//!
//! labels::canonicalize(&mut lp_labels);
//! assert_eq!(lp_labels, bfs_labels);
//! # Ok::<(), concomp::Error>(())
//! ```

mod bfs;
pub use bfs::bfs;

pub mod labels;

mod lp_par;
pub use lp_par::{lp_par, DEFAULT_GRANULARITY};

mod lp_pool;
pub use lp_pool::{lp_pool, Schedule};

mod lp_seq;
pub use lp_seq::lp_seq;

use std::sync::atomic::AtomicU32;

/// Returns a freshly allocated atomic label array with `labels[v] = v`.
pub(crate) fn atomic_labels(num_nodes: usize) -> Box<[AtomicU32]> {
    (0..num_nodes)
        .map(|node| AtomicU32::new(node as u32))
        .collect()
}
