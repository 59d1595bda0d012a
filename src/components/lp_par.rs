/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{atomic_labels, labels::from_atomic};
use crate::graphs::csr::CsrGraph;
use crossbeam_utils::CachePadded;
use dsi_progress_logger::ProgressLog;
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Default number of nodes each parallel task relaxes.
pub const DEFAULT_GRANULARITY: usize = 1024;

/// Parallel label propagation on a work-stealing thread pool.
///
/// Semantically equivalent to [`lp_seq`](super::lp_seq): on return `labels[v]`
/// is the minimum node identifier reachable from `v`. In each round the node
/// range is split into tasks of `granularity` nodes and relaxed in parallel
/// on `thread_pool`; labels live in an array of atomics lowered with relaxed
/// [`fetch_min`](std::sync::atomic::AtomicU32::fetch_min) operations, which
/// is sound because labels decrease monotonically toward the component
/// minimum. Each task keeps a local change flag and performs at most one
/// store into a shared flag, which the leader reads after the parallel-for
/// join of each round; the join establishes the happens-before edge that
/// publishes the writes of a round to the next one.
///
/// There is no frontier: every node is rescanned in every round, which is
/// what makes the neighbor push of the relax step safe, as a node whose label
/// was lowered behind its back is still guaranteed a relax step in the next
/// round. Convergence does not depend on the schedule: a zero-change round is
/// only declared after every task of that round has completed, and a round
/// changes nothing only when every node is the minimum of its closed
/// neighborhood, that is, at the fixpoint.
///
/// # Panics
///
/// If `labels` is not exactly [`num_nodes`](CsrGraph::num_nodes) long.
pub fn lp_par(
    graph: &CsrGraph,
    labels: &mut [u32],
    thread_pool: &ThreadPool,
    granularity: usize,
    pl: &mut impl ProgressLog,
) {
    let num_nodes = graph.num_nodes();
    assert_eq!(labels.len(), num_nodes);
    if num_nodes == 0 {
        return;
    }
    let granularity = granularity.max(1);
    let num_tasks = num_nodes.div_ceil(granularity);

    pl.item_name("round");
    pl.start(format!(
        "Propagating labels with granularity {}...",
        granularity
    ));

    let atomic = atomic_labels(num_nodes);
    let any_changed = CachePadded::new(AtomicBool::new(false));
    let mut rounds = 0;

    loop {
        rounds += 1;
        thread_pool.install(|| {
            (0..num_tasks).into_par_iter().for_each(|task| {
                let start = task * granularity;
                let end = num_nodes.min(start + granularity);
                let mut local_changed = false;
                for node in start..end {
                    local_changed |= relax(graph, node, &atomic);
                }
                if local_changed {
                    any_changed.store(true, Ordering::Relaxed);
                }
            });
        });
        pl.update();
        // the join above orders all stores of this round before this load
        if !any_changed.swap(false, Ordering::Acquire) {
            break;
        }
    }

    from_atomic(&atomic, labels);
    pl.done();
    debug!("label propagation converged after {} rounds", rounds);
}

/// One relaxation of `node`: lowers its label to the minimum label of its
/// closed neighborhood and returns whether it decreased.
///
/// On a decrease the new label is also pushed onto the neighbors, which
/// overlaps with their own concurrent relaxations but lets the minimum travel
/// two hops per round in the best case.
///
/// All accesses are relaxed: labels decrease monotonically, so any stale
/// value another thread observes is a safe upper bound of the final label.
#[inline(always)]
fn relax(graph: &CsrGraph, node: usize, labels: &[AtomicU32]) -> bool {
    let old = labels[node].load(Ordering::Relaxed);
    let mut new = old;
    for &succ in graph.successors(node) {
        new = new.min(labels[succ as usize].load(Ordering::Relaxed));
    }
    if new >= old {
        return false;
    }
    labels[node].fetch_min(new, Ordering::Relaxed);
    for &succ in graph.successors(node) {
        labels[succ as usize].fetch_min(new, Ordering::Relaxed);
    }
    true
}
