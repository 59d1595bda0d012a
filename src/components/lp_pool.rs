/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{atomic_labels, labels::from_atomic};
use crate::graphs::csr::CsrGraph;
use crossbeam_utils::CachePadded;
use dsi_progress_logger::ProgressLog;
use log::debug;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Barrier;

/// Work-distribution discipline of [`lp_pool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Every worker owns a fixed block of `⌈n/T⌉` consecutive nodes for the
    /// whole run.
    Static,
    /// Workers repeatedly claim the next `chunk_size` nodes from a shared
    /// counter until the round is exhausted.
    Dynamic {
        /// Number of nodes claimed by one counter advance.
        chunk_size: usize,
    },
}

impl Schedule {
    /// Maps the numeric chunk-size surface onto a schedule: `1` (or `0`)
    /// selects [static blocks](Self::Static), larger values select [dynamic
    /// chunks](Self::Dynamic) of that size.
    pub fn from_chunk_size(chunk_size: usize) -> Self {
        if chunk_size <= 1 {
            Self::Static
        } else {
            Self::Dynamic { chunk_size }
        }
    }
}

/// Parallel label propagation on an explicit pool of worker threads.
///
/// Semantically equivalent to [`lp_seq`](super::lp_seq): on return `labels[v]`
/// is the minimum node identifier reachable from `v`. The kernel spawns
/// `num_threads` scoped workers that relax the atomic label array in rounds,
/// distributing nodes per `schedule`, and coordinates them with a single
/// [`Barrier`] recycled across rounds.
///
/// The rounds are frontier-driven: a pair of atomic bitmaps tracks the nodes
/// whose neighborhood may still improve, and nodes outside the frontier are
/// skipped. A node that lowers its label marks itself and its neighbors, so
/// the frontier stays complete: a label can only decrease through the owning
/// node's relax step, whose marks reach every node that could improve from
/// it. Frontier stores are relaxed; the races on them are benign because
/// entries only move towards `true` within a round, and a spuriously active
/// node is wasted work, never a wrong label.
///
/// Convergence detection is unanimous: every worker publishes its local
/// change flag before the end-of-round rendezvous, the leader elected by the
/// barrier inspects the shared flag and either resets the round state or
/// raises the termination flag, and workers read the verdict only after a
/// second rendezvous, so no thread can observe a half-finished round.
///
/// # Panics
///
/// If `labels` is not exactly [`num_nodes`](CsrGraph::num_nodes) long, or if
/// `num_threads` is zero.
pub fn lp_pool(
    graph: &CsrGraph,
    labels: &mut [u32],
    num_threads: usize,
    schedule: Schedule,
    pl: &mut impl ProgressLog,
) {
    let num_nodes = graph.num_nodes();
    assert_eq!(labels.len(), num_nodes);
    assert!(num_threads > 0, "the worker pool cannot be empty");
    if num_nodes == 0 {
        return;
    }

    pl.start(format!(
        "Propagating labels with {} threads ({:?})...",
        num_threads, schedule
    ));

    let atomic = atomic_labels(num_nodes);
    let frontiers: [Box<[AtomicBool]>; 2] = [
        (0..num_nodes).map(|_| AtomicBool::new(true)).collect(),
        (0..num_nodes).map(|_| AtomicBool::new(false)).collect(),
    ];
    let next_node = CachePadded::new(AtomicUsize::new(0));
    let any_changed = CachePadded::new(AtomicBool::new(false));
    let done = CachePadded::new(AtomicBool::new(false));
    let rounds = CachePadded::new(AtomicUsize::new(0));
    let barrier = Barrier::new(num_threads);
    let block_size = num_nodes.div_ceil(num_threads);

    std::thread::scope(|scope| {
        for thread_id in 0..num_threads {
            let atomic = &atomic;
            let frontiers = &frontiers;
            let next_node = &next_node;
            let any_changed = &any_changed;
            let done = &done;
            let rounds = &rounds;
            let barrier = &barrier;
            scope.spawn(move || {
                let mut round = 0usize;
                loop {
                    let (active, next_active) = if round % 2 == 0 {
                        (&frontiers[0], &frontiers[1])
                    } else {
                        (&frontiers[1], &frontiers[0])
                    };
                    let mut local_changed = false;
                    let relax_block = |range: Range<usize>, local_changed: &mut bool| {
                        for node in range {
                            // consume the frontier entry, so the bitmap comes
                            // out all-clear and can serve as the next frontier
                            if !active[node].swap(false, Ordering::Relaxed) {
                                continue;
                            }
                            let old = atomic[node].load(Ordering::Relaxed);
                            let mut new = old;
                            for &succ in graph.successors(node) {
                                new = new.min(atomic[succ as usize].load(Ordering::Relaxed));
                            }
                            if new < old {
                                atomic[node].fetch_min(new, Ordering::Relaxed);
                                *local_changed = true;
                                next_active[node].store(true, Ordering::Relaxed);
                                for &succ in graph.successors(node) {
                                    next_active[succ as usize].store(true, Ordering::Relaxed);
                                }
                            }
                        }
                    };
                    match schedule {
                        Schedule::Static => {
                            let start = num_nodes.min(thread_id * block_size);
                            let end = num_nodes.min(start + block_size);
                            relax_block(start..end, &mut local_changed);
                        }
                        Schedule::Dynamic { chunk_size } => loop {
                            let start = next_node.fetch_add(chunk_size, Ordering::Relaxed);
                            if start >= num_nodes {
                                break;
                            }
                            let end = num_nodes.min(start + chunk_size);
                            relax_block(start..end, &mut local_changed);
                        },
                    }
                    if local_changed {
                        any_changed.store(true, Ordering::Relaxed);
                    }
                    if barrier.wait().is_leader() {
                        // every worker has finished the round: decide and
                        // reset the shared state for the next one
                        if any_changed.swap(false, Ordering::Acquire) {
                            next_node.store(0, Ordering::Relaxed);
                        } else {
                            done.store(true, Ordering::Relaxed);
                        }
                        rounds.fetch_add(1, Ordering::Relaxed);
                    }
                    barrier.wait();
                    if done.load(Ordering::Relaxed) {
                        return;
                    }
                    round += 1;
                }
            });
        }
    });

    from_atomic(&atomic, labels);
    pl.done();
    debug!(
        "label propagation converged after {} rounds with {} threads ({:?})",
        rounds.load(Ordering::Relaxed),
        num_threads,
        schedule
    );
}
