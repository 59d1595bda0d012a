/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::csr::CsrGraph;
use dsi_progress_logger::ProgressLog;
use log::debug;

/// Sequential label propagation with an active-node frontier.
///
/// Labels start as node identifiers; in each round every active node lowers
/// its label to the minimum label of its closed neighborhood, and a node
/// becomes active for the next round when its label or a neighbor's label
/// decreased. The kernel terminates at the first round with no change; on
/// return `labels[v]` is the minimum node identifier reachable from `v`.
///
/// Labels are double-buffered, so within a round every node sees the labels
/// of the previous round. This is the single-threaded template that
/// [`lp_par`](super::lp_par) and [`lp_pool`](super::lp_pool) parallelize.
///
/// # Panics
///
/// If `labels` is not exactly [`num_nodes`](CsrGraph::num_nodes) long.
pub fn lp_seq(graph: &CsrGraph, labels: &mut [u32], pl: &mut impl ProgressLog) {
    let num_nodes = graph.num_nodes();
    assert_eq!(labels.len(), num_nodes);
    if num_nodes == 0 {
        return;
    }

    pl.item_name("round");
    pl.start("Propagating labels...");

    let mut cur: Vec<u32> = (0..num_nodes as u32).collect();
    let mut next = cur.clone();
    let mut active = vec![true; num_nodes].into_boxed_slice();
    let mut next_active = vec![false; num_nodes].into_boxed_slice();
    let mut rounds = 0;

    loop {
        rounds += 1;
        let mut changed = false;
        next.copy_from_slice(&cur);
        for node in 0..num_nodes {
            // consume the frontier entry, so the bitmap comes out all-clear
            // and can serve as the next frontier after the swap
            if !std::mem::take(&mut active[node]) {
                continue;
            }
            let mut new = cur[node];
            for &succ in graph.successors(node) {
                new = new.min(cur[succ as usize]);
            }
            if new < cur[node] {
                changed = true;
                next[node] = new;
                next_active[node] = true;
                for &succ in graph.successors(node) {
                    next_active[succ as usize] = true;
                }
            }
        }
        pl.update();
        if !changed {
            break;
        }
        std::mem::swap(&mut cur, &mut next);
        std::mem::swap(&mut active, &mut next_active);
    }

    labels.copy_from_slice(&cur);
    pl.done();
    debug!("label propagation converged after {} rounds", rounds);
}
