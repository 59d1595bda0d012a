/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random arc lists for tests and benchmarks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Generates the arc list of an Erdős–Rényi random graph.
///
/// Each of the `n(n-1)/2` unordered pairs of distinct nodes becomes an arc
/// with probability `p`; loops are never included. The result is meant to be
/// fed to [`CsrGraph::from_arcs`](crate::graphs::csr::CsrGraph::from_arcs)
/// with symmetrization enabled. The time required is quadratic in
/// `num_nodes`.
pub fn erdos_renyi(num_nodes: usize, p: f64, seed: u64) -> Vec<(u32, u32)> {
    assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut arcs = Vec::new();
    for src in 0..num_nodes {
        for dst in src + 1..num_nodes {
            if rng.random_bool(p) {
                arcs.push((src as u32, dst as u32));
            }
        }
    }
    arcs
}
