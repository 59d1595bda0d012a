/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Benchmark harness for the connected-components kernels.

use crate::components::{bfs, labels::count_unique, lp_par, lp_pool, lp_seq, Schedule};
use crate::graphs::csr::CsrGraph;
use crate::thread_pool;
use dsi_progress_logger::{no_logging, ProgressLog};
use log::info;
use std::time::{Duration, Instant};

/// Selects a connected-components kernel and its tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Sequential breadth-first labelling (the correctness baseline).
    Bfs,
    /// Sequential label propagation with a frontier.
    LpSeq,
    /// Label propagation on a work-stealing pool.
    LpPar {
        num_threads: usize,
        granularity: usize,
    },
    /// Label propagation on an explicit worker pool.
    LpPool {
        num_threads: usize,
        schedule: Schedule,
    },
}

/// The outcome of [`benchmark`]: the per-run wall-clock durations and the
/// labels of the final run.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub durations: Vec<Duration>,
    pub labels: Box<[u32]>,
    pub num_components: usize,
}

impl Measurement {
    /// Returns the mean wall-clock duration over all runs.
    pub fn mean(&self) -> Duration {
        self.durations.iter().sum::<Duration>() / self.durations.len().max(1) as u32
    }

    /// Returns the duration of the fastest run.
    pub fn min(&self) -> Duration {
        self.durations.iter().min().copied().unwrap_or_default()
    }
}

/// Runs `kernel` on `graph` `runs` times, timing each run.
///
/// The label buffer is allocated once and fully rewritten by every run, and
/// any thread pool is built before timing starts, so each duration covers one
/// kernel invocation and nothing else. Returns the durations together with
/// the labels of the final run and their component count.
///
/// # Panics
///
/// If `runs` is zero.
pub fn benchmark(
    graph: &CsrGraph,
    kernel: Kernel,
    runs: usize,
    pl: &mut impl ProgressLog,
) -> Measurement {
    assert!(runs > 0, "at least one run is required");

    let mut labels = vec![0; graph.num_nodes()].into_boxed_slice();
    let mut run_kernel: Box<dyn FnMut(&mut [u32]) + '_> = match kernel {
        Kernel::Bfs => Box::new(|labels| {
            bfs(graph, labels, no_logging![]);
        }),
        Kernel::LpSeq => Box::new(|labels| lp_seq(graph, labels, no_logging![])),
        Kernel::LpPar {
            num_threads,
            granularity,
        } => {
            let pool = thread_pool![num_threads];
            Box::new(move |labels| lp_par(graph, labels, &pool, granularity, no_logging![]))
        }
        Kernel::LpPool {
            num_threads,
            schedule,
        } => Box::new(move |labels| lp_pool(graph, labels, num_threads, schedule, no_logging![])),
    };

    pl.item_name("run");
    pl.expected_updates(Some(runs));
    pl.start(format!("Benchmarking {:?}...", kernel));

    let mut durations = Vec::with_capacity(runs);
    for run in 0..runs {
        let start = Instant::now();
        run_kernel(&mut labels);
        let elapsed = start.elapsed();
        info!("run {}/{}: {:.6} s", run + 1, runs, elapsed.as_secs_f64());
        durations.push(elapsed);
        pl.update();
    }
    pl.done();

    let num_components = count_unique(&labels);
    Measurement {
        durations,
        labels,
        num_components,
    }
}
