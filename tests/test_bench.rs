/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use concomp::prelude::*;
use dsi_progress_logger::prelude::*;

fn two_components() -> Result<CsrGraph> {
    Ok(CsrGraph::from_arcs(
        6,
        [(0, 1), (1, 2), (3, 4), (4, 5)],
        true,
        true,
    )?)
}

#[test]
fn test_benchmark_all_kernels() -> Result<()> {
    let graph = two_components()?;
    for kernel in [
        Kernel::Bfs,
        Kernel::LpSeq,
        Kernel::LpPar {
            num_threads: 2,
            granularity: 2,
        },
        Kernel::LpPool {
            num_threads: 2,
            schedule: Schedule::Static,
        },
        Kernel::LpPool {
            num_threads: 3,
            schedule: Schedule::Dynamic { chunk_size: 2 },
        },
    ] {
        let measurement = benchmark(&graph, kernel, 3, no_logging![]);
        assert_eq!(measurement.durations.len(), 3, "{:?}", kernel);
        assert_eq!(measurement.num_components, 2, "{:?}", kernel);
        assert_eq!(measurement.labels.len(), 6, "{:?}", kernel);
        assert!(measurement.min() <= measurement.mean(), "{:?}", kernel);
    }
    Ok(())
}

#[test]
fn test_benchmark_reuses_the_label_buffer() -> Result<()> {
    let graph = two_components()?;
    let measurement = benchmark(&graph, Kernel::LpSeq, 2, no_logging![]);
    assert_eq!(&*measurement.labels, &[0, 0, 0, 3, 3, 3]);
    Ok(())
}

#[test]
#[should_panic(expected = "at least one run")]
fn test_benchmark_rejects_zero_runs() {
    let graph = CsrGraph::from_arcs(1, [], true, true).unwrap();
    benchmark(&graph, Kernel::Bfs, 0, no_logging![]);
}
