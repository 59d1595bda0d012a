/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use concomp::components::labels::{canonicalize, count_unique};
use concomp::graphs::random::erdos_renyi;
use concomp::prelude::*;
use dsi_progress_logger::prelude::*;

fn graph(num_nodes: usize, arcs: &[(u32, u32)]) -> Result<CsrGraph> {
    Ok(CsrGraph::from_arcs(
        num_nodes,
        arcs.iter().copied(),
        true,
        true,
    )?)
}

/// Runs every label-propagation kernel on `graph` and checks that all of them
/// return `expected` and agree with the BFS labelling up to canonicalization.
fn check_all_kernels(graph: &CsrGraph, expected: &[u32]) -> Result<()> {
    let num_nodes = graph.num_nodes();
    let mut bfs_labels = vec![0; num_nodes];
    let num_components = bfs(graph, &mut bfs_labels, no_logging![]);
    assert_eq!(count_unique(&bfs_labels), num_components);
    assert_eq!(count_unique(expected), num_components);

    let pool = thread_pool![4];
    let mut lp_labels = vec![0; num_nodes];

    lp_seq(graph, &mut lp_labels, no_logging![]);
    assert_eq!(lp_labels, expected, "lp_seq");

    for granularity in [1, 2, 1024] {
        lp_labels.fill(0);
        lp_par(graph, &mut lp_labels, &pool, granularity, no_logging![]);
        assert_eq!(lp_labels, expected, "lp_par with granularity {granularity}");
    }

    for num_threads in [1, 2, 4] {
        for chunk_size in [1, 2, 1024] {
            lp_labels.fill(0);
            lp_pool(
                graph,
                &mut lp_labels,
                num_threads,
                Schedule::from_chunk_size(chunk_size),
                no_logging![],
            );
            assert_eq!(
                lp_labels, expected,
                "lp_pool with {num_threads} threads and chunk size {chunk_size}"
            );
        }
    }

    // For identical adjacency order, canonicalizing the label-propagation
    // labels yields exactly the BFS labels.
    let mut canonical = expected.to_vec();
    assert_eq!(canonicalize(&mut canonical), num_components);
    assert_eq!(canonical, bfs_labels);

    // Partition equivalence: the endpoints of every arc share a label.
    for (src, dst) in graph.arcs() {
        assert_eq!(expected[src as usize], expected[dst as usize]);
    }

    Ok(())
}

#[test]
fn test_triangle() -> Result<()> {
    let graph = graph(3, &[(0, 1), (1, 2), (0, 2)])?;
    check_all_kernels(&graph, &[0, 0, 0])
}

#[test]
fn test_two_disjoint_edges() -> Result<()> {
    let graph = graph(4, &[(0, 1), (2, 3)])?;
    let mut bfs_labels = vec![0; 4];
    assert_eq!(bfs(&graph, &mut bfs_labels, no_logging![]), 2);
    assert_eq!(bfs_labels, vec![0, 0, 1, 1]);
    check_all_kernels(&graph, &[0, 0, 2, 2])
}

#[test]
fn test_path() -> Result<()> {
    let graph = graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4)])?;
    check_all_kernels(&graph, &[0, 0, 0, 0, 0])
}

#[test]
fn test_isolated_node_next_to_a_clique() -> Result<()> {
    let graph = graph(4, &[(0, 1), (0, 2), (1, 2)])?;
    check_all_kernels(&graph, &[0, 0, 0, 3])
}

#[test]
fn test_star() -> Result<()> {
    let graph = graph(5, &[(0, 1), (0, 2), (0, 3), (0, 4)])?;
    check_all_kernels(&graph, &[0, 0, 0, 0, 0])
}

#[test]
fn test_empty_graph() -> Result<()> {
    let graph = graph(0, &[])?;
    let mut labels: Vec<u32> = vec![];
    assert_eq!(bfs(&graph, &mut labels, no_logging![]), 0);
    lp_seq(&graph, &mut labels, no_logging![]);
    lp_par(&graph, &mut labels, &thread_pool![2], 16, no_logging![]);
    lp_pool(&graph, &mut labels, 2, Schedule::Static, no_logging![]);
    assert_eq!(count_unique(&labels), 0);
    Ok(())
}

#[test]
fn test_single_node() -> Result<()> {
    let graph = graph(1, &[])?;
    let mut labels = vec![u32::MAX];
    assert_eq!(bfs(&graph, &mut labels, no_logging![]), 1);
    assert_eq!(labels, vec![0]);
    check_all_kernels(&graph, &[0])
}

#[test]
fn test_no_arcs() -> Result<()> {
    let graph = graph(6, &[])?;
    check_all_kernels(&graph, &[0, 1, 2, 3, 4, 5])
}

#[test]
fn test_single_component() -> Result<()> {
    let mut arcs = vec![];
    for src in 0..8u32 {
        for dst in src + 1..8u32 {
            arcs.push((src, dst));
        }
    }
    let graph = graph(8, &arcs)?;
    check_all_kernels(&graph, &[0; 8])
}

#[test]
fn test_self_loops_and_duplicates_do_not_change_the_partition() -> Result<()> {
    let clean = graph(4, &[(0, 1), (2, 3)])?;
    let dirty = graph(4, &[(0, 1), (1, 0), (0, 1), (1, 1), (2, 3), (3, 3)])?;
    assert_eq!(clean, dirty);
    check_all_kernels(&dirty, &[0, 0, 2, 2])
}

#[test]
fn test_idempotence() -> Result<()> {
    let graph = graph(7, &[(0, 3), (3, 6), (1, 2), (4, 5)])?;
    let mut first = vec![0; 7];
    let mut second = vec![0; 7];
    for num_threads in [1, 4] {
        lp_pool(
            &graph,
            &mut first,
            num_threads,
            Schedule::from_chunk_size(2),
            no_logging![],
        );
        lp_pool(
            &graph,
            &mut second,
            num_threads,
            Schedule::from_chunk_size(2),
            no_logging![],
        );
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_er_agreement() -> Result<()> {
    let pool = thread_pool![4];
    for num_nodes in [10, 40, 100] {
        for tenths in 1..6usize {
            let arcs = erdos_renyi(
                num_nodes,
                tenths as f64 / 10.0,
                (num_nodes + tenths) as u64,
            );
            let graph = CsrGraph::from_arcs(num_nodes, arcs, true, true)?;

            let mut bfs_labels = vec![0; num_nodes];
            let num_components = bfs(&graph, &mut bfs_labels, no_logging![]);

            let mut lp_labels = vec![0; num_nodes];
            lp_seq(&graph, &mut lp_labels, no_logging![]);
            let expected = lp_labels.clone();

            lp_par(&graph, &mut lp_labels, &pool, 8, no_logging![]);
            assert_eq!(lp_labels, expected);

            for num_threads in [1, 2, 4, 8] {
                for chunk_size in [1, 32, 1024] {
                    lp_labels.fill(0);
                    lp_pool(
                        &graph,
                        &mut lp_labels,
                        num_threads,
                        Schedule::from_chunk_size(chunk_size),
                        no_logging![],
                    );
                    assert_eq!(lp_labels, expected);
                    assert_eq!(count_unique(&lp_labels), num_components);
                }
            }

            let mut canonical = expected.clone();
            assert_eq!(canonicalize(&mut canonical), num_components);
            assert_eq!(canonical, bfs_labels);
        }
    }
    Ok(())
}
