/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::csr::CsrGraph;
use crate::{Error, Result};
use log::debug;

impl CsrGraph {
    /// Builds a graph from a list of 0-based arcs.
    ///
    /// Arcs with an endpoint outside `[0..num_nodes)` are discarded. If
    /// `symmetrize` is true, the reverse of every non-loop arc is added, so
    /// the result contains the reverse of every stored arc; note that the arc
    /// buffer then transiently holds up to twice the input, even when the
    /// input is already symmetric. Duplicate arcs are always removed;
    /// self-loops are removed if `drop_self_loops` is true. Successor lists
    /// come out sorted.
    ///
    /// The connected-components kernels expect a graph built with both
    /// options enabled.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] if `num_nodes ≥ u32::MAX` (the top value is
    /// reserved), [`Error::OutOfMemory`] if a buffer cannot be allocated.
    pub fn from_arcs(
        num_nodes: usize,
        arcs: impl IntoIterator<Item = (u32, u32)>,
        symmetrize: bool,
        drop_self_loops: bool,
    ) -> Result<Self> {
        if num_nodes >= u32::MAX as usize {
            return Err(Error::Unsupported(format!(
                "graphs with {} or more nodes are not supported",
                u32::MAX
            )));
        }

        let arcs = arcs.into_iter();
        let (lower, upper) = arcs.size_hint();
        let capacity = upper.unwrap_or(lower);
        let mut buf: Vec<(u32, u32)> = Vec::new();
        buf.try_reserve_exact(if symmetrize {
            capacity.saturating_mul(2)
        } else {
            capacity
        })?;

        for (src, dst) in arcs {
            if (src as usize) >= num_nodes || (dst as usize) >= num_nodes {
                continue;
            }
            buf.push((src, dst));
            if symmetrize && src != dst {
                buf.push((dst, src));
            }
        }

        buf.sort_unstable();
        if drop_self_loops {
            buf.retain(|&(src, dst)| src != dst);
        }
        buf.dedup();

        let mut row_ptr = Vec::new();
        row_ptr.try_reserve_exact(num_nodes + 1)?;
        row_ptr.resize(num_nodes + 1, 0);
        for &(src, _) in &buf {
            row_ptr[src as usize + 1] += 1;
        }
        for node in 0..num_nodes {
            row_ptr[node + 1] += row_ptr[node];
        }

        let mut col_idx = Vec::new();
        col_idx.try_reserve_exact(buf.len())?;
        col_idx.extend(buf.iter().map(|&(_, dst)| dst));

        debug!(
            "built CSR graph with {} nodes and {} arcs",
            num_nodes,
            col_idx.len()
        );
        Ok(Self::new(
            row_ptr.into_boxed_slice(),
            col_idx.into_boxed_slice(),
        ))
    }

    /// Builds a graph from 1-based coordinate records with declared
    /// dimensions, as read from a [Matrix Market
    /// file](super::matrix_market::MatrixMarket).
    ///
    /// The number of nodes is `max(num_rows, num_cols)`; records with a zero
    /// or out-of-range coordinate are discarded. See
    /// [`from_arcs`](Self::from_arcs) for the remaining semantics.
    pub fn from_coordinates(
        num_rows: usize,
        num_cols: usize,
        records: &[(u64, u64)],
        symmetrize: bool,
        drop_self_loops: bool,
    ) -> Result<Self> {
        let num_nodes = num_rows.max(num_cols);
        Self::from_arcs(
            num_nodes,
            records.iter().filter_map(|&(i, j)| {
                if i == 0 || j == 0 || i > num_nodes as u64 || j > num_nodes as u64 {
                    None
                } else {
                    Some(((i - 1) as u32, (j - 1) as u32))
                }
            }),
            symmetrize,
            drop_self_loops,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetrize_and_sort() -> Result<()> {
        let graph = CsrGraph::from_arcs(4, [(2, 1), (0, 3), (0, 1)], true, true)?;
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_arcs(), 6);
        assert_eq!(graph.successors(0), &[1, 3]);
        assert_eq!(graph.successors(1), &[0, 2]);
        assert_eq!(graph.successors(2), &[1]);
        assert_eq!(graph.successors(3), &[0]);
        Ok(())
    }

    #[test]
    fn test_duplicates_and_self_loops() -> Result<()> {
        let graph = CsrGraph::from_arcs(3, [(0, 1), (1, 0), (0, 1), (1, 1), (2, 2)], true, true)?;
        assert_eq!(graph.num_arcs(), 2);
        assert_eq!(graph.successors(0), &[1]);
        assert_eq!(graph.successors(1), &[0]);
        assert_eq!(graph.successors(2), &[0u32; 0][..]);
        Ok(())
    }

    #[test]
    fn test_kept_self_loop() -> Result<()> {
        let graph = CsrGraph::from_arcs(2, [(0, 0), (0, 1)], true, false)?;
        assert_eq!(graph.successors(0), &[0, 1]);
        assert_eq!(graph.successors(1), &[0]);
        Ok(())
    }

    #[test]
    fn test_out_of_range_arcs_are_discarded() -> Result<()> {
        let graph = CsrGraph::from_arcs(2, [(0, 1), (0, 5), (7, 1)], true, true)?;
        assert_eq!(graph.num_arcs(), 2);
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<()> {
        let graph = CsrGraph::from_arcs(0, [], true, true)?;
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_arcs(), 0);
        Ok(())
    }

    #[test]
    fn test_too_many_nodes() {
        assert!(matches!(
            CsrGraph::from_arcs(u32::MAX as usize, [], true, true),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_from_coordinates() -> Result<()> {
        let graph =
            CsrGraph::from_coordinates(3, 3, &[(1, 2), (2, 3), (0, 1), (4, 1)], true, true)?;
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.successors(0), &[1]);
        assert_eq!(graph.successors(1), &[0, 2]);
        assert_eq!(graph.successors(2), &[1]);
        Ok(())
    }
}
