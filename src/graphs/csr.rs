/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// An immutable compressed-sparse-row representation of a graph.
///
/// The representation is composed of two arrays: for a graph with `n` nodes
/// and `m` arcs, `row_ptr` has exactly `n + 1` elements, with `row_ptr[0] =
/// 0` and `row_ptr[n] = m`, and `col_idx` has exactly `m` elements. The
/// successors of node `u` are the slice `col_idx[row_ptr[u]..row_ptr[u + 1]]`,
/// sorted in increasing order.
///
/// Node identifiers are stored as `u32`; the top value is reserved, so graphs
/// have at most `u32::MAX - 1` nodes (see
/// [`from_arcs`](CsrGraph::from_arcs)).
///
/// Instances built with [`from_arcs`](CsrGraph::from_arcs) or
/// [`from_coordinates`](CsrGraph::from_coordinates) with symmetrization
/// enabled contain the reverse of every arc, which is the form the
/// [connected-components kernels](crate::components) expect; each undirected
/// edge then counts as two arcs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    pub(crate) row_ptr: Box<[usize]>,
    pub(crate) col_idx: Box<[u32]>,
}

impl CsrGraph {
    pub(crate) fn new(row_ptr: Box<[usize]>, col_idx: Box<[u32]>) -> Self {
        let graph = Self { row_ptr, col_idx };
        debug_assert!(graph.is_well_formed());
        graph
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.row_ptr.len() - 1
    }

    /// Returns the number of arcs.
    ///
    /// In a symmetrized graph each undirected edge counts twice.
    #[inline(always)]
    pub fn num_arcs(&self) -> u64 {
        self.col_idx.len() as u64
    }

    /// Returns the number of successors of a node.
    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.row_ptr[node + 1] - self.row_ptr[node]
    }

    /// Returns the successors of a node as a sorted slice.
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[u32] {
        &self.col_idx[self.row_ptr[node]..self.row_ptr[node + 1]]
    }

    /// Returns an iterator over all arcs in lexicographic order.
    pub fn arcs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.num_nodes())
            .flat_map(move |node| self.successors(node).iter().map(move |&succ| (node as u32, succ)))
    }

    /// Checks the structural invariants: `row_ptr` starts at zero, is
    /// nondecreasing and ends at the length of `col_idx`, and every successor
    /// list is strictly increasing with in-range node identifiers.
    pub(crate) fn is_well_formed(&self) -> bool {
        let num_nodes = self.num_nodes();
        if self.row_ptr[0] != 0 || self.row_ptr[num_nodes] != self.col_idx.len() {
            return false;
        }
        if self.row_ptr.windows(2).any(|w| w[0] > w[1]) {
            return false;
        }
        (0..num_nodes).all(|node| {
            let successors = self.successors(node);
            successors.windows(2).all(|w| w[0] < w[1])
                && successors.iter().all(|&succ| (succ as usize) < num_nodes)
        })
    }
}
