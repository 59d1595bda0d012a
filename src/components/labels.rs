/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Utilities to inspect and normalize label vectors.
//!
//! All functions expect label values in `[0..labels.len())`, which both the
//! [BFS](super::bfs) and the label-propagation conventions satisfy.

use std::sync::atomic::{AtomicU32, Ordering};
use sux::bits::BitVec;

/// Counts the distinct values in a label vector.
pub fn count_unique(labels: &[u32]) -> usize {
    let mut seen = BitVec::new(labels.len());
    let mut count = 0;
    for &label in labels {
        if !seen[label as usize] {
            seen.set(label as usize, true);
            count += 1;
        }
    }
    count
}

/// Renames labels to dense indices in `[0..k)` in order of first appearance
/// and returns `k`.
///
/// Two label vectors describe the same partition of the nodes if and only if
/// they are equal after canonicalization, which is how label vectors produced
/// under different conventions (or different parallel schedules) are
/// compared. Canonicalizing a [BFS](super::bfs) labelling is the identity.
pub fn canonicalize(labels: &mut [u32]) -> usize {
    const UNASSIGNED: u32 = u32::MAX;
    let mut rename = vec![UNASSIGNED; labels.len()];
    let mut next = 0u32;
    for label in labels.iter_mut() {
        let target = &mut rename[*label as usize];
        if *target == UNASSIGNED {
            *target = next;
            next += 1;
        }
        *label = *target;
    }
    next as usize
}

/// Copies an atomic label array into a plain one.
pub fn from_atomic(atomic: &[AtomicU32], labels: &mut [u32]) {
    assert_eq!(atomic.len(), labels.len());
    for (label, value) in labels.iter_mut().zip(atomic) {
        *label = value.load(Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_unique() {
        assert_eq!(count_unique(&[]), 0);
        assert_eq!(count_unique(&[0, 0, 0]), 1);
        assert_eq!(count_unique(&[0, 2, 2, 0, 4]), 3);
    }

    #[test]
    fn test_canonicalize() {
        let mut labels = [3, 3, 0, 2, 0];
        assert_eq!(canonicalize(&mut labels), 3);
        assert_eq!(labels, [0, 0, 1, 2, 1]);

        let mut empty: [u32; 0] = [];
        assert_eq!(canonicalize(&mut empty), 0);
    }

    #[test]
    fn test_canonicalize_is_idempotent_on_dense_labels() {
        let mut labels = [0, 1, 1, 2, 0];
        assert_eq!(canonicalize(&mut labels), 3);
        assert_eq!(labels, [0, 1, 1, 2, 0]);
    }
}
