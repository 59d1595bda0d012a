/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph representations and ingestion.
//!
//! The only runtime representation is the [compressed-sparse-row
//! graph](csr::CsrGraph); it is built from arc lists or from [coordinate
//! Matrix Market files](matrix_market::MatrixMarket), and the [`random`]
//! module provides Erdős–Rényi arc lists for tests and benchmarks.

mod build;
pub mod csr;
pub mod matrix_market;
pub mod random;
