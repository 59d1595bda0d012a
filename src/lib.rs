/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod bench;
#[cfg(feature = "cli")]
pub mod cli;
pub mod components;
mod error;
pub mod graphs;
pub mod output;
pub mod utils;

pub use error::{Error, Result};

/// Prelude module to import everything from this crate.
pub mod prelude {
    pub use crate::bench::*;
    pub use crate::components::*;
    pub use crate::graphs::csr::CsrGraph;
    pub use crate::graphs::matrix_market::MatrixMarket;
    pub use crate::thread_pool;
    pub use crate::{Error, Result};
}
