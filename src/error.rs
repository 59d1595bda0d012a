/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors returned by graph ingestion and by the output writers.
///
/// The kernels themselves never return an error: they either run to
/// completion or, should one of their large one-shot allocations fail,
/// follow the global allocator's abort policy.
#[derive(Error, Debug)]
pub enum Error {
    /// A header, dimension line, or entry could not be parsed.
    #[error("bad format: {0}")]
    BadFormat(String),
    /// The input is well formed but describes data this crate does not handle.
    #[error("unsupported input: {0}")]
    Unsupported(String),
    /// A buffer allocation failed.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    /// An underlying read or write failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An invalid option was passed on the command line.
    #[error("bad argument: {0}")]
    BadArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
