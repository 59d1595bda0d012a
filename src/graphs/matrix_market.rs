/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::csr::CsrGraph;
use crate::{Error, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The sparsity structure of a coordinate Matrix Market file.
///
/// The parser reads the ASCII format: a banner line `%%MatrixMarket matrix
/// coordinate (pattern|real|integer) (general|symmetric|skew-symmetric|
/// hermitian)` (case-insensitive), any number of `%` comment lines, one
/// dimension line `M N nz`, and `nz` entry lines. Only the structure is kept:
/// the numerical value of `real` and `integer` entries is ignored. Entry
/// coordinates are 1-based, as in the file.
///
/// Matrices in `array` format, non-matrix objects, and `complex` matrices are
/// rejected with [`Error::Unsupported`]; anything else that does not parse is
/// [`Error::BadFormat`].
#[derive(Debug, Clone)]
pub struct MatrixMarket {
    /// The number of rows declared by the dimension line.
    pub num_rows: usize,
    /// The number of columns declared by the dimension line.
    pub num_cols: usize,
    /// The 1-based coordinates of the entries, in file order.
    pub entries: Vec<(u64, u64)>,
    /// Whether the file declares a non-`general` symmetry, in which case only
    /// one triangle is stored.
    pub symmetric: bool,
}

/// Number of value tokens each entry line carries beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pattern,
    Valued,
}

impl MatrixMarket {
    /// Reads a coordinate Matrix Market file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let matrix = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            "read {}: {}×{} matrix with {} entries",
            path.display(),
            matrix.num_rows,
            matrix.num_cols,
            matrix.entries.len()
        );
        Ok(matrix)
    }

    /// Parses a coordinate Matrix Market file from a reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut lines = reader.lines();
        let banner = lines
            .next()
            .ok_or_else(|| Error::BadFormat("empty file".into()))??;
        let field = parse_banner(&banner)?;
        let symmetric = parse_symmetry(&banner)?;

        let dimensions = loop {
            let line = lines
                .next()
                .ok_or_else(|| Error::BadFormat("missing dimension line".into()))??;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            break line;
        };
        let mut tokens = dimensions.split_whitespace();
        let mut next_dim = || -> Result<usize> {
            tokens
                .next()
                .and_then(|token| token.parse().ok())
                .ok_or_else(|| Error::BadFormat(format!("bad dimension line {:?}", dimensions)))
        };
        let num_rows = next_dim()?;
        let num_cols = next_dim()?;
        let num_entries = next_dim()?;
        if tokens.next().is_some() {
            return Err(Error::BadFormat(format!(
                "bad dimension line {:?}",
                dimensions
            )));
        }

        let mut entries = Vec::new();
        entries.try_reserve_exact(num_entries)?;
        while entries.len() < num_entries {
            let line = lines.next().ok_or_else(|| {
                Error::BadFormat(format!(
                    "expected {} entries, found {}",
                    num_entries,
                    entries.len()
                ))
            })??;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            entries.push(parse_entry(trimmed, field)?);
        }

        Ok(Self {
            num_rows,
            num_cols,
            entries,
            symmetric,
        })
    }

    /// Builds the undirected CSR graph of the sparsity structure,
    /// symmetrizing and dropping self-loops.
    pub fn to_csr(&self) -> Result<CsrGraph> {
        CsrGraph::from_coordinates(self.num_rows, self.num_cols, &self.entries, true, true)
    }
}

fn parse_banner(banner: &str) -> Result<Field> {
    let mut tokens = banner.split_whitespace();
    if !tokens
        .next()
        .is_some_and(|token| token.eq_ignore_ascii_case("%%MatrixMarket"))
    {
        return Err(Error::BadFormat(format!(
            "missing %%MatrixMarket banner in {:?}",
            banner
        )));
    }
    let object = tokens
        .next()
        .ok_or_else(|| Error::BadFormat(format!("truncated banner {:?}", banner)))?;
    if !object.eq_ignore_ascii_case("matrix") {
        return Err(Error::Unsupported(format!(
            "object {:?}; only matrices are supported",
            object
        )));
    }
    let format = tokens
        .next()
        .ok_or_else(|| Error::BadFormat(format!("truncated banner {:?}", banner)))?;
    if !format.eq_ignore_ascii_case("coordinate") {
        return Err(Error::Unsupported(format!(
            "format {:?}; only coordinate (sparse) matrices are supported",
            format
        )));
    }
    let field = tokens
        .next()
        .ok_or_else(|| Error::BadFormat(format!("truncated banner {:?}", banner)))?;
    match field.to_ascii_lowercase().as_str() {
        "pattern" => Ok(Field::Pattern),
        "real" | "integer" => Ok(Field::Valued),
        "complex" => Err(Error::Unsupported(
            "complex matrices are not supported".into(),
        )),
        _ => Err(Error::BadFormat(format!("unknown field {:?}", field))),
    }
}

fn parse_symmetry(banner: &str) -> Result<bool> {
    let symmetry = banner
        .split_whitespace()
        .nth(4)
        .ok_or_else(|| Error::BadFormat(format!("truncated banner {:?}", banner)))?;
    match symmetry.to_ascii_lowercase().as_str() {
        "general" => Ok(false),
        "symmetric" | "skew-symmetric" | "hermitian" => Ok(true),
        _ => Err(Error::BadFormat(format!("unknown symmetry {:?}", symmetry))),
    }
}

fn parse_entry(line: &str, field: Field) -> Result<(u64, u64)> {
    let bad = || Error::BadFormat(format!("bad entry line {:?}", line));
    let mut tokens = line.split_whitespace();
    let i = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(bad)?;
    let j = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(bad)?;
    match field {
        Field::Pattern => {
            if tokens.next().is_some() {
                return Err(bad());
            }
        }
        Field::Valued => {
            if tokens.next().is_none() || tokens.next().is_some() {
                return Err(bad());
            }
        }
    }
    Ok((i, j))
}
