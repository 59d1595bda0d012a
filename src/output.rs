/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Writers for the result artifacts: label files, timing columns, and sweep
//! surfaces.

use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes one label per line, in node order.
pub fn store_labels(path: impl AsRef<Path>, labels: &[u32]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for &label in labels {
        writeln!(writer, "{}", label)?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends one column to a timings CSV file, creating it if necessary.
///
/// The first row holds one header per column; each following row holds one
/// per-run time in seconds. Existing columns are preserved, and columns of
/// different lengths are padded with empty cells.
pub fn append_timings_column(path: impl AsRef<Path>, header: &str, seconds: &[f64]) -> Result<()> {
    let path = path.as_ref();
    let mut rows: Vec<Vec<String>> = Vec::new();
    if path.exists() {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            rows.push(line?.split(',').map(str::to_owned).collect());
        }
    }

    let num_columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    rows.resize_with(rows.len().max(seconds.len() + 1), Vec::new);
    for row in &mut rows {
        row.resize(num_columns, String::new());
    }
    rows[0].push(header.to_owned());
    for (index, row) in rows.iter_mut().enumerate().skip(1) {
        row.push(
            seconds
                .get(index - 1)
                .map(|s| format!("{:.9}", s))
                .unwrap_or_default(),
        );
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for row in &rows {
        writeln!(writer, "{}", row.join(","))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the sweep surface: one row per benchmarked configuration.
pub fn store_surface(path: impl AsRef<Path>, rows: &[(usize, usize, f64)]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "threads,chunk_size,average_seconds")?;
    for &(threads, chunk_size, average) in rows {
        writeln!(writer, "{},{},{:.9}", threads, chunk_size, average)?;
    }
    writer.flush()?;
    Ok(())
}
