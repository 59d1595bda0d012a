/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The command-line interface of the `concomp` binary.

use crate::bench::{benchmark, Kernel};
use crate::components::{bfs, Schedule, DEFAULT_GRANULARITY};
use crate::graphs::matrix_market::MatrixMarket;
use crate::output::{append_timings_column, store_labels, store_surface};
use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, ValueEnum};
use dsi_progress_logger::prelude::*;
use itertools::iproduct;
use log::info;
use std::path::PathBuf;

/// Which kernel to benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Sequential breadth-first labelling.
    Bfs,
    /// Sequential label propagation.
    LpSeq,
    /// Label propagation on a work-stealing pool.
    LpPar,
    /// Label propagation on an explicit worker pool.
    #[value(alias = "lp")]
    LpPool,
}

#[derive(Parser, Debug)]
#[command(name = "concomp", version)]
/// Computes the connected components of an undirected sparse graph and
/// benchmarks the available kernels.
///
/// The matrix is read in coordinate Matrix Market format; only the sparsity
/// structure is used, and the adjacency is symmetrized. Results are written
/// under the output directory: labels.txt (one component label per node,
/// from the final run), timings.csv (one column of per-run seconds per
/// configuration, appended across invocations), and surface.csv when more
/// than one thread/chunk configuration is swept.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
pub struct Cli {
    /// The matrix to read, in coordinate Matrix Market format.
    pub matrix: PathBuf,

    #[arg(short, long, default_value_t = 5, value_parser = runs_parser)]
    /// How many timed runs to perform for each configuration.
    pub runs: usize,

    #[arg(short = 'j', long, default_value_t = IntSpec(vec![num_cpus::get().max(1)]), value_parser = spec_parser)]
    /// The numbers of threads to benchmark: a comma-separated list of
    /// positive integers and/or start:end[:step] inclusive ranges.
    pub threads: IntSpec,

    #[arg(short, long, default_value_t = IntSpec(vec![DEFAULT_GRANULARITY]), value_parser = spec_parser)]
    /// The chunk sizes to benchmark (same syntax as --threads). A chunk size
    /// of 1 selects static block partitioning in the worker-pool kernel; for
    /// the work-stealing kernel the value is the task granularity.
    pub chunk_size: IntSpec,

    #[arg(short, long, value_enum, default_value_t = Algorithm::LpPool)]
    /// The kernel to benchmark ("lp" is accepted as an alias of lp-pool).
    pub algorithm: Algorithm,

    #[arg(short, long, default_value = "results")]
    /// The directory where labels and timings are written.
    pub output: PathBuf,
}

/// A list of positive integers parsed from comma-separated values and/or
/// `start:end[:step]` inclusive ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSpec(pub Vec<usize>);

impl std::fmt::Display for IntSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut values = self.0.iter();
        if let Some(value) = values.next() {
            write!(f, "{}", value)?;
        }
        for value in values {
            write!(f, ",{}", value)?;
        }
        Ok(())
    }
}

/// Parses a positive run count.
///
/// This function is meant to be used with `#[arg(..., value_parser =
/// runs_parser)]`.
pub fn runs_parser(arg: &str) -> Result<usize> {
    let runs = arg.parse::<usize>()?;
    ensure!(runs > 0, "Number of runs must be greater than 0");
    Ok(runs)
}

fn positive_parser(arg: &str) -> Result<usize> {
    let value = arg
        .parse::<usize>()
        .with_context(|| format!("invalid integer {:?}", arg))?;
    ensure!(value > 0, "values must be greater than 0, got {:?}", arg);
    Ok(value)
}

/// Parses a comma-separated list of positive integers and/or
/// `start:end[:step]` inclusive ranges.
///
/// This function is meant to be used with `#[arg(..., value_parser =
/// spec_parser)]`.
pub fn spec_parser(arg: &str) -> Result<IntSpec> {
    let mut values = Vec::new();
    for part in arg.split(',') {
        let mut bounds = part.split(':');
        match (bounds.next(), bounds.next(), bounds.next(), bounds.next()) {
            (Some(value), None, _, _) => values.push(positive_parser(value)?),
            (Some(start), Some(end), step, None) => {
                let start = positive_parser(start)?;
                let end = positive_parser(end)?;
                let step = step.map(positive_parser).transpose()?.unwrap_or(1);
                ensure!(start <= end, "empty range {:?}", part);
                values.extend((start..=end).step_by(step));
            }
            _ => bail!("too many ':' in {:?}", part),
        }
    }
    ensure!(!values.is_empty(), "empty specification");
    Ok(IntSpec(values))
}

/// Initializes a logger reading the verbosity from `RUST_LOG`, defaulting to
/// `info`.
pub fn init_env_logger() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;
    Ok(())
}

/// Parses the command-line arguments and runs the benchmark.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    main(cli)?;
    info!("The command took {:.3} s", start.elapsed().as_secs_f64());
    Ok(())
}

pub fn main(cli: Cli) -> Result<()> {
    if cli.output.as_os_str().is_empty() {
        return Err(
            crate::Error::BadArgument("the output directory name must not be empty".into()).into(),
        );
    }
    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("Could not create {}", cli.output.display()))?;

    let mut pl = progress_logger![display_memory = true];

    let matrix = MatrixMarket::read(&cli.matrix)
        .with_context(|| format!("Could not read {}", cli.matrix.display()))?;
    let graph = matrix
        .to_csr()
        .context("Could not build the CSR graph")?;
    info!(
        "{} nodes, {} arcs after symmetrization",
        graph.num_nodes(),
        graph.num_arcs()
    );

    // A deterministic verification pass: every benchmarked configuration
    // must agree with this component count.
    let mut oracle = vec![0; graph.num_nodes()];
    let expected = bfs(&graph, &mut oracle, &mut pl);
    info!("{} connected components", expected);

    let kernels: Vec<Kernel> = match cli.algorithm {
        Algorithm::Bfs => vec![Kernel::Bfs],
        Algorithm::LpSeq => vec![Kernel::LpSeq],
        Algorithm::LpPar => iproduct!(&cli.threads.0, &cli.chunk_size.0)
            .map(|(&num_threads, &granularity)| Kernel::LpPar {
                num_threads,
                granularity,
            })
            .collect(),
        Algorithm::LpPool => iproduct!(&cli.threads.0, &cli.chunk_size.0)
            .map(|(&num_threads, &chunk_size)| Kernel::LpPool {
                num_threads,
                schedule: Schedule::from_chunk_size(chunk_size),
            })
            .collect(),
    };

    let timings_path = cli.output.join("timings.csv");
    let mut surface = Vec::new();
    let mut last = None;
    for kernel in kernels {
        let measurement = benchmark(&graph, kernel, cli.runs, &mut pl);
        ensure!(
            measurement.num_components == expected,
            "kernel {:?} found {} components instead of {}",
            kernel,
            measurement.num_components,
            expected
        );
        let mean = measurement.mean().as_secs_f64();
        info!(
            "{}: mean {:.6} s over {} runs",
            column_name(&kernel),
            mean,
            cli.runs
        );
        let seconds: Vec<f64> = measurement
            .durations
            .iter()
            .map(|duration| duration.as_secs_f64())
            .collect();
        append_timings_column(&timings_path, &column_name(&kernel), &seconds)
            .with_context(|| format!("Could not update {}", timings_path.display()))?;
        if let Some(point) = sweep_point(&kernel) {
            surface.push((point.0, point.1, mean));
        }
        last = Some(measurement);
    }

    if surface.len() > 1 {
        let surface_path = cli.output.join("surface.csv");
        store_surface(&surface_path, &surface)
            .with_context(|| format!("Could not write {}", surface_path.display()))?;
    }
    if let Some(measurement) = last {
        let labels_path = cli.output.join("labels.txt");
        store_labels(&labels_path, &measurement.labels)
            .with_context(|| format!("Could not write {}", labels_path.display()))?;
    }

    Ok(())
}

/// The header under which a kernel's timings are recorded.
fn column_name(kernel: &Kernel) -> String {
    match kernel {
        Kernel::Bfs => "bfs".into(),
        Kernel::LpSeq => "lp-seq".into(),
        Kernel::LpPar {
            num_threads,
            granularity,
        } => format!("lp-par-j{}-c{}", num_threads, granularity),
        Kernel::LpPool {
            num_threads,
            schedule,
        } => match schedule {
            Schedule::Static => format!("lp-pool-j{}-static", num_threads),
            Schedule::Dynamic { chunk_size } => {
                format!("lp-pool-j{}-c{}", num_threads, chunk_size)
            }
        },
    }
}

/// The (threads, chunk size) coordinates of a kernel on the sweep surface.
fn sweep_point(kernel: &Kernel) -> Option<(usize, usize)> {
    match *kernel {
        Kernel::LpPar {
            num_threads,
            granularity,
        } => Some((num_threads, granularity)),
        Kernel::LpPool {
            num_threads,
            schedule,
        } => Some((
            num_threads,
            match schedule {
                Schedule::Static => 1,
                Schedule::Dynamic { chunk_size } => chunk_size,
            },
        )),
        _ => None,
    }
}
