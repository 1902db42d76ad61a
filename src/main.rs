/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use dsi_progress_logger::prelude::*;
use frontier_visits::algo::{reachability, reduce, sort};
use frontier_visits::graph::{random::RandomGraph, RandomAccessGraph};
use frontier_visits::utils::Threads;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::ThreadPool;
use std::time::{Duration, Instant};

/// Compares sequential and parallel visits, reductions and sorts
#[derive(Parser, Debug)]
#[command(name = "frontier-visits", version)]
struct Args {
    /// Number of threads (default: available parallelism)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for the random generator (default: from the operating system)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Breadth-first and depth-first visits of a random graph
    Visits {
        /// Number of nodes
        #[arg(short, long)]
        nodes: usize,
        /// Number of random edges (self-loops are dropped)
        #[arg(short, long)]
        edges: usize,
        /// The node to start the visits from
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Minimum, maximum, sum and average of a random array
    Reduce {
        /// Number of elements
        #[arg(short, long)]
        len: usize,
    },
    /// Bubble sort and merge sort of a random array
    Sort {
        /// Number of elements
        #[arg(short, long)]
        len: usize,
    },
}

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

fn report(pl: &mut impl ProgressLog, what: &str, seq: Duration, par: Duration) {
    pl.info(format_args!(
        "{}: sequential {:?}, parallel {:?}, speedup {:.2}",
        what,
        seq,
        par,
        seq.as_secs_f64() / par.as_secs_f64().max(f64::MIN_POSITIVE)
    ));
}

fn random_values(len: usize, rng: &mut impl Rng) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(0..10_000)).collect()
}

fn visits(
    nodes: usize,
    edges: usize,
    start: usize,
    seed: Option<u64>,
    thread_pool: &ThreadPool,
    pl: &mut ProgressLogger,
) -> Result<()> {
    let mut builder = RandomGraph::new(nodes, edges);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let graph = builder.build();
    pl.info(format_args!(
        "Random graph with {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    ));

    let (seq, seq_time) = time(|| reachability::seq_dfs(&graph, start, no_logging![]));
    let seq = seq.context("Sequential depth-first visit failed")?;
    let (par, par_time) =
        time(|| reachability::par_dfs(&graph, start, thread_pool, no_logging![]));
    let par = par.context("Parallel depth-first visit failed")?;
    ensure!(seq == par, "Depth-first visits reached different nodes");
    report(pl, "DFS", seq_time, par_time);

    let (seq, seq_time) = time(|| reachability::seq_bfs(&graph, start, no_logging![]));
    let seq = seq.context("Sequential breadth-first visit failed")?;
    let (par, par_time) =
        time(|| reachability::par_bfs(&graph, start, thread_pool, no_logging![]));
    let par = par.context("Parallel breadth-first visit failed")?;
    ensure!(seq == par, "Breadth-first visits reached different nodes");
    report(pl, "BFS", seq_time, par_time);

    pl.info(format_args!("Reached {} nodes from {}", seq.len(), start));
    Ok(())
}

fn reductions(values: &[i64], thread_pool: &ThreadPool, pl: &mut ProgressLogger) -> Result<()> {
    let (seq, seq_time) = time(|| reduce::seq_min(values));
    let (par, par_time) = time(|| reduce::par_min(values, thread_pool));
    ensure!(seq == par, "Minimums differ");
    pl.info(format_args!("Minimum: {:?}", seq));
    report(pl, "Min", seq_time, par_time);

    let (seq, seq_time) = time(|| reduce::seq_max(values));
    let (par, par_time) = time(|| reduce::par_max(values, thread_pool));
    ensure!(seq == par, "Maximums differ");
    pl.info(format_args!("Maximum: {:?}", seq));
    report(pl, "Max", seq_time, par_time);

    let (seq, seq_time) = time(|| reduce::seq_sum(values));
    let (par, par_time) = time(|| reduce::par_sum(values, thread_pool));
    ensure!(seq == par, "Sums differ");
    pl.info(format_args!("Sum: {}", seq));
    report(pl, "Sum", seq_time, par_time);

    let (seq, seq_time) = time(|| reduce::seq_avg(values));
    let (_, par_time) = time(|| reduce::par_avg(values, thread_pool));
    pl.info(format_args!("Average: {:?}", seq));
    report(pl, "Avg", seq_time, par_time);
    Ok(())
}

fn sorts(values: &[i64], thread_pool: &ThreadPool, pl: &mut ProgressLogger) -> Result<()> {
    let mut seq = values.to_vec();
    let mut par = values.to_vec();
    let ((), seq_time) = time(|| sort::seq_bubble_sort(&mut seq));
    let ((), par_time) = time(|| sort::par_bubble_sort(&mut par, thread_pool));
    ensure!(seq == par, "Bubble sorts differ");
    report(pl, "Bubble sort", seq_time, par_time);

    let mut seq = values.to_vec();
    let mut par = values.to_vec();
    let ((), seq_time) = time(|| sort::seq_merge_sort(&mut seq));
    let ((), par_time) = time(|| sort::par_merge_sort(&mut par, thread_pool));
    ensure!(seq == par, "Merge sorts differ");
    report(pl, "Merge sort", seq_time, par_time);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let threads = Threads::from(args.threads);
    let thread_pool = threads
        .build()
        .with_context(|| format!("Cannot build thread pool with {:?}", threads))?;
    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Using {} threads",
        thread_pool.current_num_threads()
    ));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match args.command {
        Command::Visits {
            nodes,
            edges,
            start,
        } => visits(nodes, edges, start, args.seed, &thread_pool, &mut main_pl),
        Command::Reduce { len } => {
            reductions(&random_values(len, &mut rng), &thread_pool, &mut main_pl)
        }
        Command::Sort { len } => sorts(&random_values(len, &mut rng), &thread_pool, &mut main_pl),
    }
}
