/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::prelude::*;
use frontier_visits::algo::reachability::*;
use frontier_visits::graph::{random::RandomGraph, RandomAccessGraph};
use frontier_visits::utils::Threads;

const NUM_SAMPLES: usize = 10;
const BENCH_GRAPHS: [(usize, usize); 2] = [(100_000, 200_000), (100_000, 1_000_000)];

pub fn bench_visits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Visits");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    let thread_pool = Threads::Default
        .build()
        .expect("Cannot build a ThreadPool with default parameters");

    for (num_nodes, num_edges) in BENCH_GRAPHS {
        let graph = RandomGraph::new(num_nodes, num_edges).seed(0).build();
        let graph_name = format!("n{}-m{}", num_nodes, num_edges);
        group.throughput(Throughput::Elements(graph.num_arcs() as u64));

        group.bench_with_input(BenchmarkId::new("seq_bfs", &graph_name), &graph, |b, g| {
            b.iter(|| seq_bfs(g, 0, no_logging![]))
        });
        group.bench_with_input(BenchmarkId::new("par_bfs", &graph_name), &graph, |b, g| {
            b.iter(|| par_bfs(g, 0, &thread_pool, no_logging![]))
        });
        group.bench_with_input(BenchmarkId::new("seq_dfs", &graph_name), &graph, |b, g| {
            b.iter(|| seq_dfs(g, 0, no_logging![]))
        });
        group.bench_with_input(BenchmarkId::new("par_dfs", &graph_name), &graph, |b, g| {
            b.iter(|| par_dfs(g, 0, &thread_pool, no_logging![]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visits);
criterion_main!(benches);
