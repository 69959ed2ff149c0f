use criterion::{black_box, criterion_group, criterion_main, Criterion};
use overlay_core::rng::RngHandle;
use overlay_graph::{k_out_directed, k_out_undirected, scale_free_ba, AdjacencyGraph};

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("k_out_directed_5k", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let mut graph = AdjacencyGraph::new(5_000);
            k_out_directed(&mut graph, 8, &mut rng);
            black_box(graph);
        });
    });
    c.bench_function("scale_free_ba_5k", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let mut graph = AdjacencyGraph::new(5_000);
            scale_free_ba(&mut graph, 3, &mut rng);
            black_box(graph);
        });
    });
    c.bench_function("k_out_undirected_1k", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let mut graph = AdjacencyGraph::new(1_000);
            let report = k_out_undirected(&mut graph, 6, &mut rng);
            black_box((graph, report));
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
