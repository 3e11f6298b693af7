use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kdrange::{BoundingBox, KdTree, LinearScan, RangeIndex, Xorshift32, random_points};

const NUM_POINTS: usize = 10_000;

fn run_queries<I: RangeIndex<[f64; 2], 2>>(index: &I, origins: &[[f64; 2]], radius: f64) -> usize {
    let mut total = 0;
    for origin in origins {
        index.visit_within(origin, radius, |_| total += 1);
    }
    total
}

fn benchmark_compare_query(c: &mut Criterion) {
    let bounds = BoundingBox::new([-300.0, -300.0], [300.0, 300.0]);
    let mut rng = Xorshift32::default();
    let points = random_points(&mut rng, &bounds, NUM_POINTS);
    let origins = random_points(&mut rng, &bounds, 100);

    let tree: KdTree<[f64; 2], 2> = KdTree::new(points.clone());
    let scan: LinearScan<[f64; 2], 2> = LinearScan::new(points);

    let mut group = c.benchmark_group("compare_query");

    group.bench_function("kdtree", |b| {
        b.iter(|| run_queries(&tree, black_box(&origins), 30.0))
    });

    group.bench_function("linear", |b| {
        b.iter(|| run_queries(&scan, black_box(&origins), 30.0))
    });

    group.finish();
}

criterion_group!(benches, benchmark_compare_query);
criterion_main!(benches);
