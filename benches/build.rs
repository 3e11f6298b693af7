use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kdrange::{BoundingBox, KdTree, KdTreeConfig, Xorshift32, random_points};

const NUM_POINTS: usize = 100_000;

fn benchmark_build_leaf_size(c: &mut Criterion) {
    let bounds = BoundingBox::new([-300.0, -300.0, -300.0], [300.0, 300.0, 300.0]);
    let points = random_points(&mut Xorshift32::default(), &bounds, NUM_POINTS);

    let mut group = c.benchmark_group("build_leaf_size");
    group.sample_size(20);

    for &max_leaf_size in &[1, 5, 16, 64] {
        let config = KdTreeConfig::default().with_max_leaf_size(max_leaf_size);
        group.bench_with_input(BenchmarkId::from_parameter(max_leaf_size), &config, |b, &config| {
            b.iter(|| {
                let tree: KdTree<[f64; 3], 3> = KdTree::with_config(black_box(points.clone()), config);
                black_box(tree.node_count())
            })
        });
    }
    group.finish();
}

fn benchmark_build_distributions(c: &mut Criterion) {
    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);
    let uniform = random_points(&mut Xorshift32::new(1), &bounds, NUM_POINTS);

    // Points along a diagonal, sorted on both axes
    let diagonal: Vec<[f64; 2]> = (0..NUM_POINTS)
        .map(|i| {
            let v = (i as f64 / NUM_POINTS as f64) * 100.0;
            [v, v]
        })
        .collect();

    // A few hundred distinct positions, heavily duplicated
    let clustered: Vec<[f64; 2]> = (0..NUM_POINTS)
        .map(|i| [(i % 17) as f64, (i % 23) as f64])
        .collect();

    let mut group = c.benchmark_group("build_distribution");
    group.sample_size(20);

    for (name, points) in [("uniform", &uniform), ("diagonal", &diagonal), ("clustered", &clustered)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let tree: KdTree<[f64; 2], 2> = KdTree::new(black_box(points.clone()));
                black_box(tree.depth())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_build_leaf_size, benchmark_build_distributions);
criterion_main!(benches);
