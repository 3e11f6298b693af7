use kdrange::{BoundingBox, KdTree, KdTreeConfig, Node, Xorshift32, random_points};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("kdtree_uniform.svg", 1000, [0.0, 0.0], 120.0)?;
    run_example("kdtree_sparse.svg", 60, [150.0, -100.0], 80.0)?;
    Ok(())
}

fn run_example(filename: &str, count: usize, origin: [f64; 2], radius: f64) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(-300.0..300.0, -300.0..300.0)?;

    let bounds = BoundingBox::new([-300.0, -300.0], [300.0, 300.0]);
    let mut rng = Xorshift32::default();
    let points = random_points(&mut rng, &bounds, count);

    let config = KdTreeConfig::default();
    let tree: KdTree<[f64; 2], 2> = KdTree::with_config(points, config);

    // Draw bounding box
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(-300.0, -300.0), (300.0, -300.0), (300.0, 300.0), (-300.0, 300.0), (-300.0, -300.0)],
        BLACK.stroke_width(2),
    )))?;

    // Shade the leaf cells the query ball reaches
    let radius_sq = radius * radius;
    let mut cells = Vec::new();
    tree.walk(bounds, |node, region, _| {
        if node.is_leaf() && region.squared_distance_to(&origin) < radius_sq {
            cells.push([(region.min[0], region.min[1]), (region.max[0], region.max[1])]);
        }
    });
    chart.draw_series(cells.into_iter().map(|c| Rectangle::new(c, RED.mix(0.08).filled())))?;

    // Draw split lines, thinner with depth
    let mut lines = Vec::new();
    tree.walk(bounds, |node, region, depth| {
        if let Node::Split(split) = node {
            let b = split.boundary();
            let line = if split.axis() == 0 {
                vec![(b, region.min[1]), (b, region.max[1])]
            } else {
                vec![(region.min[0], b), (region.max[0], b)]
            };
            lines.push((line, depth));
        }
    });
    for (line, depth) in lines {
        let width = 3u32.saturating_sub(depth as u32 / 3).max(1);
        chart.draw_series(std::iter::once(PathElement::new(line, BLUE.mix(0.6).stroke_width(width))))?;
    }

    // Draw points
    chart.draw_series(
        tree.points()
            .iter()
            .map(|p| Circle::new((p[0], p[1]), 2, BLACK.filled())),
    )?;

    // Draw query circle and hits
    let circle: Vec<(f64, f64)> = (0..=128)
        .map(|i| {
            let t = i as f64 / 128.0 * std::f64::consts::TAU;
            (origin[0] + radius * t.cos(), origin[1] + radius * t.sin())
        })
        .collect();
    chart.draw_series(std::iter::once(PathElement::new(circle, RED.stroke_width(2))))?;

    let hits = tree.within(&origin, radius);
    chart.draw_series(hits.iter().map(|p| Circle::new((p[0], p[1]), 4, RED.filled())))?;

    root.present()?;
    println!(
        "{}: {} points, {} nodes, depth {}, {} within {} of {:?}",
        filename,
        tree.len(),
        tree.node_count(),
        tree.depth(),
        hits.len(),
        radius,
        origin
    );
    Ok(())
}
