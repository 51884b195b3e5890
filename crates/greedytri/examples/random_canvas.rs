//! Random canvas demo: generate points, drag one, shrink the canvas.
//!
//! Run: `cargo run -p greedytri --example random_canvas`

use greedytri::prelude::*;

fn report(tag: &str, ps: &PointSet) {
    let edges = ps.edges();
    println!(
        "{tag:<10} points={:<3} candidates={:<4} accepted={:<3} rejected={}",
        ps.points().len(),
        edges.len(),
        edges.accepted_count(),
        edges.rejected_count()
    );
}

fn main() {
    let mut ps = PointSet::with_canvas(CanvasCfg::default(), Size::new(640.0, 480.0));
    let mut rng = ReplayToken::new(2024).to_std_rng();

    let _ = ps.generate(30, &mut rng);
    report("generate", &ps);

    let _ = ps.move_point(0, Vec2::new(320.0, 240.0));
    report("move", &ps);

    let _ = ps.rescale(Size::new(320.0, 240.0));
    report("rescale", &ps);

    for (i, s) in ps.edges().accepted().take(5).enumerate() {
        println!("  #{:<2} {:>3} -> {:<3} len={}", i + 1, s.a.0 + 1, s.b.0 + 1, s.length);
    }
}
