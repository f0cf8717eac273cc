use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use impulse2d::{
    core::math::{vec2, Vector2},
    intersect::*,
    scene::*,
    shape::*,
};

/// Regular polygon with `n` vertices and circumradius `r` around `(x, y)`.
fn regular_polygon(n: usize, x: f64, y: f64, r: f64) -> Polygon {
    let step = std::f64::consts::TAU / n as f64;
    let vertices = (0..n)
        .map(|i| {
            let (sin, cos) = (step * i as f64).sin_cos();
            vec2(x + r * cos, y + r * sin)
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

fn bench_polygon_sat(b: &mut Bencher, n: usize) {
    let p1 = regular_polygon(n, 0.0, 0.0, 10.0);
    let p2 = regular_polygon(n, 15.0, 3.0, 10.0);
    b.iter(|| polygon_vs_polygon_sat(&p1, &p2))
}

fn sat_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat");
    for &i in &[4, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("polygon_vs_polygon", i), &i, |b, i| {
            bench_polygon_sat(b, *i)
        });
    }

    let circle = Circle::new(5.0, -5.0, 1.0);
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    group.bench_function("circle_vs_rect", |b| {
        b.iter(|| circle_vs_rect_sat(&circle, &rect))
    });

    group.finish();
}

/// Grid of `n` x `n` unit circles spaced 3 units apart.
fn fill_grid<G: SceneGraph>(sg: &mut G, n: usize) {
    for i in 0..n {
        for j in 0..n {
            let position = Vector2::new(3.0 * i as f64, 3.0 * j as f64);
            sg.add_entity(Entity::new(Circle::new(0.0, 0.0, 1.0), position).with_flags(1));
        }
    }
}

fn bench_query<G: SceneGraph>(b: &mut Bencher, sg: &G) {
    let probe = Shape::from(Rect::new(10.0, 20.0, 10.0, 10.0));
    b.iter(|| {
        sg.query_intersect_with((&probe).into(), FlagFilter::any(1))
            .unwrap()
    })
}

fn scene_query_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_query");
    for &n in &[8, 32, 64] {
        let mut linear = LinearSG::new();
        fill_grid(&mut linear, n);
        group.bench_with_input(BenchmarkId::new("linear", n * n), &linear, |b, sg| {
            bench_query(b, sg)
        });

        let mut indexed = IndexedSG::new();
        fill_grid(&mut indexed, n);
        group.bench_with_input(BenchmarkId::new("indexed", n * n), &indexed, |b, sg| {
            bench_query(b, sg)
        });
    }

    group.finish();
}

criterion_group!(sat_benches, sat_group,);
criterion_group!(scene_benches, scene_query_group,);
criterion_main!(sat_benches, scene_benches);
