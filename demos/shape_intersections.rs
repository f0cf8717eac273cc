use impulse2d::{
    core::{math::vec2, traits::FuzzyEq},
    intersect::*,
    polygon,
    shape::*,
};

fn main() {
    println!("Boolean tests treat touching shapes as separate...");
    let c1 = Circle::new(0.0, 0.0, 1.0);
    let c2 = Circle::new(2.0, 0.0, 1.0);
    assert!(!circle_vs_circle(&c1, &c2));
    println!("{c1} vs {c2}: intersect = false, mtv = {:?}", circle_vs_circle_sat(&c1, &c2));

    println!("MTVs move the first shape out of the second...");
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let inside = Circle::new(5.0, -5.0, 1.0);
    let mtv = circle_vs_rect_sat(&inside, &rect).expect("circle is inside the rect");
    assert!(mtv.fuzzy_eq(vec2(-6.0, 0.0)));
    println!("{inside} out of {rect}: {mtv}");

    let tri = polygon![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)].expect("3 vertices");
    let square = polygon![(3.0, -1.0), (6.0, -1.0), (6.0, 2.0), (3.0, 2.0)].expect("4 vertices");
    let mtv = polygon_vs_polygon_sat(&tri, &square).expect("polygons overlap");
    println!("{tri} out of {square}: {mtv}");

    println!("Any pair through the Shape enum...");
    let shapes: Vec<Shape> = vec![
        c1.into(),
        rect.into(),
        tri.into(),
        square.into(),
        vec2(1.0, 1.0).into(),
    ];
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            let hit = shape_vs_shape(a, b);
            match shape_vs_shape_sat(a, b) {
                Some(mtv) => println!("  {a} / {b}: intersect = {hit}, mtv = {mtv}"),
                None => println!("  {a} / {b}: separated"),
            }
        }
    }
}
