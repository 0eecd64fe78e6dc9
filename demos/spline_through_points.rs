use bezier_fit::{BezierSpline, Point3, PointN, Spline};

fn main() -> Result<(), bezier_fit::Error> {
    env_logger::init();

    let samples: [Point3<f64>; 5] = [
        PointN::new([0.0, 0.0, 0.0]),
        PointN::new([1.0, 1.0, 0.0]),
        PointN::new([2.0, 0.0, 0.5]),
        PointN::new([3.0, 1.0, 1.0]),
        PointN::new([4.0, 0.0, 1.0]),
    ];

    let curve = BezierSpline::from_points(&samples)?;
    println!("segments: {}", curve.segment_count());

    let (t0, t1) = curve.domain();
    println!("domain: [{}, {}]", t0, t1);

    // 11 points per unit segment
    for i in 0..=40 {
        let t = i as f64 / 10.0;
        println!("{:4.1} -> {:?}", t, curve.eval(t));
    }

    println!("arc length ~ {:.4}", curve.arclen(64));
    Ok(())
}
