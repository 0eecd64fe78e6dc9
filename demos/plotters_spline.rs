extern crate plotters;
use plotters::prelude::*;

extern crate bezier_fit;
use bezier_fit::{BezierSpline, Point, PointN, DEFAULT_SAMPLES_PER_SEGMENT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // sample points the curve has to pass through
    let samples = [
        PointN::new([0f64, 1.77f64]),
        PointN::new([1.1f64, -1f64]),
        PointN::new([2.4f64, 1.5f64]),
        PointN::new([4.3f64, 3f64]),
        PointN::new([5.2f64, -2f64]),
        PointN::new([7.0f64, 0.5f64]),
    ];

    let curve = BezierSpline::from_points(&samples)?;

    // the polyline a renderer would turn into line primitives
    let fitted: Vec<(f64, f64)> = curve
        .sample(DEFAULT_SAMPLES_PER_SEGMENT)
        .iter()
        .map(|p| (p.axis(0), p.axis(1)))
        .collect();

    // control polygons of the individual cubic segments
    let mut control_polygon: Vec<(f64, f64)> = Vec::new();
    for segment in curve.segments() {
        for p in segment.control_points() {
            control_polygon.push((p.axis(0), p.axis(1)));
        }
    }

    let root = BitMapBackend::new("fitted_spline.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cubic Bezier spline through samples", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-1f64..8f64, -4f64..5f64)?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(control_polygon, GREEN.mix(0.5)))?
        .label("Segment control points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .draw_series(LineSeries::new(fitted, &RED))?
        .label("S(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(PointSeries::of_element(
            samples.iter().map(|p| (p.axis(0), p.axis(1))),
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(
                        format!("{:?}", coord),
                        (0, 15),
                        ("sans-serif", 15).into_font(),
                    )
            },
        ))?
        .label("Samples")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
