// File: crates/linechart-examples/src/bin/lines.rs
// Summary: Minimal example that renders a simple line chart with a filled area to SVG.

use linechart_core::{AxisConfig, ChartConfig, Series};

fn main() {
    // Build a simple line series
    let data = vec![
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (3.0, 1.8),
        (4.0, 1.4),
        (5.0, 2.0),
    ];

    let mut chart = ChartConfig::new(600.0, 350.0).with_title("Example lines").with_legend(true);
    chart.x_axis = AxisConfig::labeled("X");
    chart.y_axis = AxisConfig::labeled("Y");
    chart.add_series(Series::with_data("signal", data).with_color("blue").with_area(true));
    chart.add_series(Series::with_data("baseline", vec![(0.0, 1.0), (5.0, 1.0)]).with_color("red"));

    let svg = chart.render_svg().expect("render to svg");
    let out = std::path::PathBuf::from("target/out/example_lines.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, svg).expect("write svg");
    println!("Wrote {}", out.display());
}
