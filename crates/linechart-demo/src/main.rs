// File: crates/linechart-demo/src/main.rs
// Summary: Demo loads labeled (x, y) series from CSV and writes an SVG line chart.

use anyhow::{Context, Result};
use clap::Parser;
use linechart_core::{palette, ChartConfig, GridWiring, RenderOptions, Series};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "linechart-demo", about = "Render labeled numeric series to an SVG line chart")]
struct Args {
    /// CSV with `series`, `x`, `y` and optional `color` columns; omit for built-in sample data.
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(short, long, default_value = "target/out/chart.svg")]
    output: PathBuf,

    #[arg(long)]
    title: Option<String>,

    /// Plot area width in pixels.
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Plot area height in pixels.
    #[arg(long, default_value_t = 350.0)]
    height: f64,

    #[arg(long)]
    x_label: Option<String>,

    #[arg(long)]
    y_label: Option<String>,

    #[arg(long)]
    legend: bool,

    /// Fill the area under the named series (repeatable).
    #[arg(long = "area", value_name = "LABEL")]
    area: Vec<String>,

    #[arg(long)]
    no_x_grid: bool,

    #[arg(long)]
    no_y_grid: bool,

    /// Let each axis's grid flag control the gridlines at its own ticks.
    #[arg(long)]
    per_axis_grid: bool,

    /// Palette preset: `standard` or `classic`.
    #[arg(long, default_value = "standard")]
    palette: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut series = match &args.input {
        Some(path) => load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            tracing::info!("no --input given, using built-in sample data");
            sample_series()
        }
    };
    if series.is_empty() {
        anyhow::bail!("no series loaded; check headers and delimiter");
    }
    for s in &mut series {
        s.sort_by_x();
        s.area = args.area.iter().any(|a| a == &s.label);
    }
    tracing::info!(series = series.len(), points = series.iter().map(|s| s.values.len()).sum::<usize>(), "loaded data");

    let mut chart = ChartConfig::new(args.width, args.height).with_legend(args.legend);
    chart.title = args.title.clone();
    chart.x_axis.label = args.x_label.clone();
    chart.y_axis.label = args.y_label.clone();
    chart.x_axis.grid = !args.no_x_grid;
    chart.y_axis.grid = !args.no_y_grid;
    chart.data = series;

    let opts = RenderOptions {
        palette: palette::find(&args.palette),
        grid_wiring: if args.per_axis_grid { GridWiring::PerAxis } else { GridWiring::Crossed },
        ..RenderOptions::default()
    };

    let (x, y) = chart.domains();
    tracing::info!(x_min = x.min, x_max = x.max, x_step = x.step, "x domain");
    tracing::info!(y_min = y.min, y_max = y.max, y_step = y.step, "y domain");

    let svg = linechart_core::render_with(&chart, &x, &y, &opts)?;
    write_svg(&args.output, &svg)?;
    tracing::info!(path = %args.output.display(), bytes = svg.len(), "wrote chart");
    Ok(())
}

/// Sink: write the finished document, creating parent directories.
fn write_svg(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Load long-format CSV rows into series, grouped by label in first-seen order.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_series = idx(&["series", "label", "name"]);
    let i_x = idx(&["x", "time", "t"]).context("missing x column")?;
    let i_y = idx(&["y", "value", "v"]).context("missing y column")?;
    let i_color = idx(&["color", "colour"]);

    let mut out: Vec<Series> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) else {
            tracing::warn!(row, "skipping row without numeric x/y");
            continue;
        };
        let label = i_series.and_then(|i| rec.get(i)).unwrap_or("series").to_string();

        let pos = match out.iter().position(|s| s.label == label) {
            Some(pos) => pos,
            None => {
                out.push(Series::new(label));
                out.len() - 1
            }
        };
        let s = &mut out[pos];
        if s.color.is_none() {
            s.color = i_color.and_then(|i| rec.get(i)).filter(|c| !c.is_empty()).map(String::from);
        }
        s.push(x, y);
    }
    Ok(out)
}

/// Fixed two-series sample used when no input file is given.
fn sample_series() -> Vec<Series> {
    let windows = [(3.0, 0.4), (12.0, -0.7), (20.0, 0.9), (31.0, 0.1), (44.0, -0.3), (58.0, 0.8), (71.0, -0.9), (85.0, 0.5)];
    let ubuntu = [(0.0, -0.2), (9.0, 0.6), (26.0, -0.5), (37.0, 0.7), (49.0, 0.2), (63.0, -0.8), (77.0, 0.3), (90.0, 1.0)];
    vec![
        Series::with_data("Windows", windows.to_vec()).with_color("blue"),
        Series::with_data("Ubuntu", ubuntu.to_vec()).with_color("magenta"),
    ]
}
