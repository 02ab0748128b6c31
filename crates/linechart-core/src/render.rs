// File: crates/linechart-core/src/render.rs
// Summary: SVG emission pipeline: axes, ticks and gridlines, series paths and areas, labels, legend, effects.

use crate::chart::{ChartConfig, RenderOptions};
use crate::domain::Domain;
use crate::error::{AxisId, Result};
use crate::geometry::Point;
use crate::grid::axis_ticks;
use crate::layout::Layout;
use crate::palette::Palette;
use crate::scale::PlotScale;
use crate::series::Series;
use crate::svg::{fmt_num, Element};
use crate::types::*;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const DROP_SHADOW_ID: &str = "dropShadow";

/// Fragment id of the gradient for the series at `index`.
pub fn gradient_id(index: usize) -> String {
    format!("line-grad-{index}")
}

/// Render with default options.
pub fn render(config: &ChartConfig, x_domain: &Domain, y_domain: &Domain) -> Result<String> {
    render_with(config, x_domain, y_domain, &RenderOptions::default())
}

pub fn render_with(
    config: &ChartConfig,
    x_domain: &Domain,
    y_domain: &Domain,
    opts: &RenderOptions,
) -> Result<String> {
    Ok(render_document(config, x_domain, y_domain, opts)?.to_markup())
}

/// Build the document tree.
///
/// Children are appended in paint order: axes, title, ticks and gridlines,
/// gradient defs, series, axis labels, legend, then the shared filter.
pub fn render_document(
    config: &ChartConfig,
    x_domain: &Domain,
    y_domain: &Domain,
    opts: &RenderOptions,
) -> Result<Element> {
    config.validate()?;
    x_domain.validate(AxisId::X)?;
    y_domain.validate(AxisId::Y)?;

    let layout = Layout::compute(config, &opts.metrics);
    let scale = PlotScale::new(&layout, x_domain, y_domain);

    let mut svg = Element::new("svg")
        .attr("version", "1.1")
        .attr("baseProfile", "full")
        .attr("width", layout.total_width)
        .attr("height", layout.total_height)
        .attr("xmlns", SVG_NS)
        .children(axis_lines(config, &layout));

    if let Some(title) = config.title_text() {
        svg.push(title_text(title, &layout));
    }

    let (vertical_grid, horizontal_grid) = opts.grid_wiring.flags(&config.x_axis, &config.y_axis);
    svg.push(tick_group(&layout, &scale, x_domain, y_domain, vertical_grid, horizontal_grid));

    if !config.data.is_empty() && (config.legend || config.has_area()) {
        svg.push(gradient_defs(&config.data, &opts.palette));
    }

    for (index, series) in config.data.iter().enumerate() {
        svg = svg.children(series_elements(index, series, &layout, &scale, &opts.palette));
    }

    if let Some(label) = config.x_axis.label_text() {
        svg.push(x_axis_label(label, &layout));
    }
    if let Some(label) = config.y_axis.label_text() {
        svg.push(y_axis_label(label, &layout));
    }

    if config.legend {
        svg = svg.children(legend_entries(&config.data, &layout));
    }

    Ok(svg.child(drop_shadow_filter()))
}

// ---- helpers ----------------------------------------------------------------

fn axis_lines(config: &ChartConfig, layout: &Layout) -> [Element; 2] {
    let o = layout.origin;
    let x_axis = Element::new("line")
        .attr("stroke", config.x_axis.stroke())
        .attr("stroke-width", 2)
        .attr("x1", o.x)
        .attr("y1", o.y)
        .attr("x2", o.x + layout.chart_width)
        .attr("y2", o.y);
    let y_axis = Element::new("line")
        .attr("stroke", config.y_axis.stroke())
        .attr("stroke-width", 2)
        .attr("x1", o.x)
        .attr("y1", o.y)
        .attr("x2", o.x)
        .attr("y2", o.y - layout.chart_height);
    [x_axis, y_axis]
}

fn title_text(title: &str, layout: &Layout) -> Element {
    let at = layout.title_anchor();
    Element::new("text")
        .attr("x", at.x)
        .attr("y", at.y)
        .attr("font-size", TITLE_FONT_SIZE)
        .attr("font-family", FONT_FAMILY)
        .attr("text-anchor", "middle")
        .text(title)
}

fn gridline(from: Point, to: Point) -> Element {
    Element::new("line")
        .attr("x1", from.x)
        .attr("y1", from.y)
        .attr("x2", to.x)
        .attr("y2", to.y)
        .attr("stroke", "black")
        .attr("stroke-opacity", 0.2)
        .attr("stroke-width", 1)
}

fn tick_group(
    layout: &Layout,
    scale: &PlotScale,
    x_domain: &Domain,
    y_domain: &Domain,
    vertical_grid: bool,
    horizontal_grid: bool,
) -> Element {
    let plot = layout.plot();
    let mut group = Element::new("g")
        .attr("font-size", TICK_FONT_SIZE)
        .attr("font-family", FONT_FAMILY);

    let label_y = layout.x_tick_label_y();
    for tick in axis_ticks(x_domain, &scale.x) {
        group.push(
            Element::new("text")
                .attr("x", tick.px)
                .attr("y", label_y)
                .attr("text-anchor", "middle")
                .text(tick.label),
        );
        if tick.interior && vertical_grid {
            group.push(gridline(Point::new(tick.px, plot.bottom), Point::new(tick.px, plot.top)));
        }
    }

    let label_x = layout.y_tick_label_x();
    for tick in axis_ticks(y_domain, &scale.y) {
        group.push(
            Element::new("text")
                .attr("x", label_x)
                .attr("y", tick.px)
                .attr("text-anchor", "middle")
                .attr("dy", ".3em")
                .text(tick.label),
        );
        if tick.interior && horizontal_grid {
            group.push(gridline(Point::new(plot.left, tick.px), Point::new(plot.right, tick.px)));
        }
    }
    group
}

/// One vertical gradient per series, primary color at the top.
fn gradient_defs(data: &[Series], palette: &Palette) -> Element {
    let gradients = data.iter().enumerate().map(|(index, series)| {
        let colors = palette.resolve(series.color.as_deref(), index);
        Element::new("linearGradient")
            .attr("id", gradient_id(index))
            .attr("x1", 0)
            .attr("x2", 0)
            .attr("y1", 0)
            .attr("y2", 1)
            .child(Element::new("stop").attr("offset", "0%").attr("stop-color", colors.stroke))
            .child(Element::new("stop").attr("offset", "100%").attr("stop-color", colors.gradient_end))
    });
    Element::new("defs").children(gradients)
}

/// Path data: move to the first point, line to each following point.
pub fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{cmd} {}", p.to_pair())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Polygon points: the line, then straight down to the baseline at the last
/// and first x positions.
pub fn area_points(points: &[Point], baseline_y: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    points
        .iter()
        .copied()
        .chain([Point::new(last.x, baseline_y), Point::new(first.x, baseline_y)])
        .map(|p| p.to_pair())
        .collect::<Vec<_>>()
        .join(" ")
}

fn series_elements(
    index: usize,
    series: &Series,
    layout: &Layout,
    scale: &PlotScale,
    palette: &Palette,
) -> Vec<Element> {
    if series.is_empty() {
        tracing::warn!(index, label = %series.label, "skipping series with no points");
        return Vec::new();
    }
    tracing::trace!(index, label = %series.label, points = series.values.len(), "emitting series");

    let points: Vec<Point> = series.values.iter().map(|&p| scale.to_screen(p)).collect();
    let colors = palette.resolve(series.color.as_deref(), index);

    let mut out = vec![Element::new("path")
        .attr("d", path_data(&points))
        .attr("stroke", colors.stroke)
        .attr("stroke-width", 2)
        .attr("fill", "none")
        .attr("filter", format!("url(#{DROP_SHADOW_ID})"))];

    if series.area {
        out.push(
            Element::new("polygon")
                .attr("points", area_points(&points, layout.origin.y))
                .attr("stroke-width", 0)
                .attr("fill", format!("url(#{})", gradient_id(index)))
                .attr("fill-opacity", 0.5),
        );
    }
    out
}

fn x_axis_label(label: &str, layout: &Layout) -> Element {
    let at = layout.x_label_anchor();
    Element::new("text")
        .attr("x", at.x)
        .attr("y", at.y)
        .attr("font-size", AXIS_LABEL_FONT_SIZE)
        .attr("text-anchor", "middle")
        .attr("font-family", FONT_FAMILY)
        .text(label)
}

fn y_axis_label(label: &str, layout: &Layout) -> Element {
    let at = layout.y_label_anchor();
    Element::new("text")
        .attr("x", at.x)
        .attr("y", at.y)
        .attr("font-size", AXIS_LABEL_FONT_SIZE)
        .attr("text-anchor", "middle")
        .attr("transform", format!("rotate(270, {},{})", fmt_num(at.x), fmt_num(at.y)))
        .attr("font-family", FONT_FAMILY)
        .text(label)
}

fn legend_entries(data: &[Series], layout: &Layout) -> Vec<Element> {
    let origin = layout.legend_origin();
    let padding = layout.metrics.margin / 2.0;
    data.iter()
        .enumerate()
        .flat_map(|(index, series)| {
            let x = origin.x + padding;
            let y = origin.y + padding + index as f64 * SWATCH_SIZE * 1.5;
            let swatch = Element::new("rect")
                .attr("x", x)
                .attr("y", y)
                .attr("rx", 2)
                .attr("ry", 2)
                .attr("width", SWATCH_SIZE)
                .attr("height", SWATCH_SIZE)
                .attr("fill", format!("url(#{})", gradient_id(index)));
            let label = Element::new("text")
                .attr("x", x + SWATCH_SIZE + padding)
                .attr("y", y + SWATCH_SIZE * 3.0 / 4.0)
                .attr("font-family", FONT_FAMILY)
                .attr("font-size", LEGEND_FONT_SIZE)
                .text(series.label.as_str());
            [swatch, label]
        })
        .collect()
}

/// Blurred, offset copy of the source alpha merged under the source graphic.
fn drop_shadow_filter() -> Element {
    Element::new("filter")
        .attr("id", DROP_SHADOW_ID)
        .child(
            Element::new("feGaussianBlur")
                .attr("in", "SourceAlpha")
                .attr("stdDeviation", 2),
        )
        .child(Element::new("feOffset").attr("dx", 1).attr("dy", 2))
        .child(
            Element::new("feMerge")
                .child(Element::new("feMergeNode"))
                .child(Element::new("feMergeNode").attr("in", "SourceGraphic")),
        )
}
