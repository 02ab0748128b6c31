// File: crates/linechart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts to SVG text.
// - Checks the document tree for pieces that must hold regardless of the golden file.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, records the snapshot so the next run compares against it.

use linechart_core::svg::Element;
use linechart_core::{render_document, ChartConfig, RenderOptions, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, svg: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() || !path.exists() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create snapshots dir");
        }
        std::fs::write(&path, svg).expect("write snapshot");
        eprintln!("[snapshot] Recorded {} ({} bytes)", path.display(), svg.len());
        return;
    }
    let want = std::fs::read_to_string(&path).expect("read snapshot");
    assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", path.display());
}

fn base_chart() -> ChartConfig {
    let mut chart = ChartConfig::new(600.0, 350.0);
    chart.add_series(Series::with_data("Windows", vec![(0.0, 1.0), (10.0, 2.0), (20.0, 1.5)]).with_color("blue"));
    chart.add_series(Series::with_data("Ubuntu", vec![(0.0, 0.5), (10.0, 1.5), (20.0, 1.0)]).with_color("magenta"));
    chart
}

fn full_chart() -> ChartConfig {
    let mut chart = base_chart().with_title("Line Graph Test").with_legend(true);
    chart.data[0].area = true;
    chart.x_axis.label = Some("Time (seconds)".into());
    chart.y_axis.label = Some("Count".into());
    chart
}

fn document(chart: &ChartConfig) -> Element {
    let (x, y) = chart.domains();
    render_document(chart, &x, &y, &RenderOptions::default()).expect("render")
}

fn attr<'a>(e: &'a Element, key: &str) -> &'a str {
    e.get_attr(key).unwrap_or_else(|| panic!("<{}> has no {key}", e.name()))
}

#[test]
fn golden_basic_chart() {
    let chart = base_chart();
    let doc = document(&chart);
    assert!(doc.elements().all(|e| e.name() != "defs" && e.name() != "rect"));

    let svg = chart.render_svg().expect("render");
    assert_eq!(svg, doc.to_markup());
    write_or_compare("basic_chart.svg", &svg);
}

#[test]
fn golden_full_chart() {
    let chart = full_chart();
    let svg = chart.render_svg().expect("render");
    write_or_compare("full_chart.svg", &svg);
}

#[test]
fn full_chart_tick_labels() {
    let doc = document(&full_chart());
    let group = doc.elements().find(|e| e.name() == "g").expect("tick group");
    let texts: Vec<&Element> = group.elements().filter(|e| e.name() == "text").collect();

    let x_labels: Vec<String> = texts.iter().filter(|t| t.get_attr("dy").is_none()).map(|t| t.text_content()).collect();
    let y_labels: Vec<String> = texts.iter().filter(|t| t.get_attr("dy").is_some()).map(|t| t.text_content()).collect();

    let want_x: Vec<String> = (0..=11).map(|k| (2 * k).to_string()).collect();
    assert_eq!(x_labels, want_x);
    assert_eq!(y_labels, ["0.4", "0.6", "0.8", "1", "1.2", "1.4", "1.6", "1.8", "2"]);

    // x labels sit in the gutter under the baseline at y = 410.
    assert!(texts.iter().filter(|t| t.get_attr("dy").is_none()).all(|t| attr(t, "y") == "428.75"));
}

#[test]
fn full_chart_gradient_stops() {
    let doc = document(&full_chart());
    let defs = doc.elements().find(|e| e.name() == "defs").expect("defs");
    let stops: Vec<(String, Vec<(String, String)>)> = defs
        .elements()
        .map(|g| {
            let s = g
                .elements()
                .map(|stop| (attr(stop, "offset").to_string(), attr(stop, "stop-color").to_string()))
                .collect();
            (attr(g, "id").to_string(), s)
        })
        .collect();

    let pair = |a: &str, b: &str| vec![("0%".to_string(), a.to_string()), ("100%".to_string(), b.to_string())];
    assert_eq!(
        stops,
        vec![
            ("line-grad-0".to_string(), pair("#3333CC", "#000066")),
            ("line-grad-1".to_string(), pair("#CC33CC", "#663366")),
        ]
    );
}

#[test]
fn full_chart_legend_stacks_entries() {
    let doc = document(&full_chart());
    let swatches: Vec<&Element> = doc.elements().filter(|e| e.name() == "rect").collect();
    assert_eq!(swatches.len(), 2);
    // Legend column starts at (710, 60); entries are inset by half a margin and 30px apart.
    for (i, (rect, y)) in swatches.iter().zip(["70", "100"]).enumerate() {
        assert_eq!(attr(rect, "x"), "720");
        assert_eq!(attr(rect, "y"), y);
        assert_eq!(attr(rect, "width"), "20");
        assert_eq!(attr(rect, "fill"), format!("url(#line-grad-{i})"));
    }

    let labels: Vec<(&str, &str, String)> = doc
        .elements()
        .filter(|e| e.name() == "text" && e.get_attr("x") == Some("750"))
        .map(|e| (attr(e, "x"), attr(e, "y"), e.text_content()))
        .collect();
    assert_eq!(labels, [("750", "85", "Windows".to_string()), ("750", "115", "Ubuntu".to_string())]);
}

#[test]
fn full_chart_text_blocks() {
    let doc = document(&full_chart());
    let texts: Vec<&Element> = doc.elements().filter(|e| e.name() == "text").collect();
    let find = |content: &str| {
        *texts.iter().find(|t| t.text_content() == content).unwrap_or_else(|| panic!("no text {content:?}"))
    };

    let title = find("Line Graph Test");
    assert_eq!((attr(title, "x"), attr(title, "y"), attr(title, "font-size")), ("410", "50", "24"));

    let x_label = find("Time (seconds)");
    assert_eq!((attr(x_label, "x"), attr(x_label, "y")), ("410", "457.5"));

    let y_label = find("Count");
    assert_eq!((attr(y_label, "x"), attr(y_label, "y")), ("50", "235"));
    assert_eq!(attr(y_label, "transform"), "rotate(270, 50,235)");

    let polygon = doc.elements().find(|e| e.name() == "polygon").expect("area polygon");
    assert_eq!(attr(polygon, "fill"), "url(#line-grad-0)");
    assert!(attr(polygon, "points").ends_with(",410 110,410"));
}
