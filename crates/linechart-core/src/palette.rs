// File: crates/linechart-core/src/palette.rs
// Summary: Named series colors (stroke + gradient end) with index and black fallbacks.

/// Stroke color and gradient end color for one named series color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub stroke: &'static str,
    pub gradient_end: &'static str,
}

impl ColorPair {
    pub const fn new(stroke: &'static str, gradient_end: &'static str) -> Self {
        Self { stroke, gradient_end }
    }
}

/// Color names tried, by series position, when a series names no known color.
/// Positions past the end resolve straight to black.
pub const INDEX_FALLBACK: [&str; 6] = ["blue", "red", "green", "yellow", "purple", "black"];

const BLACK: ColorPair = ColorPair::new("#363636", "#000000");

/// Lookup table from color name to [`ColorPair`].
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    entries: Vec<(&'static str, ColorPair)>,
}

impl Palette {
    pub fn new(name: &'static str, entries: Vec<(&'static str, ColorPair)>) -> Self {
        Self { name, entries }
    }

    /// The three-color table of the first renderer: blue, magenta, black.
    pub fn classic() -> Self {
        Self::new(
            "classic",
            vec![
                ("blue", ColorPair::new("#3333CC", "#000066")),
                ("magenta", ColorPair::new("#CC33CC", "#663366")),
                ("black", BLACK),
            ],
        )
    }

    /// Classic colors plus every name used by the index fallback.
    pub fn standard() -> Self {
        Self::new(
            "standard",
            vec![
                ("blue", ColorPair::new("#3333CC", "#000066")),
                ("red", ColorPair::new("#CC3333", "#660000")),
                ("green", ColorPair::new("#33AA33", "#005500")),
                ("yellow", ColorPair::new("#CCAA00", "#665500")),
                ("purple", ColorPair::new("#7733CC", "#330066")),
                ("magenta", ColorPair::new("#CC33CC", "#663366")),
                ("orange", ColorPair::new("#E07020", "#703000")),
                ("gray", ColorPair::new("#888888", "#444444")),
                ("black", BLACK),
            ],
        )
    }

    pub fn get(&self, name: &str) -> Option<ColorPair> {
        self.entries.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, c)| *c)
    }

    /// Resolve the colors for the series at `index`.
    ///
    /// An explicit, known name wins; otherwise the index fallback name is
    /// looked up; otherwise black.
    pub fn resolve(&self, name: Option<&str>, index: usize) -> ColorPair {
        name.and_then(|n| self.get(n))
            .or_else(|| INDEX_FALLBACK.get(index).and_then(|n| self.get(n)))
            .unwrap_or_else(|| self.get("black").unwrap_or(BLACK))
    }
}

impl Default for Palette {
    fn default() -> Self { Self::standard() }
}

/// Built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::standard(), Palette::classic()]
}

/// Find a palette by its `name`, falling back to the standard palette.
pub fn find(name: &str) -> Palette {
    for p in presets() { if p.name.eq_ignore_ascii_case(name) { return p; } }
    Palette::standard()
}
