//! Colours and labels for chart series.
//!
//! The dashboard's charts share one palette. Series are assigned colours by
//! their position so the same data always gets the same colours.

use serde::Serialize;

/// The chart colours, as CSS colour values referencing the theme's variables.
pub const CHART_PALETTE: [&str; 5] = [
    "hsl(var(--chart-1))",
    "hsl(var(--chart-2))",
    "hsl(var(--chart-3))",
    "hsl(var(--chart-4))",
    "hsl(var(--chart-5))",
];

/// The colour for the series at `index`, cycling through [CHART_PALETTE].
pub fn palette_color(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// How to draw one series of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    /// The key of the series in the chart data, e.g. a lower-cased type.
    pub key: String,
    /// The text shown in legends and tooltips.
    pub label: String,
    /// The CSS colour of the series.
    pub color: &'static str,
}

/// Pairs each series key with a label and a palette colour.
///
/// # Arguments
/// * `keys` - The series keys in display order
/// * `label` - Creates the display label for a key
pub fn series_styles<'a, I, F>(keys: I, label: F) -> Vec<SeriesStyle>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> String,
{
    keys.into_iter()
        .enumerate()
        .map(|(index, key)| SeriesStyle {
            key: key.to_owned(),
            label: label(key),
            color: palette_color(index),
        })
        .collect()
}
