// src/gui/pages/mod.rs
use eframe::egui::Color32;

use crate::config::options::MetricKind;

pub mod damage;
pub mod healing;

// Parse percentile bands, matched to the site's rank colors.
const PARSE_GREY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
const PARSE_GREEN: Color32 = Color32::from_rgb(0x1b, 0xb6, 0x07);
const PARSE_BLUE: Color32 = Color32::from_rgb(0x03, 0x5f, 0xb9);
const PARSE_PURPLE: Color32 = Color32::from_rgb(0x82, 0x2d, 0xbc);
const PARSE_ORANGE: Color32 = Color32::from_rgb(0xff, 0x80, 0x00);
const PARSE_PINK: Color32 = Color32::from_rgb(0xdb, 0x7e, 0xa7);
const PARSE_GOLD: Color32 = Color32::from_rgb(0xb2, 0x9f, 0x65);

pub fn parse_color(percentile: f64) -> Color32 {
    if percentile >= 100.0 { PARSE_GOLD }
    else if percentile >= 99.0 { PARSE_PINK }
    else if percentile >= 95.0 { PARSE_ORANGE }
    else if percentile >= 75.0 { PARSE_PURPLE }
    else if percentile >= 50.0 { PARSE_BLUE }
    else if percentile >= 25.0 { PARSE_GREEN }
    else { PARSE_GREY }
}

/// One summary tab. Column hints drive alignment, widths, the painted
/// value bars and the parse coloring in the shared table component.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> MetricKind;

    /// Fallback headers before any data exists.
    fn default_headers(&self) -> &'static [&'static str];

    fn preferred_column_widths(&self) -> &'static [usize];

    /// Columns that hold text; everything else centers as numeric.
    fn non_numeric_columns(&self) -> &'static [usize] { &[1] }

    /// Columns that get a value bar painted behind the cell.
    fn bar_columns(&self) -> &'static [usize];

    fn bar_color(&self) -> Color32;

    /// Per-cell text color. Both pages color the parse column by band.
    fn cell_color(&self, col: usize, cell: &str) -> Option<Color32> {
        if col == 0 {
            crate::core::sanitize::parse_number(cell).map(parse_color)
        } else {
            None
        }
    }
}
