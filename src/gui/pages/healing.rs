// src/gui/pages/healing.rs
use eframe::egui::Color32;

use crate::combine::HEALING_SUMMARY_COLUMNS;
use crate::config::options::MetricKind;

pub struct HealingPage;
pub static PAGE: HealingPage = HealingPage;

impl super::Page for HealingPage {
    fn title(&self) -> &'static str { "Healing done" }
    fn kind(&self) -> MetricKind { MetricKind::HealingDone }

    fn default_headers(&self) -> &'static [&'static str] { HEALING_SUMMARY_COLUMNS }

    fn preferred_column_widths(&self) -> &'static [usize] {
        // Parse %, Player Name, Amount %, Amount Total, Overheal, Active %, HPS, rHPS
        &[70, 180, 80, 110, 80, 80, 90, 90]
    }

    fn bar_columns(&self) -> &'static [usize] { &[3, 7] }

    fn bar_color(&self) -> Color32 { Color32::from_rgb(0x91, 0xdf, 0xd2) }
}
