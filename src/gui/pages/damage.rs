// src/gui/pages/damage.rs
use eframe::egui::Color32;

use crate::combine::DAMAGE_SUMMARY_COLUMNS;
use crate::config::options::MetricKind;

pub struct DamagePage;
pub static PAGE: DamagePage = DamagePage;

impl super::Page for DamagePage {
    fn title(&self) -> &'static str { "Damage done" }
    fn kind(&self) -> MetricKind { MetricKind::DamageDone }

    fn default_headers(&self) -> &'static [&'static str] { DAMAGE_SUMMARY_COLUMNS }

    fn preferred_column_widths(&self) -> &'static [usize] {
        // Parse %, Player Name, Amount %, Amount Total, Active %, DPS, rDPS
        &[70, 180, 80, 110, 80, 90, 90]
    }

    fn bar_columns(&self) -> &'static [usize] { &[3, 6] }

    fn bar_color(&self) -> Color32 { Color32::from_rgb(0xf4, 0xd4, 0x4d) }
}
