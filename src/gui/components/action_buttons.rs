// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};
use crate::{
    gui::app::App,
    config::options::{EncounterFilter, ExportFormat},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let options = &mut app.state.options;

        // --- Encounter filter ---
        let prev_filter = options.scrape.filter;
        ui.horizontal(|ui| {
            ui.label("Encounters:");
            ui.selectable_value(&mut options.scrape.filter, EncounterFilter::All, "All");
            ui.selectable_value(&mut options.scrape.filter, EncounterFilter::Kills, "Kills");
            ui.selectable_value(&mut options.scrape.filter, EncounterFilter::Wipes, "Wipes");
        });
        if options.scrape.filter != prev_filter {
            logf!("UI: Encounter filter → {}", options.scrape.filter.label());
        }

        // --- Format + Include headers ---
        let export = &mut options.export;
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // Actions: Copy / Export / Scrape
    use crate::gui::actions;
    ui.horizontal(|ui| {

        // Copy
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        // Export
        if ui.button("Export").clicked() {
            actions::export(app);
        }

        // Scrape
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let can_scrape = !app.running && !app.state.options.scrape.reports.is_empty();
        let button_scrape = ui.add_enabled(
            can_scrape,
            egui::Button::new(
                egui::RichText::new("SCRAPE")
                .color(black)
                .strong())
            .fill(red));

        if button_scrape.clicked() {
            actions::scrape(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status.lock().map(|s| s.clone()).unwrap_or_default();
        ui.label(status);
    });
}
