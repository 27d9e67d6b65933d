// src/gui/components/log_panel.rs
//
// The report list: paste URLs, remove entries, see per-report outcomes
// after a run, plus the established group composition.

use eframe::egui::{self, Color32, RichText};

use crate::{gui::app::App, report::Report, scrape::LogOutcome};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Reports");
    ui.add_space(4.0);

    // URL entry; Enter or the button adds it.
    let mut add_clicked = false;
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.url_input)
                .hint_text("Report URL or code")
                .desired_width(190.0),
        );
        let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        add_clicked = ui.button("Add").clicked() || entered;
    });

    if add_clicked && !app.url_input.trim().is_empty() {
        match Report::parse(&app.url_input) {
            Ok(report) => {
                app.add_report(report);
                app.url_input.clear();
            }
            Err(e) => {
                logd!("UI: Rejected report input: {}", e);
                app.status(format!("Invalid report: {}", e));
            }
        }
    }

    ui.add_space(6.0);

    let mut remove: Option<usize> = None;
    egui::ScrollArea::vertical()
        .id_salt("report_list")
        .max_height(ui.available_height() - 120.0)
        .show(ui, |ui| {
            for (i, report) in app.state.options.scrape.reports.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✖").on_hover_text("Remove").clicked() {
                        remove = Some(i);
                    }
                    ui.monospace(report.code());
                    if let Some(outcome) = app.outcomes.get(&report.code()) {
                        outcome_marker(ui, outcome);
                    }
                });
            }
        });
    if let Some(i) = remove {
        app.remove_report(i);
    }

    if !app.state.options.scrape.reports.is_empty() && ui.button("Clear all").clicked() {
        logf!("UI: Report list cleared");
        app.state.options.scrape.reports.clear();
        app.outcomes.clear();
    }

    ui.add_space(8.0);
    ui.separator();

    ui.label(RichText::new("Composition").strong());
    match &app.composition {
        Some(comp) => {
            for job in comp.jobs() {
                ui.label(job);
            }
        }
        None => {
            ui.label(RichText::new("Not established yet").weak());
        }
    }
}

fn outcome_marker(ui: &mut egui::Ui, outcome: &LogOutcome) {
    match outcome {
        LogOutcome::Scraped => {
            ui.label(RichText::new("✔").color(Color32::from_rgb(0x1b, 0xb6, 0x07)));
        }
        LogOutcome::CompMismatch => {
            ui.label(RichText::new("≠").color(Color32::from_rgb(0xff, 0x80, 0x00)))
                .on_hover_text("Different group composition; left out of summaries");
        }
        LogOutcome::Failed(why) => {
            ui.label(RichText::new("✖").color(Color32::from_rgb(0xdc, 0x31, 0x31)))
                .on_hover_text(why);
        }
    }
}
