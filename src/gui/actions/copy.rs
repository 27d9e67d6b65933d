// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

/// Copy the active tab's summary to the clipboard, honoring the export
/// format and headers toggle.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let Some(ds) = app.current_summary() else {
            app.status("Nothing to copy (no summary yet)");
            logd!("Copy: Clicked, but there's no summary");
            return;
        };
        if ds.is_empty() {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but the summary is empty");
            return;
        }

        let export = &app.state.options.export;
        logf!(
            "Copy: page={:?}, rows={}, headers={}",
            app.current_page_kind(), ds.row_count(), ds.header_count()
        );
        csv::to_export_string(&ds.headers, &ds.rows, export.include_headers, export.format.delim())
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
