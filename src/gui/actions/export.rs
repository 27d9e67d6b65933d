// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Write both summaries to the output directory.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_dir(&app.out_path_text);
        logf!(
            "Export: Out dir set → {}",
            app.state.options.export.out_dir().display()
        );
        app.out_path_dirty = false;
    }

    if app.summaries.values().all(|ds| ds.is_empty()) {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    let mut written = 0usize;
    let mut last = None;

    for (&kind, ds) in &app.summaries {
        if ds.is_empty() {
            continue;
        }
        match file::write_export(export, kind, ds) {
            Ok(path) => {
                logf!("Export: OK {:?} → {}", kind, path.display());
                written += 1;
                last = Some(path);
            }
            Err(e) => {
                loge!("Export: Error {:?}: {}", kind, e);
                app.status(format!("Export error: {e}"));
                return;
            }
        }
    }

    match last {
        Some(p) => app.status(format!("Exported {} file(s). Last: {}", written, p.display())),
        None => app.status("Nothing to export"),
    }
}
