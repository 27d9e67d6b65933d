// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    runner,
};

/// Kick off the scrape on a worker thread. The fetch sequence takes
/// seconds per report, so the UI thread only polls for the result.
pub fn scrape(app: &mut App) {
    if app.running {
        logd!("Scrape: Clicked while already running, ignoring");
        return;
    }

    let opts = app.state.options.scrape.clone();
    if opts.reports.is_empty() {
        app.status("No reports to scrape");
        return;
    }

    logf!(
        "Scrape: Begin reports={} filter={}",
        opts.reports.len(), opts.filter.label()
    );

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);

        // → This is where the scrape happens ←
        let result = runner::scrape_and_summarize(&opts, Some(&mut prog))
            .map_err(|e| e.to_string());

        // Receiver gone means the app closed mid-run; nothing to do.
        let _ = tx.send(result);
    });

    app.running = true;
    app.scrape_rx = Some(rx);
    app.status("Scraping…");
}
