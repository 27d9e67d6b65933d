// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex, mpsc},
};

use eframe::egui;

use crate::{
    comp::Composition,
    config::{
        options::MetricKind,
        state::AppState,
    },
    core::sanitize::parse_number,
    report::Report,
    runner::PipelineResult,
    scrape::LogOutcome,
    store,
};

use super::{components, pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "FF Logs Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Message from the scrape worker thread. Errors cross as strings.
pub type ScrapeMessage = Result<PipelineResult, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // report list UX
    pub url_input: String,
    pub outcomes: HashMap<String, LogOutcome>,
    pub composition: Option<Composition>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // per-metric summary tables
    pub summaries: HashMap<MetricKind, store::DataSet>,

    // per-metric sort: (column, descending)
    pub sort: HashMap<MetricKind, (usize, bool)>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub scrape_rx: Option<mpsc::Receiver<ScrapeMessage>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        let out_path_text = state.options.export.out_dir().to_string_lossy().into_owned();

        // cached summaries from disk
        let mut summaries: HashMap<MetricKind, store::DataSet> = HashMap::new();
        for p in router::all_pages() {
            let k = p.kind();
            match store::load_summary(k) {
                Ok(ds) if !ds.is_empty() => {
                    logf!("Cache: Loaded {:?} (rows={}, headers={})",
                        k, ds.row_count(), ds.header_count());
                    summaries.insert(k, ds);
                    status = s!("Loaded cached summaries");
                }
                Ok(_) => logd!("Cache: {:?} is empty, skipping", k),
                Err(e) => logd!("Cache: Missing {:?} ({})", k, e),
            }
        }

        Self {
            state,
            url_input: String::new(),
            outcomes: HashMap::new(),
            composition: None,
            out_path_text,
            out_path_dirty: false,
            summaries,
            sort: HashMap::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            scrape_rx: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> MetricKind { router::all_pages()[self.current_index()].kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(self.current_page_kind()) }

    #[inline]
    pub fn current_summary(&self) -> Option<&store::DataSet> {
        self.summaries.get(&self.current_page_kind())
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn add_report(&mut self, report: Report) {
        if self.state.options.scrape.reports.contains(&report) {
            self.status(format!("{} is already listed", report.code()));
            return;
        }
        logf!("UI: Report added: {}", report.code());
        self.state.options.scrape.reports.push(report);
    }

    pub fn remove_report(&mut self, index: usize) {
        if index < self.state.options.scrape.reports.len() {
            let r = self.state.options.scrape.reports.remove(index);
            logf!("UI: Report removed: {}", r.code());
            self.outcomes.remove(&r.code());
        }
    }

    /// Toggle/initialize sorting on a column. Display-only: the cached
    /// summaries keep the canonical order, the table sorts its view.
    pub fn sort_by(&mut self, col: usize) {
        let kind = self.current_page_kind();
        let descending = match self.sort.get(&kind) {
            Some(&(c, desc)) if c == col => !desc,
            // numeric columns start descending, the name column ascending
            _ => !self.current_page().non_numeric_columns().contains(&col),
        };
        self.sort.insert(kind, (col, descending));
        logd!("UI: Sort {:?} by col {} desc={}", kind, col, descending);
    }

    /// Fold a finished worker result into the app.
    fn apply_result(&mut self, result: PipelineResult) {
        let scraped = result.run.scraped_count();
        let total = result.run.outcomes.len();

        self.outcomes = result
            .run
            .outcomes
            .iter()
            .map(|(r, o)| (r.code(), o.clone()))
            .collect();
        self.composition = result.run.composition;

        self.summaries.insert(MetricKind::DamageDone, result.damage);
        self.summaries.insert(MetricKind::HealingDone, result.healing);
        self.sort.clear();

        self.status(format!("Done: {}/{} report(s) scraped", scraped, total));
    }

    fn poll_worker(&mut self, ctx: &egui::Context) {
        let received = match &self.scrape_rx {
            Some(rx) => rx.try_recv(),
            None => return,
        };

        match received {
            Ok(Ok(result)) => {
                self.running = false;
                self.scrape_rx = None;
                self.apply_result(result);
            }
            Ok(Err(msg)) => {
                self.running = false;
                self.scrape_rx = None;
                loge!("Scrape: {}", msg);
                self.status(format!("Error: {}", msg));
            }
            Err(mpsc::TryRecvError::Empty) => {
                // keep the spinner and status label moving
                ctx.request_repaint_after(std::time::Duration::from_millis(100));
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                self.running = false;
                self.scrape_rx = None;
                loge!("Scrape: worker vanished without a result");
                self.status("Error: scrape worker died");
            }
        }
    }
}

/// Sort rows by one column. Numeric when both cells parse, otherwise
/// case-insensitive text.
pub fn sort_rows(rows: &mut [Vec<String>], col: usize, descending: bool) {
    rows.sort_by(|a, b| {
        let av = a.get(col).map(String::as_str).unwrap_or("");
        let bv = b.get(col).map(String::as_str).unwrap_or("");
        let ord = match (parse_number(av), parse_number(bv)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
            _ => av.to_ascii_lowercase().cmp(&bv.to_ascii_lowercase()),
        };
        if descending { ord.reverse() } else { ord }
    });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker(ctx);

        egui::SidePanel::left("reports")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::log_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_buttons::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
