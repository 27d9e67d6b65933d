// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    skipped: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, skipped: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        if let Ok(mut s) = self.status.lock() {
            *s = text;
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Scraping {} report(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _index: usize, code: &str) {
        self.done += 1;
        self.set_status(format!("Scraped {} ({}/{})", code, self.done + self.skipped, self.total));
    }
    fn item_skipped(&mut self, _index: usize, code: &str, why: &str) {
        self.skipped += 1;
        self.set_status(format!("Skipped {}: {}", code, why));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Scrape complete"));
        } else {
            self.set_status(format!(
                "Scrape complete ({}/{} scraped, {} skipped)",
                self.done, self.total, self.skipped
            ));
        }
    }
}
