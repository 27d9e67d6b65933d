// src/gui/router.rs
use crate::config::options::MetricKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::damage::PAGE,
    &pages::healing::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: MetricKind) -> &'static dyn Page {
    match kind {
        DamageDone => &pages::damage::PAGE,
        HealingDone => &pages::healing::PAGE,
    }
}
