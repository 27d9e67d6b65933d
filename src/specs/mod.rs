// src/specs/mod.rs
//! Page-specific extraction specs.
//!
//! Each spec focuses on a single report page and encodes *where the ground
//! truth lives in the HTML* and *how to extract it robustly*:
//!
//! - `summary` — the job composition from `composition-entry` blocks on the
//!   all-encounters summary page.
//! - `metrics` — the per-player stat table (`main-table-0`) on the damage
//!   done / healing done tabs, shaped into a canonical column order.
//!
//! Specs are pure HTML → rows. Fetching, retrying, composition checking and
//! persistence live with the scrape driver and `store`; specs stay testable
//! offline against captured or synthetic documents.
//!
//! Conventions: case-insensitive tag detection, local scanning within known
//! blocks, stable column shapes per page (documented in each spec).
pub mod metrics;
pub mod summary;
