// src/gui/mod.rs
pub mod app;
pub mod router;
pub mod pages;
pub mod progress;
pub mod components;
pub mod actions;

pub use app::run;
