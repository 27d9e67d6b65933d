// src/gui/components/mod.rs
pub mod action_buttons;
pub mod data_table;
pub mod log_panel;
pub mod tabs;
