// src/gui/components/mod.rs
pub mod export_bar;
pub mod form_panel;
pub mod notice;
pub mod records_table;
