// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod file;
pub mod form;
pub mod record;
pub mod store;

pub mod clean;
pub mod cli;
pub mod export;
pub mod gui;
