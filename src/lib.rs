// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod scrape;

pub mod catalog;
pub mod file;
pub mod page;
pub mod progress;
pub mod rater;
pub mod store;
