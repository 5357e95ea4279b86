//! `fx-rates` library crate.
//!
//! The binary (`fx-rates`) is a thin wrapper around this library so that:
//!
//! - the extract/fill core is testable without spawning processes
//! - XML decode and JSON export stay separate from the date logic
//! - new rate sources can be added as further CLI subcommands

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod series;
