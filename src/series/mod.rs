//! The core of the tool: turning a sparse, irregular rate series into a
//! contiguous daily table.
//!
//! - year extraction + buffer-rate selection (`extract`)
//! - gap filling / forward carry (`fill`)

pub mod extract;
pub mod fill;

pub use extract::*;
pub use fill::*;
