//! Input/output helpers.
//!
//! - ECB CompactData XML decode (`ecb_xml`)
//! - daily rate table JSON export (`export`)

pub mod ecb_xml;
pub mod export;

pub use ecb_xml::*;
pub use export::*;
