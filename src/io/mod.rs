//! Input/output helpers.
//!
//! - ladder JSON read/write (`ladder`)
//! - milestone CSV export (`export`)

pub mod export;
pub mod ladder;

pub use export::*;
pub use ladder::*;
