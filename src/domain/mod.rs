//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the engine configuration (`LadderConfig`, `ControlPoint`)
//! - engine outputs (`Milestone`, `CurvePoint`, `AxisLabel`, `ResolvedScale`)
//! - the saved-ladder file schema (`LadderFile`)

pub mod types;

pub use types::*;
