//! CLI library components for the OED validator.

pub mod logging;
pub mod report;
