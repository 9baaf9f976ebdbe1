//! Express Entry Comprehensive Ranking System calculator.
//!
//! [`language::convert`] maps raw test results onto the CLB/NCLC scale and
//! [`scoring::score`] turns a candidate profile into a CRS total with an
//! itemized breakdown. Both are pure; the remaining modules are the boundary
//! and runtime plumbing used by the service crate.

pub mod batch;
pub mod config;
pub mod error;
pub mod intake;
pub mod language;
mod numeric;
pub mod scoring;
pub mod telemetry;

pub use language::convert;
pub use scoring::score;
