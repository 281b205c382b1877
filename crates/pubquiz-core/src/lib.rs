//! pubquiz-core — deterministic daily quiz selection and fuzzy scoring.
//!
//! This crate defines the data model, dataset loader, daily sampler, and
//! answer scorer that the pubquiz CLI builds on.

pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod sampler;
pub mod scorer;
