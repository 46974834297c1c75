//! Python FFI boundary (feature `pyo3`).
//!
//! Keeps the surface minimal: one pyclass wrapping the engine, with JSON for
//! bulk data in and dicts for structured results out.

pub mod engine;
pub mod types;
