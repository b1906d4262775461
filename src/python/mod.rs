//! Python bindings via PyO3
//!
//! This module provides the Python interface for textrank_summarizer.

pub mod json;
pub mod native;

use crate::errors::TextRankError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<TextRankError> for PyErr {
    fn from(err: TextRankError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface classes
    m.add_class::<native::PySummary>()?;
    m.add_class::<native::PySummarizerConfig>()?;
    m.add_class::<native::PySummarizer>()?;
    m.add_function(wrap_pyfunction!(native::summarize, m)?)?;

    // JSON interface functions
    m.add_function(wrap_pyfunction!(json::summarize_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::summarize_batch_json, m)?)?;

    Ok(())
}
