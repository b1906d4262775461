//! JSON interface for batch processing
//!
//! Requests and responses cross the Python boundary as JSON strings, which
//! keeps per-call conversion overhead flat for large batches.

use crate::summarizer::{process_batch_json, process_request_json};
use pyo3::prelude::*;

/// Summarize a JSON request
///
/// Args:
///     json_input: JSON object `{"text": ..., "config": {...}}`
///
/// Returns:
///     JSON string with `text`, `indices` and `source`
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    Ok(py.allow_threads(|| process_request_json(json_input))?)
}

/// Batch summarize a JSON array of requests
///
/// Args:
///     json_input: JSON array of request objects
///
/// Returns:
///     JSON array of summaries, in input order
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    Ok(py.allow_threads(|| process_batch_json(json_input))?)
}
