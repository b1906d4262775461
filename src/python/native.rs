//! Native Python interface
//!
//! Direct Python classes wrapping the summarizers.

use crate::summarizer::{summarize_batch, Summarizer, SummarizerEngine};
use crate::types::{SummarizerConfig, SummarizerKind, Summary};
use pyo3::prelude::*;

/// An extractive summary
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub indices: Vec<usize>,
    #[pyo3(get)]
    pub source: String,
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(sentences={}, source='{}')",
            self.indices.len(),
            self.source
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn __len__(&self) -> usize {
        self.indices.len()
    }
}

impl From<Summary> for PySummary {
    fn from(s: Summary) -> Self {
        Self {
            text: s.text,
            indices: s.indices,
            source: s.source.as_str().to_string(),
        }
    }
}

/// Configuration for summarization
#[pyclass(name = "SummarizerConfig")]
#[derive(Clone)]
pub struct PySummarizerConfig {
    inner: SummarizerConfig,
}

#[pymethods]
impl PySummarizerConfig {
    #[new]
    #[pyo3(signature = (
        sentences_k=3,
        max_iterations=50,
        damping=0.85,
        convergence_threshold=None,
        strategy="textrank",
        parallel=false,
        min_token_length=1
    ))]
    fn new(
        sentences_k: usize,
        max_iterations: usize,
        damping: f64,
        convergence_threshold: Option<f64>,
        strategy: &str,
        parallel: bool,
        min_token_length: usize,
    ) -> PyResult<Self> {
        let config = SummarizerConfig {
            sentences_k,
            max_iterations,
            damping,
            convergence_threshold,
            strategy: strategy.parse::<SummarizerKind>()?,
            parallel,
            min_token_length,
        };

        config.validate()?;

        Ok(Self { inner: config })
    }

    fn __repr__(&self) -> String {
        format!(
            "SummarizerConfig(sentences_k={}, max_iterations={}, damping={}, strategy='{}')",
            self.inner.sentences_k,
            self.inner.max_iterations,
            self.inner.damping,
            self.inner.strategy
        )
    }
}

/// Extractive summarizer
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    config: SummarizerConfig,
    engine: SummarizerEngine,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (config=None, sentences_k=None, strategy=None))]
    fn new(
        config: Option<PySummarizerConfig>,
        sentences_k: Option<usize>,
        strategy: Option<&str>,
    ) -> PyResult<Self> {
        let mut inner_config = config.map(|c| c.inner).unwrap_or_default();

        if let Some(k) = sentences_k {
            inner_config.sentences_k = k;
        }
        if let Some(name) = strategy {
            inner_config.strategy = name.parse::<SummarizerKind>()?;
        }

        Ok(Self {
            engine: SummarizerEngine::from_config(&inner_config),
            config: inner_config,
        })
    }

    /// Summarize one document
    #[pyo3(signature = (text))]
    fn summarize(&self, py: Python<'_>, text: &str) -> PySummary {
        py.allow_threads(|| self.engine.summarize(text)).into()
    }

    /// Summarize many documents in parallel
    #[pyo3(signature = (texts))]
    fn summarize_batch(&self, py: Python<'_>, texts: Vec<String>) -> Vec<PySummary> {
        py.allow_threads(|| summarize_batch(&texts, &self.config))
            .into_iter()
            .map(PySummary::from)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Summarizer(strategy='{}', sentences_k={})",
            self.config.strategy, self.config.sentences_k
        )
    }
}

/// Summarize text down to `sentences_k` sentences
#[pyfunction]
#[pyo3(signature = (text, sentences_k=3, max_iterations=50, damping=0.85))]
pub fn summarize(
    py: Python<'_>,
    text: &str,
    sentences_k: usize,
    max_iterations: usize,
    damping: f64,
) -> PyResult<String> {
    let config = SummarizerConfig::default()
        .with_sentences_k(sentences_k)
        .with_max_iterations(max_iterations)
        .with_damping(damping);
    config.validate()?;

    Ok(py.allow_threads(|| crate::summarize_with_config(text, &config).text))
}
