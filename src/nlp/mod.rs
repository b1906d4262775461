//! Natural Language Processing components
//!
//! This module provides punctuation-based sentence segmentation and
//! word tokenization.

pub mod segmenter;
pub mod tokenizer;
