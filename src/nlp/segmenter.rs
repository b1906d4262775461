//! Punctuation-based sentence segmentation
//!
//! A boundary is a run of whitespace directly after `.`, `!` or `?`.
//! Abbreviations, quotations and decimal numbers get no special treatment.

use super::tokenizer::Tokenizer;
use crate::types::Sentence;

/// Characters that may end a sentence
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits text into tokenized sentences
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    tokenizer: Tokenizer,
}

impl SentenceSegmenter {
    /// Create a segmenter using the default tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter that tokenizes sentences with `tokenizer`
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Segment text into sentences, each carrying its token set
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        split_spans(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                let sentence_text = &text[start..end];
                Sentence::new(sentence_text, start, end, index)
                    .with_tokens(self.tokenizer.tokenize(sentence_text))
            })
            .collect()
    }
}

/// Segment text with the default tokenizer
pub fn segment(text: &str) -> Vec<Sentence> {
    SentenceSegmenter::new().segment(text)
}

/// Find the trimmed byte spans of all non-empty sentences in `text`
pub fn split_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() && prev.is_some_and(is_terminator) {
            // Swallow the whole whitespace run
            let mut next_start = idx + c.len_utf8();
            while let Some(&(j, ws)) = chars.peek() {
                if !ws.is_whitespace() {
                    break;
                }
                next_start = j + ws.len_utf8();
                chars.next();
            }

            push_trimmed(text, start, idx, &mut spans);
            start = next_start;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    push_trimmed(text, start, text.len(), &mut spans);
    spans
}

fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let segment = &text[start..end];
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (segment.len() - segment.trim_start().len());
    spans.push((offset, offset + trimmed.len()));
}
