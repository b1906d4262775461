//! Property-based tests using proptest

use proptest::prelude::*;
use textrank_summarizer::*;

const VOCABULARY: &[&str] = &[
    "solar", "wind", "energy", "grid", "power", "cheap", "clean", "storage", "battery", "price",
    "market", "policy", "the", "a", "is", "of", "cat", "naps", "rain", "city",
];

const TERMINATORS: &[char] = &['.', '!', '?'];

/// A document of well-formed sentences drawn from a small vocabulary
fn document(max_sentences: usize) -> impl Strategy<Value = String> {
    let sentence = (
        prop::collection::vec(prop::sample::select(VOCABULARY), 1..8),
        prop::sample::select(TERMINATORS),
    )
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end));

    prop::collection::vec(sentence, 1..=max_sentences).prop_map(|s| s.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_summarize_is_total(text in ".{0,300}", k in 0usize..6) {
        let summary = summarize(&text, k);
        prop_assert!(summary.len() <= text.len());
    }

    #[test]
    fn test_segments_are_trimmed_source_spans(text in ".{0,300}") {
        for (i, sentence) in nlp::segmenter::segment(&text).iter().enumerate() {
            prop_assert_eq!(sentence.index, i);
            prop_assert!(!sentence.text.is_empty());
            prop_assert_eq!(sentence.text.trim(), sentence.text.as_str());
            prop_assert_eq!(&text[sentence.start..sentence.end], sentence.text.as_str());
        }
    }

    #[test]
    fn test_graph_symmetric_and_bounded(text in document(12)) {
        let sentences = nlp::segmenter::segment(&text);
        let graph = graph::builder::build_graph(&sentences);

        prop_assert!(graph.is_symmetric());
        for i in 0..graph.num_nodes() {
            prop_assert_eq!(graph.weight(i, i), 0.0);
            for j in 0..graph.num_nodes() {
                let w = graph.weight(i, j);
                prop_assert!((0.0..=1.0).contains(&w), "weight {} out of range", w);
            }
        }
    }

    #[test]
    fn test_parallel_graph_matches_sequential(text in document(16)) {
        let sentences = nlp::segmenter::segment(&text);
        prop_assert_eq!(
            graph::builder::build_graph(&sentences),
            graph::builder::build_graph_parallel(&sentences)
        );
    }

    #[test]
    fn test_step_preserves_mass_without_isolated_nodes(
        text in document(10),
        damping in 0.0f64..=1.0
    ) {
        let sentences = nlp::segmenter::segment(&text);
        let graph = graph::builder::build_graph(&sentences);

        let ranker = PowerIterationRanker::new().with_damping(damping);
        let mut scores = PowerIterationRanker::initial_scores(graph.num_nodes());
        for _ in 0..5 {
            scores = ranker.step(&graph, &scores);
            let mass: f64 = scores.iter().sum();
            if graph.isolated_nodes().is_empty() {
                prop_assert!((mass - 1.0).abs() < 1e-9, "mass drifted to {}", mass);
            } else {
                prop_assert!(mass <= 1.0 + 1e-9, "mass grew to {}", mass);
            }
        }
    }

    #[test]
    fn test_summary_order_and_cardinality(text in document(12), k in 1usize..8) {
        let sentences = nlp::segmenter::segment(&text);
        let summary = summarize_with_config(&text, &SummarizerConfig::default().with_sentences_k(k));

        prop_assert_eq!(summary.len(), sentences.len().min(k));
        prop_assert!(summary.indices.windows(2).all(|w| w[0] < w[1]));

        let expected: Vec<&str> = summary
            .indices
            .iter()
            .map(|&i| sentences[i].text.as_str())
            .collect();
        prop_assert_eq!(summary.text, expected.join(" "));
    }

    #[test]
    fn test_small_documents_pass_through(text in document(4), k in 4usize..10) {
        let sentences = nlp::segmenter::segment(&text);
        let joined: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(summarize(&text, k), joined.join(" "));
    }

    #[test]
    fn test_summarize_deterministic(text in document(12), k in 1usize..5) {
        prop_assert_eq!(summarize(&text, k), summarize(&text, k));
    }

    #[test]
    fn test_parallel_summary_matches_sequential(text in document(16), k in 1usize..5) {
        let config = SummarizerConfig::default().with_sentences_k(k);
        prop_assert_eq!(
            summarize_with_config(&text, &config),
            summarize_with_config(&text, &config.clone().with_parallel(true))
        );
    }

    #[test]
    fn test_damping_validation(damping in -2.0f64..3.0) {
        let result = SummarizerConfig::default().with_damping(damping).validate();
        prop_assert_eq!(result.is_ok(), (0.0..=1.0).contains(&damping));
    }
}
