//! Property tests for the similarity measure and search ordering.

use proptest::prelude::*;

use tonefit_core::config::RetrievalConfig;
use tonefit_retrieval::{cosine_similarity, embed, GuidelineCorpus, SemanticRetriever};

fn vector_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0_f64..50.0, 7)
}

proptest! {
    #[test]
    fn cosine_is_symmetric_and_bounded(a in vector_strategy(), b in vector_strategy()) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&ab), "similarity {}", ab);
    }
}

proptest! {
    #[test]
    fn embedding_is_non_negative_and_deterministic(text in "\\PC{0,80}") {
        let first = embed(&text);
        let second = embed(&text);
        prop_assert_eq!(first, second);
        prop_assert!(first.as_slice().iter().all(|v| *v >= 0.0));
        prop_assert_eq!(first.as_slice().len(), 7);
    }
}

proptest! {
    #[test]
    fn search_is_sorted_and_bounded(
        snippets in prop::collection::vec("[a-z !#]{1,30}", 0..20),
        query in "[a-z !#]{0,30}",
        top_k in 0_usize..10,
    ) {
        let mut text = String::from("cat:\n");
        for s in &snippets {
            text.push_str("- ");
            text.push_str(s);
            text.push('\n');
        }
        let retriever = SemanticRetriever::new(GuidelineCorpus::parse(&text), RetrievalConfig::default());
        let hits = retriever.search(&query, top_k);
        prop_assert!(hits.len() <= top_k);
        prop_assert!(hits.len() <= retriever.corpus().guideline_count());
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
