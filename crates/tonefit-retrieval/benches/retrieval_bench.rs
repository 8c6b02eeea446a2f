use criterion::{criterion_group, criterion_main, Criterion};

use tonefit_core::config::RetrievalConfig;
use tonefit_retrieval::{embed, GuidelineCorpus, SemanticRetriever};

/// 20 categories of 25 guidelines each.
fn build_corpus() -> GuidelineCorpus {
    let mut text = String::new();
    for c in 0..20 {
        text.push_str(&format!("category {c}:\n"));
        for g in 0..25 {
            text.push_str(&format!(
                "- guideline {g} about business value, playful emoji and a click button #{c}\n"
            ));
        }
    }
    GuidelineCorpus::parse(&text)
}

fn bench_embed(c: &mut Criterion) {
    c.bench_function("embed_sentence", |b| {
        b.iter(|| embed("Fun and snappy copy for Meta with a strong CTA! 😀 #launch"));
    });
}

fn bench_search(c: &mut Criterion) {
    let retriever = SemanticRetriever::new(build_corpus(), RetrievalConfig::default());
    c.bench_function("search_500_snippets", |b| {
        b.iter(|| retriever.search("professional tone for LinkedIn platforms", 5));
    });
}

criterion_group!(benches, bench_embed, bench_search);
criterion_main!(benches);
