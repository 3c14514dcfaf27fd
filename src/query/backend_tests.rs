use super::*;
use proptest::prelude::*;
use serde_json::json;

fn corpus() -> Vec<Document> {
    vec![
        Document::new("https://example.com/cats")
            .with_title("Cats")
            .with_text("Cats sleep most of the day."),
        Document::new("https://example.com/dogs")
            .with_title("Dogs")
            .with_text("Dogs and cats rarely agree."),
        Document::new("https://example.com/birds")
            .with_title("Birds")
            .with_text("Birds sing at dawn."),
    ]
}

fn links(documents: &[Document]) -> Vec<&str> {
    documents.iter().map(|d| d.link.as_str()).collect()
}

#[test]
fn test_single_term_matches_in_corpus_order() {
    let index = DocumentIndex::new(corpus(), &SearchConfig::default());
    let result = index.search("cats").unwrap();

    assert_eq!(
        links(&result),
        vec!["https://example.com/cats", "https://example.com/dogs"]
    );
}

#[test]
fn test_matching_is_case_insensitive() {
    let index = DocumentIndex::new(corpus(), &SearchConfig::default());
    let result = index.search("BIRDS").unwrap();

    assert_eq!(links(&result), vec!["https://example.com/birds"]);
}

#[test]
fn test_all_terms_must_match() {
    let index = DocumentIndex::new(corpus(), &SearchConfig::default());
    let result = index.search("dogs cats").unwrap();

    assert_eq!(links(&result), vec!["https://example.com/dogs"]);
}

#[test]
fn test_blank_query_matches_everything() {
    let index = DocumentIndex::new(corpus(), &SearchConfig::default());

    assert_eq!(index.search("").unwrap().len(), 3);
    assert_eq!(index.search("   \t ").unwrap().len(), 3);
}

#[test]
fn test_no_match_returns_empty() {
    let index = DocumentIndex::new(corpus(), &SearchConfig::default());
    assert!(index.search("zebra").unwrap().is_empty());
}

#[test]
fn test_only_configured_fields_are_searched() {
    let config = SearchConfig {
        fields: vec!["title".to_string()],
        max_results: 0,
    };
    let index = DocumentIndex::new(corpus(), &config);

    // "cats" appears in the dogs text, but not in its title
    let result = index.search("cats").unwrap();
    assert_eq!(links(&result), vec!["https://example.com/cats"]);
}

#[test]
fn test_extra_fields_can_be_searched() {
    let mut doc = Document::new("a");
    doc.fields.insert("author".to_string(), json!("Ann Smith"));
    let config = SearchConfig {
        fields: vec!["author".to_string()],
        max_results: 0,
    };
    let index = DocumentIndex::new(vec![doc, Document::new("b")], &config);

    assert_eq!(links(&index.search("smith").unwrap()), vec!["a"]);
}

#[test]
fn test_max_results_truncates() {
    let config = SearchConfig {
        max_results: 2,
        ..SearchConfig::default()
    };
    let index = DocumentIndex::new(corpus(), &config);

    assert_eq!(
        links(&index.search("").unwrap()),
        vec!["https://example.com/cats", "https://example.com/dogs"]
    );
}

#[test]
fn test_len_and_is_empty() {
    let index = DocumentIndex::new(corpus(), &SearchConfig::default());
    assert_eq!(index.len(), 3);
    assert!(!index.is_empty());

    let empty = DocumentIndex::new(Vec::new(), &SearchConfig::default());
    assert!(empty.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Results are always a subsequence of the corpus: nothing reordered, nothing invented
    #[test]
    fn prop_results_are_ordered_subsequence(query in "[a-z ]{0,12}") {
        let corpus = corpus();
        let index = DocumentIndex::new(corpus.clone(), &SearchConfig::default());
        let result = index.search(&query).unwrap();

        let mut positions = result
            .iter()
            .map(|doc| corpus.iter().position(|c| c == doc).unwrap());
        let mut last = None;
        for position in &mut positions {
            if let Some(prev) = last {
                prop_assert!(position > prev);
            }
            last = Some(position);
        }
    }
}
