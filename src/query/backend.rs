use crate::config::SearchConfig;
use crate::query::worker::QueryError;
use crate::search::Document;

/// Something that can answer a query with documents
///
/// Implementations run on the query worker thread.
pub trait SearchBackend: Send {
    fn search(&self, query: &str) -> Result<Vec<Document>, QueryError>;
}

/// In-memory backend over a loaded document corpus
///
/// A document matches when every whitespace-separated query term occurs,
/// case-insensitively, in at least one of the configured fields. Results keep
/// corpus order. A blank query matches everything.
pub struct DocumentIndex {
    documents: Vec<Document>,
    /// Lowercased searchable text per document, same order as `documents`
    haystacks: Vec<String>,
    max_results: usize,
}

impl DocumentIndex {
    pub fn new(documents: Vec<Document>, config: &SearchConfig) -> Self {
        let haystacks = documents
            .iter()
            .map(|doc| build_haystack(doc, &config.fields))
            .collect();

        Self {
            documents,
            haystacks,
            max_results: config.max_results,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl SearchBackend for DocumentIndex {
    fn search(&self, query: &str) -> Result<Vec<Document>, QueryError> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        let limit = if self.max_results == 0 {
            usize::MAX
        } else {
            self.max_results
        };

        let documents = self
            .documents
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, haystack)| terms.iter().all(|term| haystack.contains(term.as_str())))
            .map(|(doc, _)| doc.clone())
            .take(limit)
            .collect();

        Ok(documents)
    }
}

fn build_haystack(doc: &Document, fields: &[String]) -> String {
    fields
        .iter()
        .filter_map(|field| doc.field(field))
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
