//! Document corpus loading
//!
//! Accepts either a JSON array of documents or newline-delimited JSON
//! (one document per line, blank lines ignored).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::DocseekError;
use crate::search::Document;

/// Load documents from a file
pub fn load_documents(path: &Path) -> Result<Vec<Document>, DocseekError> {
    log::debug!("Loading documents from {:?}", path);
    let file = File::open(path)?;
    load_documents_from_reader(BufReader::new(file))
}

/// Load documents from any reader (stdin, in-memory buffers)
pub fn load_documents_from_reader(mut reader: impl Read) -> Result<Vec<Document>, DocseekError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    let documents = parse_documents(&contents)?;
    warn_on_duplicate_links(&documents);
    log::debug!("Loaded {} documents", documents.len());
    Ok(documents)
}

fn parse_documents(contents: &str) -> Result<Vec<Document>, DocseekError> {
    let trimmed = contents.trim_start();

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| DocseekError::InvalidDocuments(e.to_string()));
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Document>(line).map_err(|e| {
                DocseekError::InvalidDocuments(format!("line {}: {}", index + 1, e))
            })
        })
        .collect()
}

/// Duplicate links break render identity; report them but keep the documents
fn warn_on_duplicate_links(documents: &[Document]) {
    let mut seen = HashSet::new();
    for doc in documents {
        if !seen.insert(doc.link.as_str()) {
            log::warn!("Duplicate document link: {}", doc.link);
        }
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod corpus_tests;
