use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A searchable document
///
/// `link` identifies the document and must be unique within a result set.
/// Fields other than `link`, `title` and `text` are kept as-is in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(alias = "source_url")]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            title: None,
            text: None,
            fields: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Title to display, falling back to the link for untitled documents
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.link,
        }
    }

    /// Look up a field by name as text
    ///
    /// Non-string extra fields are rendered as compact JSON so they remain searchable.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "link" => Some(self.link.clone()),
            "title" => self.title.clone(),
            "text" => self.text.clone(),
            other => self.fields.get(other).map(|value| match value {
                Value::String(s) => s.clone(),
                value => value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
