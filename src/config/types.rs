// Configuration type definitions

use serde::Deserialize;

/// Preview configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreviewConfig {
    /// Number of body text lines shown under each document title
    #[serde(default = "default_snippet_lines")]
    pub snippet_lines: usize,
    #[serde(default = "default_show_link")]
    pub show_link: bool,
}

fn default_snippet_lines() -> usize {
    2
}

fn default_show_link() -> bool {
    true
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            snippet_lines: default_snippet_lines(),
            show_link: default_show_link(),
        }
    }
}

/// Search configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Document fields that query terms are matched against
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    /// Upper bound on returned documents (0 = unlimited)
    #[serde(default)]
    pub max_results: usize,
}

fn default_fields() -> Vec<String> {
    vec!["title".to_string(), "text".to_string(), "link".to_string()]
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            fields: default_fields(),
            max_results: 0,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub search: SearchConfig,
}
