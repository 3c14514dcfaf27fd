use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocseekError {
    #[error("Invalid documents: {0}")]
    InvalidDocuments(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DocseekError {
    fn from(err: std::io::Error) -> Self {
        DocseekError::Io(err.to_string())
    }
}
