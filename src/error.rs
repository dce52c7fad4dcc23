#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Malformed shape: {0}")]
    MalformedShape(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    /// True for the two load failures: the document could not be read or
    /// decoded, or a card field has the wrong shape.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::MalformedShape(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
