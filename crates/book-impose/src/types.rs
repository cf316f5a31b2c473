use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
    #[error("Page {index} is out of range (source has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },
    #[error("Page {index} has unusable width {width}")]
    InvalidPageGeometry { index: usize, width: f32 },
    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionStatistics {
    /// Source pages left after the page offset
    pub source_pages: usize,
    /// Number of folded signatures
    pub signatures: usize,
    /// Logical page slots in each signature
    pub pages_per_signature: usize,
    /// Physical sheets of paper (each printed on both sides)
    pub paper_sheets: usize,
    /// Output pages (one per printed side)
    pub output_pages: usize,
    /// Number of blank slots added to fill the last signature
    pub blank_pages_added: usize,
}
