// Core types for study-aid

// Error types
#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Failed to process PDF: {0}")]
    Pdf(String),

    #[error("Failed to process DOCX: {0}")]
    Docx(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No question with id {0}")]
    UnknownQuestion(String),

    #[error("Option {index} out of range for question {id} ({count} options)")]
    InvalidOption { id: String, index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, StudyError>;
