// Document loading: dispatch an upload to the right text extractor
pub mod docx;
pub mod pdf;
pub mod text;

use std::fmt;
use std::path::Path;
use crate::config::UploadConfig;
use crate::types::{Result, StudyError};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Kind of document we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
    PlainText,
}

impl MediaType {
    /// Resolve from the declared MIME type, falling back to the file name.
    /// The checks run in a fixed order: exact PDF type first, then anything
    /// Word-like or `.docx`, then anything textual or `.txt`.
    pub fn resolve(mime: &str, file_name: &str) -> Result<Self> {
        let mime_lower = mime.to_ascii_lowercase();
        let name_lower = file_name.to_ascii_lowercase();

        if mime_lower == PDF_MIME {
            Ok(MediaType::Pdf)
        } else if mime_lower.contains("word") || name_lower.ends_with(".docx") {
            Ok(MediaType::Docx)
        } else if mime_lower.contains("text") || name_lower.ends_with(".txt") {
            Ok(MediaType::PlainText)
        } else {
            Err(StudyError::UnsupportedFileType(mime.to_string()))
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Pdf => write!(f, "PDF"),
            MediaType::Docx => write!(f, "DOCX"),
            MediaType::PlainText => write!(f, "text"),
        }
    }
}

/// Guess a MIME type from a file extension, the way a browser file picker would.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("docx") => DOCX_MIME,
        Some("txt") | Some("text") | Some("md") => TEXT_MIME,
        _ => UNKNOWN_MIME,
    }
}

/// A file handed to the loader. Bytes are dropped once text is extracted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a document from disk. `mime` overrides the extension-based guess.
    /// No size limit applies here; see [`DocumentLoader::read_path`].
    pub fn from_path(path: &Path, mime: Option<&str>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime.unwrap_or_else(|| guess_mime(path)).to_string();
        Ok(Self::new(name, mime, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Turns uploads into plain text.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    max_bytes: u64,
    pdf_yield_every: usize,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new(&UploadConfig::default())
    }
}

impl DocumentLoader {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            max_bytes: config.max_bytes,
            pdf_yield_every: config.pdf_yield_every,
        }
    }

    fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_bytes {
            return Err(StudyError::FileTooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    fn validate(&self, doc: &UploadedDocument) -> Result<()> {
        self.check_size(doc.size())
    }

    /// Read a file from disk, refusing oversized files before any of it
    /// is read.
    pub fn read_path(&self, path: &Path, mime: Option<&str>) -> Result<UploadedDocument> {
        self.check_size(std::fs::metadata(path)?.len())?;
        UploadedDocument::from_path(path, mime)
    }

    pub async fn load(&self, doc: UploadedDocument) -> Result<String> {
        let media_type = MediaType::resolve(&doc.mime, &doc.name)?;
        self.validate(&doc)?;

        tracing::debug!(
            "Extracting {} from {} ({} bytes)",
            media_type,
            doc.name,
            doc.size()
        );

        let text = match media_type {
            MediaType::Pdf => pdf::extract_text(&doc.bytes, self.pdf_yield_every).await?,
            MediaType::Docx => docx::extract_text(&doc.bytes)?,
            MediaType::PlainText => text::extract_text(&doc.bytes),
        };

        tracing::info!("Extracted {} characters from {}", text.chars().count(), doc.name);
        Ok(text)
    }
}
