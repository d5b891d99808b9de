// study-aid: turn a PDF, DOCX or text file into a quiz, key points and speech
pub mod app;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod speech;
pub mod study;
pub mod types;

pub use app::StudyApp;
pub use config::StudyConfig;
pub use document::{DocumentLoader, MediaType, UploadedDocument};
pub use types::{Result, StudyError};
