use copypasta::{ClipboardContext, ClipboardProvider};
use crate::study::{format_bullets, KeyPoint};
use crate::types::{Result, StudyError};

pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<()>;
}

/// The system clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| StudyError::Clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        self.ctx
            .set_contents(text)
            .map_err(|e| StudyError::Clipboard(e.to_string()))
    }
}

/// Put the key points on the clipboard as a bulleted list.
/// Returns the copied text.
pub fn copy_key_points(sink: &mut dyn ClipboardSink, points: &[KeyPoint]) -> Result<String> {
    let text = format_bullets(points);
    sink.set_text(text.clone())?;
    tracing::info!("Copied {} key points to clipboard", points.len());
    Ok(text)
}
