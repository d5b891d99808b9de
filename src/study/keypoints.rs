// Length-ranked key-point extraction
use serde::{Deserialize, Serialize};
use crate::config::KeyPointConfig;
use super::sentences::{space_tokens, split_on_punctuation};

pub const BULLET: &str = "• ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoint {
    pub id: usize,
    pub point: String,
    pub is_important: bool,
}

pub struct KeyPointExtractor {
    config: KeyPointConfig,
}

impl Default for KeyPointExtractor {
    fn default() -> Self {
        Self::new(KeyPointConfig::default())
    }
}

impl KeyPointExtractor {
    pub fn new(config: KeyPointConfig) -> Self {
        Self { config }
    }

    /// Longest sentences first, by space-separated token count.
    pub fn extract(&self, text: &str) -> Vec<KeyPoint> {
        let mut sentences: Vec<(&str, usize)> = split_on_punctuation(text)
            .into_iter()
            .map(|s| (s, space_tokens(s)))
            .filter(|(_, tokens)| *tokens > self.config.min_words)
            .collect();

        // Stable: equally long sentences stay in document order
        sentences.sort_by(|a, b| b.1.cmp(&a.1));

        let points: Vec<KeyPoint> = sentences
            .into_iter()
            .take(self.config.max_points)
            .enumerate()
            .map(|(id, (sentence, _))| KeyPoint {
                id,
                point: sentence.trim().to_string(),
                is_important: id < self.config.important_count,
            })
            .collect();

        tracing::info!("Extracted {} key points", points.len());
        points
    }
}

/// Bulleted, newline-joined list in display order.
pub fn format_bullets(points: &[KeyPoint]) -> String {
    points
        .iter()
        .map(|kp| format!("{}{}", BULLET, kp.point))
        .collect::<Vec<_>>()
        .join("\n")
}
