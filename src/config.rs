// Configuration for study-aid
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::types::{Result, StudyError};

// Upload limits
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const PDF_YIELD_EVERY: usize = 5;

// Quiz heuristics
pub const MAX_QUESTIONS: usize = 5;
pub const MIN_SENTENCE_CHARS: usize = 30;
pub const MIN_TERM_CHARS: usize = 5;
pub const IMPORTANT_TERM_COUNT: usize = 10;
pub const EXCERPT_CHARS: usize = 100;

// Key-point heuristics
pub const MAX_KEY_POINTS: usize = 10;
pub const MIN_KEY_POINT_WORDS: usize = 5;
pub const IMPORTANT_KEY_POINTS: usize = 4;

pub const CONFIG_ENV: &str = "STUDY_AID_CONFIG";
pub const LOCAL_CONFIG_FILE: &str = "study-aid.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub key_points: KeyPointConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    #[serde(default = "default_yield_every")]
    pub pdf_yield_every: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            pdf_yield_every: default_yield_every(),
        }
    }
}

fn default_max_bytes() -> u64 { MAX_UPLOAD_BYTES }
fn default_yield_every() -> usize { PDF_YIELD_EVERY }

/// Where the correct option ends up after the options are shuffled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectAnswerPolicy {
    /// Follow the correct option through the shuffle.
    #[default]
    Tracked,
    /// Always report index 3, whatever the shuffle did.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
    #[serde(default = "default_min_term_chars")]
    pub min_term_chars: usize,
    #[serde(default = "default_term_count")]
    pub important_terms: usize,
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
    #[serde(default)]
    pub correct_answer: CorrectAnswerPolicy,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            min_sentence_chars: default_min_sentence_chars(),
            min_term_chars: default_min_term_chars(),
            important_terms: default_term_count(),
            excerpt_chars: default_excerpt_chars(),
            correct_answer: CorrectAnswerPolicy::default(),
            seed: None,
        }
    }
}

fn default_max_questions() -> usize { MAX_QUESTIONS }
fn default_min_sentence_chars() -> usize { MIN_SENTENCE_CHARS }
fn default_min_term_chars() -> usize { MIN_TERM_CHARS }
fn default_term_count() -> usize { IMPORTANT_TERM_COUNT }
fn default_excerpt_chars() -> usize { EXCERPT_CHARS }

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KeyPointConfig {
    #[serde(default = "default_max_points")]
    pub max_points: usize,
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    #[serde(default = "default_important_points")]
    pub important_count: usize,
}

impl Default for KeyPointConfig {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
            min_words: default_min_words(),
            important_count: default_important_points(),
        }
    }
}

fn default_max_points() -> usize { MAX_KEY_POINTS }
fn default_min_words() -> usize { MIN_KEY_POINT_WORDS }
fn default_important_points() -> usize { IMPORTANT_KEY_POINTS }

/// The text is written to the program's stdin, so `args` must make it
/// read from there.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_program")]
    pub program: String,
    #[serde(default = "default_speech_args")]
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: default_speech_program(),
            args: default_speech_args(),
        }
    }
}

#[cfg(target_os = "macos")]
fn default_speech_program() -> String { "say".to_string() }
#[cfg(not(target_os = "macos"))]
fn default_speech_program() -> String { "espeak".to_string() }

#[cfg(target_os = "macos")]
fn default_speech_args() -> Vec<String> { vec!["-f".to_string(), "-".to_string()] }
#[cfg(not(target_os = "macos"))]
fn default_speech_args() -> Vec<String> { vec!["--stdin".to_string()] }

impl StudyConfig {
    /// Load from an explicit path, or from the first config file found in
    /// `$STUDY_AID_CONFIG`, `./study-aid.toml`, the user config dir.
    /// Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| StudyError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| StudyError::Config(e.to_string()))
    }

    fn discover() -> Option<PathBuf> {
        let candidates = [
            env::var_os(CONFIG_ENV).map(PathBuf::from),
            Some(PathBuf::from(LOCAL_CONFIG_FILE)),
            dirs::config_dir().map(|dir| dir.join("study-aid").join("config.toml")),
        ];
        candidates.into_iter().flatten().find(|path| path.is_file())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = env::var("STUDY_AID_MAX_UPLOAD_BYTES") {
            self.upload.max_bytes = raw
                .parse()
                .map_err(|_| StudyError::Config(format!("STUDY_AID_MAX_UPLOAD_BYTES: not a number: {}", raw)))?;
        }
        if let Ok(program) = env::var("STUDY_AID_SPEECH_PROGRAM") {
            self.speech.program = program;
        }
        if let Ok(raw) = env::var("STUDY_AID_SEED") {
            let seed = raw
                .parse()
                .map_err(|_| StudyError::Config(format!("STUDY_AID_SEED: not a number: {}", raw)))?;
            self.quiz.seed = Some(seed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let config = StudyConfig::default();
        assert_eq!(config.upload.max_bytes, 5 * 1024 * 1024);
        assert_eq!(config.quiz.max_questions, 5);
        assert_eq!(config.quiz.correct_answer, CorrectAnswerPolicy::Tracked);
        assert_eq!(config.key_points.max_points, 10);
        assert_eq!(config.key_points.important_count, 4);
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_default_speech_reads_stdin() {
        let config = StudyConfig::default();
        assert_eq!(config.speech.program, "espeak");
        assert_eq!(config.speech.args, vec!["--stdin".to_string()]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StudyConfig::from_toml(
            r#"
            [quiz]
            correct_answer = "legacy"
            seed = 42

            [speech]
            program = "spd-say"
            "#,
        )
        .unwrap();

        assert_eq!(config.quiz.correct_answer, CorrectAnswerPolicy::Legacy);
        assert_eq!(config.quiz.seed, Some(42));
        assert_eq!(config.quiz.excerpt_chars, EXCERPT_CHARS);
        assert_eq!(config.speech.program, "spd-say");
        assert_eq!(config.upload, UploadConfig::default());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = StudyConfig::from_toml("[quiz]\nmax_questions = \"many\"").unwrap_err();
        assert!(matches!(err, StudyError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[key_points]\nmax_points = 3").unwrap();

        let config = StudyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.key_points.max_points, 3);
        assert_eq!(config.key_points.min_words, MIN_KEY_POINT_WORDS);
    }
}
