// Study page state: one document's text and everything derived from it
use std::path::Path;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::config::StudyConfig;
use crate::document::{DocumentLoader, UploadedDocument};
use crate::study::{KeyPoint, KeyPointExtractor, QuizGenerator, QuizSession};
use crate::types::Result;

pub struct StudyApp {
    loader: DocumentLoader,
    quiz: QuizGenerator,
    key_points: KeyPointExtractor,
    rng: StdRng,
    pub document_name: Option<String>,
    pub extracted_text: String,
    pub session: QuizSession,
    pub points: Vec<KeyPoint>,
}

impl StudyApp {
    pub fn new(config: &StudyConfig) -> Self {
        let rng = match config.quiz.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            loader: DocumentLoader::new(&config.upload),
            quiz: QuizGenerator::new(config.quiz.clone()),
            key_points: KeyPointExtractor::new(config.key_points.clone()),
            rng,
            document_name: None,
            extracted_text: String::new(),
            session: QuizSession::default(),
            points: Vec::new(),
        }
    }

    /// Extract a new document and build its quiz.
    ///
    /// Derived state is cleared whether or not extraction succeeds. On
    /// failure the previous text and document name are kept.
    pub async fn load_document(&mut self, doc: UploadedDocument) -> Result<()> {
        self.session.clear();
        self.points.clear();

        let name = doc.name.clone();
        match self.loader.load(doc).await {
            Ok(text) => {
                self.extracted_text = text;
                self.document_name = Some(name);
                self.regenerate_quiz();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Could not load {}: {}", name, e);
                Err(e)
            }
        }
    }

    /// Read a file from disk and load it. A file that cannot be read is a
    /// failed upload too: derived state is cleared, the old text stays.
    pub async fn open_path(&mut self, path: &Path, mime: Option<&str>) -> Result<()> {
        match self.loader.read_path(path, mime) {
            Ok(doc) => self.load_document(doc).await,
            Err(e) => {
                self.session.clear();
                self.points.clear();
                tracing::warn!("Could not read {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    pub fn has_text(&self) -> bool {
        !self.extracted_text.is_empty()
    }

    /// New questions from the current text; answers are reset.
    pub fn regenerate_quiz(&mut self) {
        let questions = self.quiz.generate(&self.extracted_text, &mut self.rng);
        self.session.replace(questions);
    }

    /// No-op without text.
    pub fn generate_key_points(&mut self) -> &[KeyPoint] {
        if self.has_text() {
            self.points = self.key_points.extract(&self.extracted_text);
        }
        &self.points
    }
}
