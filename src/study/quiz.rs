// Heuristic multiple-choice quiz generation
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::config::{CorrectAnswerPolicy, QuizConfig};
use super::sentences::split_for_quiz;
use super::terms::important_terms;

pub const OPTION_COUNT: usize = 4;
// Position of the sentence excerpt before shuffling
const EXCERPT_SLOT: usize = OPTION_COUNT - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Comprehension,
    TermDefinition,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Comprehension => write!(f, "comprehension"),
            QuestionKind::TermDefinition => write!(f, "term-definition"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub source: String,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

pub struct QuizGenerator {
    config: QuizConfig,
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}

impl QuizGenerator {
    pub fn new(config: QuizConfig) -> Self {
        Self { config }
    }

    /// Sentences long enough to ask about, in document order.
    pub fn candidate_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_for_quiz(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| s.chars().count() > self.config.min_sentence_chars)
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<QuizQuestion> {
        let sentences = self.candidate_sentences(text);
        let terms = important_terms(text, self.config.min_term_chars, self.config.important_terms);

        tracing::debug!(
            "Quiz input: {} candidate sentences, {} important terms",
            sentences.len(),
            terms.len()
        );

        let questions: Vec<QuizQuestion> = sentences
            .into_iter()
            .take(self.config.max_questions)
            .enumerate()
            .map(|(index, sentence)| self.build_question(index, sentence, &terms, rng))
            .collect();

        tracing::info!("Generated {} quiz questions", questions.len());
        questions
    }

    fn build_question<R: Rng + ?Sized>(
        &self,
        index: usize,
        sentence: &str,
        terms: &[String],
        rng: &mut R,
    ) -> QuizQuestion {
        let wants_comprehension = rng.gen_bool(0.5);
        let excerpt: String = sentence.chars().take(self.config.excerpt_chars).collect();

        let (kind, question, options) = if wants_comprehension && terms.len() >= OPTION_COUNT {
            (
                QuestionKind::Comprehension,
                format!("According to the document, what is {}?", terms[0]),
                [
                    terms[1].clone(),
                    terms[2].clone(),
                    terms[3].clone(),
                    format!("The correct answer would be found in: \"{}...\"", excerpt),
                ],
            )
        } else {
            let term = |i: usize| terms.get(i).cloned().unwrap_or_else(|| format!("Option {}", i));
            (
                QuestionKind::TermDefinition,
                format!(
                    "What does \"{}\" refer to in the document?",
                    terms.first().map(String::as_str).unwrap_or("this concept")
                ),
                [
                    term(1),
                    term(2),
                    term(3),
                    format!("It refers to: \"{}...\"", excerpt),
                ],
            )
        };

        let (options, correct_answer) = self.shuffle_options(options, rng);

        QuizQuestion {
            id: format!("q{}", index),
            kind,
            question,
            options,
            correct_answer,
            source: sentence.to_string(),
        }
    }

    fn shuffle_options<R: Rng + ?Sized>(
        &self,
        options: [String; OPTION_COUNT],
        rng: &mut R,
    ) -> (Vec<String>, usize) {
        let mut order: Vec<usize> = (0..OPTION_COUNT).collect();
        order.shuffle(rng);

        let correct_answer = match self.config.correct_answer {
            CorrectAnswerPolicy::Tracked => order
                .iter()
                .position(|&slot| slot == EXCERPT_SLOT)
                .unwrap_or(EXCERPT_SLOT),
            CorrectAnswerPolicy::Legacy => EXCERPT_SLOT,
        };

        let shuffled = order.into_iter().map(|slot| options[slot].clone()).collect();
        (shuffled, correct_answer)
    }
}
