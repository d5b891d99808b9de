use std::collections::HashMap;
use std::fmt;
use crate::types::{Result, StudyError};
use super::quiz::QuizQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    TryAgain,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => write!(f, "✓ Correct!"),
            Feedback::TryAgain => write!(f, "✗ Try again"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub answered: usize,
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct, {} of {} answered", self.correct, self.answered, self.total)
    }
}

/// A generated quiz plus the option the user last picked for each question.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: HashMap<String, usize>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
        }
    }

    /// Swap in a freshly generated quiz; previous answers no longer apply.
    pub fn replace(&mut self, questions: Vec<QuizQuestion>) {
        self.questions = questions;
        self.answers.clear();
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Result<&QuizQuestion> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| StudyError::UnknownQuestion(id.to_string()))
    }

    /// Record a pick. Picking again overwrites the earlier answer.
    pub fn select(&mut self, id: &str, option: usize) -> Result<Feedback> {
        let question = self.question(id)?;
        if option >= question.options.len() {
            return Err(StudyError::InvalidOption {
                id: id.to_string(),
                index: option,
                count: question.options.len(),
            });
        }
        let feedback = if option == question.correct_answer {
            Feedback::Correct
        } else {
            Feedback::TryAgain
        };
        self.answers.insert(id.to_string(), option);
        Ok(feedback)
    }

    pub fn selected(&self, id: &str) -> Option<usize> {
        self.answers.get(id).copied()
    }

    pub fn feedback(&self, id: &str) -> Option<Feedback> {
        let question = self.question(id).ok()?;
        let picked = self.selected(id)?;
        Some(if picked == question.correct_answer {
            Feedback::Correct
        } else {
            Feedback::TryAgain
        })
    }

    /// Sentence read aloud by "hear answer".
    pub fn answer_announcement(&self, id: &str) -> Result<String> {
        let question = self.question(id)?;
        Ok(format!(
            "The correct answer is: {}",
            question.correct_option().unwrap_or_default()
        ))
    }

    pub fn score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .filter(|q| self.selected(&q.id) == Some(q.correct_answer))
            .count();
        Score {
            answered: self.answers.len(),
            correct,
            total: self.questions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::quiz::QuestionKind;
    use pretty_assertions::assert_eq;

    fn question(id: &str, correct: usize) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            kind: QuestionKind::TermDefinition,
            question: format!("Question {}?", id),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct,
            source: "Some source sentence".to_string(),
        }
    }

    #[test]
    fn test_select_and_feedback() {
        let mut session = QuizSession::new(vec![question("q0", 1), question("q1", 3)]);

        assert_eq!(session.feedback("q0"), None);
        assert_eq!(session.select("q0", 2).unwrap(), Feedback::TryAgain);
        assert_eq!(session.select("q0", 1).unwrap(), Feedback::Correct);
        assert_eq!(session.selected("q0"), Some(1));
        assert_eq!(session.feedback("q0"), Some(Feedback::Correct));

        assert_eq!(session.score(), Score { answered: 1, correct: 1, total: 2 });
    }

    #[test]
    fn test_bad_ids_and_options() {
        let mut session = QuizSession::new(vec![question("q0", 0)]);
        assert!(matches!(session.select("q9", 0), Err(StudyError::UnknownQuestion(_))));
        assert!(matches!(
            session.select("q0", 4),
            Err(StudyError::InvalidOption { index: 4, count: 4, .. })
        ));
        assert_eq!(session.selected("q0"), None);
    }

    #[test]
    fn test_replace_clears_answers() {
        let mut session = QuizSession::new(vec![question("q0", 0)]);
        session.select("q0", 0).unwrap();
        session.replace(vec![question("q0", 2)]);
        assert_eq!(session.selected("q0"), None);
        assert_eq!(session.score(), Score { answered: 0, correct: 0, total: 1 });
    }

    #[test]
    fn test_answer_announcement() {
        let session = QuizSession::new(vec![question("q0", 2)]);
        assert_eq!(session.answer_announcement("q0").unwrap(), "The correct answer is: c");
    }

    #[test]
    fn test_display() {
        assert_eq!(Feedback::Correct.to_string(), "✓ Correct!");
        assert_eq!(Score { answered: 2, correct: 1, total: 5 }.to_string(), "1 correct, 2 of 5 answered");
    }
}
