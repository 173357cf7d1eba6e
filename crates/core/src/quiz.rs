//! Per-question answer and reveal state for the comprehension quiz.
//!
//! Multiple-choice questions answer and reveal in one step. Free-text
//! questions are typed freely and revealed by an explicit submit. Reveal is
//! monotonic: once a question is revealed its answer is locked.

use std::collections::{HashMap, HashSet};

use crate::model::{Question, QuestionKind};

/// Grading of a revealed question. Always derived from the stored answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizGrader {
    answers: HashMap<usize, String>,
    revealed: HashSet<usize>,
}

impl QuizGrader {
    /// Pick an option of a multiple-choice question; this also reveals it.
    ///
    /// Ignored (returns `false`) for free-text questions, for options the
    /// question does not offer, and once the question is revealed.
    pub fn select_option(&mut self, index: usize, question: &Question, option: &str) -> bool {
        if question.kind() != QuestionKind::MultipleChoice || self.is_revealed(index) {
            return false;
        }
        if !question.options.iter().any(|candidate| candidate == option) {
            return false;
        }
        self.answers.insert(index, option.to_string());
        self.revealed.insert(index);
        true
    }

    /// Replace the typed answer of a free-text question.
    pub fn set_answer(&mut self, index: usize, question: &Question, text: &str) -> bool {
        if question.kind() != QuestionKind::FreeText || self.is_revealed(index) {
            return false;
        }
        self.answers.insert(index, text.to_string());
        true
    }

    /// Reveal a free-text question. Requires a non-empty typed answer.
    pub fn submit(&mut self, index: usize, question: &Question) -> bool {
        if question.kind() != QuestionKind::FreeText || self.is_revealed(index) {
            return false;
        }
        if self.answer(index).is_none_or(str::is_empty) {
            return false;
        }
        self.revealed.insert(index)
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Correctness of a revealed question; `None` until it is revealed.
    #[must_use]
    pub fn feedback(&self, index: usize, question: &Question) -> Option<Feedback> {
        if !self.is_revealed(index) {
            return None;
        }
        let answer = self.answer(index)?;
        let correct = match question.kind() {
            QuestionKind::MultipleChoice => answer == question.correct_answer,
            QuestionKind::FreeText => {
                normalize_answer(answer) == normalize_answer(&question.correct_answer)
            }
        };
        Some(if correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        })
    }
}

/// Lower-cased and trimmed; free-text grading compares these.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple_choice() -> Question {
        Question {
            question: "Capital of France?".into(),
            question_type: "multiple_choice".into(),
            correct_answer: "Paris".into(),
            options: vec!["Paris".into(), "Lyon".into(), "Nice".into()],
            explanation: "Paris is the capital.".into(),
        }
    }

    fn free_text() -> Question {
        Question {
            question: "Did she agree?".into(),
            question_type: "short_answer".into(),
            correct_answer: "yes".into(),
            options: Vec::new(),
            explanation: "She said si.".into(),
        }
    }

    #[test]
    fn selecting_an_option_answers_and_reveals() {
        let question = multiple_choice();
        let mut quiz = QuizGrader::default();

        assert!(quiz.select_option(0, &question, "Paris"));
        assert!(quiz.is_revealed(0));
        assert_eq!(quiz.feedback(0, &question), Some(Feedback::Correct));
    }

    #[test]
    fn selection_after_reveal_is_a_no_op() {
        let question = multiple_choice();
        let mut quiz = QuizGrader::default();
        quiz.select_option(0, &question, "Lyon");
        let before = quiz.clone();

        assert!(!quiz.select_option(0, &question, "Paris"));
        assert_eq!(quiz, before);
        assert_eq!(quiz.feedback(0, &question), Some(Feedback::Incorrect));
    }

    #[test]
    fn multiple_choice_match_is_exact() {
        let mut question = multiple_choice();
        question.options.push("paris".into());
        let mut quiz = QuizGrader::default();
        quiz.select_option(0, &question, "paris");
        assert_eq!(quiz.feedback(0, &question), Some(Feedback::Incorrect));
    }

    #[test]
    fn unknown_options_and_wrong_kinds_are_ignored() {
        let mut quiz = QuizGrader::default();
        assert!(!quiz.select_option(0, &multiple_choice(), "Berlin"));
        assert!(!quiz.select_option(1, &free_text(), "yes"));
        assert!(!quiz.set_answer(0, &multiple_choice(), "Paris"));
        assert_eq!(quiz, QuizGrader::default());
    }

    #[test]
    fn free_text_is_graded_leniently_after_submit() {
        let question = free_text();
        let mut quiz = QuizGrader::default();

        assert!(quiz.set_answer(1, &question, "  Yes "));
        assert_eq!(quiz.feedback(1, &question), None);
        assert!(quiz.submit(1, &question));
        assert_eq!(quiz.feedback(1, &question), Some(Feedback::Correct));
    }

    #[test]
    fn submit_requires_a_typed_answer() {
        let question = free_text();
        let mut quiz = QuizGrader::default();

        assert!(!quiz.submit(0, &question));
        quiz.set_answer(0, &question, "");
        assert!(!quiz.submit(0, &question));
        assert!(!quiz.is_revealed(0));
    }

    #[test]
    fn revealed_free_text_is_locked() {
        let question = free_text();
        let mut quiz = QuizGrader::default();
        quiz.set_answer(0, &question, "no");
        quiz.submit(0, &question);

        assert!(!quiz.set_answer(0, &question, "yes"));
        assert!(!quiz.submit(0, &question));
        assert_eq!(quiz.answer(0), Some("no"));
        assert_eq!(quiz.feedback(0, &question), Some(Feedback::Incorrect));
    }

    #[test]
    fn questions_are_graded_independently() {
        let mc = multiple_choice();
        let ft = free_text();
        let mut quiz = QuizGrader::default();
        quiz.select_option(0, &mc, "Paris");
        quiz.set_answer(1, &ft, "maybe");
        quiz.submit(1, &ft);

        assert_eq!(quiz.feedback(0, &mc), Some(Feedback::Correct));
        assert_eq!(quiz.feedback(1, &ft), Some(Feedback::Incorrect));
        assert_eq!(quiz.revealed_count(), 2);
    }
}
