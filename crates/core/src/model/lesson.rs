use serde::{Deserialize, Serialize};

/// Lesson plan produced by the processing service for one video.
///
/// Field names match the wire format of `POST /llm/process-video`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub detected_language: String,
    pub proficiency_level: String,
    pub summary: String,
    pub vocabulary_words: Vec<VocabWord>,
    pub sentence_structures: Vec<SentenceStructure>,
    pub learning_objectives: Vec<String>,
    pub comprehension_questions: Vec<Question>,
}

impl LessonPlan {
    #[must_use]
    pub fn vocab(&self, index: usize) -> Option<&VocabWord> {
        self.vocabulary_words.get(index)
    }

    #[must_use]
    pub fn structure(&self, index: usize) -> Option<&SentenceStructure> {
        self.sentence_structures.get(index)
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.comprehension_questions.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabWord {
    pub word: String,
    pub translation: String,
    pub definition: String,
    pub example_sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceStructure {
    pub structure_name: String,
    pub explanation: String,
    pub example_from_text: String,
    pub practice_template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub question_type: String,
    pub correct_answer: String,
    /// Empty for free-text questions.
    #[serde(default)]
    pub options: Vec<String>,
    pub explanation: String,
}

/// How a question is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice,
    FreeText,
}

impl Question {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        if self.options.is_empty() {
            QuestionKind::FreeText
        } else {
            QuestionKind::MultipleChoice
        }
    }

    /// `question_type` with its first underscore shown as a space
    /// (`"multiple_choice"` becomes `"multiple choice"`).
    #[must_use]
    pub fn type_label(&self) -> String {
        self.question_type.replacen('_', " ", 1)
    }
}

/// Success value of the lesson fetch: transcript plus lesson plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub transcript: String,
    pub lesson_plan: LessonPlan,
}
