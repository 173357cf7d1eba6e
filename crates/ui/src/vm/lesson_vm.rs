use lingua_core::model::{
    EnrichmentKey, EnrichmentResult, ProcessingResult, Question, QuestionKind, SessionId,
    VideoRef,
};
use lingua_core::{EnrichmentStatus, Feedback, FetchStatus, LessonAction, LessonTab, SessionState};

use crate::vm::markdown_to_html;

pub const LOADING_MESSAGE: &str = "Processing video and generating lesson plan...";
pub const ENRICHMENT_LOADING_MESSAGE: &str = "Loading more examples...";

/// Everything the lesson screen renders, derived from one session snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonPageVm {
    pub session_id: Option<SessionId>,
    pub title: String,
    /// Player source: the remote URL or the local path.
    pub video_src: String,
    pub body: LessonBodyVm,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LessonBodyVm {
    Loading,
    Failed { message: String },
    Ready(LessonContentVm),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonContentVm {
    pub language_badge: String,
    pub level_badge: String,
    pub tabs: Vec<TabVm>,
    pub pane: PaneVm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabVm {
    pub tab: LessonTab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaneVm {
    Transcript(TranscriptVm),
    Vocabulary(Vec<VocabCardVm>),
    Grammar(Vec<GrammarCardVm>),
    Quiz(Vec<QuizCardVm>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptVm {
    pub transcript: String,
    pub summary: String,
    pub objectives: Vec<String>,
}

/// State of the "more examples" button on a vocabulary or grammar card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrichmentAffordance {
    Available,
    Loading,
    Done,
}

impl EnrichmentAffordance {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Available => "ℹ️",
            Self::Loading => "⏳",
            Self::Done => "✓",
        }
    }

    #[must_use]
    pub fn enabled(self) -> bool {
        matches!(self, Self::Available)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichmentVm {
    pub description_html: String,
    pub examples: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabCardVm {
    pub key: EnrichmentKey,
    pub word: String,
    pub translation: String,
    pub definition: String,
    pub example_sentence: String,
    pub affordance: EnrichmentAffordance,
    /// Examples are markdown, rendered to sanitized HTML.
    pub extra: Option<EnrichmentVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarCardVm {
    pub key: EnrichmentKey,
    pub structure_name: String,
    pub explanation: String,
    pub example_from_text: String,
    pub practice_template: String,
    pub affordance: EnrichmentAffordance,
    /// Examples are plain sentences.
    pub extra: Option<EnrichmentVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "quiz-option",
            Self::Selected => "quiz-option selected-option",
            Self::Correct => "quiz-option correct-option",
            Self::Incorrect => "quiz-option incorrect-option",
        }
    }

    #[must_use]
    pub fn mark(self) -> &'static str {
        match self {
            Self::Correct => " ✓",
            Self::Incorrect => " ✗",
            Self::Idle | Self::Selected => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizInputVm {
    Options { options: Vec<OptionVm>, locked: bool },
    FreeText { value: String, locked: bool, can_submit: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub text: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "feedback-correct"
        } else {
            "feedback-incorrect"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealVm {
    /// Shown for free-text questions only.
    pub correct_answer: Option<String>,
    pub feedback: Option<FeedbackVm>,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub index: usize,
    pub number: usize,
    pub question: String,
    pub type_label: String,
    pub input: QuizInputVm,
    pub reveal: Option<RevealVm>,
}

/// Something the user did on the lesson screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    SelectTab(LessonTab),
    SelectOption { question: usize, option: String },
    SetAnswer { question: usize, text: String },
    SubmitAnswer { question: usize },
    MoreExamples(EnrichmentKey),
    Retry,
    Back,
}

impl LessonIntent {
    /// The session action for this intent. `None` for navigation intents and
    /// for enrichment of items the session's lesson does not contain.
    #[must_use]
    pub fn to_action(&self, session: &SessionState) -> Option<LessonAction> {
        match self {
            Self::SelectTab(tab) => Some(LessonAction::SelectTab(*tab)),
            Self::SelectOption { question, option } => Some(LessonAction::SelectOption {
                question: *question,
                option: option.clone(),
            }),
            Self::SetAnswer { question, text } => Some(LessonAction::SetAnswer {
                question: *question,
                text: text.clone(),
            }),
            Self::SubmitAnswer { question } => Some(LessonAction::SubmitAnswer {
                question: *question,
            }),
            Self::MoreExamples(key) => session
                .lesson_plan()
                .and_then(|plan| LessonAction::request_examples(plan, *key)),
            Self::Retry | Self::Back => None,
        }
    }
}

#[must_use]
pub fn map_lesson_page(video: &VideoRef, session: Option<&SessionState>) -> LessonPageVm {
    let title = video.title().to_string();
    let video_src = video.source().to_string();
    let Some(session) = session else {
        return LessonPageVm {
            session_id: None,
            title,
            video_src,
            body: LessonBodyVm::Loading,
        };
    };

    let body = match (session.fetch_status(), session.result()) {
        (FetchStatus::Failed { message, .. }, _) => LessonBodyVm::Failed {
            message: message.clone(),
        },
        (FetchStatus::Ready, Some(result)) => LessonBodyVm::Ready(map_content(session, result)),
        _ => LessonBodyVm::Loading,
    };

    LessonPageVm {
        session_id: Some(session.id()),
        title,
        video_src,
        body,
    }
}

fn map_content(session: &SessionState, result: &ProcessingResult) -> LessonContentVm {
    let active = session.active_tab();
    let tabs = LessonTab::ALL
        .iter()
        .map(|tab| TabVm {
            tab: *tab,
            label: tab.label(),
            active: *tab == active,
        })
        .collect();

    let plan = &result.lesson_plan;
    let pane = match active {
        LessonTab::Transcript => PaneVm::Transcript(TranscriptVm {
            transcript: result.transcript.clone(),
            summary: plan.summary.clone(),
            objectives: plan.learning_objectives.clone(),
        }),
        LessonTab::Vocabulary => PaneVm::Vocabulary(map_vocab_cards(session)),
        LessonTab::Grammar => PaneVm::Grammar(map_grammar_cards(session)),
        LessonTab::Quiz => PaneVm::Quiz(map_quiz_cards(session)),
    };

    LessonContentVm {
        language_badge: format!("Language: {}", plan.detected_language),
        level_badge: format!("Level: {}", plan.proficiency_level),
        tabs,
        pane,
    }
}

fn affordance(session: &SessionState, key: EnrichmentKey) -> EnrichmentAffordance {
    match session.enrichment().status(key) {
        None => EnrichmentAffordance::Available,
        Some(EnrichmentStatus::Pending) => EnrichmentAffordance::Loading,
        Some(EnrichmentStatus::Resolved(_)) => EnrichmentAffordance::Done,
    }
}

fn map_extra(result: &EnrichmentResult, examples_as_markdown: bool) -> EnrichmentVm {
    let examples = if examples_as_markdown {
        result.examples.iter().map(|ex| markdown_to_html(ex)).collect()
    } else {
        result.examples.clone()
    };
    EnrichmentVm {
        description_html: markdown_to_html(&result.description),
        examples,
    }
}

#[must_use]
pub fn map_vocab_cards(session: &SessionState) -> Vec<VocabCardVm> {
    let Some(plan) = session.lesson_plan() else {
        return Vec::new();
    };
    plan.vocabulary_words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let key = EnrichmentKey::vocab(index);
            VocabCardVm {
                key,
                word: word.word.clone(),
                translation: word.translation.clone(),
                definition: word.definition.clone(),
                example_sentence: word.example_sentence.clone(),
                affordance: affordance(session, key),
                extra: session
                    .enrichment()
                    .result(key)
                    .map(|result| map_extra(result, true)),
            }
        })
        .collect()
}

#[must_use]
pub fn map_grammar_cards(session: &SessionState) -> Vec<GrammarCardVm> {
    let Some(plan) = session.lesson_plan() else {
        return Vec::new();
    };
    plan.sentence_structures
        .iter()
        .enumerate()
        .map(|(index, structure)| {
            let key = EnrichmentKey::grammar(index);
            GrammarCardVm {
                key,
                structure_name: structure.structure_name.clone(),
                explanation: structure.explanation.clone(),
                example_from_text: structure.example_from_text.clone(),
                practice_template: structure.practice_template.clone(),
                affordance: affordance(session, key),
                extra: session
                    .enrichment()
                    .result(key)
                    .map(|result| map_extra(result, false)),
            }
        })
        .collect()
}

#[must_use]
pub fn map_quiz_cards(session: &SessionState) -> Vec<QuizCardVm> {
    let Some(plan) = session.lesson_plan() else {
        return Vec::new();
    };
    plan.comprehension_questions
        .iter()
        .enumerate()
        .map(|(index, question)| map_quiz_card(session, index, question))
        .collect()
}

fn map_quiz_card(session: &SessionState, index: usize, question: &Question) -> QuizCardVm {
    let quiz = session.quiz();
    let revealed = quiz.is_revealed(index);
    let answer = quiz.answer(index);
    let feedback = session.feedback(index);

    let input = match question.kind() {
        QuestionKind::MultipleChoice => QuizInputVm::Options {
            options: question
                .options
                .iter()
                .map(|option| OptionVm {
                    text: option.clone(),
                    state: option_state(question, option, answer, revealed),
                })
                .collect(),
            locked: revealed,
        },
        QuestionKind::FreeText => {
            let value = answer.unwrap_or_default().to_string();
            QuizInputVm::FreeText {
                can_submit: !revealed && !value.is_empty(),
                value,
                locked: revealed,
            }
        }
    };

    let reveal = revealed.then(|| RevealVm {
        correct_answer: (question.kind() == QuestionKind::FreeText)
            .then(|| question.correct_answer.clone()),
        feedback: feedback.map(|feedback| feedback_vm(question, feedback, answer)),
        explanation: question.explanation.clone(),
    });

    QuizCardVm {
        index,
        number: index + 1,
        question: question.question.clone(),
        type_label: question.type_label(),
        input,
        reveal,
    }
}

fn option_state(
    question: &Question,
    option: &str,
    answer: Option<&str>,
    revealed: bool,
) -> OptionState {
    let selected = answer == Some(option);
    if revealed {
        if option == question.correct_answer {
            OptionState::Correct
        } else if selected {
            OptionState::Incorrect
        } else {
            OptionState::Idle
        }
    } else if selected {
        OptionState::Selected
    } else {
        OptionState::Idle
    }
}

fn feedback_vm(question: &Question, feedback: Feedback, answer: Option<&str>) -> FeedbackVm {
    let correct = feedback.is_correct();
    let text = match (correct, question.kind()) {
        (true, _) => "✓ Correct!".to_string(),
        (false, QuestionKind::MultipleChoice) => "✗ Incorrect. Try again!".to_string(),
        (false, QuestionKind::FreeText) => {
            format!("✗ Your answer: \"{}\"", answer.unwrap_or_default())
        }
    };
    FeedbackVm { correct, text }
}
