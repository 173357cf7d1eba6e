mod lesson_vm;
mod markdown_vm;

pub use lesson_vm::{
    ENRICHMENT_LOADING_MESSAGE, EnrichmentAffordance, EnrichmentVm, FeedbackVm, GrammarCardVm,
    LOADING_MESSAGE, LessonBodyVm, LessonContentVm, LessonIntent, LessonPageVm, OptionState,
    OptionVm, PaneVm, QuizCardVm, QuizInputVm, RevealVm, TabVm, TranscriptVm, VocabCardVm,
    map_grammar_cards, map_lesson_page, map_quiz_cards, map_vocab_cards,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
