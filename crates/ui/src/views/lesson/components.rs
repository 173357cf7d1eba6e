use dioxus::prelude::*;
use lingua_core::model::EnrichmentKey;

use crate::vm::{
    ENRICHMENT_LOADING_MESSAGE, EnrichmentAffordance, EnrichmentVm, GrammarCardVm,
    LOADING_MESSAGE, LessonBodyVm, LessonContentVm, LessonIntent, LessonPageVm, OptionVm,
    PaneVm, QuizCardVm, QuizInputVm, RevealVm, TranscriptVm, VocabCardVm,
};

fn tab_class(active: bool) -> &'static str {
    if active { "tab active" } else { "tab" }
}

#[component]
pub fn LessonPage(vm: LessonPageVm, on_intent: Callback<LessonIntent>) -> Element {
    let LessonPageVm {
        title,
        video_src,
        body,
        ..
    } = vm;

    rsx! {
        div { class: "page lesson",
            button {
                class: "back-button",
                onclick: move |_| on_intent.call(LessonIntent::Back),
                "← Back to Videos"
            }
            h2 { "{title}" }
            div { class: "video-section",
                video { controls: true, src: "{video_src}" }
            }
            match body {
                LessonBodyVm::Loading => rsx! {
                    p { class: "loading", "{LOADING_MESSAGE}" }
                },
                LessonBodyVm::Failed { message } => rsx! {
                    div { class: "error",
                        p { "Error: {message}" }
                        button {
                            class: "retry-button",
                            onclick: move |_| on_intent.call(LessonIntent::Retry),
                            "Try again"
                        }
                    }
                },
                LessonBodyVm::Ready(content) => rsx! {
                    LessonContent { content, on_intent }
                },
            }
        }
    }
}

#[component]
fn LessonContent(content: LessonContentVm, on_intent: Callback<LessonIntent>) -> Element {
    let LessonContentVm {
        language_badge,
        level_badge,
        tabs,
        pane,
    } = content;

    rsx! {
        div { class: "info-bar",
            span { class: "badge", "{language_badge}" }
            span { class: "badge", "{level_badge}" }
        }
        nav { class: "tabs",
            for tab in tabs {
                button {
                    key: "{tab.label}",
                    class: tab_class(tab.active),
                    onclick: move |_| on_intent.call(LessonIntent::SelectTab(tab.tab)),
                    "{tab.label}"
                }
            }
        }
        section { class: "tab-content",
            match pane {
                PaneVm::Transcript(transcript) => rsx! {
                    TranscriptPane { transcript }
                },
                PaneVm::Vocabulary(cards) => rsx! {
                    div { class: "card-list",
                        for card in cards {
                            VocabCard { key: "{card.key}", card, on_intent }
                        }
                    }
                },
                PaneVm::Grammar(cards) => rsx! {
                    div { class: "card-list",
                        for card in cards {
                            GrammarCard { key: "{card.key}", card, on_intent }
                        }
                    }
                },
                PaneVm::Quiz(cards) => rsx! {
                    div { class: "card-list",
                        for card in cards {
                            QuizCard { key: "{card.index}", card, on_intent }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn TranscriptPane(transcript: TranscriptVm) -> Element {
    rsx! {
        div { class: "transcript",
            h3 { "Transcript" }
            p { class: "transcript-text", "{transcript.transcript}" }
            h3 { "Summary" }
            p { "{transcript.summary}" }
            h3 { "Learning objectives" }
            ul {
                for (idx, objective) in transcript.objectives.iter().enumerate() {
                    li { key: "{idx}", "{objective}" }
                }
            }
        }
    }
}

#[component]
fn EnrichButton(
    item: EnrichmentKey,
    affordance: EnrichmentAffordance,
    on_intent: Callback<LessonIntent>,
) -> Element {
    rsx! {
        button {
            class: "enrich-button",
            title: "More examples",
            disabled: !affordance.enabled(),
            onclick: move |_| on_intent.call(LessonIntent::MoreExamples(item)),
            "{affordance.icon()}"
        }
    }
}

#[component]
fn VocabCard(card: VocabCardVm, on_intent: Callback<LessonIntent>) -> Element {
    let VocabCardVm {
        key,
        word,
        translation,
        definition,
        example_sentence,
        affordance,
        extra,
    } = card;

    rsx! {
        article { class: "item-card vocab-card",
            div { class: "item-header",
                h3 {
                    "{word}"
                    span { class: "translation", " ({translation})" }
                }
                EnrichButton { item: key, affordance, on_intent }
            }
            p { class: "definition", "{definition}" }
            p { class: "example", em { "\"{example_sentence}\"" } }
            if affordance == EnrichmentAffordance::Loading {
                p { class: "enrichment-loading", "{ENRICHMENT_LOADING_MESSAGE}" }
            }
            if let Some(extra) = extra {
                EnrichmentBlock { extra, quoted: false }
            }
        }
    }
}

#[component]
fn GrammarCard(card: GrammarCardVm, on_intent: Callback<LessonIntent>) -> Element {
    let GrammarCardVm {
        key,
        structure_name,
        explanation,
        example_from_text,
        practice_template,
        affordance,
        extra,
    } = card;

    rsx! {
        article { class: "item-card grammar-card",
            div { class: "item-header",
                h3 { "{structure_name}" }
                EnrichButton { item: key, affordance, on_intent }
            }
            p { class: "explanation", "{explanation}" }
            p { class: "example", strong { "From the video: " } em { "\"{example_from_text}\"" } }
            p { class: "practice", strong { "Practice: " } "{practice_template}" }
            if affordance == EnrichmentAffordance::Loading {
                p { class: "enrichment-loading", "{ENRICHMENT_LOADING_MESSAGE}" }
            }
            if let Some(extra) = extra {
                EnrichmentBlock { extra, quoted: true }
            }
        }
    }
}

/// Vocabulary examples arrive as rendered HTML; grammar examples are plain
/// sentences shown in quotes.
#[component]
fn EnrichmentBlock(extra: EnrichmentVm, quoted: bool) -> Element {
    rsx! {
        div { class: "enrichment",
            div { class: "description", dangerous_inner_html: "{extra.description_html}" }
            if !extra.examples.is_empty() {
                h4 { "Examples" }
                ul {
                    for (idx, example) in extra.examples.iter().enumerate() {
                        if quoted {
                            li { key: "{idx}", "\"{example}\"" }
                        } else {
                            li { key: "{idx}", dangerous_inner_html: "{example}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizCard(card: QuizCardVm, on_intent: Callback<LessonIntent>) -> Element {
    let QuizCardVm {
        index,
        number,
        question,
        type_label,
        input,
        reveal,
    } = card;

    rsx! {
        article { class: "quiz-card",
            div { class: "question-header",
                h3 { "{number}. {question}" }
                span { class: "question-type", "{type_label}" }
            }
            match input {
                QuizInputVm::Options { options, locked } => rsx! {
                    div { class: "options",
                        for option in options {
                            OptionButton {
                                key: "{option.text}",
                                question: index,
                                option,
                                locked,
                                on_intent,
                            }
                        }
                    }
                },
                QuizInputVm::FreeText { value, locked, can_submit } => rsx! {
                    div { class: "free-text",
                        input {
                            r#type: "text",
                            value: "{value}",
                            placeholder: "Type your answer...",
                            disabled: locked,
                            oninput: move |evt| {
                                on_intent.call(LessonIntent::SetAnswer {
                                    question: index,
                                    text: evt.value(),
                                });
                            },
                            onkeydown: move |evt| {
                                if matches!(evt.data.key(), Key::Enter) && can_submit {
                                    on_intent.call(LessonIntent::SubmitAnswer { question: index });
                                }
                            },
                        }
                        button {
                            class: "submit-button",
                            disabled: !can_submit,
                            onclick: move |_| {
                                on_intent.call(LessonIntent::SubmitAnswer { question: index });
                            },
                            "Submit"
                        }
                    }
                },
            }
            if let Some(reveal) = reveal {
                RevealBlock { reveal }
            }
        }
    }
}

#[component]
fn OptionButton(
    question: usize,
    option: OptionVm,
    locked: bool,
    on_intent: Callback<LessonIntent>,
) -> Element {
    let OptionVm { text, state } = option;
    let label = format!("{text}{}", state.mark());

    rsx! {
        button {
            class: state.class(),
            disabled: locked,
            onclick: move |_| {
                on_intent.call(LessonIntent::SelectOption {
                    question,
                    option: text.clone(),
                });
            },
            "{label}"
        }
    }
}

#[component]
fn RevealBlock(reveal: RevealVm) -> Element {
    rsx! {
        div { class: "reveal",
            if let Some(answer) = reveal.correct_answer.as_ref() {
                p { class: "correct-answer",
                    strong { "Correct answer: " }
                    "{answer}"
                }
            }
            if let Some(feedback) = reveal.feedback.as_ref() {
                p { class: feedback.class(), "{feedback.text}" }
            }
            p { class: "explanation-text",
                strong { "Explanation: " }
                "{reveal.explanation}"
            }
        }
    }
}
