use std::sync::atomic::Ordering;

use dioxus::prelude::*;
use lingua_core::model::{EnrichmentKey, SessionId, VideoRef};
use lingua_core::{LessonAction, LessonTab, SessionEvent, SessionState};

use super::LessonPage;
use super::test_harness::{ViewKind, sample_lesson, setup_view_harness};
use crate::vm::{
    ENRICHMENT_LOADING_MESSAGE, LOADING_MESSAGE, LessonIntent, LessonPageVm, map_lesson_page,
};

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_lists_sample_videos() {
    let mut harness = setup_view_harness(ViewKind::Welcome, false);
    harness.rebuild();
    let html = harness.render();

    for title in ["English Conversation", "Spanish Lesson", "French Tutorial"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_closes_open_session() {
    let mut harness = setup_view_harness(ViewKind::Welcome, false);
    let video = VideoRef::new("english", "English Conversation", "videos/english-sample.mp4")
        .expect("video");
    harness.controller.select_video(video);
    assert!(harness.controller.current_id().is_some());

    harness.rebuild();
    assert_eq!(harness.controller.current_id(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_loads_lesson_once() {
    let mut harness = setup_view_harness(ViewKind::Lesson("english".into()), false);
    harness.rebuild();
    assert!(harness.render().contains(LOADING_MESSAGE));

    let html = harness.drive_until("Language: English").await;
    assert!(html.contains("Language: English"), "lesson not rendered: {html}");
    assert!(html.contains("Level: Beginner"));
    assert!(html.contains("Hello, how are you today?"));

    harness.drive_async().await;
    assert_eq!(harness.backend.process_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_opens_session_for_routed_video() {
    let mut harness = setup_view_harness(ViewKind::Lesson("spanish".into()), false);
    harness.rebuild();

    let html = harness.drive_until("Language: English").await;
    assert!(html.contains(r#"src="videos/spanish-sample.mp4""#), "no player in {html}");
    let session = harness.controller.snapshot().expect("open session");
    assert_eq!(session.video().id().as_str(), "spanish");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_shows_fetch_error() {
    let mut harness = setup_view_harness(ViewKind::Lesson("french".into()), true);
    harness.rebuild();

    let html = harness.drive_until("Error:").await;
    assert!(html.contains("Failed to load video file"), "missing error in {html}");
    assert!(html.contains("Try again"));
    assert_eq!(harness.backend.process_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_rejects_unknown_video() {
    let mut harness = setup_view_harness(ViewKind::Lesson("klingon".into()), false);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Unknown video: klingon"));
    assert_eq!(harness.controller.current_id(), None);
}

#[component]
fn PageHarness(vm: LessonPageVm) -> Element {
    rsx! {
        LessonPage { vm, on_intent: move |_: LessonIntent| {} }
    }
}

fn render_page(vm: LessonPageVm) -> String {
    let mut dom = VirtualDom::new_with_props(PageHarness, PageHarnessProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn loaded_session() -> SessionState {
    let video = VideoRef::new("english", "English Conversation", "videos/english-sample.mp4")
        .expect("video");
    let mut session = SessionState::new(SessionId::new(1), video);
    let attempt = session.begin_fetch().expect("first fetch");
    session.handle(SessionEvent::LessonLoaded {
        attempt,
        outcome: Ok(sample_lesson()),
    });
    session
}

#[test]
fn lesson_page_renders_graded_quiz() {
    let mut session = loaded_session();
    session.apply(&LessonAction::SelectTab(LessonTab::Quiz));
    session.apply(&LessonAction::SelectOption {
        question: 0,
        option: "Where are you".into(),
    });

    let html = render_page(map_lesson_page(session.video(), Some(&session)));

    assert!(html.contains("1. What is asked?"));
    assert!(html.contains("multiple choice"));
    assert!(html.contains("✗ Incorrect. Try again!"));
    assert!(html.contains("correct-option"));
    assert!(html.contains("incorrect-option"));
    assert!(html.contains("The speaker asks how the other is."));
}

#[test]
fn lesson_page_renders_vocabulary_cards() {
    let mut session = loaded_session();
    session.apply(&LessonAction::SelectTab(LessonTab::Vocabulary));

    let html = render_page(map_lesson_page(session.video(), Some(&session)));

    assert!(html.contains("today"));
    assert!(html.contains("(hoy)"));
    assert!(html.contains("enrich-button"));
    assert!(!html.contains("Transcript</h3>"));
    assert!(!html.contains(ENRICHMENT_LOADING_MESSAGE));
}

#[test]
fn lesson_page_shows_pending_examples() {
    let mut session = loaded_session();
    session.apply(&LessonAction::SelectTab(LessonTab::Vocabulary));
    let action = LessonIntent::MoreExamples(EnrichmentKey::vocab(0))
        .to_action(&session)
        .expect("vocabulary item");
    session.apply(&action);

    let html = render_page(map_lesson_page(session.video(), Some(&session)));

    assert!(html.contains(ENRICHMENT_LOADING_MESSAGE), "missing loading text in {html}");
    assert!(html.contains("⏳"));
}

#[test]
fn lesson_page_orders_transcript_before_summary() {
    let session = loaded_session();

    let html = render_page(map_lesson_page(session.video(), Some(&session)));

    let transcript = html.find("Transcript</h3>").expect("transcript heading");
    let summary = html.find("Summary</h3>").expect("summary heading");
    let objectives = html.find("Learning objectives</h3>").expect("objectives heading");
    assert!(transcript < summary && summary < objectives, "wrong order in {html}");
    assert!(html.contains(r#"src="videos/english-sample.mp4""#));
    assert!(html.contains("<video"));
}

#[test]
fn lesson_page_renders_failure_with_retry() {
    let video = VideoRef::new("spanish", "Spanish Lesson", "videos/spanish-sample.mp4")
        .expect("video");
    let mut session = SessionState::new(SessionId::new(2), video);
    let attempt = session.begin_fetch().expect("first fetch");
    session.handle(SessionEvent::LessonLoaded {
        attempt,
        outcome: Err("Unsupported video codec".into()),
    });

    let html = render_page(map_lesson_page(session.video(), Some(&session)));

    assert!(html.contains("Error: Unsupported video codec"));
    assert!(html.contains("Try again"));
    assert!(html.contains("← Back to Videos"));
}
