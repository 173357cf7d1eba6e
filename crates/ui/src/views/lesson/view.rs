use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use lingua_core::model::{VideoId, VideoRef};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LessonIntent, map_lesson_page};

use super::components::LessonPage;

#[component]
pub fn LessonView(video_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let video = ctx
        .catalog()
        .find(&VideoId::new(video_id.as_str()))
        .map(|entry| entry.video.clone());

    match video {
        Some(video) => rsx! {
            LessonSession { key: "{video_id}", video }
        },
        None => rsx! {
            div { class: "page lesson",
                p { class: "error", "Unknown video: {video_id}" }
                Link { to: Route::Welcome {}, "← Back to Videos" }
            }
        },
    }
}

/// Owns one lesson session for the lifetime of the screen. The session is
/// opened and loaded once on mount; re-renders only read the latest snapshot.
#[component]
fn LessonSession(video: VideoRef) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let controller = ctx.lesson_sessions();

    let session_id = use_hook({
        let controller = controller.clone();
        let video = video.clone();
        move || controller.select_video(video)
    });

    let snapshot = use_signal({
        let controller = controller.clone();
        move || controller.snapshot()
    });

    use_future({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            let mut snapshot = snapshot;
            async move {
                let mut updates = controller.subscribe();
                loop {
                    let current = updates.borrow_and_update().clone();
                    snapshot.set(current);
                    if updates.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    use_future({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move {
                controller.load(session_id).await;
            }
        }
    });

    let on_intent = use_callback(move |intent: LessonIntent| {
        let controller = controller.clone();
        match intent {
            LessonIntent::Back => {
                controller.leave();
                navigator.push(Route::Welcome {});
            }
            LessonIntent::Retry => {
                spawn(async move {
                    controller.retry(session_id).await;
                });
            }
            intent => {
                let action = snapshot
                    .peek()
                    .as_ref()
                    .filter(|session| session.id() == session_id)
                    .and_then(|session| intent.to_action(session));
                if let Some(action) = action {
                    spawn(async move {
                        controller.dispatch(session_id, action).await;
                    });
                }
            }
        }
    });

    let vm = map_lesson_page(
        &video,
        snapshot
            .read()
            .as_ref()
            .filter(|session| session.id() == session_id),
    );

    rsx! {
        LessonPage { vm, on_intent }
    }
}
