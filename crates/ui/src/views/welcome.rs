use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();

    // Returning to the selection screen ends any open lesson.
    use_hook({
        let controller = ctx.lesson_sessions();
        move || controller.leave()
    });

    let catalog = ctx.catalog();

    rsx! {
        div { class: "page welcome",
            h2 { "Choose a video" }
            p { "Pick a video to generate a transcript, vocabulary, grammar notes and a quiz." }
            ul { class: "video-grid",
                for entry in catalog.entries() {
                    li { key: "{entry.video.id()}", class: "video-card",
                        Link {
                            to: Route::Lesson { video_id: entry.video.id().as_str().to_string() },
                            h3 { "{entry.video.title()}" }
                            span { class: "badge", "{entry.language}" }
                        }
                    }
                }
            }
        }
    }
}
