use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{LessonView, WelcomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/lesson/:video_id", LessonView)] Lesson { video_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                Link { to: Route::Welcome {}, h1 { "Lingua" } }
                p { class: "tagline", "Learn languages from real videos" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
