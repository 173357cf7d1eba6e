mod components;
mod view;

pub use components::LessonPage;
pub use view::LessonView;
