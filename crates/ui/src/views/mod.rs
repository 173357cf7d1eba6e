mod lesson;
mod welcome;

pub use lesson::{LessonPage, LessonView};
pub use welcome::WelcomeView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
