/// Content panes of a lesson.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LessonTab {
    #[default]
    Transcript,
    Vocabulary,
    Grammar,
    Quiz,
}

impl LessonTab {
    pub const ALL: [LessonTab; 4] = [
        LessonTab::Transcript,
        LessonTab::Vocabulary,
        LessonTab::Grammar,
        LessonTab::Quiz,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Transcript => "Transcript",
            Self::Vocabulary => "Vocabulary",
            Self::Grammar => "Grammar",
            Self::Quiz => "Quiz",
        }
    }
}

/// Which pane is visible. Selection never touches any other session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabController {
    active: LessonTab,
}

impl TabController {
    #[must_use]
    pub fn active(&self) -> LessonTab {
        self.active
    }

    pub fn select(&mut self, tab: LessonTab) {
        self.active = tab;
    }
}
