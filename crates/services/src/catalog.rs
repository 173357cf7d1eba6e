use std::path::Path;

use lingua_core::model::{VideoId, VideoRef, VideoRefError};

/// A selectable video with its display metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub video: VideoRef,
    pub language: String,
}

/// The videos offered on the selection screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoCatalog {
    entries: Vec<CatalogEntry>,
}

const SAMPLES: [(&str, &str, &str, &str); 3] = [
    ("english", "English Conversation", "English", "english-sample.mp4"),
    ("spanish", "Spanish Lesson", "Spanish", "spanish-sample.mp4"),
    ("french", "French Tutorial", "French", "french-sample.mp4"),
];

impl VideoCatalog {
    /// The bundled sample videos, resolved against `video_dir`.
    ///
    /// # Errors
    ///
    /// Returns `VideoRefError` if a resolved locator is unusable.
    pub fn samples(video_dir: &Path) -> Result<Self, VideoRefError> {
        let entries = SAMPLES
            .iter()
            .map(|(id, title, language, file)| {
                let locator = video_dir.join(file);
                let video = VideoRef::new(*id, *title, &locator.to_string_lossy())?;
                Ok(CatalogEntry {
                    video,
                    language: (*language).to_string(),
                })
            })
            .collect::<Result<Vec<_>, VideoRefError>>()?;
        Ok(Self { entries })
    }

    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn find(&self, id: &VideoId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.video.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_core::model::VideoSource;
    use std::path::PathBuf;

    #[test]
    fn samples_resolve_against_the_video_dir() {
        let catalog = VideoCatalog::samples(Path::new("/srv/videos")).unwrap();
        assert_eq!(catalog.entries().len(), 3);

        let spanish = catalog.find(&VideoId::new("spanish")).unwrap();
        assert_eq!(spanish.video.title(), "Spanish Lesson");
        assert_eq!(spanish.language, "Spanish");
        assert_eq!(
            spanish.video.source(),
            &VideoSource::Local(PathBuf::from("/srv/videos/spanish-sample.mp4"))
        );
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = VideoCatalog::samples(Path::new("videos")).unwrap();
        assert!(catalog.find(&VideoId::new("german")).is_none());
    }
}
