use serde::{Deserialize, Serialize};

use crate::model::LessonPlan;

/// Which list of the lesson plan an enrichment refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Vocab,
    Grammar,
}

impl ItemKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vocab => "vocab",
            Self::Grammar => "grammar",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(kind, index)` into the lesson plan's vocabulary or grammar list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnrichmentKey {
    pub kind: ItemKind,
    pub index: usize,
}

impl EnrichmentKey {
    #[must_use]
    pub fn vocab(index: usize) -> Self {
        Self {
            kind: ItemKind::Vocab,
            index,
        }
    }

    #[must_use]
    pub fn grammar(index: usize) -> Self {
        Self {
            kind: ItemKind::Grammar,
            index,
        }
    }
}

impl std::fmt::Display for EnrichmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind, self.index)
    }
}

/// Item data sent to the enrichment service. Serializes with an
/// `item_type` discriminator so only the fields of one shape are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "item_type", rename_all = "lowercase")]
pub enum ItemPayload {
    Vocab { word: String, translation: String },
    Grammar { structure_name: String },
}

impl ItemPayload {
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Vocab { .. } => ItemKind::Vocab,
            Self::Grammar { .. } => ItemKind::Grammar,
        }
    }
}

/// A request for supplementary examples for one lesson item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    key: EnrichmentKey,
    payload: ItemPayload,
}

impl EnrichmentRequest {
    /// Build the request for `(kind, index)` from the lesson plan.
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn for_item(plan: &LessonPlan, key: EnrichmentKey) -> Option<Self> {
        let payload = match key.kind {
            ItemKind::Vocab => plan.vocab(key.index).map(|word| ItemPayload::Vocab {
                word: word.word.clone(),
                translation: word.translation.clone(),
            })?,
            ItemKind::Grammar => plan
                .structure(key.index)
                .map(|structure| ItemPayload::Grammar {
                    structure_name: structure.structure_name.clone(),
                })?,
        };
        Some(Self { key, payload })
    }

    #[must_use]
    pub fn key(&self) -> EnrichmentKey {
        self.key
    }

    #[must_use]
    pub fn payload(&self) -> &ItemPayload {
        &self.payload
    }
}

/// Supplementary explanation and examples for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub description: String,
    pub examples: Vec<String>,
}
