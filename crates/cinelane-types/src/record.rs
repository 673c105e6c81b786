use serde::{Deserialize, Serialize};

/// One movie's display data.
///
/// Every field is display-only: scores are kept as the authored strings and
/// are never parsed. `reasons` and `related` are in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub title: String,
    /// Free-form line: year, runtime, genre, rating
    pub meta: String,
    /// Display name of the streaming source
    pub provider: String,
    pub imdb_score: String,
    pub critic_score: String,
    pub synopsis: String,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub related: Vec<RelatedItem>,
}

/// A card in the "more like this" lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub name: String,
    pub subtitle: String,
}

impl RelatedItem {
    pub fn new(name: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtitle: subtitle.into(),
        }
    }
}
