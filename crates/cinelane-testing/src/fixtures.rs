//! Synthetic recommendation data.

use cinelane_types::{Catalog, RecommendationRecord, RelatedItem};

/// Two-record catalog in the on-disk TOML format.
pub const SAMPLE_CATALOG_TOML: &str = r#"
[[recommendations]]
title = "Heat"
meta = "1995 • 2h 50m • Crime • R"
provider = "Netflix"
imdb_score = "8.3"
critic_score = "4.2"
synopsis = "A career thief and a detective circle each other across Los Angeles."
reasons = [
    "Long-form crime epics score well with you.",
    "Same director as Thief.",
]
related = [
    { name = "Collateral", subtitle = "Night-shift Mann" },
    { name = "The Town", subtitle = "Heist ensemble" },
]

[[recommendations]]
title = "Ronin"
meta = "1998 • 2h 02m • Action • R"
provider = "Prime Video"
imdb_score = "7.2"
critic_score = "3.6"
synopsis = "Mercenaries chase a briefcase across France."
reasons = ["Practical car chases you rated highly."]
related = [{ name = "The French Connection", subtitle = "Chase benchmark" }]
"#;

/// Record whose fields are all tagged with `id`, with `lists` reasons and
/// `lists` related items.
pub fn sample_record(id: usize, lists: usize) -> RecommendationRecord {
    RecommendationRecord {
        title: format!("Title {id}"),
        meta: format!("Meta {id}"),
        provider: format!("Provider {id}"),
        imdb_score: format!("{}.{}", id % 10, id % 7),
        critic_score: format!("{}.{}", id % 5, id % 3),
        synopsis: format!("Synopsis {id}"),
        reasons: (0..lists).map(|i| format!("Reason {id}.{i}")).collect(),
        related: (0..lists)
            .map(|i| RelatedItem::new(format!("Related {id}.{i}"), format!("Subtitle {id}.{i}")))
            .collect(),
    }
}

/// Catalog of `len` distinct sample records. `len` must be non-zero.
pub fn catalog_of(len: usize) -> Catalog {
    let records = (0..len).map(|id| sample_record(id, id % 4)).collect();
    Catalog::new(records).expect("catalog_of requires len > 0")
}
