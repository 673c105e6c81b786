//! Compiled-in prototype data.
//!
//! The "why" bullets and lanes are hand-authored; nothing here is computed.

use crate::record::{RecommendationRecord, RelatedItem};

pub fn records() -> Vec<RecommendationRecord> {
    vec![michael_clayton(), thief()]
}

fn michael_clayton() -> RecommendationRecord {
    RecommendationRecord {
        title: "Michael Clayton".to_string(),
        meta: "2007 • 1h 59m • Legal Thriller • R".to_string(),
        provider: "Max".to_string(),
        imdb_score: "7.2".to_string(),
        critic_score: "3.7".to_string(),
        synopsis: "A “fixer” at a prestigious law firm is pulled into a corporate corruption case that could implode his career.".to_string(),
        reasons: vec![
            "You rate cerebral thrillers 8.1/10 on average.".to_string(),
            "Shares tone with Zodiac and Sicario.".to_string(),
            "Strong critic consensus with low mainstream fatigue.".to_string(),
        ],
        related: vec![
            RelatedItem::new("Night Moves", "Neo-noir, 1h 54m"),
            RelatedItem::new("The Insider", "Journalistic tension"),
            RelatedItem::new("A Most Wanted Man", "Spy realism"),
            RelatedItem::new("Margin Call", "One-night pressure"),
            RelatedItem::new("Enemy of the State", "Safe pick"),
        ],
    }
}

fn thief() -> RecommendationRecord {
    RecommendationRecord {
        title: "Thief".to_string(),
        meta: "1981 • 2h 03m • Crime • R".to_string(),
        provider: "Criterion".to_string(),
        imdb_score: "7.4".to_string(),
        critic_score: "4.0".to_string(),
        synopsis: "A meticulous safecracker planning retirement is pulled into one final, dangerous job by the Chicago mob.".to_string(),
        reasons: vec![
            "You consistently rate mood-forward crime films highly.".to_string(),
            "Matches your 80s auteur preference cluster.".to_string(),
            "High craft alignment: score, cinematography, pacing.".to_string(),
        ],
        related: vec![
            RelatedItem::new("Manhunter", "Stylized procedural"),
            RelatedItem::new("The Long Good Friday", "UK crime classic"),
            RelatedItem::new("Blow Out", "Paranoia + craft"),
            RelatedItem::new("To Live and Die in L.A.", "Neon chase energy"),
            RelatedItem::new("The Driver", "Minimalist cool"),
        ],
    }
}
