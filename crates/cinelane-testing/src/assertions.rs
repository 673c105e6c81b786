//! Custom assertions for display-surface validation.

use anyhow::{Context, Result};
use cinelane_engine::Region;
use cinelane_types::RecommendationRecord;
use serde_json::Value;

use crate::surface::RecordingSurface;

/// Assert that every region of `surface` mirrors `record` exactly.
pub fn assert_surface_shows(surface: &RecordingSurface, record: &RecommendationRecord) -> Result<()> {
    let expected = [
        (Region::Title, &record.title),
        (Region::Meta, &record.meta),
        (Region::ProviderBadge, &record.provider),
        (Region::ProviderLabel, &record.provider),
        (Region::ImdbScore, &record.imdb_score),
        (Region::CriticScore, &record.critic_score),
        (Region::Synopsis, &record.synopsis),
    ];

    for (region, value) in expected {
        let shown = surface
            .text(region)
            .with_context(|| format!("Region {} was never written", region))?;
        if shown != value.as_str() {
            anyhow::bail!("Region {} shows {:?}, expected {:?}", region, shown, value);
        }
    }

    if surface.reasons() != record.reasons.as_slice() {
        anyhow::bail!(
            "Reasons {:?} do not match {:?}",
            surface.reasons(),
            record.reasons
        );
    }

    let expected_lane: Vec<(String, String)> = record
        .related
        .iter()
        .map(|item| (item.name.clone(), item.subtitle.clone()))
        .collect();
    if surface.lane() != expected_lane.as_slice() {
        anyhow::bail!("Lane {:?} does not match {:?}", surface.lane(), expected_lane);
    }

    Ok(())
}

/// Assert that JSON screen output shows the given title.
pub fn assert_screen_title(json: &Value, title: &str) -> Result<()> {
    let shown = json["title"]
        .as_str()
        .context("Expected 'title' string in JSON")?;

    if shown != title {
        anyhow::bail!("Expected title {:?}, got {:?}", title, shown);
    }

    Ok(())
}
