use cinelane_types::RecommendationRecord;

use crate::surface::{DisplaySurface, ListRegion, Region};

/// Copy every field of `record` into its display region.
///
/// Scalars are written verbatim. Both lists are cleared before being
/// refilled in source order.
pub fn render<S>(surface: &mut S, record: &RecommendationRecord)
where
    S: DisplaySurface + ?Sized,
{
    surface.set_text(Region::Title, &record.title);
    surface.set_text(Region::Meta, &record.meta);
    surface.set_text(Region::ProviderBadge, &record.provider);
    surface.set_text(Region::ProviderLabel, &record.provider);
    surface.set_text(Region::ImdbScore, &record.imdb_score);
    surface.set_text(Region::CriticScore, &record.critic_score);
    surface.set_text(Region::Synopsis, &record.synopsis);

    surface.clear_list(ListRegion::Reasons);
    for reason in &record.reasons {
        surface.push_reason(reason);
    }

    surface.clear_list(ListRegion::Lane);
    for item in &record.related {
        surface.push_lane_card(&item.name, &item.subtitle);
    }
}
