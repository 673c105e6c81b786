use cinelane_engine::{DisplaySurface, ListRegion, Region};
use serde::Serialize;
use std::fmt;

use crate::presentation::views::RecommendationView;

/// Contents of every display region of the recommendation screen.
///
/// The engine writes into this through `DisplaySurface`; views only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenViewModel {
    pub title: String,
    pub meta: String,
    pub provider_badge: String,
    pub provider_label: String,
    pub imdb_score: String,
    pub critic_score: String,
    pub synopsis: String,
    pub reasons: Vec<String>,
    pub lane: Vec<LaneCardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneCardViewModel {
    pub name: String,
    pub subtitle: String,
}

impl DisplaySurface for ScreenViewModel {
    fn set_text(&mut self, region: Region, text: &str) {
        let slot = match region {
            Region::Title => &mut self.title,
            Region::Meta => &mut self.meta,
            Region::ProviderBadge => &mut self.provider_badge,
            Region::ProviderLabel => &mut self.provider_label,
            Region::ImdbScore => &mut self.imdb_score,
            Region::CriticScore => &mut self.critic_score,
            Region::Synopsis => &mut self.synopsis,
        };
        slot.clear();
        slot.push_str(text);
    }

    fn clear_list(&mut self, list: ListRegion) {
        match list {
            ListRegion::Reasons => self.reasons.clear(),
            ListRegion::Lane => self.lane.clear(),
        }
    }

    fn push_reason(&mut self, text: &str) {
        self.reasons.push(text.to_string());
    }

    fn push_lane_card(&mut self, name: &str, subtitle: &str) {
        self.lane.push(LaneCardViewModel {
            name: name.to_string(),
            subtitle: subtitle.to_string(),
        });
    }
}

/// A rendered screen plus its position in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationViewModel {
    pub index: usize,
    pub total: usize,
    #[serde(flatten)]
    pub screen: ScreenViewModel,
}

impl fmt::Display for RecommendationViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", RecommendationView::new(self))
    }
}
