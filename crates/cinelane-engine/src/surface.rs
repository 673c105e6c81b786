//! Named display regions and the surface trait the presenter writes into.

use std::fmt;

/// Single-value display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Title,
    Meta,
    /// Provider shown as a badge next to the title
    ProviderBadge,
    /// Provider shown in the "watch on" call to action
    ProviderLabel,
    ImdbScore,
    CriticScore,
    Synopsis,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Title,
        Region::Meta,
        Region::ProviderBadge,
        Region::ProviderLabel,
        Region::ImdbScore,
        Region::CriticScore,
        Region::Synopsis,
    ];

    /// Stable identifier shared with the markup layer.
    pub fn id(&self) -> &'static str {
        match self {
            Region::Title => "movieTitle",
            Region::Meta => "movieMeta",
            Region::ProviderBadge => "providerBadge",
            Region::ProviderLabel => "providerLabel",
            Region::ImdbScore => "imdbScore",
            Region::CriticScore => "criticScore",
            Region::Synopsis => "movieSynopsis",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Repeated-item display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListRegion {
    /// "Why this pick" bullets
    Reasons,
    /// "More like this" cards
    Lane,
}

impl ListRegion {
    pub fn id(&self) -> &'static str {
        match self {
            ListRegion::Reasons => "whyList",
            ListRegion::Lane => "laneContainer",
        }
    }
}

impl fmt::Display for ListRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The set of regions a presenter can write into.
///
/// Implementations replace content; they never merge. All regions are
/// assumed to exist, so none of these operations can fail.
pub trait DisplaySurface {
    fn set_text(&mut self, region: Region, text: &str);
    fn clear_list(&mut self, list: ListRegion);
    fn push_reason(&mut self, text: &str);
    /// `name` is shown prominently, `subtitle` beneath it.
    fn push_lane_card(&mut self, name: &str, subtitle: &str);
}
