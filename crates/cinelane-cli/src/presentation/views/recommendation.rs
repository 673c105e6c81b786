use std::fmt;

use crate::presentation::view_models::RecommendationViewModel;

pub struct RecommendationView<'a> {
    data: &'a RecommendationViewModel,
}

impl<'a> RecommendationView<'a> {
    pub fn new(data: &'a RecommendationViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RecommendationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let screen = &self.data.screen;

        writeln!(f, "{}  [{}]", screen.title, screen.provider_badge)?;
        writeln!(f, "{}", screen.meta)?;
        writeln!(
            f,
            "IMDb {}  ·  Critics {}",
            screen.imdb_score, screen.critic_score
        )?;
        writeln!(f)?;
        writeln!(f, "{}", screen.synopsis)?;
        writeln!(f)?;
        writeln!(f, "▶ Watch on {}", screen.provider_label)?;

        writeln!(f, "\nWhy this pick")?;
        for reason in &screen.reasons {
            writeln!(f, "  • {}", reason)?;
        }

        writeln!(f, "\nMore like this")?;
        for card in &screen.lane {
            writeln!(f, "  ▸ {}", card.name)?;
            writeln!(f, "    {}", card.subtitle)?;
        }

        Ok(())
    }
}
