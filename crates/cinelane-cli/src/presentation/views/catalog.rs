use std::fmt;

use crate::presentation::view_models::CatalogViewModel;

pub struct CatalogView<'a> {
    data: &'a CatalogViewModel,
}

impl<'a> CatalogView<'a> {
    pub fn new(data: &'a CatalogViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(
                f,
                "[{}] {} ({})  IMDb {} · Critics {}",
                entry.index, entry.title, entry.provider, entry.imdb_score, entry.critic_score
            )?;
            writeln!(f, "    {}", entry.meta)?;
        }
        Ok(())
    }
}
