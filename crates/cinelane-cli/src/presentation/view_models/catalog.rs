use serde::Serialize;
use std::fmt;

use crate::presentation::views::CatalogView;

#[derive(Debug, Serialize)]
pub struct CatalogViewModel {
    pub entries: Vec<CatalogEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntryViewModel {
    pub index: usize,
    pub title: String,
    pub meta: String,
    pub provider: String,
    pub imdb_score: String,
    pub critic_score: String,
}

impl fmt::Display for CatalogViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CatalogView::new(self))
    }
}
