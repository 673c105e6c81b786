use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::RecommendationRecord;

/// Fixed, ordered, non-empty list of recommendations.
///
/// The only way to build a `Catalog` is through a constructor that rejects
/// an empty list, so every index arithmetic done against `len()` is safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<RecommendationRecord>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    recommendations: Vec<RecommendationRecord>,
}

impl Catalog {
    pub fn new(records: Vec<RecommendationRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { records })
    }

    /// The compiled-in prototype catalog.
    pub fn builtin() -> Self {
        Self {
            records: crate::builtin::records(),
        }
    }

    /// Parse a catalog from TOML made of `[[recommendations]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.recommendations)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RecommendationRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecommendationRecord> {
        self.records.iter()
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = RecommendationRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RecommendationRecord;
    type IntoIter = std::slice::Iter<'a, RecommendationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_RECORDS: &str = r#"
[[recommendations]]
title = "Heat"
meta = "1995 • 2h 50m • Crime • R"
provider = "Netflix"
imdb_score = "8.3"
critic_score = "4.2"
synopsis = "A career thief and a detective circle each other."
reasons = ["Long-form crime epics score well with you."]
related = [{ name = "Collateral", subtitle = "Night-shift Mann" }]

[[recommendations]]
title = "Ronin"
meta = "1998 • 2h 02m • Action • R"
provider = "Prime Video"
imdb_score = "7.2"
critic_score = "3.6"
synopsis = "Mercenaries chase a briefcase across France."
"#;

    #[test]
    fn test_new_rejects_empty() {
        let result = Catalog::new(Vec::new());
        assert!(matches!(result, Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_from_toml_preserves_order() {
        let catalog = Catalog::from_toml_str(TWO_RECORDS).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog[0].title, "Heat");
        assert_eq!(catalog[1].title, "Ronin");
        assert_eq!(catalog[0].related[0].name, "Collateral");
        assert!(catalog[1].reasons.is_empty());
    }

    #[test]
    fn test_from_toml_without_recommendations_is_empty_error() {
        let result = Catalog::from_toml_str("# nothing here\n");
        assert!(matches!(result, Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_from_toml_reports_parse_error() {
        let result = Catalog::from_toml_str("[[recommendations]]\ntitle = 3\n");
        match result {
            Err(Error::Parse(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(TWO_RECORDS.as_bytes())?;

        let catalog = Catalog::load_from(file.path())?;
        assert_eq!(catalog.len(), 2);

        Ok(())
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let result = Catalog::load_from(Path::new("/nonexistent/cinelane/catalog.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = Catalog::from_toml_str(TWO_RECORDS).unwrap();
        assert!(catalog.get(2).is_none());
        assert_eq!(catalog.iter().count(), 2);
    }
}
