//! Destination search
//!
//! Searching happens on a fixed catalog, no external travel data is involved. The catalog is
//! built once at startup and never changes afterwards.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::utils::env_var_optional;

/// A single searchable place
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchEntry {
    /// Name of the place
    pub name: String,

    /// Country the place is in
    pub country: String,

    /// Region or state
    pub region: Option<String>,

    /// IATA code of the main airport, if any
    pub iata: Option<String>,
}

impl SearchEntry {
    fn new(name: &str, country: &str, region: &str, iata: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
            region: Some(region.to_string()),
            iata: iata.map(ToString::to_string),
        }
    }

    /// Does the (lowercased) query appear in the name or the IATA code?
    fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self
                .iata
                .as_ref()
                .is_some_and(|iata| iata.to_lowercase().contains(query))
    }

    /// Does the (lowercased) country filter appear in the country?
    fn matches_country(&self, country: &str) -> bool {
        self.country.to_lowercase().contains(country)
    }
}

/// Immutable list of searchable places, cheap to clone
#[derive(Clone, Debug)]
pub struct SearchCatalog {
    entries: Arc<[SearchEntry]>,
}

impl SearchCatalog {
    /// Create a catalog with the given entries
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Self {
        Self::new(vec![
            SearchEntry::new("Paris", "France", "Île-de-France", Some("CDG")),
            SearchEntry::new("Lyon", "France", "Auvergne-Rhône-Alpes", None),
            SearchEntry::new("New York", "USA", "NY", Some("JFK")),
            SearchEntry::new("San Francisco", "USA", "CA", Some("SFO")),
            SearchEntry::new("Tokyo", "Japan", "Kanto", Some("HND")),
            SearchEntry::new("Kyoto", "Japan", "Kansai", None),
        ])
    }

    /// Load a catalog from a JSON file containing an array of entries
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read search fixtures {}", path.display()))?;

        let entries = serde_json::from_str::<Vec<SearchEntry>>(&contents)
            .with_context(|| format!("Invalid search fixtures {}", path.display()))?;

        Ok(Self::new(entries))
    }

    /// Use `TRAVEL_PLANNER_SEARCH_FIXTURES` when set, the builtin catalog otherwise
    pub fn from_env() -> Result<Self> {
        match env_var_optional("TRAVEL_PLANNER_SEARCH_FIXTURES") {
            Some(path) => {
                let catalog = Self::from_file(Path::new(&path))?;
                tracing::info!("Loaded {} search entries from {path}", catalog.entry_count());
                Ok(catalog)
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Amount of entries in the catalog
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Find all entries matching the query, optionally only within a country
    ///
    /// Both are case-insensitive substring matches, the query against the name or IATA code.
    /// An empty country filter is the same as no filter.
    pub fn search(&self, query: &str, country: Option<&str>) -> Vec<&SearchEntry> {
        let query = query.to_lowercase();
        let country = country
            .filter(|country| !country.is_empty())
            .map(str::to_lowercase);

        self.entries
            .iter()
            .filter(|entry| entry.matches_query(&query))
            .filter(|entry| {
                country
                    .as_deref()
                    .is_none_or(|country| entry.matches_country(country))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&SearchEntry]) -> Vec<String> {
        entries.iter().map(|entry| entry.name.clone()).collect()
    }

    #[test]
    fn test_search_by_name() {
        let catalog = SearchCatalog::builtin();

        let results = catalog.search("Par", None);
        assert_eq!(vec!["Paris".to_string()], names(&results));
        assert_eq!("France", results[0].country);

        let results = catalog.search("kyoTO", None);
        assert_eq!(vec!["Kyoto".to_string()], names(&results));
    }

    #[test]
    fn test_search_by_iata() {
        let catalog = SearchCatalog::builtin();

        assert_eq!(
            vec!["Paris".to_string()],
            names(&catalog.search("CDG", None))
        );
        assert_eq!(
            vec!["San Francisco".to_string()],
            names(&catalog.search("sfo", None))
        );
    }

    #[test]
    fn test_search_with_country() {
        let catalog = SearchCatalog::builtin();

        assert!(catalog.search("tokyo", Some("usa")).is_empty());
        assert_eq!(
            vec!["Tokyo".to_string()],
            names(&catalog.search("tokyo", Some("JAP")))
        );

        // `o` appears in Lyon, New York, San Francisco, Tokyo and Kyoto
        assert_eq!(
            vec!["New York".to_string(), "San Francisco".to_string()],
            names(&catalog.search("o", Some("usa")))
        );

        // empty filter is ignored
        assert_eq!(5, catalog.search("o", Some("")).len());
    }

    #[test]
    fn test_search_alternate_catalog() {
        let catalog = SearchCatalog::new(vec![SearchEntry {
            name: "Reykjavík".to_string(),
            country: "Iceland".to_string(),
            region: None,
            iata: Some("KEF".to_string()),
        }]);

        assert_eq!(1, catalog.entry_count());
        assert_eq!(1, catalog.search("kef", Some("ice")).len());
        assert!(catalog.search("Paris", None).is_empty());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("travel-planner-search-fixtures.json");
        std::fs::write(
            &path,
            r#"[{"name": "Lisbon", "country": "Portugal", "region": "Lisboa", "iata": "LIS"}]"#,
        )
        .unwrap();

        let catalog = SearchCatalog::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            vec!["Lisbon".to_string()],
            names(&catalog.search("lis", None))
        );
    }
}
