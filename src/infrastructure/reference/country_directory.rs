//! In-memory country directory.

use std::collections::HashMap;

use super::tables::{CALLING_CODES, COUNTRIES, LANGUAGE_COUNTRIES};
use crate::domain::entities::Continent;
use crate::domain::ports::CountryDirectory;

struct CountryEntry {
    code: String,
    continent: Continent,
    name: String,
}

/// [`CountryDirectory`] backed by static tables.
///
/// Names are English; the `language` argument of
/// [`CountryDirectory::country_name`] is accepted for interface parity only.
pub struct StaticCountryDirectory {
    countries: Vec<CountryEntry>,
    calling_codes: HashMap<String, String>,
    language_countries: HashMap<String, String>,
}

impl StaticCountryDirectory {
    /// Builds a directory from explicit tables.
    pub fn new(
        countries: Vec<(&str, Continent, &str)>,
        calling_codes: HashMap<&str, &str>,
        language_countries: HashMap<&str, &str>,
    ) -> Self {
        Self {
            countries: countries
                .into_iter()
                .map(|(code, continent, name)| CountryEntry {
                    code: code.to_lowercase(),
                    continent,
                    name: name.to_string(),
                })
                .collect(),
            calling_codes: lowercase_map(calling_codes),
            language_countries: lowercase_map(language_countries),
        }
    }

    fn entry(&self, country_code: &str) -> Option<&CountryEntry> {
        let code = country_code.to_lowercase();
        self.countries.iter().find(|entry| entry.code == code)
    }
}

fn lowercase_map(map: HashMap<&str, &str>) -> HashMap<String, String> {
    map.into_iter()
        .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
        .collect()
}

impl Default for StaticCountryDirectory {
    /// The built-in tables.
    fn default() -> Self {
        Self::new(
            COUNTRIES.to_vec(),
            CALLING_CODES.iter().copied().collect(),
            LANGUAGE_COUNTRIES.iter().copied().collect(),
        )
    }
}

impl CountryDirectory for StaticCountryDirectory {
    fn countries(&self) -> Vec<(String, Continent)> {
        self.countries
            .iter()
            .map(|entry| (entry.code.clone(), entry.continent))
            .collect()
    }

    fn calling_code(&self, country_code: &str) -> Option<String> {
        self.calling_codes
            .get(&country_code.to_lowercase())
            .cloned()
    }

    fn country_name(&self, country_code: &str, _language: &str) -> String {
        self.entry(country_code)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| country_code.to_uppercase())
    }

    fn country_for_language(&self, language: &str) -> Option<String> {
        self.language_countries
            .get(&language.to_lowercase())
            .cloned()
    }

    fn is_known_country(&self, country_code: &str) -> bool {
        self.entry(country_code).is_some()
    }
}
