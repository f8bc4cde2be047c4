//! Country entities used by the messaging settings page.

use serde::Serialize;

/// Country code returned when no guess can be made.
pub const UNKNOWN_COUNTRY: &str = "xx";

/// Continent or region a country is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    CentralAmerica,
    SouthAmerica,
    Oceania,
    Unknown,
}

impl Continent {
    pub fn code(&self) -> &'static str {
        match self {
            Continent::Africa => "afr",
            Continent::Antarctica => "ant",
            Continent::Asia => "asi",
            Continent::Europe => "eur",
            Continent::NorthAmerica => "amn",
            Continent::CentralAmerica => "amc",
            Continent::SouthAmerica => "ams",
            Continent::Oceania => "oce",
            Continent::Unknown => "unk",
        }
    }
}

/// A country offered in the phone number form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub code: String,
    /// Name in the viewer's language.
    pub name: String,
    /// International calling code without the leading `+`.
    pub calling_code: String,
}
