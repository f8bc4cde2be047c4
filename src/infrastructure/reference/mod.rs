//! Reference data that needs no database.
//!
//! - [`StaticCountryDirectory`] - Countries, calling codes, language defaults
//! - [`NullIpLocator`] - No-op IP geolocation

mod country_directory;
mod ip_locator;
pub mod tables;

pub use country_directory::StaticCountryDirectory;
pub use ip_locator::NullIpLocator;
