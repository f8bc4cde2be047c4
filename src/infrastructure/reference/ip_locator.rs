//! IP geolocation.

use std::net::IpAddr;

use tracing::debug;

use crate::domain::ports::IpCountryLocator;

/// A locator that never knows where an address is.
///
/// Used when no geolocation database is configured; the country guess then
/// falls through to the viewer's language.
pub struct NullIpLocator;

impl NullIpLocator {
    /// Creates a new NullIpLocator instance.
    pub fn new() -> Self {
        debug!("Using NullIpLocator (geolocation disabled)");
        Self
    }
}

impl Default for NullIpLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IpCountryLocator for NullIpLocator {
    fn locate(&self, _ip: IpAddr) -> Option<String> {
        None
    }
}
