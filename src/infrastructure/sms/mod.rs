//! SMS provider adapters.
//!
//! - [`ClockworkClient`] - HTTP client for the Clockwork account API
//! - [`ProviderSmsGateway`] - Provider catalog dispatching to the clients

mod clockwork;
mod gateway;

pub use clockwork::{CLOCKWORK_API_URL, ClockworkClient};
pub use gateway::{CLOCKWORK, ProviderSmsGateway, STUBBED_PROVIDER};
