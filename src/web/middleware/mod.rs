//! Web-specific middleware.

pub mod web_auth;

pub use web_auth::RequestContext;
