//! HTML template rendering handlers for the web dashboard.

mod login;
mod mobile_messaging;

pub use login::login_handler;
pub use mobile_messaging::{MobileMessagingTemplate, mobile_messaging_handler};

/// Where anonymous visitors are sent.
pub const LOGIN_PATH: &str = "/dashboard/login";

/// Mobile messaging settings page.
pub const MOBILE_MESSAGING_PATH: &str = "/dashboard/settings/mobile-messaging";
