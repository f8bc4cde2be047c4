//! Request helpers shared by the API and web layers.

pub mod client_ip;

pub use client_ip::client_ip;
