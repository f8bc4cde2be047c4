//! Client IP extraction from HTTP requests.

use axum::extract::ConnectInfo;
use axum::http::{Extensions, HeaderMap};
use std::net::{IpAddr, SocketAddr};

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Determines the client address of a request.
///
/// When `behind_proxy` is true, the first `X-Forwarded-For` entry wins, then
/// `X-Real-IP`. Otherwise, or when neither header parses, the socket peer
/// address from [`ConnectInfo`] is used.
///
/// Proxy headers are client-controlled; only trust them behind a proxy
/// that overwrites them.
pub fn client_ip(headers: &HeaderMap, extensions: &Extensions, behind_proxy: bool) -> Option<IpAddr> {
    let forwarded = behind_proxy
        .then(|| forwarded_ip(headers))
        .flatten();

    forwarded.or_else(|| {
        extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    })
}

fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

    header(X_FORWARDED_FOR)
        .and_then(|value| value.split(',').next())
        .and_then(|ip| ip.trim().parse().ok())
        .or_else(|| header(X_REAL_IP).and_then(|ip| ip.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Extensions {
        let mut extensions = Extensions::new();
        extensions.insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 1], 4242))));
        extensions
    }

    #[test]
    fn test_peer_address_without_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"));

        let ip = client_ip(&headers, &peer(), false);
        assert_eq!(ip, Some("10.0.0.1".parse().unwrap()));
    }

    #[test]
    fn test_first_forwarded_entry_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static("203.0.113.7, 198.51.100.2"),
        );

        let ip = client_ip(&headers, &peer(), true);
        assert_eq!(ip, Some("203.0.113.7".parse().unwrap()));
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("garbage"));
        headers.insert(X_REAL_IP, HeaderValue::from_static("2001:db8::1"));

        let ip = client_ip(&headers, &peer(), true);
        assert_eq!(ip, Some("2001:db8::1".parse().unwrap()));
    }

    #[test]
    fn test_no_address_available() {
        assert_eq!(client_ip(&HeaderMap::new(), &Extensions::new(), true), None);
    }
}
