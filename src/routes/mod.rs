pub mod health;
pub mod session;
pub mod thoughts;

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Rate-limit key for a request: first X-Forwarded-For hop when present
/// (the deployment sits behind a proxy), otherwise the peer address.
pub(crate) fn client_key(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn addr() -> SocketAddr {
        "10.0.0.1:9999".parse().unwrap()
    }

    #[test]
    fn prefers_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.2"),
        );
        assert_eq!(client_key(&headers, addr()), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_peer_address() {
        assert_eq!(client_key(&HeaderMap::new(), addr()), "10.0.0.1");
    }

    #[test]
    fn empty_forwarded_header_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("  "));
        assert_eq!(client_key(&headers, addr()), "10.0.0.1");
    }
}
