use axum::{extract::ConnectInfo, extract::Request};
use std::net::SocketAddr;

const UNKNOWN_CLIENT: &str = "unknown";

/// Peer address as recorded by the listener, `unknown` when the router is
/// served without connect info (tests).
pub fn remote_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Key used for per-client rate limiting.
///
/// Forwarding headers are client-controlled, so they are only honoured when
/// the server sits behind a proxy that sets them.
pub fn client_key(request: &Request, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(ip) = forwarded_for(request).or_else(|| real_ip(request)) {
            return ip;
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn forwarded_for(request: &Request) -> Option<String> {
    request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(String::from)
}

fn real_ip(request: &Request) -> Option<String> {
    request
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;

    fn request_from(peer: Option<&str>, headers: &[(&str, &str)]) -> Request {
        let mut builder = http::Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let mut request = builder.body(Body::empty()).unwrap();
        if let Some(peer) = peer {
            request
                .extensions_mut()
                .insert(ConnectInfo(peer.parse::<SocketAddr>().unwrap()));
        }
        request
    }

    #[test]
    fn test_peer_ip_without_port() {
        let request = request_from(Some("192.168.1.20:51234"), &[]);
        assert_eq!(client_key(&request, false), "192.168.1.20");
        assert_eq!(remote_addr(&request), "192.168.1.20:51234");
    }

    #[test]
    fn test_forwarding_headers_ignored_when_untrusted() {
        let request = request_from(
            Some("127.0.0.1:40000"),
            &[("X-Forwarded-For", "203.0.113.7"), ("X-Real-IP", "203.0.113.8")],
        );
        assert_eq!(client_key(&request, false), "127.0.0.1");
    }

    #[test]
    fn test_first_forwarded_hop_when_trusted() {
        let request = request_from(
            Some("127.0.0.1:40000"),
            &[("X-Forwarded-For", " 203.0.113.7 , 10.0.0.1")],
        );
        assert_eq!(client_key(&request, true), "203.0.113.7");
    }

    #[test]
    fn test_real_ip_fallback_when_trusted() {
        let request = request_from(Some("127.0.0.1:40000"), &[("X-Real-IP", "203.0.113.8")]);
        assert_eq!(client_key(&request, true), "203.0.113.8");
    }

    #[test]
    fn test_unknown_without_connect_info() {
        let request = request_from(None, &[]);
        assert_eq!(client_key(&request, true), "unknown");
        assert_eq!(remote_addr(&request), "unknown");
    }
}
