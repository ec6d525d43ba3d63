//! HTTP exchange types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `ListClient` builds an
//! `HttpRequest` and classifies an `HttpResponse` without touching the
//! network; a `Transport` performs the round-trip in between. Every fetch is
//! a bodiless GET, so the request carries only a URL and headers.
//!
//! All fields use owned types so values can move freely between tasks. The
//! response body stays raw bytes: whether it is text, let alone JSON, is
//! decided by `ListClient::parse_list`.

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// A received HTTP response. Any status, including 4xx/5xx, is represented
/// here; only transport failures are not. Transports may leave `body` empty
/// for non-2xx responses since it is never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse::new(status, Vec::new())
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
