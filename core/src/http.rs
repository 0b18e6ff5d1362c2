//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the
//! network; the caller (host) executes the actual round-trip with whatever
//! HTTP stack it has. This keeps the core deterministic: unit tests hand it
//! canned responses, integration tests execute for real.
//!
//! All fields are owned so values can be queued, cloned and resolved out of
//! issue order without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods. The caller executes it against
/// the network and produces the corresponding [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub(crate) fn bare(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn json(method: HttpMethod, url: String, body: String) -> Self {
        Self {
            method,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an [`HttpRequest`], then handed
/// back to the core for status checking and deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Any 2xx counts as success; the error taxonomy does not distinguish
    /// further (a 404 fails the same way a 500 does).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_the_2xx_range() {
        for status in [200, 201, 204, 299] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(response.is_success(), "{status} should be success");
        }
        for status in [199, 300, 404, 500] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(!response.is_success(), "{status} should be failure");
        }
    }
}
