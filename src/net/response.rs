//! Buffered HTTP response model.
//!
//! A [`Response`] is what a successful [`fetch`](crate::net::fetch) hands
//! back: the final URL, status line parts, headers and the raw body bytes.
//! Nothing here parses or validates the body.
//!
//! ## Notes
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - `status_text` is the canonical reason phrase for the status code and
//!   may be `"Unknown"` for non-standard codes.
//!
use http::{HeaderMap, Version};

/// Fully buffered HTTP response.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Protocol version the server answered with.
    pub version: Version,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Body decoded as UTF-8. Invalid sequences are replaced, the text is
    /// otherwise returned exactly as received.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            url: url::Url::parse("http://localhost/todos/1").unwrap(),
            status,
            status_text: "OK".into(),
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn text_is_body_verbatim() {
        let body = br#"{"userId":1,"id":1,"title":"delectus aut autem","completed":false}"#;
        let resp = response(200, body);
        assert_eq!(
            resp.text(),
            r#"{"userId":1,"id":1,"title":"delectus aut autem","completed":false}"#
        );
    }

    #[test]
    fn text_replaces_invalid_utf8() {
        let resp = response(200, b"\xff\xfehello");
        assert!(resp.text().ends_with("hello"));
    }
}
