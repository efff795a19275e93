use crate::net::Response;
use http::Version;
use std::error::Error as _;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be set up (TLS backend, bad user agent, ...)
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport level failure: DNS, TCP, TLS, or the body stream breaking off
    #[error("{}", describe_chain(.0))]
    Connection(#[source] reqwest::Error),

    /// The exchange completed but the server answered with a non-2xx status
    #[error("{version:?} {status} {reason}")]
    Protocol {
        version: Version,
        status: u16,
        reason: String,
    },
}

impl FetchError {
    pub fn is_connection(&self) -> bool {
        matches!(self, FetchError::Connection(_))
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, FetchError::Protocol { .. })
    }
}

// reqwest only names the request in its own message, the actual reason (dns, refused, tls...)
// lives further down the source chain
fn describe_chain(err: &reqwest::Error) -> String {
    let mut out = err.to_string();
    let mut last = out.clone();
    let mut source = err.source();

    while let Some(cause) = source {
        let msg = cause.to_string();
        if msg != last && !last.ends_with(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        last = msg;
        source = cause.source();
    }

    out
}

// Issues a single GET for the url and returns the buffered response. Every call gets its own
// client so two calls never share connections. No user agent is sent unless one is given.
pub async fn fetch(url: &Url, user_agent: Option<&str>) -> Result<Response, FetchError> {
    let mut builder = reqwest::Client::builder();
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    let client = builder.build().map_err(FetchError::Client)?;

    log::debug!("GET {url}");
    let res = client
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::Connection)?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status();
    let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
    let version = res.version();
    log::debug!("{} {} from {}", status.as_u16(), status_text, final_url);

    if !status.is_success() {
        return Err(FetchError::Protocol {
            version,
            status: status.as_u16(),
            reason: status_text,
        });
    }

    let headers = res.headers().clone();

    // Fetch body. We don't do streaming
    let body = res.bytes().await.map_err(FetchError::Connection)?.to_vec();

    Ok(Response {
        url: final_url,
        status: status.as_u16(),
        status_text,
        version,
        headers,
        body,
    })
}
