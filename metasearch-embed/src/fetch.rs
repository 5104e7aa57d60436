use std::io::Read;
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use url::Url;

use crate::cancel::LoadCancel;
use crate::document::extract_title;
use crate::error::EmbedError;
use crate::verdict::{embed_verdict, EmbedVerdict};

/// Settings for a single panel load.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Upper bound on the whole request, connect to last byte.
    pub timeout: Duration,
    /// Bytes of body read before giving up on finding a title.
    pub max_body_bytes: u64,
    pub user_agent: String,
}

impl FetchConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_MAX_BODY_BYTES: u64 = 512 * 1024;

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            max_body_bytes: Self::DEFAULT_MAX_BODY_BYTES,
            user_agent: concat!("MetaSearch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// What a finished load found out about the page.
#[derive(Debug, Clone)]
pub struct EmbedOutcome {
    pub url: String,
    pub status: u16,
    pub verdict: EmbedVerdict,
    pub page_title: Option<String>,
    /// Body bytes read (capped at [`FetchConfig::max_body_bytes`]).
    pub bytes: usize,
    pub elapsed: Duration,
}

/// Load `url` once and classify the response.
///
/// Returns [`EmbedError::Cancelled`] if `cancel` moves past `generation`
/// before the body is read. Non-2xx statuses are not errors; they are
/// reported in [`EmbedOutcome::status`].
pub fn fetch(
    url: &str,
    cancel: &LoadCancel,
    generation: u64,
    config: &FetchConfig,
) -> crate::Result<EmbedOutcome> {
    let target = http_url(url)?;
    if cancel.is_stale(generation) {
        return Err(EmbedError::Cancelled);
    }

    let start = Instant::now();
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .http_status_as_error(false)
        .build()
        .into();

    debug!(url, "Loading embedded content");
    let mut response = agent
        .get(target.as_str())
        .header("User-Agent", config.user_agent.as_str())
        .call()?;

    if cancel.is_stale(generation) {
        debug!(url, "Load superseded before body read");
        return Err(EmbedError::Cancelled);
    }

    let status = response.status().as_u16();
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let x_frame_options = header("x-frame-options");
    let csp = header("content-security-policy");
    let verdict = embed_verdict(x_frame_options.as_deref(), csp.as_deref());

    let mut body = Vec::new();
    response
        .body_mut()
        .as_reader()
        .take(config.max_body_bytes)
        .read_to_end(&mut body)?;
    let page_title = extract_title(&String::from_utf8_lossy(&body));

    if let EmbedVerdict::Blocked { reason } = &verdict {
        warn!(url, "Page may be blocked from embedding ({reason}); use the direct link");
    }

    Ok(EmbedOutcome {
        url: url.to_string(),
        status,
        verdict,
        page_title,
        bytes: body.len(),
        elapsed: start.elapsed(),
    })
}

/// Parse `url`, accepting only the `http` and `https` schemes in any case.
pub(crate) fn http_url(url: &str) -> crate::Result<Url> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(parsed),
        _ => Err(EmbedError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_urls() {
        let cancel = LoadCancel::new();
        let err = fetch("ftp://x.test/", &cancel, 0, &FetchConfig::default()).unwrap_err();
        assert!(matches!(err, EmbedError::InvalidUrl(_)));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let parsed = http_url("HTTPS://Example.org/?q=cats").unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host_str(), Some("example.org"));
        assert!(http_url("Http://example.org/").is_ok());
        assert!(matches!(http_url("not a url"), Err(EmbedError::InvalidUrl(_))));
        assert!(matches!(http_url("mailto:nobody@example.com"), Err(EmbedError::InvalidUrl(_))));
    }

    #[test]
    fn uppercase_scheme_reaches_the_cancel_check() {
        let cancel = LoadCancel::new();
        let old = cancel.generation();
        cancel.advance();
        let url = "HTTPS://Example.org/?q=cats";
        let err = fetch(url, &cancel, old, &FetchConfig::default()).unwrap_err();
        assert!(matches!(err, EmbedError::Cancelled));
    }

    #[test]
    fn stale_generation_cancels_before_request() {
        let cancel = LoadCancel::new();
        let old = cancel.generation();
        cancel.advance();
        let err = fetch("https://x.test/", &cancel, old, &FetchConfig::default()).unwrap_err();
        assert!(matches!(err, EmbedError::Cancelled));
    }

    #[test]
    fn default_config() {
        let c = FetchConfig::default().with_timeout(Duration::from_secs(3));
        assert_eq!(c.timeout, Duration::from_secs(3));
        assert_eq!(c.max_body_bytes, FetchConfig::DEFAULT_MAX_BODY_BYTES);
        assert!(c.user_agent.starts_with("MetaSearch/"));
    }
}
