//! Decide whether a response may be shown inside another application's frame,
//! from its `X-Frame-Options` and `Content-Security-Policy` headers.

/// Whether the remote page allows being embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedVerdict {
    Embeddable,
    /// The page refuses framing; `reason` names the header that said so.
    Blocked { reason: String },
}

impl EmbedVerdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Classify a response by its framing headers.
///
/// A CSP `frame-ancestors` directive takes precedence over
/// `X-Frame-Options`. Only a `*` source is treated as permissive: an embedding
/// desktop viewport has no origin that `'self'` or a host list could match.
pub fn embed_verdict(x_frame_options: Option<&str>, csp: Option<&str>) -> EmbedVerdict {
    if let Some(sources) = csp.and_then(frame_ancestors) {
        return if sources.iter().any(|s| *s == "*") {
            EmbedVerdict::Embeddable
        } else {
            EmbedVerdict::Blocked {
                reason: format!("Content-Security-Policy frame-ancestors {}", sources.join(" ")),
            }
        };
    }

    match x_frame_options.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("deny") => EmbedVerdict::Blocked {
            reason: "X-Frame-Options: DENY".into(),
        },
        Some(v) if v.eq_ignore_ascii_case("sameorigin") => EmbedVerdict::Blocked {
            reason: "X-Frame-Options: SAMEORIGIN".into(),
        },
        Some(v) if v.get(..10).is_some_and(|p| p.eq_ignore_ascii_case("allow-from")) => {
            EmbedVerdict::Blocked {
                reason: format!("X-Frame-Options: {v}"),
            }
        }
        _ => EmbedVerdict::Embeddable,
    }
}

/// Source list of the first `frame-ancestors` directive, if present.
fn frame_ancestors(csp: &str) -> Option<Vec<&str>> {
    csp.split(';').find_map(|directive| {
        let mut parts = directive.split_whitespace();
        let name = parts.next()?;
        name.eq_ignore_ascii_case("frame-ancestors")
            .then(|| parts.collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_headers_is_embeddable() {
        assert_eq!(embed_verdict(None, None), EmbedVerdict::Embeddable);
    }

    #[test]
    fn x_frame_options_values() {
        assert!(embed_verdict(Some("DENY"), None).is_blocked());
        assert!(embed_verdict(Some(" sameorigin "), None).is_blocked());
        assert!(embed_verdict(Some("ALLOW-FROM https://a.test"), None).is_blocked());
        assert!(!embed_verdict(Some("garbage"), None).is_blocked());
    }

    #[test]
    fn csp_frame_ancestors() {
        let blocked = embed_verdict(None, Some("default-src 'self'; frame-ancestors 'none'"));
        assert_eq!(
            blocked,
            EmbedVerdict::Blocked {
                reason: "Content-Security-Policy frame-ancestors 'none'".into()
            }
        );
        assert!(embed_verdict(None, Some("frame-ancestors 'self' https://a.test")).is_blocked());
        assert!(!embed_verdict(None, Some("frame-ancestors *")).is_blocked());
        assert!(!embed_verdict(None, Some("default-src 'self'")).is_blocked());
    }

    #[test]
    fn csp_overrides_x_frame_options() {
        assert!(!embed_verdict(Some("DENY"), Some("Frame-Ancestors *")).is_blocked());
        assert!(embed_verdict(Some("garbage"), Some("frame-ancestors 'self'")).is_blocked());
    }

    #[test]
    fn empty_frame_ancestors_blocks() {
        assert!(embed_verdict(None, Some("frame-ancestors;")).is_blocked());
    }
}
