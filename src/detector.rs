//! Fast regex screening for obviously malicious markup.
//!
//! This is a pre-check, not a substitute for [`crate::sanitize`]: callers
//! use it to reject or log suspicious payloads cheaply before (or instead
//! of) running a full sanitization pass.

use crate::error::{Result, ScrubError};
use once_cell::sync::Lazy;
use regex::Regex;

/// XSS pattern detector
pub struct AttackDetector;

static SCRIPT_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<script[^>]*>").unwrap());

static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bon\w+\s*=").unwrap());

static JAVASCRIPT_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript\s*:").unwrap());

static DATA_HTML_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)data:\s*text/html").unwrap());

static EMBEDDING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(iframe|object|embed|form)[^>]*>").unwrap());

impl AttackDetector {
    /// Check whether text contains a known XSS attack pattern.
    pub fn looks_malicious(text: &str) -> bool {
        SCRIPT_TAG.is_match(text)
            || EVENT_HANDLER.is_match(text)
            || JAVASCRIPT_URL.is_match(text)
            || DATA_HTML_URL.is_match(text)
            || EMBEDDING_TAG.is_match(text)
    }

    /// Validate text, returning an error when an attack pattern is found.
    pub fn screen(text: &str) -> Result<()> {
        if let Some(kind) = Self::attack_kind(text) {
            return Err(ScrubError::MaliciousContent(kind.to_string()));
        }
        Ok(())
    }

    /// Name the first attack pattern matched, if any.
    pub fn attack_kind(text: &str) -> Option<&'static str> {
        if SCRIPT_TAG.is_match(text) {
            return Some("script injection");
        }
        if EVENT_HANDLER.is_match(text) {
            return Some("event handler injection");
        }
        if JAVASCRIPT_URL.is_match(text) {
            return Some("javascript: URI");
        }
        if DATA_HTML_URL.is_match(text) {
            return Some("data:text/html URI");
        }
        if EMBEDDING_TAG.is_match(text) {
            return Some("embedded document injection");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_script_tag() {
        assert!(AttackDetector::looks_malicious("<script>alert(1)</script>"));
        assert!(AttackDetector::looks_malicious("<SCRIPT src=x>"));
        assert!(AttackDetector::screen("<script>x</script>").is_err());
    }

    #[test]
    fn test_detects_event_handlers() {
        assert!(AttackDetector::looks_malicious(
            r#"<img src="x" onerror="alert(1)">"#
        ));
        assert!(AttackDetector::looks_malicious("<a ONCLICK=go()>x</a>"));
    }

    #[test]
    fn test_detects_dangerous_uris() {
        assert!(AttackDetector::looks_malicious(
            r#"<a href="javascript:alert(1)">x</a>"#
        ));
        assert!(AttackDetector::looks_malicious(
            r#"<a href="data:text/html,<script>">x</a>"#
        ));
    }

    #[test]
    fn test_detects_embedding_tags() {
        assert!(AttackDetector::looks_malicious("<iframe src=x></iframe>"));
        assert!(AttackDetector::looks_malicious("<object data=x>"));
    }

    #[test]
    fn test_safe_content_passes() {
        let safe = "<p>Hello <strong>world</strong></p>";
        assert!(!AttackDetector::looks_malicious(safe));
        assert!(AttackDetector::screen(safe).is_ok());
        assert_eq!(AttackDetector::attack_kind(safe), None);
    }

    #[test]
    fn test_attack_kind_names() {
        assert_eq!(
            AttackDetector::attack_kind("<script>x</script>"),
            Some("script injection")
        );
        assert_eq!(
            AttackDetector::attack_kind(r#"<a href="javascript:void(0)">x</a>"#),
            Some("javascript: URI")
        );
    }
}
