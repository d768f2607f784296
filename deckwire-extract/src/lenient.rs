//! Best-effort artifact recovery.
//!
//! When a marked payload fails the strict parse — typically because the
//! stream was truncated mid-deck — this scanner walks the enclosed text for
//! complete `{id, title, html}` triples and returns whatever it can salvage.
//! It is a candidate lister, not a parser: surrounding structure may be
//! arbitrarily malformed, and entries it cannot match are simply absent from
//! the result.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use deckwire_core::SlideArtifact;

// Matches one complete artifact object. The html capture tolerates escaped
// quotes, backslashes, and newline escapes.
static ARTIFACT_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\{\s*"id"\s*:\s*"([^"]+)"\s*,\s*"title"\s*:\s*"([^"]+)"\s*,\s*"html"\s*:\s*"((?:[^"\\]|\\.)*)"\s*\}"#,
    )
    .expect("valid artifact pattern")
});

/// Scan malformed payload text for complete artifact triples, in match order.
pub fn scan(block: &str) -> Vec<SlideArtifact> {
    let slides: Vec<SlideArtifact> = ARTIFACT_TRIPLE
        .captures_iter(block)
        .map(|caps| SlideArtifact::new(&caps[1], &caps[2], unescape(&caps[3])))
        .collect();
    debug!(recovered = slides.len(), "lenient scan finished");
    slides
}

/// Unescape the sequences `\n`, `\"`, `\\` back to their literal characters.
///
/// The replacements run in exactly that order; reordering them would
/// double-unescape sequences like `\\n`.
fn unescape(raw: &str) -> String {
    raw.replace(r"\n", "\n")
        .replace(r#"\""#, "\"")
        .replace(r"\\", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recovers_complete_triples_from_truncated_array() {
        let block = r#"[
            {"id":"s1","title":"One","html":"<html>1</html>"},
            {"id":"s2","title":"Two","html":"<html>2</html>"},
            {"id":"s3","title":"Three","html":"<html>3"#;
        let slides = scan(block);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].id, "s1");
        assert_eq!(slides[1].id, "s2");
    }

    #[test]
    fn test_unescapes_html_content() {
        let block = r#"{"id":"s1","title":"T","html":"<p class=\"big\">a\nb<\\br></p>"}"#;
        let slides = scan(block);
        assert_eq!(slides[0].html, "<p class=\"big\">a\nb<\\br></p>");
    }

    #[test]
    fn test_preserves_match_order() {
        let block = r#"garbage {"id":"b","title":"B","html":"x"} noise {"id":"a","title":"A","html":"y"}"#;
        let ids: Vec<_> = scan(block).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_nothing_recoverable() {
        assert!(scan("[{\"id\": \"s1\", \"broken\": ").is_empty());
    }

    #[test]
    fn test_unescape_order_is_fixed() {
        assert_eq!(unescape(r"line\nbreak"), "line\nbreak");
        assert_eq!(unescape(r#"quoted \"word\""#), "quoted \"word\"");
        assert_eq!(unescape(r"c:\\path"), r"c:\path");
        // The newline pass runs before the backslash pass.
        assert_eq!(unescape(r"a\\nb"), "a\\\nb");
    }
}
