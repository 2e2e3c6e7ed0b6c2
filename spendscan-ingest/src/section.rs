//! Section extraction: the span between a start marker and the nearest
//! following end marker (or end of text).
//!
//! The regex crate has no lookahead, so the end marker is searched
//! separately, starting after the start marker. Both searches are linear.

use crate::types::{SectionEnd, SectionRule};

/// Text of the first occurrence of the section, start marker included.
/// `None` when the start marker is absent.
pub fn extract_section<'t>(text: &'t str, rule: &SectionRule) -> Option<&'t str> {
    let start = rule.start.find(text)?;
    let rest = &text[start.end()..];
    let end = match &rule.end {
        SectionEnd::Marker(re) => re.find(rest).map(|m| start.end() + m.start()),
        SectionEnd::EndOfDocument => None,
    }
    .unwrap_or(text.len());
    Some(&text[start.start()..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_stops_at_end_marker() {
        let rule = SectionRule::new("purchases", "Card", r"TRANS\.\s+DATE\s+PURCHASES")
            .unwrap()
            .until(r"\n\s*TOTAL FEES")
            .unwrap();
        let text = "header\nTRANS. DATE PURCHASES\n01/15 A B -$1.00\n  TOTAL FEES $0.00\ntail";
        let span = extract_section(text, &rule).unwrap();
        assert!(span.starts_with("TRANS. DATE PURCHASES"));
        assert!(span.ends_with("-$1.00"));
        assert!(!span.contains("TOTAL FEES"));
    }

    #[test]
    fn test_span_runs_to_end_without_end_marker() {
        let rule = SectionRule::new("checking", "Checking", "PACIFIC CHECKING")
            .unwrap()
            .until("PACIFIC SAVINGS")
            .unwrap();
        let text = "intro\nPACIFIC CHECKING\nrow 1\nrow 2\n";
        assert_eq!(extract_section(text, &rule), Some("PACIFIC CHECKING\nrow 1\nrow 2\n"));

        let open = SectionRule::new("all", "Checking", "PACIFIC CHECKING").unwrap();
        assert_eq!(extract_section(text, &open), Some("PACIFIC CHECKING\nrow 1\nrow 2\n"));
    }

    #[test]
    fn test_end_marker_before_start_is_ignored() {
        let rule = SectionRule::new("savings", "Savings", "PACIFIC SAVINGS")
            .unwrap()
            .until("PACIFIC CHECKING")
            .unwrap();
        let text = "PACIFIC CHECKING\nc1\nPACIFIC SAVINGS\ns1\n";
        assert_eq!(extract_section(text, &rule), Some("PACIFIC SAVINGS\ns1\n"));
    }

    #[test]
    fn test_missing_start_is_absent() {
        let rule = SectionRule::new("x", "X", "NOT HERE").unwrap();
        assert_eq!(extract_section("some text", &rule), None);
    }

    #[test]
    fn test_first_occurrence_only() {
        let rule = SectionRule::new("c", "C", "START").unwrap().until("STOP").unwrap();
        let text = "START a STOP START b STOP";
        assert_eq!(extract_section(text, &rule), Some("START a "));
    }
}
