//! Layout definitions: the per-bank knowledge, expressed as data.
//!
//! Capture-group names used by line variants:
//! `date` (required), `post`, `desc`, `category`, `amount`, `withdrawal`,
//! `deposit`, `balance`.

use anyhow::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    CreditCard,
    BankAccount,
}

/// How a variant's captures turn into a signed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountColumns {
    /// One `amount` group; an explicit leading minus means money out.
    Signed,
    /// Separate `withdrawal` and `deposit` groups, at most one present.
    WithdrawalDeposit,
}

/// One alternative pattern for a transaction row
#[derive(Debug, Clone)]
pub struct LineVariant {
    pub label: &'static str,
    pub pattern: Regex,
    pub amount: AmountColumns,
}

impl LineVariant {
    pub fn new(label: &'static str, amount: AmountColumns, pattern: &str) -> Result<Self> {
        Ok(Self {
            label,
            pattern: Regex::new(pattern)?,
            amount,
        })
    }
}

/// Where a section stops
#[derive(Debug, Clone)]
pub enum SectionEnd {
    /// Nearest match of this pattern after the start marker
    Marker(Regex),
    EndOfDocument,
}

/// A named, transaction-bearing region of the statement text
#[derive(Debug, Clone)]
pub struct SectionRule {
    pub name: &'static str,
    pub start: Regex,
    pub end: SectionEnd,
    /// Account label stamped on every record from this section
    pub account: &'static str,
    /// Section-specific variants; the layout's list is used when `None`
    pub variants: Option<Vec<LineVariant>>,
    /// Category assigned to rows that carry no category column
    pub category: Option<&'static str>,
}

impl SectionRule {
    pub fn new(name: &'static str, account: &'static str, start: &str) -> Result<Self> {
        Ok(Self {
            name,
            start: Regex::new(start)?,
            end: SectionEnd::EndOfDocument,
            account,
            variants: None,
            category: None,
        })
    }

    pub fn until(mut self, end: &str) -> Result<Self> {
        self.end = SectionEnd::Marker(Regex::new(end)?);
        Ok(self)
    }

    pub fn with_variants(mut self, variants: Vec<LineVariant>) -> Self {
        self.variants = Some(variants);
        self
    }

    pub fn with_category(mut self, category: &'static str) -> Self {
        self.category = Some(category);
        self
    }
}

/// Scalar fields read once per statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryField {
    Balance,
    CreditLimit,
    PaymentDueDate,
    MinimumPayment,
    BeginningBalance,
}

/// A summary field and the pattern whose first group holds its value
#[derive(Debug, Clone)]
pub struct SummaryPattern {
    pub field: SummaryField,
    pub pattern: Regex,
}

impl SummaryPattern {
    pub fn new(field: SummaryField, pattern: &str) -> Result<Self> {
        Ok(Self {
            field,
            pattern: Regex::new(pattern)?,
        })
    }
}

/// Everything needed to recognize and read one statement layout
#[derive(Debug, Clone)]
pub struct LayoutDefinition {
    /// Registry key, e.g. "discover"
    pub name: &'static str,
    pub kind: StatementKind,
    /// All must match (case-insensitive) for the layout to be identified
    pub headers: Vec<Regex>,
    pub sections: Vec<SectionRule>,
    /// Default variants, tried in order
    pub line_variants: Vec<LineVariant>,
    /// Rows containing any of these (case-sensitive) are table furniture
    pub skip_markers: Vec<&'static str>,
    pub summary: Vec<SummaryPattern>,
}

impl LayoutDefinition {
    /// True when every header pattern is found somewhere in the text.
    pub fn matches_headers(&self, text: &str) -> bool {
        !self.headers.is_empty() && self.headers.iter().all(|re| re.is_match(text))
    }

    /// Variants in effect for a section
    pub fn variants_for<'a>(&'a self, section: &'a SectionRule) -> &'a [LineVariant] {
        section.variants.as_deref().unwrap_or(self.line_variants.as_slice())
    }
}

/// Compile header patterns for case-insensitive search.
pub fn header_patterns(patterns: &[&str]) -> Result<Vec<Regex>> {
    let mut out = Vec::with_capacity(patterns.len());
    for p in patterns {
        out.push(RegexBuilder::new(p).case_insensitive(true).build()?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_layout(headers: &[&str]) -> LayoutDefinition {
        LayoutDefinition {
            name: "test",
            kind: StatementKind::BankAccount,
            headers: header_patterns(headers).unwrap(),
            sections: Vec::new(),
            line_variants: Vec::new(),
            skip_markers: Vec::new(),
            summary: Vec::new(),
        }
    }

    #[test]
    fn test_headers_all_required() {
        let layout = bare_layout(&["ACME BANK", "MONTHLY STATEMENT"]);
        assert!(layout.matches_headers("acme bank\n...\nMonthly Statement"));
        assert!(!layout.matches_headers("ACME BANK only"));
    }

    #[test]
    fn test_no_headers_never_matches() {
        assert!(!bare_layout(&[]).matches_headers("anything"));
    }

    #[test]
    fn test_section_variants_fallback() {
        let mut layout = bare_layout(&["X"]);
        layout.line_variants =
            vec![LineVariant::new("default", AmountColumns::Signed, r"(?P<date>\d)").unwrap()];
        let plain = SectionRule::new("a", "Acct", "START").unwrap();
        let own = SectionRule::new("b", "Acct", "START")
            .unwrap()
            .with_variants(vec![
                LineVariant::new("own", AmountColumns::Signed, r"(?P<date>x)").unwrap(),
            ]);
        assert_eq!(layout.variants_for(&plain)[0].label, "default");
        assert_eq!(layout.variants_for(&own)[0].label, "own");
    }

    #[test]
    fn test_bad_pattern_is_error() {
        assert!(LineVariant::new("bad", AmountColumns::Signed, r"(unclosed").is_err());
        assert!(header_patterns(&["ok", "[bad"]).is_err());
    }
}
