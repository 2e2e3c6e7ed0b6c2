//! Line parsing: ordered variants, first match wins.
//!
//! Rows that match no variant are skipped, as are rows whose captured date
//! is not a calendar date. Neither is an error.

use std::str::FromStr;

use regex::Captures;
use rust_decimal::Decimal;
use spendscan_core::TransactionRecord;
use spendscan_core::time::parse_statement_date;
use tracing::debug;

use crate::types::{AmountColumns, LineVariant};

/// Per-section values stamped onto each parsed row
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Year for `MM/DD` dates
    pub year: i32,
    pub account: &'a str,
    /// Category for rows without a category column
    pub category: Option<&'a str>,
}

/// Parse "$1,234.56", "-$1,234.56", "- $14.05" or "1234.56".
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// True for blank rows and table headers/footers.
pub fn is_non_data(line: &str, skip_markers: &[&str]) -> bool {
    line.trim().is_empty() || skip_markers.iter().any(|m| line.contains(m))
}

/// Try each variant in order and map the first match.
pub fn parse_line(
    line: &str,
    variants: &[LineVariant],
    ctx: &LineContext<'_>,
) -> Option<TransactionRecord> {
    let (variant, caps) = variants
        .iter()
        .find_map(|v| v.pattern.captures(line).map(|caps| (v, caps)))?;

    let record = map_fields(&caps, variant, ctx);
    if record.is_none() {
        debug!(variant = variant.label, line, "matched row has an invalid field");
    }
    record
}

/// Parse every data row of a section span.
pub fn parse_lines(
    span: &str,
    variants: &[LineVariant],
    skip_markers: &[&str],
    ctx: &LineContext<'_>,
) -> Vec<TransactionRecord> {
    let mut out = Vec::new();
    for line in span.lines() {
        if is_non_data(line, skip_markers) {
            continue;
        }
        match parse_line(line, variants, ctx) {
            Some(record) => out.push(record),
            None => debug!(line, "no variant matched"),
        }
    }
    out
}

fn group<'c>(caps: &'c Captures<'_>, name: &str) -> Option<&'c str> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

fn map_fields(
    caps: &Captures<'_>,
    variant: &LineVariant,
    ctx: &LineContext<'_>,
) -> Option<TransactionRecord> {
    let date = parse_statement_date(group(caps, "date")?, ctx.year)?;
    let post_date = match group(caps, "post") {
        Some(raw) => Some(parse_statement_date(raw, ctx.year)?),
        None => None,
    };

    let amount = match variant.amount {
        AmountColumns::Signed => parse_amount(group(caps, "amount")?)?,
        AmountColumns::WithdrawalDeposit => {
            if let Some(w) = group(caps, "withdrawal") {
                -parse_amount(w)?.abs()
            } else if let Some(d) = group(caps, "deposit") {
                parse_amount(d)?.abs()
            } else {
                Decimal::ZERO
            }
        }
    };

    let category = group(caps, "category").or(ctx.category).unwrap_or("");
    let description = group(caps, "desc").unwrap_or("");

    let mut record = TransactionRecord::new(date, description, category, amount, ctx.account);
    record.post_date = post_date;
    record.balance = group(caps, "balance").and_then(parse_amount);
    Some(record)
}
