//! Summary fields: one scalar per pattern, searched over the whole text.

use spendscan_core::StatementSummary;
use tracing::debug;

use crate::line::parse_amount;
use crate::types::{SummaryField, SummaryPattern};

/// Fill every field whose pattern matches. A value that does not parse as
/// a number leaves its field absent.
pub fn extract_summary(text: &str, patterns: &[SummaryPattern]) -> StatementSummary {
    let mut summary = StatementSummary::default();
    for p in patterns {
        let Some(raw) = p.pattern.captures(text).and_then(|c| c.get(1)) else {
            continue;
        };
        let raw = raw.as_str().trim();

        if p.field == SummaryField::PaymentDueDate {
            summary.payment_due_date = Some(raw.to_string());
            continue;
        }

        let Some(value) = parse_amount(raw) else {
            debug!(field = ?p.field, raw, "summary value is not a number");
            continue;
        };
        match p.field {
            SummaryField::Balance => summary.balance = Some(value),
            SummaryField::CreditLimit => summary.credit_limit = Some(value),
            SummaryField::MinimumPayment => summary.minimum_payment = Some(value),
            SummaryField::BeginningBalance => summary.beginning_balance = Some(value),
            SummaryField::PaymentDueDate => {}
        }
    }
    summary
}
