//! Discover credit card statement
//!
//! Expected extracted-text sections:
//!   TRANS. DATE  PURCHASES             MERCHANT CATEGORY     AMOUNT
//!   01/15        STARBUCKS COFFEE      Restaurants           -$4.50
//!   TOTAL FEES FOR THIS PERIOD ...
//!
//!   TRANS. DATE  PAYMENTS AND CREDITS                        AMOUNT
//!   01/10        INTERNET PAYMENT - THANK YOU                -$500.00

use anyhow::Result;

use crate::types::{
    AmountColumns, LayoutDefinition, LineVariant, SectionRule, StatementKind, SummaryField,
    SummaryPattern, header_patterns,
};

pub const NAME: &str = "discover";
pub const ACCOUNT: &str = "Discover Credit Card";

pub fn layout() -> Result<LayoutDefinition> {
    let purchases = SectionRule::new("purchases", ACCOUNT, r"TRANS\.\s+DATE\s+PURCHASES")?
        .until(r"\n\s*TOTAL FEES")?;

    // Payment rows have no category column
    let payments = SectionRule::new(
        "payments_and_credits",
        ACCOUNT,
        r"TRANS\.\s+DATE\s+PAYMENTS AND CREDITS",
    )?
    .until(r"\n\s*TRANS")?
    .with_variants(vec![LineVariant::new(
        "date_desc_amount",
        AmountColumns::Signed,
        r"^\s*(?P<date>\d{2}/\d{2})\s+(?P<desc>.+?)\s+(?P<amount>-?\$?[\d,]+\.\d{2})(?:\s|$)",
    )?])
    .with_category("Payment");

    Ok(LayoutDefinition {
        name: NAME,
        kind: StatementKind::CreditCard,
        headers: header_patterns(&[r"DISCOVER IT", r"CARDMEMBER SINCE"])?,
        sections: vec![purchases, payments],
        line_variants: vec![
            LineVariant::new(
                "dates_amount_desc_category",
                AmountColumns::Signed,
                concat!(
                    r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<post>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<amount>-?\$?[\d,]+\.\d{2})\s+",
                    r"(?P<desc>.+?)\s+",
                    r"(?P<category>[\w/&-]+)\s*$"
                ),
            )?,
            LineVariant::new(
                "date_desc_category_amount",
                AmountColumns::Signed,
                concat!(
                    r"^\s*(?P<date>\d{2}/\d{2})\s+",
                    r"(?P<desc>.+?)\s+",
                    r"(?P<category>[\w/&-]+)\s+",
                    r"(?P<amount>-?\$[\d,]+\.\d{2})\s*$"
                ),
            )?,
            LineVariant::new(
                "dated_desc_category_amount",
                AmountColumns::Signed,
                concat!(
                    r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<desc>.+?)\s+",
                    r"(?P<category>[\w/&-]+)\s+",
                    r"(?P<amount>-?\$[\d,]+\.\d{2})\s*$"
                ),
            )?,
        ],
        skip_markers: vec!["TRANS.", "DATE", "PURCHASES", "MERCHANT", "CATEGORY", "AMOUNT"],
        summary: vec![
            SummaryPattern::new(SummaryField::Balance, r"New Balance[:\s]+\$([\d,]+\.\d{2})")?,
            SummaryPattern::new(SummaryField::CreditLimit, r"Credit Line[:\s]+\$([\d,]+)")?,
            SummaryPattern::new(SummaryField::PaymentDueDate, r"Payment Due Date[:\s]+([\d/]+)")?,
            SummaryPattern::new(
                SummaryField::MinimumPayment,
                r"Minimum Payment Due[:\s]+\$([\d,]+\.\d{2})",
            )?,
        ],
    })
}
