//! Orange County's Credit Union account statement
//!
//! One block per account, each a withdrawal/deposit/balance table:
//!   PACIFIC CHECKING  0001234567
//!   Transaction Date  Posting Date  Withdrawal  Deposit  Balance  Description
//!   01/05/24          01/05/24      -25.00               975.00   STARBUCKS
//!   01/06/24          01/06/24                  100.00   1,075.00 PAYROLL ACME INC

use anyhow::Result;

use crate::types::{
    AmountColumns, LayoutDefinition, LineVariant, SectionRule, StatementKind, SummaryField,
    SummaryPattern, header_patterns,
};

pub const NAME: &str = "orange_county_credit_union";
pub const CHECKING: &str = "Pacific Checking";
pub const SAVINGS: &str = "Pacific Savings";

pub fn layout() -> Result<LayoutDefinition> {
    Ok(LayoutDefinition {
        name: NAME,
        kind: StatementKind::BankAccount,
        headers: header_patterns(&[r"ORANGE COUNTY'S CREDIT UNION", r"ACCOUNT STATEMENT"])?,
        sections: vec![
            SectionRule::new("checking", CHECKING, r"PACIFIC CHECKING")?.until(r"PACIFIC SAVINGS")?,
            SectionRule::new("savings", SAVINGS, r"PACIFIC SAVINGS")?.until(r"PACIFIC CHECKING")?,
        ],
        line_variants: vec![
            // Withdrawals carry a leading minus; balance is unsigned so a
            // trailing-balance row cannot be misread as these shapes.
            LineVariant::new(
                "dates_withdrawal_balance_desc",
                AmountColumns::WithdrawalDeposit,
                concat!(
                    r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<post>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<withdrawal>-[\d,]+\.\d{2})\s+",
                    r"(?P<balance>[\d,]+\.\d{2})\s+",
                    r"(?P<desc>.+?)\s*$"
                ),
            )?,
            LineVariant::new(
                "dates_deposit_balance_desc",
                AmountColumns::WithdrawalDeposit,
                concat!(
                    r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<post>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<deposit>[\d,]+\.\d{2})\s+",
                    r"(?P<balance>[\d,]+\.\d{2})\s+",
                    r"(?P<desc>.+?)\s*$"
                ),
            )?,
            LineVariant::new(
                "dates_amount_desc_balance",
                AmountColumns::Signed,
                concat!(
                    r"^\s*(?P<date>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<post>\d{2}/\d{2}/\d{2})\s+",
                    r"(?P<amount>-?[\d,]+\.\d{2})\s+",
                    r"(?P<desc>.+?)\s+",
                    r"(?P<balance>-?[\d,]+\.\d{2})\s*$"
                ),
            )?,
        ],
        skip_markers: vec!["Transaction", "Date", "Posting", "Withdrawal", "Deposit", "Balance"],
        summary: vec![
            SummaryPattern::new(SummaryField::Balance, r"Ending Balance[:\s]+\$([\d,]+\.\d{2})")?,
            SummaryPattern::new(
                SummaryField::BeginningBalance,
                r"Beginning Balance[:\s]+\$([\d,]+\.\d{2})",
            )?,
        ],
    })
}
