//! Record types produced by statement extraction

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category label used when no keyword matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single transaction extracted from a statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// Transaction date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Trimmed free text from the statement row
    pub description: String,
    /// Category name; empty only until the categorizer has run
    pub category: String,
    /// Negative = money out, positive = money in
    pub amount: Decimal,
    /// Account label (Discover Credit Card, Pacific Checking, etc.)
    pub account: String,
    /// Posting date, when the row carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_date: Option<NaiveDate>,
    /// Running balance, when the row carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
}

impl TransactionRecord {
    /// Create a new TransactionRecord with no posting date or balance
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Decimal,
        account: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: category.into(),
            amount,
            account: account.into(),
            post_date: None,
            balance: None,
        }
    }

    /// Returns true if this is money out (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if this is money in (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// True when the categorizer still has to fill this record in.
    pub fn needs_category(&self) -> bool {
        self.category.trim().is_empty() || self.category == UNCATEGORIZED
    }
}

/// Scalar values read once per statement. Each is present only if its
/// pattern matched and the captured text parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatementSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payment: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beginning_balance: Option<Decimal>,
}

impl StatementSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One parsed statement document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementRecord {
    /// Registry key of the layout that matched (e.g. "discover")
    pub layout: String,
    #[serde(flatten)]
    pub summary: StatementSummary,
    pub transactions: Vec<TransactionRecord>,
}

impl StatementRecord {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            summary: StatementSummary::default(),
            transactions: Vec::new(),
        }
    }

    /// Sum of all signed amounts
    pub fn net_amount(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}
