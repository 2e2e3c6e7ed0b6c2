//! Combine parsed statements from several documents into one view.

use rust_decimal::Decimal;
use serde::Serialize;
use spendscan_core::{StatementRecord, StatementSummary, TransactionRecord};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("no transaction data found in the provided files")]
    Empty,
}

/// Non-transaction data of one input document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceInfo {
    /// File name or other caller-supplied key
    pub source: String,
    pub layout: String,
    #[serde(flatten)]
    pub summary: StatementSummary,
    pub transaction_count: usize,
    /// Signed sum of this document's transactions
    pub net_amount: Decimal,
}

/// All transactions across documents, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatementBatch {
    pub transactions: Vec<TransactionRecord>,
    pub statement_info: Vec<SourceInfo>,
}

impl StatementBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's statement. Transactions stay sorted by date
    /// descending; equal dates keep insertion order.
    pub fn add(&mut self, source: impl Into<String>, statement: StatementRecord) {
        let source = source.into();
        info!(
            source = source.as_str(),
            layout = statement.layout.as_str(),
            count = statement.transactions.len(),
            "added statement"
        );
        let net_amount = statement.net_amount();
        self.statement_info.push(SourceInfo {
            source,
            layout: statement.layout,
            summary: statement.summary,
            transaction_count: statement.transactions.len(),
            net_amount,
        });
        self.transactions.extend(statement.transactions);
        self.transactions.sort_by(|a, b| b.date.cmp(&a.date));
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Treat a batch without any transactions as a failure.
    pub fn ensure_not_empty(&self) -> Result<(), BatchError> {
        if self.is_empty() {
            return Err(BatchError::Empty);
        }
        Ok(())
    }

    pub fn source(&self, name: &str) -> Option<&SourceInfo> {
        self.statement_info.iter().find(|s| s.source == name)
    }
}
