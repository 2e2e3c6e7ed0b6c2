//! spendscan-core: record types, category table, and shared date helpers

pub mod categorizer;
pub mod error;
pub mod finance;
pub mod time;

pub use categorizer::{Categorizable, CategoryRule, CategoryTable};
pub use error::{ParseError, ParseResult};
pub use finance::{StatementRecord, StatementSummary, TransactionRecord, UNCATEGORIZED};
