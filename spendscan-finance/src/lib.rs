//! spendscan-finance: multi-statement batches and spending insights

pub mod batch;
pub mod insights;

pub use batch::{BatchError, SourceInfo, StatementBatch};
pub use insights::{Insights, summarize};
