//! spendscan-ingest: statement layout recognition and transaction extraction
//! from page-ordered statement text.

pub mod assemble;
pub mod identify;
pub mod layouts;
pub mod line;
pub mod section;
pub mod summary;
pub mod types;

pub use assemble::StatementParser;
pub use layouts::LayoutRegistry;
pub use types::{
    AmountColumns, LayoutDefinition, LineVariant, SectionEnd, SectionRule, StatementKind,
    SummaryField, SummaryPattern,
};
