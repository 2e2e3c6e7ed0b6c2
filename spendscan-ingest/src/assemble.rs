//! Statement assembly: identify → summary → sections → lines → categories.

use anyhow::Result;
use spendscan_core::time::current_year;
use spendscan_core::{CategoryTable, ParseError, ParseResult, StatementRecord};
use tracing::{debug, info, warn};

use crate::identify::identify;
use crate::layouts::LayoutRegistry;
use crate::line::{LineContext, parse_lines};
use crate::section::extract_section;
use crate::summary::extract_summary;
use crate::types::LayoutDefinition;

/// Parses statement text against a fixed registry and category table.
///
/// Holds no per-document state, so one instance can serve any number of
/// threads at once.
#[derive(Debug, Clone)]
pub struct StatementParser {
    registry: LayoutRegistry,
    categories: CategoryTable,
}

impl StatementParser {
    pub fn new(registry: LayoutRegistry, categories: CategoryTable) -> Self {
        Self { registry, categories }
    }

    /// Built-in layouts and category table
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(LayoutRegistry::builtin()?, CategoryTable::builtin()))
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Name of the layout that would handle this text
    pub fn identify(&self, text: &str) -> Option<&'static str> {
        identify(&self.registry, text).map(|l| l.name)
    }

    /// Parse with `MM/DD` rows dated in the current calendar year.
    pub fn parse(&self, text: &str) -> ParseResult<StatementRecord> {
        self.parse_with_year(text, current_year())
    }

    /// Parse with an explicit year for `MM/DD` rows.
    pub fn parse_with_year(&self, text: &str, year: i32) -> ParseResult<StatementRecord> {
        let Some(layout) = identify(&self.registry, text) else {
            warn!("unsupported bank statement format");
            return Err(ParseError::UnrecognizedLayout);
        };
        info!(layout = layout.name, "identified statement layout");
        Ok(self.assemble(layout, text, year))
    }

    /// Parse as a named layout, skipping identification.
    pub fn parse_as(&self, layout: &str, text: &str, year: i32) -> ParseResult<StatementRecord> {
        let def = self
            .registry
            .get(layout)
            .ok_or_else(|| ParseError::UnknownLayout(layout.to_string()))?;
        Ok(self.assemble(def, text, year))
    }

    fn assemble(&self, layout: &LayoutDefinition, text: &str, year: i32) -> StatementRecord {
        let mut statement = StatementRecord::new(layout.name);
        statement.summary = extract_summary(text, &layout.summary);

        for section in &layout.sections {
            let Some(span) = extract_section(text, section) else {
                warn!(layout = layout.name, section = section.name, "section not found");
                continue;
            };
            let ctx = LineContext { year, account: section.account, category: section.category };
            let records = parse_lines(span, layout.variants_for(section), &layout.skip_markers, &ctx);
            debug!(section = section.name, count = records.len(), "parsed section");
            statement.transactions.extend(records);
        }

        let filled = self.categories.backfill(&mut statement.transactions);
        debug!(filled, "categorized transactions");

        if statement.transactions.is_empty() {
            warn!(layout = layout.name, "no transactions found");
        } else {
            info!(
                layout = layout.name,
                count = statement.transactions.len(),
                "found transactions"
            );
        }
        statement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendscan_core::{CategoryRule, UNCATEGORIZED};

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatementParser>();
    }

    #[test]
    fn test_unrecognized_layout() {
        let parser = StatementParser::builtin().unwrap();
        let err = parser.parse("Random text\nwith no bank headers").unwrap_err();
        assert_eq!(err, ParseError::UnrecognizedLayout);
        assert_eq!(err.to_string(), "unsupported bank statement format");
    }

    #[test]
    fn test_parse_as_unknown_layout() {
        let parser = StatementParser::builtin().unwrap();
        assert_eq!(
            parser.parse_as("chase", "", 2026).unwrap_err(),
            ParseError::UnknownLayout("chase".into())
        );
    }

    #[test]
    fn test_recognized_but_empty() {
        let parser = StatementParser::builtin().unwrap();
        let st = parser.parse_with_year("DISCOVER IT\nCARDMEMBER SINCE 2019\n", 2026).unwrap();
        assert_eq!(st.layout, "discover");
        assert!(st.transactions.is_empty());
    }

    #[test]
    fn test_custom_category_table_used_for_backfill() {
        let parser = StatementParser::new(
            LayoutRegistry::builtin().unwrap(),
            CategoryTable::new(vec![CategoryRule::new("Coffee", &["starbucks"])]),
        );
        let text = "\
ORANGE COUNTY'S CREDIT UNION
ACCOUNT STATEMENT
PACIFIC CHECKING
01/05/24 01/05/24 -4.50 995.50 STARBUCKS 123
01/06/24 01/06/24 -9.99 985.51 NETFLIX
";
        let st = parser.parse_with_year(text, 2026).unwrap();
        assert_eq!(st.transactions.len(), 2);
        assert_eq!(st.transactions[0].category, "Coffee");
        assert_eq!(st.transactions[1].category, UNCATEGORIZED);
    }
}
