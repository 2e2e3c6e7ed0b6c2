use spendscan_finance::{StatementBatch, summarize};
use spendscan_ingest::StatementParser;

const DISCOVER: &str = "\
DISCOVER IT
CARDMEMBER SINCE 2019
New Balance: $54.50
TRANS. DATE PURCHASES MERCHANT CATEGORY AMOUNT
01/15 STARBUCKS COFFEE Restaurants -$4.50
02/02 SHELL OIL 57444 Gasoline -$50.00
";

const OCCU: &str = "\
ORANGE COUNTY'S CREDIT UNION
ACCOUNT STATEMENT
PACIFIC CHECKING
01/20/24 01/20/24 2,500.00 3,500.00 PAYROLL ACME INC
02/01/24 02/01/24 -1,200.00 2,300.00 RENT PAYMENT
";

/// Real-shape regression: two documents, one batch, newest first.
#[test]
fn test_batch_across_layouts() {
    let parser = StatementParser::builtin().unwrap();
    let mut batch = StatementBatch::new();
    batch.add("discover.pdf", parser.parse_with_year(DISCOVER, 2024).unwrap());
    batch.add("occu.pdf", parser.parse_with_year(OCCU, 2024).unwrap());

    assert!(batch.ensure_not_empty().is_ok());
    assert_eq!(batch.len(), 4);

    let dates: Vec<_> = batch.transactions.iter().map(|t| t.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-02-02", "2024-02-01", "2024-01-20", "2024-01-15"]);

    let discover = batch.source("discover.pdf").unwrap();
    assert_eq!(discover.layout, "discover");
    assert_eq!(discover.summary.balance.map(|b| b.to_string()), Some("54.50".to_string()));

    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["statement_info"][1]["layout"], "orange_county_credit_union");
    assert_eq!(json["transactions"][0]["account"], "Discover Credit Card");
}

#[test]
fn test_insights_from_parsed_statements() {
    let parser = StatementParser::builtin().unwrap();
    let mut batch = StatementBatch::new();
    batch.add("discover.pdf", parser.parse_with_year(DISCOVER, 2024).unwrap());
    batch.add("occu.pdf", parser.parse_with_year(OCCU, 2024).unwrap());

    let insights = summarize(&batch.transactions, 3);
    assert_eq!(insights.monthly.len(), 2);
    assert_eq!(insights.monthly[0].month, "2024-01");
    assert_eq!(insights.monthly[0].income.to_string(), "2500.00");
    // Rent is the biggest expense
    assert_eq!(insights.top_merchants[0].merchant, "RENT PAYMENT");
    assert_eq!(insights.by_category[0].category, "Financial");
}
