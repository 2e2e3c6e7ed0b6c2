//! Rendering parsed batches as a table, JSON, or CSV on stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use spendscan_core::TransactionRecord;
use spendscan_finance::{Insights, StatementBatch};
use std::io::Write;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    batch: &'a StatementBatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<&'a Insights>,
}

/// Flat CSV row; summary data stays out of CSV output
#[derive(Serialize)]
struct CsvRow<'a> {
    date: String,
    description: &'a str,
    category: &'a str,
    amount: String,
    account: &'a str,
}

impl<'a> From<&'a TransactionRecord> for CsvRow<'a> {
    fn from(t: &'a TransactionRecord) -> Self {
        Self {
            date: t.date.to_string(),
            description: &t.description,
            category: &t.category,
            amount: t.amount.to_string(),
            account: &t.account,
        }
    }
}

pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    batch: &StatementBatch,
    insights: Option<&Insights>,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonOutput { batch, insights })
                .context("serialize json")?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for t in &batch.transactions {
                wtr.serialize(CsvRow::from(t))?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table => render_table(out, batch, insights)?,
    }
    Ok(())
}

fn render_table<W: Write>(
    out: &mut W,
    batch: &StatementBatch,
    insights: Option<&Insights>,
) -> Result<()> {
    for info in &batch.statement_info {
        writeln!(
            out,
            "{} [{}] transactions={} net=${}",
            info.source, info.layout, info.transaction_count, info.net_amount
        )?;
        let s = &info.summary;
        if let Some(v) = s.beginning_balance {
            writeln!(out, "  beginning balance: ${v}")?;
        }
        if let Some(v) = s.balance {
            writeln!(out, "  balance: ${v}")?;
        }
        if let Some(v) = s.credit_limit {
            writeln!(out, "  credit limit: ${v}")?;
        }
        if let Some(v) = &s.payment_due_date {
            writeln!(out, "  payment due: {v}")?;
        }
        if let Some(v) = s.minimum_payment {
            writeln!(out, "  minimum payment: ${v}")?;
        }
    }
    writeln!(out)?;

    for t in &batch.transactions {
        writeln!(
            out,
            "{} {:>10} | {:<18} | {:<20} | {}",
            t.date, t.amount, t.category, t.account, t.description
        )?;
    }

    if let Some(ins) = insights {
        writeln!(out, "\n## Monthly")?;
        for m in &ins.monthly {
            writeln!(
                out,
                "- {} income=${} expense=${} net=${}",
                m.month, m.income, m.expense, m.net
            )?;
        }
        writeln!(out, "\n## Spending by category")?;
        for c in &ins.by_category {
            writeln!(out, "- {}: ${}", c.category, c.amount)?;
        }
        writeln!(out, "\n## Top merchants")?;
        for m in &ins.top_merchants {
            writeln!(out, "- {}: ${} ({} txns)", m.merchant, m.amount, m.count)?;
        }
        for c in &ins.category_changes {
            if let Some(pct) = c.change_percent {
                writeln!(out, "- {} changed {}% month over month", c.category, pct)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use spendscan_core::StatementRecord;

    fn batch() -> StatementBatch {
        let mut st = StatementRecord::new("discover");
        st.summary.balance = Some(Decimal::new(450, 2));
        st.transactions.push(TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "STARBUCKS, COFFEE",
            "Restaurants",
            Decimal::new(-450, 2),
            "Discover Credit Card",
        ));
        let mut b = StatementBatch::new();
        b.add("jan.pdf", st);
        b
    }

    fn rendered(format: OutputFormat, insights: Option<&Insights>) -> String {
        let mut buf = Vec::new();
        render(&mut buf, format, &batch(), insights).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = rendered(OutputFormat::Csv, None);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("date,description,category,amount,account"));
        assert_eq!(
            lines.next(),
            Some("2024-01-15,\"STARBUCKS, COFFEE\",Restaurants,-4.50,Discover Credit Card")
        );
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&rendered(OutputFormat::Json, None)).unwrap();
        assert_eq!(json["transactions"][0]["category"], "Restaurants");
        assert_eq!(json["statement_info"][0]["source"], "jan.pdf");
        assert_eq!(json["statement_info"][0]["balance"], 4.5);
        assert_eq!(json["statement_info"][0]["net_amount"], -4.5);
        assert!(json.get("insights").is_none());
    }

    #[test]
    fn test_table_with_insights() {
        let b = batch();
        let ins = spendscan_finance::summarize(&b.transactions, 3);
        let table = rendered(OutputFormat::Table, Some(&ins));
        assert!(table.contains("jan.pdf [discover] transactions=1 net=$-4.50"));
        assert!(table.contains("balance: $4.50"));
        assert!(table.contains("- Restaurants: $4.50"));
    }
}
