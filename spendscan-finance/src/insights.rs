//! Spending insights over a transaction list: monthly totals, spend by
//! category, top merchants, and month-over-month category changes.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use spendscan_core::TransactionRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    /// YYYY-MM
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantSpend {
    pub merchant: String,
    pub amount: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChange {
    pub category: String,
    pub previous: Decimal,
    pub current: Decimal,
    pub change: Decimal,
    /// Percent of the previous month; `None` when that was zero
    pub change_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub monthly: Vec<MonthlyTotals>,
    pub by_category: Vec<CategorySpend>,
    pub top_merchants: Vec<MerchantSpend>,
    pub category_changes: Vec<CategoryChange>,
}

fn month_key(t: &TransactionRecord) -> String {
    format!("{:04}-{:02}", t.date.year(), t.date.month())
}

/// Income, expense and net per month, oldest month first
pub fn monthly_totals(txns: &[TransactionRecord]) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in txns {
        let entry = months.entry(month_key(t)).or_default();
        if t.is_income() {
            entry.0 += t.amount;
        } else if t.is_expense() {
            entry.1 += t.abs_amount();
        }
    }
    months
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTotals {
            month,
            income,
            expense,
            net: income - expense,
        })
        .collect()
}

/// Expense totals per category, largest first
pub fn spending_by_category(txns: &[TransactionRecord]) -> Vec<CategorySpend> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        *totals.entry(t.category.as_str()).or_default() += t.abs_amount();
    }
    let mut out: Vec<CategorySpend> = totals
        .into_iter()
        .map(|(category, amount)| CategorySpend { category: category.to_string(), amount })
        .collect();
    out.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    out
}

/// Expense totals per description, largest first, at most `limit`
pub fn top_merchants(txns: &[TransactionRecord], limit: usize) -> Vec<MerchantSpend> {
    let mut totals: HashMap<&str, (Decimal, usize)> = HashMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        let entry = totals.entry(t.description.as_str()).or_default();
        entry.0 += t.abs_amount();
        entry.1 += 1;
    }
    let mut out: Vec<MerchantSpend> = totals
        .into_iter()
        .map(|(merchant, (amount, count))| MerchantSpend {
            merchant: merchant.to_string(),
            amount,
            count,
        })
        .collect();
    out.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.merchant.cmp(&b.merchant)));
    out.truncate(limit);
    out
}

/// Per-category expense change between the two latest months that have
/// spending in that category. Categories seen in only one month are left out.
pub fn category_changes(txns: &[TransactionRecord]) -> Vec<CategoryChange> {
    let mut by_category: BTreeMap<&str, BTreeMap<String, Decimal>> = BTreeMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        *by_category
            .entry(t.category.as_str())
            .or_default()
            .entry(month_key(t))
            .or_default() += t.abs_amount();
    }

    let hundred = Decimal::from(100);
    let mut out = Vec::new();
    for (category, months) in by_category {
        let mut latest = months.values().rev();
        let (Some(&current), Some(&previous)) = (latest.next(), latest.next()) else {
            continue;
        };
        let change = current - previous;
        let change_percent = (!previous.is_zero()).then(|| (change / previous * hundred).round_dp(1));
        out.push(CategoryChange {
            category: category.to_string(),
            previous,
            current,
            change,
            change_percent,
        });
    }
    out
}

pub fn summarize(txns: &[TransactionRecord], merchant_limit: usize) -> Insights {
    Insights {
        monthly: monthly_totals(txns),
        by_category: spending_by_category(txns),
        top_merchants: top_merchants(txns, merchant_limit),
        category_changes: category_changes(txns),
    }
}
