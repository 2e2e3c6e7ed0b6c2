//! Keyword categorizer: ordered category table, first match wins.
//!
//! A description containing keywords from two categories always resolves to
//! whichever category is declared first, regardless of keyword specificity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::finance::{TransactionRecord, UNCATEGORIZED};

/// One category and the lowercase substrings that select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Ordered category → keyword table. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    /// Build a table from rules in precedence order. Keywords are lower-cased.
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| CategoryRule {
                keywords: r
                    .keywords
                    .iter()
                    .map(|k| k.to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
                name: r.name,
            })
            .collect();
        Self { rules }
    }

    /// The built-in table
    pub fn builtin() -> Self {
        Self::new(vec![
            CategoryRule::new(
                "Restaurants",
                &[
                    "restaurant", "cafe", "coffee", "food", "dining", "dine", "eat", "tst*",
                    "burger", "pizza", "breakfast", "lunch", "dinner", "bar", "grill", "kitchen",
                    "bakery", "donut", "wing", "jollibee", "wingstop", "elpolloloco", "matcha",
                    "boba", "tea studio", "marugame", "carls jr",
                ],
            ),
            CategoryRule::new(
                "Groceries",
                &[
                    "grocery", "supermarket", "market", "food", "sprouts", "target", "walmart",
                    "costco", "trader", "whole foods", "farmers market", "mitsuwa", "lazy acres",
                ],
            ),
            CategoryRule::new(
                "Transportation",
                &[
                    "gas", "fuel", "chevron", "shell", "uber", "lyft", "taxi", "car", "auto",
                    "parking", "toll",
                ],
            ),
            CategoryRule::new(
                "Entertainment",
                &[
                    "movie", "cinema", "theater", "concert", "event", "ticket", "netflix",
                    "spotify", "hulu", "disney", "amazon prime", "game", "steam", "playstation",
                    "xbox", "amusement", "bowlero", "round1",
                ],
            ),
            CategoryRule::new(
                "Shopping",
                &[
                    "amazon", "target", "walmart", "ebay", "etsy", "clothing", "shoe", "apparel",
                    "store", "mall", "shop", "retail", "uniqlo", "merchandise", "top canvas",
                    "pop mart",
                ],
            ),
            CategoryRule::new(
                "Utilities",
                &[
                    "electric", "water", "gas", "utility", "internet", "phone", "cable", "att",
                    "verizon", "spectrum", "comcast", "bill",
                ],
            ),
            CategoryRule::new(
                "Health",
                &[
                    "doctor", "hospital", "clinic", "medical", "dental", "pharmacy",
                    "prescription", "cvs", "walgreens", "health", "fitness", "gym",
                ],
            ),
            CategoryRule::new(
                "Travel",
                &["hotel", "flight", "airline", "airbnb", "vacation", "trip", "travel", "booking"],
            ),
            CategoryRule::new(
                "Education",
                &[
                    "school", "college", "university", "tuition", "book", "course", "class",
                    "education", "student",
                ],
            ),
            CategoryRule::new("Subscription", &["subscription", "membership", "recurring"]),
            CategoryRule::new(
                "Financial",
                &[
                    "payment", "transfer", "deposit", "withdraw", "fee", "interest", "loan",
                    "mortgage", "rent",
                ],
            ),
            CategoryRule::new("Insurance", &["insurance", "premium", "coverage", "policy"]),
            CategoryRule::new("Gifts & Donations", &["gift", "donation", "charity", "contribute"]),
            CategoryRule::new(
                "Services",
                &[
                    "service", "repair", "maintenance", "clean", "salon", "barber", "haircut",
                    "spa", "laundry", "college liquidation", "parking",
                ],
            ),
        ])
    }

    /// First category with any keyword contained in the lower-cased
    /// description, or [`UNCATEGORIZED`].
    pub fn categorize(&self, description: &str) -> &str {
        let desc = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| desc.contains(k.as_str())))
            .map(|rule| rule.name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Category names in precedence order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Overwrite the category of every item from its description.
    /// Returns how many items were categorized.
    pub fn recategorize<T: Categorizable>(&self, items: &mut [T]) -> usize {
        let mut n = 0;
        for item in items.iter_mut() {
            let Some(desc) = item.description() else {
                continue;
            };
            let category = self.categorize(desc).to_string();
            item.set_category(category);
            n += 1;
        }
        n
    }

    /// Fill only the items whose category is still missing.
    pub fn backfill(&self, records: &mut [TransactionRecord]) -> usize {
        let mut n = 0;
        for record in records.iter_mut().filter(|r| r.needs_category()) {
            record.category = self.categorize(&record.description).to_string();
            n += 1;
        }
        n
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Anything with a description that can take a category
pub trait Categorizable {
    fn description(&self) -> Option<&str>;
    fn set_category(&mut self, category: String);
}

impl Categorizable for TransactionRecord {
    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn set_category(&mut self, category: String) {
        self.category = category;
    }
}

/// Loose JSON records: `{"description": "...", ...}`. Other keys are kept.
/// Objects without a string description are left untouched.
impl Categorizable for Map<String, Value> {
    fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }

    fn set_category(&mut self, category: String) {
        self.insert("category".to_string(), Value::String(category));
    }
}

impl Categorizable for Value {
    fn description(&self) -> Option<&str> {
        self.as_object().and_then(|obj| obj.description())
    }

    fn set_category(&mut self, category: String) {
        if let Some(obj) = self.as_object_mut() {
            obj.set_category(category);
        }
    }
}
