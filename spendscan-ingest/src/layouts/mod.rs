//! Registry of known statement layouts, in identification order.

pub mod discover;
pub mod orange_county;

use anyhow::Result;

use crate::types::LayoutDefinition;

/// Read-only catalog of layouts. Build once and share.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: Vec<LayoutDefinition>,
}

impl LayoutRegistry {
    pub fn new(layouts: Vec<LayoutDefinition>) -> Self {
        Self { layouts }
    }

    /// Discover, then Orange County's Credit Union
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(vec![discover::layout()?, orange_county::layout()?]))
    }

    pub fn get(&self, name: &str) -> Option<&LayoutDefinition> {
        self.layouts.iter().find(|l| l.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.layouts.iter().map(|l| l.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutDefinition> {
        self.layouts.iter()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
