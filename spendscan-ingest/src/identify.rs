//! Layout identification by full header-set match.

use tracing::debug;

use crate::layouts::LayoutRegistry;
use crate::types::LayoutDefinition;

/// First layout, in registry order, whose header patterns are all present.
pub fn identify<'r>(registry: &'r LayoutRegistry, text: &str) -> Option<&'r LayoutDefinition> {
    let found = registry.iter().find(|layout| layout.matches_headers(text));
    match found {
        Some(layout) => debug!(layout = layout.name, "headers matched"),
        None => debug!(layouts = registry.len(), "no layout matched"),
    }
    found
}
