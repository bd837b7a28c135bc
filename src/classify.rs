//! Column classification: explicit lists first, then name heuristics

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ColumnSelection, Heuristics};
use crate::model::{Category, Table};

/// Columns assigned to each category, in table order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Classification {
    pub columns: IndexMap<Category, Vec<String>>,
}

impl Classification {
    /// Column names assigned to `category`
    pub fn names(&self, category: Category) -> &[String] {
        self.columns.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Total number of classified columns
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assign a category to every column of `table`.
///
/// Resolution order is explicit selection, then heuristics, then
/// pass-through. Explicit names with no matching column are ignored. A name
/// listed under several categories keeps the first in `Category::ALL` order.
pub fn classify_columns(
    table: &mut Table,
    selection: &ColumnSelection,
    heuristics: Option<&Heuristics>,
) -> Classification {
    let mut explicit: FxHashMap<&str, Category> = FxHashMap::default();
    for category in Category::ALL {
        for name in selection.names(category) {
            if let Some(previous) = explicit.get(name.as_str()) {
                if *previous != category {
                    warn!(column = %name, kept = %previous, ignored = %category, "column listed under two categories");
                }
                continue;
            }
            explicit.insert(name.as_str(), category);
        }
    }

    for name in explicit.keys() {
        if table.column_index(name).is_none() {
            debug!(column = %name, "ignoring unknown column");
        }
    }

    let mut classification = Classification::default();
    for category in Category::ALL {
        classification.columns.insert(category, Vec::new());
    }

    for column in &mut table.columns {
        column.category = explicit
            .get(column.name.as_str())
            .copied()
            .or_else(|| heuristics.and_then(|h| h.classify(&column.name)));

        if let Some(category) = column.category {
            debug!(column = %column.name, %category, "classified column");
            classification
                .columns
                .entry(category)
                .or_default()
                .push(column.name.clone());
        }
    }

    classification
}
