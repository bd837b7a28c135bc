//! Column metadata and cleaning categories

use serde::{Deserialize, Serialize};

/// Semantic category deciding which cleaner runs on a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Money,
    Integer,
    Text,
    Reference,
}

impl Category {
    /// All categories, in the order explicit lists are consulted
    pub const ALL: [Category; 4] = [
        Category::Money,
        Category::Integer,
        Category::Text,
        Category::Reference,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Money => write!(f, "money"),
            Category::Integer => write!(f, "integer"),
            Category::Text => write!(f, "text"),
            Category::Reference => write!(f, "reference"),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name (normalized once headers have been rewritten)
    pub name: String,
    /// Header exactly as read from the file
    pub raw_name: String,
    /// Column index (0-based position)
    pub index: usize,
    /// Category assigned during classification, `None` means pass-through
    pub category: Option<Category>,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        let name = name.into();
        Self {
            raw_name: name.clone(),
            name,
            index,
            category: None,
        }
    }
}
