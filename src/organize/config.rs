//! Extension-to-category table for the organizer

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::OrganizeError;

/// Default table: category name to extensions (without the dot)
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("Images", &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "svg"]),
    ("Documents", &["pdf", "doc", "docx", "txt", "md", "rtf"]),
    ("Spreadsheets", &["xls", "xlsx", "csv"]),
    ("Presentations", &["ppt", "pptx"]),
    ("Archives", &["zip", "tar", "gz", "rar", "7z"]),
    (
        "Code",
        &["py", "js", "ts", "java", "c", "cpp", "h", "hpp", "html", "css"],
    ),
];

/// Organizer settings
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    categories: IndexMap<String, Vec<String>>,
    /// extension -> position in `categories`; the first category listing it wins
    index: FxHashMap<String, usize>,
    /// Folder for files whose extension no category claims
    pub fallback: String,
    /// Report moves without touching the filesystem
    pub dry_run: bool,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, exts)| {
                (
                    name.to_string(),
                    exts.iter().map(|e| e.to_string()).collect(),
                )
            })
            .collect();
        Self::with_categories(categories)
    }
}

impl OrganizeConfig {
    /// Build from a category table. Extensions may carry a leading dot and
    /// any case.
    pub fn with_categories(categories: IndexMap<String, Vec<String>>) -> Self {
        let categories: IndexMap<String, Vec<String>> = categories
            .into_iter()
            .map(|(name, exts)| (name, exts.iter().map(|e| normalize_extension(e)).collect()))
            .collect();

        let mut index = FxHashMap::default();
        for (pos, exts) in categories.values().enumerate() {
            for ext in exts {
                index.entry(ext.clone()).or_insert(pos);
            }
        }

        Self {
            categories,
            index,
            fallback: "Other".to_string(),
            dry_run: false,
        }
    }

    /// Parse a JSON object mapping category names to extension lists
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let categories: IndexMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::with_categories(categories))
    }

    /// Load the category table from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, OrganizeError> {
        let json = fs::read_to_string(path).map_err(|source| OrganizeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| OrganizeError::Categories {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Category table, in declaration order
    pub fn categories(&self) -> &IndexMap<String, Vec<String>> {
        &self.categories
    }

    /// Category claiming a lowercase extension (no leading dot)
    pub fn category_for(&self, ext: &str) -> Option<&str> {
        self.index
            .get(ext)
            .and_then(|&pos| self.categories.get_index(pos))
            .map(|(name, _)| name.as_str())
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
