//! Sort the files of a folder into category subfolders by extension

mod config;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

pub use config::OrganizeConfig;

/// Errors raised while organizing a folder
#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    #[error("folder does not exist or is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read categories from {}", path.display())]
    Categories {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> OrganizeError + '_ {
    move |source| OrganizeError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// One file and where it goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMove {
    pub from: PathBuf,
    pub to: PathBuf,
    pub category: String,
}

/// Result of organizing a folder
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizeSummary {
    /// Files per category, in the order categories were first used
    pub counts: IndexMap<String, usize>,
    pub moves: Vec<PlannedMove>,
    pub dry_run: bool,
}

impl OrganizeSummary {
    /// Category counts sorted by category name
    pub fn sorted_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> =
            self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        counts.sort_unstable_by(|a, b| a.0.cmp(b.0));
        counts
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Category for a file, by its last extension (case-insensitive)
pub fn detect_category<'a>(path: &Path, config: &'a OrganizeConfig) -> &'a str {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|ext| config.category_for(&ext.to_lowercase()))
        .unwrap_or(config.fallback.as_str())
}

/// First free path among `target`, `stem_1.ext`, `stem_2.ext`, ...
pub fn ensure_unique_path(target: &Path) -> PathBuf {
    if !target.exists() {
        return target.to_path_buf();
    }

    let parent = target.parent().unwrap_or_else(|| Path::new(""));
    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = target
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| parent.join(format!("{stem}_{n}{suffix}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| target.to_path_buf())
}

/// Move `from` to `to`, copying when a rename cannot cross filesystems
fn move_file(from: &Path, to: &Path) -> Result<(), OrganizeError> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to).map_err(io_error(from))?;
    fs::remove_file(from).map_err(io_error(from))
}

/// Organize the files directly inside `folder` (no recursion).
///
/// Subdirectories are left alone. Files are handled in name order. In dry-run
/// mode nothing is created or moved; the summary still lists every move.
pub fn organize_folder(folder: &Path, config: &OrganizeConfig) -> Result<OrganizeSummary, OrganizeError> {
    if !folder.is_dir() {
        return Err(OrganizeError::NotADirectory(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(io_error(folder))? {
        let entry = entry.map_err(io_error(folder))?;
        let file_type = entry.file_type().map_err(io_error(&entry.path()))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    let mut summary = OrganizeSummary {
        dry_run: config.dry_run,
        ..Default::default()
    };

    for file in files {
        let category = detect_category(&file, config).to_string();
        let target_dir = folder.join(&category);
        let Some(file_name) = file.file_name() else {
            continue;
        };

        if !config.dry_run {
            fs::create_dir_all(&target_dir).map_err(io_error(&target_dir))?;
        }
        let target = ensure_unique_path(&target_dir.join(file_name));

        if config.dry_run {
            debug!(from = %file.display(), to = %target.display(), "would move");
        } else {
            move_file(&file, &target)?;
            debug!(from = %file.display(), to = %target.display(), "moved");
        }

        *summary.counts.entry(category.clone()).or_default() += 1;
        summary.moves.push(PlannedMove {
            from: file,
            to: target,
            category,
        });
    }

    info!(folder = %folder.display(), files = summary.total(), dry_run = config.dry_run, "organized folder");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name).unwrap();
    }

    #[test]
    fn test_detect_category() {
        let config = OrganizeConfig::default();
        assert_eq!(detect_category(Path::new("photo.JPG"), &config), "Images");
        assert_eq!(detect_category(Path::new("report.pdf"), &config), "Documents");
        assert_eq!(detect_category(Path::new("data.csv"), &config), "Spreadsheets");
        assert_eq!(detect_category(Path::new("backup.tar.gz"), &config), "Archives");
        assert_eq!(detect_category(Path::new("main.py"), &config), "Code");
        assert_eq!(detect_category(Path::new("movie.mkv"), &config), "Other");
        assert_eq!(detect_category(Path::new(".bashrc"), &config), "Other");
        assert_eq!(detect_category(Path::new("Makefile"), &config), "Other");
    }

    #[test]
    fn test_ensure_unique_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("file.txt");
        assert_eq!(ensure_unique_path(&target), target);

        touch(dir.path(), "file.txt");
        assert_eq!(ensure_unique_path(&target), dir.path().join("file_1.txt"));

        touch(dir.path(), "file_1.txt");
        assert_eq!(ensure_unique_path(&target), dir.path().join("file_2.txt"));

        touch(dir.path(), "README");
        assert_eq!(
            ensure_unique_path(&dir.path().join("README")),
            dir.path().join("README_1")
        );
    }

    #[test]
    fn test_organize_folder_moves_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.PDF", "c.xlsx", "d.unknown", "e.zip"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "inner.png");

        let summary = organize_folder(dir.path(), &OrganizeConfig::default()).unwrap();

        assert_eq!(summary.total(), 5);
        assert_eq!(
            summary.sorted_counts(),
            vec![
                ("Archives", 1),
                ("Documents", 1),
                ("Images", 1),
                ("Other", 1),
                ("Spreadsheets", 1)
            ]
        );
        assert!(dir.path().join("Images/a.png").is_file());
        assert!(dir.path().join("Documents/b.PDF").is_file());
        assert!(dir.path().join("Other/d.unknown").is_file());
        assert!(!dir.path().join("a.png").exists());
        // Subdirectories are not descended into
        assert!(dir.path().join("nested/inner.png").is_file());
    }

    #[test]
    fn test_organize_folder_renames_on_conflict() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Images")).unwrap();
        touch(&dir.path().join("Images"), "a.png");
        touch(dir.path(), "a.png");

        let summary = organize_folder(dir.path(), &OrganizeConfig::default()).unwrap();

        assert_eq!(summary.moves[0].to, dir.path().join("Images").join("a_1.png"));
        assert!(dir.path().join("Images/a_1.png").is_file());
        assert!(dir.path().join("Images/a.png").is_file());
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        touch(dir.path(), "b.txt");

        let config = OrganizeConfig::default().with_dry_run(true);
        let summary = organize_folder(dir.path(), &config).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.moves.len(), 2);
        assert_eq!(summary.moves[0].to, dir.path().join("Images").join("a.png"));
        assert!(dir.path().join("a.png").is_file());
        assert!(!dir.path().join("Images").exists());
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            organize_folder(&missing, &OrganizeConfig::default()),
            Err(OrganizeError::NotADirectory(_))
        ));

        touch(dir.path(), "file.txt");
        assert!(matches!(
            organize_folder(&dir.path().join("file.txt"), &OrganizeConfig::default()),
            Err(OrganizeError::NotADirectory(_))
        ));
    }
}
