//! Shell helpers: data directories, catalog files and icon folders
//!
//! Everything here touches the filesystem or is shared string plumbing; the
//! `core` modules stay free of I/O and call only [`eq_ignore_case`].
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/itemtrack/` - `config.json`
//!
//! # Example
//!
//! ```no_run
//! use itemtrack::utils::{list_icon_files, read_catalog};
//!
//! # async fn run() -> itemtrack::Result<()> {
//! let catalog = read_catalog("items.json".as_ref()).await?;
//! let icons = list_icon_files("ItemPNGS".as_ref()).await?;
//! println!("{} items, {} icons", catalog.len(), icons.len());
//! # Ok(())
//! # }
//! ```

use crate::core::error::Result;
use crate::core::item::Item;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File extensions accepted as item icons
pub const ICON_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

pub fn get_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "itemtrack", "itemtrack").map(|pd| pd.data_dir().to_path_buf())
}

/// Case-insensitive string equality (full Unicode lowercase).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Last component of a stored path, splitting on both `/` and `\`.
///
/// Catalogs written on Windows carry paths like `X:\Icons\Sword.png`,
/// which `Path::file_name` does not split on other platforms.
pub fn path_file_name(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.trim().is_empty())
}

pub fn is_icon_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ICON_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Lists icon files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub async fn list_icon_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut icons = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && is_icon_file(&path) {
            icons.push(path);
        } else {
            tracing::trace!("Skipping non-icon entry {}", path.display());
        }
    }

    icons.sort();
    Ok(icons)
}

/// Reads a catalog JSON file (an array of items).
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the file cannot be read and
/// [`crate::Error::Serialization`] if it is not a valid item array.
pub async fn read_catalog(path: &Path) -> Result<Vec<Item>> {
    let json = tokio::fs::read_to_string(path).await?;
    let items: Vec<Item> = serde_json::from_str(&json)?;
    tracing::debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Truncates a string to a maximum length and adds an ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Axe", "aXE"));
        assert!(eq_ignore_case("ÄXT", "äxt"));
        assert!(!eq_ignore_case("Axe", "Axes"));
        assert!(eq_ignore_case("", ""));
    }

    #[test]
    fn test_path_file_name_handles_both_separators() {
        assert_eq!(path_file_name("/icons/Axe.png"), Some("Axe.png"));
        assert_eq!(
            path_file_name(r"X:\Software\ItemPNGS\Sword.png"),
            Some("Sword.png")
        );
        assert_eq!(path_file_name(r"C:\art/mixed\Bow.png"), Some("Bow.png"));
        assert_eq!(path_file_name("Bare.png"), Some("Bare.png"));
        assert_eq!(path_file_name("/icons/"), None);
        assert_eq!(path_file_name("   "), None);
    }

    #[test]
    fn test_is_icon_file() {
        assert!(is_icon_file(Path::new("/icons/Axe.PNG")));
        assert!(is_icon_file(Path::new("bow.jpeg")));
        assert!(!is_icon_file(Path::new("notes.txt")));
        assert!(!is_icon_file(Path::new("README")));
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Short", 10), "Short");
        assert_eq!(truncate_string("A very long item name", 10), "A very ...");
    }

    #[tokio::test]
    async fn test_read_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_catalog(&dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[tokio::test]
    async fn test_read_catalog_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{ not an array").unwrap();
        let result = read_catalog(&path).await;
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }
}
