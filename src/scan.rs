//! Dry-run crawl: lists the files a river would pick up.

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::filter::FileFilter;
use crate::models::FsRiver;

/// Crawl root of a river. Accepts plain paths and `file://` URLs.
pub fn river_root(river: &FsRiver) -> Result<PathBuf> {
    let url = river
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("River {:?} has no url", river.id))?;
    let path = url.strip_prefix("file://").unwrap_or(url);
    Ok(PathBuf::from(path))
}

/// Returns the selected files relative to the river root, sorted.
pub fn scan_river(river: &FsRiver) -> Result<Vec<String>> {
    let root = river_root(river)?;
    if !root.exists() {
        bail!("River root does not exist: {}", root.display());
    }

    let filter = FileFilter::from_river(river)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(&root) {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = relative_path(entry.path(), &root);
        if filter.is_match(&rel) {
            files.push(rel);
        }
    }

    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "scanned river root");
    Ok(files)
}

fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.doc"), "a").unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("resume.pdf"), "r").unwrap();
        fs::write(root.join("sub/c.pdf"), "c").unwrap();
        tmp
    }

    #[test]
    fn test_scan_applies_filters() {
        let tmp = fixture();
        let river = FsRiver::new("tmp")
            .with_url(tmp.path().display().to_string())
            .with_includes("*.doc,*.pdf")
            .with_excludes("resume.*");
        let files = scan_river(&river).unwrap();
        assert_eq!(files, vec!["a.doc", "sub/c.pdf"]);
    }

    #[test]
    fn test_scan_without_filters() {
        let tmp = fixture();
        let river = FsRiver::new("tmp").with_url(format!("file://{}", tmp.path().display()));
        let files = scan_river(&river).unwrap();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_missing_root() {
        let river = FsRiver::new("tmp").with_url("/definitely/not/here/fsriver");
        assert!(scan_river(&river).is_err());
        assert!(scan_river(&FsRiver::new("nourl")).is_err());
    }
}
