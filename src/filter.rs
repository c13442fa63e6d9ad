//! Include/exclude filters of a river.
//!
//! Both filters are single strings of comma-separated glob patterns, e.g.
//! `"*.doc,*.pdf"`. A path is selected when it matches an include pattern
//! (or no include filter is set) and no exclude pattern. Patterns are tried
//! against the path relative to the crawl root and against the bare file
//! name, so `resume.*` also excludes `cv/resume.pdf`.

use globset::{Glob, GlobSet, GlobSetBuilder};
use thiserror::Error;

use crate::models::FsRiver;

#[derive(Debug, Error)]
#[error("invalid glob pattern {pattern:?}: {source}")]
pub struct FilterError {
    pub pattern: String,
    #[source]
    pub source: globset::Error,
}

/// Splits a comma-separated filter, dropping blank entries.
pub fn split_patterns(filter: &str) -> Vec<String> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct FileFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FileFilter {
    pub fn new(includes: Option<&str>, excludes: Option<&str>) -> Result<Self, FilterError> {
        Ok(Self {
            include: includes.map(build_globset).transpose()?.flatten(),
            exclude: excludes.map(build_globset).transpose()?.flatten(),
        })
    }

    pub fn from_river(river: &FsRiver) -> Result<Self, FilterError> {
        Self::new(river.includes.as_deref(), river.excludes.as_deref())
    }

    /// `relative_path` uses `/` separators.
    pub fn is_match(&self, relative_path: &str) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        let hit = |set: &GlobSet| set.is_match(relative_path) || set.is_match(file_name);

        if self.exclude.as_ref().is_some_and(hit) {
            return false;
        }
        self.include.as_ref().map_or(true, hit)
    }
}

/// `None` when the filter holds no patterns.
fn build_globset(filter: &str) -> Result<Option<GlobSet>, FilterError> {
    let patterns = split_patterns(filter);
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in &patterns {
        let glob = Glob::new(pattern).map_err(|source| FilterError {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    let set = builder.build().map_err(|source| FilterError {
        pattern: filter.to_string(),
        source,
    })?;
    Ok(Some(set))
}
