//! Precache listing for the update worker
//!
//! Only the glob shapes the build config uses are understood:
//! `**/*.ext`, `**/*.{ext,ext}`, `*.ext` and `*.{ext,ext}`.

use crate::error::{BundleError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use walkdir::WalkDir;

pub const PRECACHE_MANIFEST_FILE_NAME: &str = "precache-manifest.json";

/// Revision length in hex characters
const REVISION_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecacheGlob {
    recursive: bool,
    extensions: Vec<String>,
}

impl PrecacheGlob {
    pub fn parse(pattern: &str) -> Result<Self> {
        let unsupported = || BundleError::Glob(pattern.to_string());

        let (recursive, file_part) = match pattern.strip_prefix("**/") {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let ext_part = file_part.strip_prefix("*.").ok_or_else(unsupported)?;

        let extensions: Vec<String> = match ext_part
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
        {
            Some(list) => list.split(',').map(|e| e.trim().to_lowercase()).collect(),
            None => vec![ext_part.to_lowercase()],
        };

        if extensions
            .iter()
            .any(|e| e.is_empty() || e.contains(['*', '/', '{', '}', '?']))
        {
            return Err(unsupported());
        }

        Ok(Self {
            recursive,
            extensions,
        })
    }

    /// `relative` uses `/` separators and is relative to the output root
    pub fn matches(&self, relative: &str) -> bool {
        if !self.recursive && relative.contains('/') {
            return false;
        }
        Path::new(relative)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecacheEntry {
    pub url: String,
    pub revision: String,
}

pub fn revision(contents: &[u8]) -> String {
    let digest = hex::encode(Sha256::digest(contents));
    digest[..REVISION_LEN].to_string()
}

/// List every file under `dist` matching `glob`, sorted by URL. Files named
/// in `exclude` (relative paths) are skipped.
pub fn collect(
    dist: &Path,
    glob: &PrecacheGlob,
    public_url: &str,
    exclude: &[&str],
) -> Result<Vec<PrecacheEntry>> {
    let base = public_url.trim_end_matches('/');
    let mut entries = Vec::new();

    for entry in WalkDir::new(dist).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(dist) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if exclude.contains(&relative.as_str()) || !glob.matches(&relative) {
            continue;
        }

        let contents =
            std::fs::read(entry.path()).map_err(|e| BundleError::io(entry.path(), e))?;
        entries.push(PrecacheEntry {
            url: format!("{base}/{relative}"),
            revision: revision(&contents),
        });
    }

    entries.sort_by(|a, b| a.url.cmp(&b.url));
    tracing::debug!(count = entries.len(), dist = %dist.display(), "collected precache entries");
    Ok(entries)
}
