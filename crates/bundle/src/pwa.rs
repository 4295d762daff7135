//! PWA asset generation for a built output directory

use crate::config::PwaSettings;
use crate::error::{BundleError, Result};
use crate::manifest::{MANIFEST_FILE_NAME, WebManifest, public_path};
use crate::precache::{self, PRECACHE_MANIFEST_FILE_NAME, PrecacheEntry, PrecacheGlob};
use crate::profile::BuildPlan;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

const SERVICE_WORKER_TEMPLATE: &str = include_str!("../templates/sw.js");

/// Page the manifest link is added to
pub const INDEX_FILE_NAME: &str = "index.html";

/// Files written by [`generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwaOutput {
    pub manifest: PathBuf,
    pub precache_manifest: PathBuf,
    pub service_worker: PathBuf,
    pub precached: usize,
}

/// Cache version derived from every entry's revision; changes whenever any
/// precached file changes
pub fn cache_version(entries: &[PrecacheEntry]) -> String {
    let mut hasher = Sha256::new();
    for entry in entries {
        hasher.update(entry.url.as_bytes());
        hasher.update(entry.revision.as_bytes());
    }
    hex::encode(hasher.finalize())[..12].to_string()
}

pub fn render_service_worker(entries: &[PrecacheEntry]) -> Result<String> {
    Ok(SERVICE_WORKER_TEMPLATE
        .replace("__CACHE_VERSION__", &cache_version(entries))
        .replace("__PRECACHE_ENTRIES__", &serde_json::to_string(entries)?))
}

/// Insert a manifest link before `</head>`. A page that already links a
/// manifest is returned unchanged; `None` when the page has no head.
pub fn link_manifest(html: &str, href: &str) -> Option<String> {
    if html.contains(r#"rel="manifest""#) {
        return Some(html.to_string());
    }
    let (head, rest) = html.split_at(html.find("</head>")?);
    Some(format!(
        "{head}  <link rel=\"manifest\" href=\"{href}\" />\n{rest}"
    ))
}

/// Every icon the manifest names must have been copied into the output
fn check_icons(pwa: &PwaSettings, dist: &Path) -> Result<()> {
    for icon in &pwa.icons {
        let path = dist.join(icon.src.trim_start_matches('/'));
        if !path.is_file() {
            return Err(BundleError::MissingIcon(path));
        }
    }
    Ok(())
}

fn write(path: PathBuf, contents: &str) -> Result<PathBuf> {
    std::fs::write(&path, contents).map_err(|e| BundleError::io(&path, e))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote");
    Ok(path)
}

/// Write the web manifest, the precache list and the worker script into `dist`
pub fn generate(plan: &BuildPlan, dist: &Path) -> Result<PwaOutput> {
    let pwa = plan.require_pwa()?;
    check_icons(pwa, dist)?;

    let manifest = WebManifest::new(pwa, &plan.public_url);
    let manifest_path = write(dist.join(MANIFEST_FILE_NAME), &manifest.to_json()?)?;

    let index_path = dist.join(INDEX_FILE_NAME);
    let page = std::fs::read_to_string(&index_path).map_err(|e| BundleError::io(&index_path, e))?;
    let linked = link_manifest(&page, &public_path(&plan.public_url, MANIFEST_FILE_NAME))
        .ok_or_else(|| BundleError::MissingHead(index_path.clone()))?;
    if linked != page {
        write(index_path, &linked)?;
    }

    let glob = PrecacheGlob::parse(&pwa.precache_glob)?;
    let entries = precache::collect(
        dist,
        &glob,
        &plan.public_url,
        &[pwa.service_worker.as_str(), PRECACHE_MANIFEST_FILE_NAME],
    )?;

    let precache_path = write(
        dist.join(PRECACHE_MANIFEST_FILE_NAME),
        &serde_json::to_string_pretty(&entries)?,
    )?;
    let worker_path = write(
        dist.join(&pwa.service_worker),
        &render_service_worker(&entries)?,
    )?;

    Ok(PwaOutput {
        manifest: manifest_path,
        precache_manifest: precache_path,
        service_worker: worker_path,
        precached: entries.len(),
    })
}
