//! Output emission: page files, the generation manifest and pruning.
//!
//! Emission is split into a pure planning step and a filesystem step.
//! [`plan`] renders every screen to an in-memory [`PreviewBundle`];
//! [`write_bundle`] commits a bundle to disk. Dry runs stop after
//! planning and touch nothing, which also guarantees that a dry run and
//! a write run produce byte-identical page content for the same input.

mod page;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::StencilError;
use crate::AnalyzedScreen;

pub use page::render_page;

/// Manifest file name, written inside the output root.
pub const MANIFEST_FILE_NAME: &str = ".stencil-manifest.json";

/// One generated page in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Route path, e.g. `/` or `/create-goal`.
    pub route: String,

    /// Path of the page file relative to the output root.
    pub file: String,

    /// Number of classified elements rendered into the page.
    pub component_count: usize,
}

/// Record of a generation run, persisted next to the generated pages.
///
/// The manifest is written last, after every page file, so its presence
/// always describes a complete set of outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationManifest {
    /// Content hash of the canonical source document.
    pub source_hash: String,

    /// RFC 3339 timestamp of the run.
    pub generated_at: String,

    /// One entry per generated page, in screen order.
    pub screens: Vec<ManifestEntry>,

    /// Source hash of the previous run, present only when it differs
    /// from [`source_hash`](Self::source_hash).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_hash: Option<String>,
}

/// A rendered page awaiting (or skipping) a filesystem write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedFile {
    /// Route the page serves.
    pub route: String,

    /// Path relative to the output root.
    pub rel_path: PathBuf,

    /// Full page source.
    pub content: String,
}

/// The complete planned output of a run: page files plus manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewBundle {
    pub files: Vec<EmittedFile>,
    pub manifest: GenerationManifest,
}

/// Maps a route to its directory relative to the output root.
///
/// The root route maps to the output root itself; every other route
/// strips its leading slash and becomes a child directory.
fn route_dir(route: &str) -> &str {
    route.strip_prefix('/').unwrap_or(route)
}

/// Render all screens into an in-memory bundle. No filesystem effects.
pub fn plan(
    screens: &[AnalyzedScreen],
    fingerprint: &str,
    previous_hash: Option<String>,
    config: &GeneratorConfig,
) -> PreviewBundle {
    let files: Vec<EmittedFile> = screens
        .iter()
        .map(|screen| {
            let route = screen.screen.route.as_str();
            let rel_path = Path::new(route_dir(route)).join(config.page_file_name());
            EmittedFile {
                route: route.to_owned(),
                rel_path,
                content: render_page(screen, route),
            }
        })
        .collect();

    let manifest = GenerationManifest {
        source_hash: fingerprint.to_owned(),
        generated_at: Utc::now().to_rfc3339(),
        screens: files
            .iter()
            .zip(screens)
            .map(|(file, screen)| ManifestEntry {
                route: file.route.clone(),
                file: file.rel_path.to_string_lossy().into_owned(),
                component_count: screen.classified.len(),
            })
            .collect(),
        previous_hash: previous_hash.filter(|hash| hash != fingerprint),
    };

    PreviewBundle { files, manifest }
}

/// Read the manifest of a previous run, if one exists and parses.
///
/// A missing, unreadable or malformed manifest is treated as "no
/// previous run"; generation must never fail on a stale manifest.
pub fn read_manifest(out_dir: &Path) -> Option<GenerationManifest> {
    let path = out_dir.join(MANIFEST_FILE_NAME);
    let raw = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(manifest) => Some(manifest),
        Err(err) => {
            debug!(path = path.display().to_string().as_str(); "ignoring unparsable manifest: {err}");
            None
        }
    }
}

/// Write a planned bundle to disk: directories and page files first,
/// then the manifest.
///
/// Any I/O failure aborts before the manifest is updated, so an existing
/// manifest keeps describing the last complete run.
pub fn write_bundle(out_dir: &Path, bundle: &PreviewBundle) -> Result<(), StencilError> {
    for file in &bundle.files {
        let path = out_dir.join(&file.rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        debug!(route = file.route.as_str(); "wrote {}", path.display());
    }

    let manifest = serde_json::to_string_pretty(&bundle.manifest)
        .map_err(|err| StencilError::Emit(format!("manifest serialization failed: {err}")))?;
    fs::write(out_dir.join(MANIFEST_FILE_NAME), manifest)?;

    info!(files = bundle.files.len(); "generation complete in {}", out_dir.display());
    Ok(())
}

/// Remove direct child directories of the output root that no current
/// route claims. Returns the removed paths.
///
/// Only directories are considered; files at the root are never touched.
/// Failures are logged as warnings and never fail the run.
pub fn prune(out_dir: &Path, keep_routes: &[String]) -> Vec<PathBuf> {
    let keep: HashSet<&str> = keep_routes
        .iter()
        .map(|route| route_dir(route))
        .filter(|dir| !dir.is_empty())
        .collect();

    let entries = match fs::read_dir(out_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("pruning skipped, cannot read {}: {err}", out_dir.display());
            return Vec::new();
        }
    };

    let mut removed = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("pruning skipped an entry in {}: {err}", out_dir.display());
                continue;
            }
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if keep.contains(name.to_string_lossy().as_ref()) {
            continue;
        }
        match fs::remove_dir_all(&path) {
            Ok(()) => {
                info!("pruned stale directory {}", path.display());
                removed.push(path);
            }
            Err(err) => warn!("failed to prune {}: {err}", path.display()),
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use stencil_core::component::ScreenSpec;
    use stencil_core::geometry::{Point, Rect, Size};

    use super::*;

    fn screen(id: &str, route: &str) -> AnalyzedScreen {
        AnalyzedScreen {
            screen: ScreenSpec {
                id: id.to_owned(),
                route: route.to_owned(),
                frame: Rect::new(Point::new(0.0, 0.0), Size::new(375.0, 667.0)),
                elements: vec![],
            },
            classified: vec![],
        }
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn test_root_route_maps_to_out_root() {
        let bundle = plan(&[screen("mobile_screen_1", "/")], "abc", None, &config());

        assert_eq!(bundle.files.len(), 1);
        assert_eq!(bundle.files[0].rel_path, PathBuf::from("page.tsx"));
        assert_eq!(bundle.manifest.screens[0].file, "page.tsx");
    }

    #[test]
    fn test_named_route_maps_to_child_dir() {
        let bundle = plan(
            &[screen("mobile_screen_goals", "/goals")],
            "abc",
            None,
            &config(),
        );

        assert_eq!(bundle.files[0].rel_path, PathBuf::from("goals/page.tsx"));
    }

    #[test]
    fn test_previous_hash_recorded_only_when_changed() {
        let same = plan(&[], "abc", Some("abc".to_owned()), &config());
        assert_eq!(same.manifest.previous_hash, None);

        let changed = plan(&[], "abc", Some("old".to_owned()), &config());
        assert_eq!(changed.manifest.previous_hash, Some("old".to_owned()));
    }

    #[test]
    fn test_write_bundle_creates_pages_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = plan(
            &[screen("mobile_screen_1", "/"), screen("mobile_screen_goals", "/goals")],
            "abc",
            None,
            &config(),
        );

        write_bundle(dir.path(), &bundle).unwrap();

        assert!(dir.path().join("page.tsx").is_file());
        assert!(dir.path().join("goals/page.tsx").is_file());

        let manifest = read_manifest(dir.path()).unwrap();
        assert_eq!(manifest.source_hash, "abc");
        assert_eq!(manifest.screens.len(), 2);
        assert_eq!(manifest.screens[1].route, "/goals");
        assert_eq!(manifest.screens[1].component_count, 0);
    }

    #[test]
    fn test_read_manifest_tolerates_garbage() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE_NAME), "not json").unwrap();

        assert_eq!(read_manifest(dir.path()), None);
    }

    #[test]
    fn test_read_manifest_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_manifest(dir.path()), None);
    }

    #[test]
    fn test_prune_removes_only_stale_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("goals")).unwrap();
        fs::create_dir(dir.path().join("old-screen")).unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        let removed = prune(dir.path(), &["/".to_owned(), "/goals".to_owned()]);

        assert_eq!(removed, vec![dir.path().join("old-screen")]);
        assert!(dir.path().join("goals").is_dir());
        assert!(dir.path().join("notes.txt").is_file());
        assert!(!dir.path().join("old-screen").exists());
    }

    #[test]
    fn test_prune_missing_out_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-generated");

        assert!(prune(&missing, &[]).is_empty());
    }

    #[test]
    fn test_manifest_serializes_camel_case() {
        let manifest = GenerationManifest {
            source_hash: "abc".to_owned(),
            generated_at: "2026-01-01T00:00:00+00:00".to_owned(),
            screens: vec![ManifestEntry {
                route: "/".to_owned(),
                file: "page.tsx".to_owned(),
                component_count: 3,
            }],
            previous_hash: None,
        };

        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("\"sourceHash\""));
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"componentCount\":3"));
        assert!(!json.contains("previousHash"));
    }
}
