//! Catalog directory access.
//!
//! The catalog root holds one subdirectory per layer group; each group
//! lists the GeoJSON files directly inside it. Requested paths are checked
//! lexically against the root before anything touches the filesystem.

use std::fs;
use std::path::{Component, Path, PathBuf};

use geoview_core::{GeoJsonKind, LayerGroup, is_geojson_file_name};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Absolute, normalized catalog root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRoot {
    path: PathBuf,
}

impl CatalogRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: normalize(&path.into()),
        }
    }

    /// Resolve `configured` against `base` unless it is already absolute.
    pub fn resolve_from(base: &Path, configured: &Path) -> Self {
        Self::new(base.join(configured))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List every group and its GeoJSON files, both sorted by name.
    ///
    /// A missing root yields an empty catalog. Groups without any GeoJSON
    /// file are omitted.
    pub fn scan(&self) -> Result<Vec<LayerGroup>, ApiError> {
        if !self.path.exists() {
            warn!(root = %self.path.display(), "catalog root does not exist");
            return Ok(Vec::new());
        }

        let mut groups = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(ApiError::ListLayers)? {
            let entry = entry.map_err(ApiError::ListLayers)?;
            if !entry.file_type().map_err(ApiError::ListLayers)?.is_dir() {
                continue;
            }
            let Ok(group_name) = entry.file_name().into_string() else {
                continue;
            };

            let files = list_geojson_files(&entry.path())?;
            if files.is_empty() {
                continue;
            }
            groups.push(LayerGroup::new(group_name, files));
        }

        groups.sort_by(|a, b| a.group_name.cmp(&b.group_name));
        debug!(groups = groups.len(), "scanned catalog");
        Ok(groups)
    }

    /// Map a client-supplied relative path to a file under the root.
    ///
    /// Order of checks: non-empty, stays inside the root, GeoJSON suffix.
    pub fn resolve(&self, requested: &str) -> Result<PathBuf, ApiError> {
        if requested.is_empty() {
            return Err(ApiError::MissingPath);
        }

        let resolved = normalize(&self.path.join(requested));
        if !resolved.starts_with(&self.path) {
            warn!(requested, "rejected path outside catalog root");
            return Err(ApiError::PathOutsideRoot);
        }

        let name_ok = resolved
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_geojson_file_name);
        if !name_ok {
            return Err(ApiError::InvalidFileType);
        }

        Ok(resolved)
    }

    /// Read and validate one GeoJSON document.
    ///
    /// The parsed value is returned as-is, so object key order survives
    /// the round trip.
    pub fn load_document(&self, requested: &str) -> Result<Value, ApiError> {
        let path = self.resolve(requested)?;
        if !path.exists() {
            return Err(ApiError::FileNotFound);
        }

        let text = fs::read_to_string(&path).map_err(ApiError::ReadFile)?;
        let document: Value = serde_json::from_str(&text).map_err(ApiError::ParseFile)?;

        match GeoJsonKind::of_document(&document) {
            Some(kind) => {
                debug!(path = %path.display(), kind = kind.as_str(), "serving layer");
                Ok(document)
            }
            None => Err(ApiError::InvalidGeoJson),
        }
    }
}

fn list_geojson_files(dir: &Path) -> Result<Vec<String>, ApiError> {
    let mut files: Vec<String> = fs::read_dir(dir)
        .map_err(ApiError::ListLayers)?
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .filter(|name| is_geojson_file_name(name))
        .collect();
    files.sort();
    Ok(files)
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` at the root stays at the root, matching how absolute paths behave.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component)
            }
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
        }
    }
    out
}
