//! Loads every manifest under the configured source root into one catalog.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use super::catalog::{DuplicateType, TypeCatalog};
use super::model::{ManifestError, ModelManifest};
use super::scanner::scan_manifests;
use crate::config::{Config, load_config};

/// A manifest that could not be read or parsed.
#[derive(Debug)]
pub struct ManifestFailure {
    pub path: String,
    pub error: ManifestError,
}

pub struct Workspace {
    pub config: Config,
    /// Directory manifests were scanned from.
    pub root: PathBuf,
    pub files: BTreeSet<String>,
    pub catalog: TypeCatalog,
    pub failures: Vec<ManifestFailure>,
    pub duplicates: Vec<DuplicateType>,
}

impl Workspace {
    /// Load config from `start_dir`, scan for manifests, and build the catalog.
    ///
    /// `source_root` overrides the config's `sourceRoot`.
    pub fn load(start_dir: &Path, source_root: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = load_config(start_dir)?.config;

        let root = match source_root {
            Some(root) => start_dir.join(root),
            None => start_dir.join(&config.source_root),
        };
        if !root.is_dir() {
            anyhow::bail!("Source root is not a directory: {}", root.display());
        }
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve source root: {}", root.display()))?;

        let scan = scan_manifests(
            &root.to_string_lossy(),
            &config.includes,
            &config.ignores,
            &config.manifest_suffix,
            verbose,
        );
        debug!(
            root = %root.display(),
            manifests = scan.files.len(),
            skipped = scan.skipped_count,
            "scanned manifests"
        );

        // Parse in parallel, merge in sorted path order.
        let mut parsed: Vec<(&String, Result<ModelManifest, ManifestError>)> = scan
            .files
            .par_iter()
            .map(|path| (path, ModelManifest::load(Path::new(path))))
            .collect();
        parsed.sort_by(|a, b| a.0.cmp(b.0));

        let mut catalog = TypeCatalog::new();
        let mut failures = Vec::new();
        let mut duplicates = Vec::new();

        for (path, result) in parsed {
            let display_path = relative_path(&root, path);
            match result {
                Ok(manifest) => duplicates.extend(catalog.add_manifest(&display_path, manifest)),
                Err(error) => {
                    debug!(path = %display_path, %error, "failed to load manifest");
                    failures.push(ManifestFailure {
                        path: display_path,
                        error,
                    });
                }
            }
        }

        Ok(Self {
            config,
            root,
            files: scan.files,
            catalog,
            failures,
            duplicates,
        })
    }
}

/// `path` relative to `root` when it lies below it, unchanged otherwise.
pub fn relative_path(root: &Path, path: &str) -> String {
    Path::new(path)
        .strip_prefix(root)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| path.to_string())
}
