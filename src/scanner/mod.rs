//! Manifest scanners.
//!
//! This module provides the [`ManifestScanner`] trait and one
//! implementation per manifest dialect:
//!
//! | Scanner | Manifest | Declaration |
//! |---------|----------|-------------|
//! | [`PackagesConfigScanner`] | `packages.config` | `<packages><package id version/></packages>` |
//! | [`CsprojScanner`] | `*.csproj` | `<ItemGroup><PackageReference Include Version/></ItemGroup>` |
//!
//! Both scanners walk the whole directory tree under the given root and
//! attribute each reference to the manifest file's immediate parent
//! directory. A malformed manifest is fatal for the run; there is no
//! per-file isolation.

mod csproj;
mod packages_config;

pub use csproj::CsprojScanner;
pub use packages_config::PackagesConfigScanner;

use std::path::Path;

use crate::error::ScanError;
use crate::model::{ManifestKind, PackageReference};

/// Trait for extracting package references from one manifest dialect.
pub trait ManifestScanner {
    /// Returns the human-readable name of this scanner.
    fn name(&self) -> &'static str;

    /// Returns the manifest dialect this scanner handles.
    fn kind(&self) -> ManifestKind;

    /// Walks `root` recursively and returns every declaration found.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be walked, a manifest cannot
    /// be read, or a manifest is not well-formed XML.
    fn scan(&self, root: &Path) -> Result<Vec<PackageReference>, ScanError>;
}

/// Returns all scanners, in the order their results should be collected.
///
/// `packages.config` manifests are scanned before project files, so a
/// project declaring the same package in both contributes its legacy
/// entry first.
pub fn all_scanners() -> Vec<Box<dyn ManifestScanner>> {
    vec![Box::new(PackagesConfigScanner), Box::new(CsprojScanner)]
}

/// Name of the immediate parent directory of a manifest file.
pub(crate) fn project_name(manifest: &Path) -> String {
    manifest
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
