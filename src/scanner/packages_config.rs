use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ScanError;
use crate::model::{ManifestKind, PackageReference};

use super::{project_name, ManifestScanner};

/// Scanner for legacy `packages.config` manifests.
pub struct PackagesConfigScanner;

impl ManifestScanner for PackagesConfigScanner {
    fn name(&self) -> &'static str {
        "packages.config manifests"
    }

    fn kind(&self) -> ManifestKind {
        ManifestKind::PackagesConfig
    }

    fn scan(&self, root: &Path) -> Result<Vec<PackageReference>, ScanError> {
        let mut references = Vec::new();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: root.to_path_buf(),
                source: e,
            })?;

            if !entry.file_type().is_file() || entry.file_name() != "packages.config" {
                continue;
            }

            references.extend(scan_file(entry.path())?);
        }

        Ok(references)
    }
}

fn scan_file(path: &Path) -> Result<Vec<PackageReference>, ScanError> {
    let project = project_name(path);

    let content = fs::read_to_string(path).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc = roxmltree::Document::parse(&content).map_err(|e| ScanError::Xml {
        path: path.to_path_buf(),
        source: e,
    })?;

    let packages = doc
        .descendants()
        .find(|node| node.has_tag_name("packages"))
        .ok_or_else(|| ScanError::MissingElement {
            path: path.to_path_buf(),
            element: "packages",
        })?;

    let mut references = Vec::new();
    for node in packages
        .descendants()
        .filter(|node| node.has_tag_name("package"))
    {
        // `id` is not filtered here; only the project-file dialect skips
        // nameless entries.
        let name = node.attribute("id").unwrap_or_default();
        let version = node.attribute("version").map(str::to_owned);
        references.push(PackageReference::new(name, version, project.clone()));
    }

    Ok(references)
}
