use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ScanError;
use crate::model::{ManifestKind, PackageReference};

use super::{project_name, ManifestScanner};

/// Scanner for SDK-style project files (`*.csproj`).
pub struct CsprojScanner;

impl ManifestScanner for CsprojScanner {
    fn name(&self) -> &'static str {
        ".csproj project files"
    }

    fn kind(&self) -> ManifestKind {
        ManifestKind::Csproj
    }

    fn scan(&self, root: &Path) -> Result<Vec<PackageReference>, ScanError> {
        let mut references = Vec::new();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: root.to_path_buf(),
                source: e,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            let is_csproj = entry
                .path()
                .extension()
                .is_some_and(|extension| extension == "csproj");
            if !is_csproj {
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

    let mut references = Vec::new();
    for item_group in doc
        .descendants()
        .filter(|node| node.has_tag_name("ItemGroup"))
    {
        for node in item_group
            .descendants()
            .filter(|node| node.has_tag_name("PackageReference"))
        {
            let name = match node.attribute("Include") {
                Some(name) if !name.trim().is_empty() => name,
                _ => continue,
            };
            let version = node.attribute("Version").map(str::to_owned);
            references.push(PackageReference::new(name, version, project.clone()));
        }
    }

    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_project(dir: &Path, project: &str, content: &str) {
        let project_dir = dir.join(project);
        fs::create_dir_all(&project_dir).unwrap();
        fs::write(project_dir.join(format!("{}.csproj", project)), content).unwrap();
    }

    #[test]
    fn test_scan_extracts_include_and_version() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "ProjectY",
            r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json" Version="13.0.1" />
    <PackageReference Include="Serilog" Version="3.1.1" />
  </ItemGroup>
</Project>"#,
        );

        let references = CsprojScanner.scan(dir.path()).unwrap();

        assert_eq!(references.len(), 2);
        assert_eq!(references[0].name, "Newtonsoft.Json");
        assert_eq!(references[0].version.as_deref(), Some("13.0.1"));
        assert_eq!(references[0].project, "ProjectY");
    }

    #[test]
    fn test_missing_version_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "ProjectY",
            r#"<Project>
  <ItemGroup>
    <PackageReference Include="Dapper" />
  </ItemGroup>
</Project>"#,
        );

        let references = CsprojScanner.scan(dir.path()).unwrap();

        assert_eq!(references.len(), 1);
        assert_eq!(references[0].version, None);
    }

    #[test]
    fn test_blank_include_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "ProjectY",
            r#"<Project>
  <ItemGroup>
    <PackageReference Include="" Version="1.0.0" />
    <PackageReference Include="   " Version="1.0.0" />
    <PackageReference Version="1.0.0" />
    <PackageReference Include="Dapper" Version="2.1.35" />
  </ItemGroup>
</Project>"#,
        );

        let references = CsprojScanner.scan(dir.path()).unwrap();

        assert_eq!(references.len(), 1);
        assert_eq!(references[0].name, "Dapper");
    }

    #[test]
    fn test_multiple_item_groups_are_collected() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "ProjectY",
            r#"<Project>
  <ItemGroup>
    <PackageReference Include="Dapper" Version="2.1.35" />
  </ItemGroup>
  <ItemGroup>
    <PackageReference Include="Polly" Version="8.3.0" />
  </ItemGroup>
</Project>"#,
        );

        let references = CsprojScanner.scan(dir.path()).unwrap();

        assert_eq!(references.len(), 2);
        assert_eq!(references[1].name, "Polly");
    }

    #[test]
    fn test_project_without_package_references_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_project(
            dir.path(),
            "ProjectY",
            r#"<Project><PropertyGroup><TargetFramework>net8.0</TargetFramework></PropertyGroup></Project>"#,
        );

        let references = CsprojScanner.scan(dir.path()).unwrap();

        assert!(references.is_empty());
    }

    #[test]
    fn test_non_csproj_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Project.vbproj"), "<Project />").unwrap();
        fs::write(dir.path().join("Project.csproj.user"), "not xml").unwrap();

        let references = CsprojScanner.scan(dir.path()).unwrap();

        assert!(references.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_project(dir.path(), "ProjectY", "<Project><ItemGroup>");

        let err = CsprojScanner.scan(dir.path()).unwrap_err();

        assert!(matches!(err, ScanError::Xml { .. }));
    }
}
