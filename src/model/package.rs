use std::fmt;

/// The manifest dialect a package reference was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    PackagesConfig,
    Csproj,
}

impl ManifestKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ManifestKind::PackagesConfig => "packages.config",
            ManifestKind::Csproj => ".csproj",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single dependency declaration found in a manifest file.
///
/// The version is optional: both manifest dialects allow the version
/// attribute to be absent, and a missing attribute must not fail the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub name: String,
    pub version: Option<String>,
    /// Name of the immediate parent directory of the manifest file.
    pub project: String,
}

impl PackageReference {
    pub fn new(
        name: impl Into<String>,
        version: Option<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            project: project.into(),
        }
    }
}

/// The aggregated record for one unique (name, version) pair.
///
/// `projects` holds every contributing project name joined with `", "`,
/// duplicates preserved, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageGroup {
    pub name: String,
    pub version: Option<String>,
    pub projects: String,
    pub registry_url: String,
}

/// Builds the public registry page URL for a package.
///
/// The URL is constructed, never fetched; an absent version leaves the
/// final path segment empty.
pub fn registry_url(name: &str, version: Option<&str>) -> String {
    format!(
        "https://www.nuget.org/packages/{}/{}",
        name,
        version.unwrap_or("")
    )
}
