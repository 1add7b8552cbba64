//! Core data types for package references and aggregated groups.
//!
//! This module contains the fundamental types used throughout nugetscan:
//!
//! - [`PackageReference`] - A single dependency declaration found in a manifest
//! - [`PackageGroup`] - The aggregated record for one unique (name, version) pair
//! - [`ManifestKind`] - The manifest dialect a reference came from
//!
//! # Example
//!
//! ```
//! use nugetscan::model::{registry_url, PackageReference};
//!
//! let reference = PackageReference::new(
//!     "Newtonsoft.Json",
//!     Some("13.0.1".to_string()),
//!     "ProjectX",
//! );
//!
//! let url = registry_url(&reference.name, reference.version.as_deref());
//! assert_eq!(url, "https://www.nuget.org/packages/Newtonsoft.Json/13.0.1");
//! ```

mod package;

pub use package::*;
