//! Grouping and ordering of scanned package references.

use std::collections::HashMap;

use crate::model::{registry_url, PackageGroup, PackageReference};

/// Collapses references into one [`PackageGroup`] per unique
/// (name, version) pair.
///
/// Contributing project names are kept in encounter order, duplicates
/// preserved, and joined with `", "`. The result is sorted by name, then
/// version, using plain byte-wise string comparison; an absent version
/// orders before any concrete version of the same name. The sort makes
/// the output independent of the order the input directories were
/// scanned in.
pub fn group_packages(references: &[PackageReference]) -> Vec<PackageGroup> {
    let mut index: HashMap<(String, Option<String>), usize> = HashMap::new();
    let mut accumulated: Vec<(String, Option<String>, Vec<String>)> = Vec::new();

    for reference in references {
        let key = (reference.name.clone(), reference.version.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            accumulated.push((
                reference.name.clone(),
                reference.version.clone(),
                Vec::new(),
            ));
            accumulated.len() - 1
        });
        accumulated[slot].2.push(reference.project.clone());
    }

    let mut groups: Vec<PackageGroup> = accumulated
        .into_iter()
        .map(|(name, version, projects)| PackageGroup {
            registry_url: registry_url(&name, version.as_deref()),
            projects: projects.join(", "),
            name,
            version,
        })
        .collect();

    groups.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.version.cmp(&b.version)));
    groups
}
