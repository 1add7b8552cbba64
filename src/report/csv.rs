//! CSV report output format.
//!
//! The line layout is fixed: `name,version, ,"url","projects"` with no
//! header row, a literal empty third field, and literal quotes around the
//! URL and projects cells. Values are not otherwise escaped, so the
//! downstream consumer of this report sees the exact delimiter layout it
//! has always seen.

use crate::model::PackageGroup;

use super::is_excluded;

/// Generate the CSV report as a string (for file output).
pub fn generate_csv_string(groups: &[PackageGroup], exclude_prefixes: &[String]) -> String {
    let mut csv = String::new();

    for group in groups {
        if is_excluded(&group.name, exclude_prefixes) {
            continue;
        }

        csv.push_str(&format!(
            "{},{}, ,\"{}\",\"{}\"\n",
            group.name,
            group.version.as_deref().unwrap_or(""),
            group.registry_url,
            group.projects
        ));
    }

    csv
}
