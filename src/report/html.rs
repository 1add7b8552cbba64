//! HTML report output format.
//!
//! Generates a self-contained HTML document with inline styling: one
//! table row per package group, the version cell linking to the package's
//! registry page. Text values are entity-encoded; the registry URL is
//! constructed from already-emitted name and version so it is used as-is.

use chrono::{DateTime, Local};

use crate::model::PackageGroup;

use super::is_excluded;

/// Generate the HTML report as a string (for file output).
///
/// `generated_at` is stamped into the page header as
/// `yyyy-MM-dd HH:mm:ss` with a UTC-offset suffix; passing it in keeps
/// the rest of the document reproducible under test.
pub fn generate_html_string(
    groups: &[PackageGroup],
    exclude_prefixes: &[String],
    generated_at: DateTime<Local>,
) -> String {
    let mut html = String::new();

    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>NuGet Packages Report</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; font-weight: bold; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        a { color: #0366d6; text-decoration: none; }
        a:hover { text-decoration: underline; }
        .package-name { font-weight: bold; }
        .version { font-family: monospace; }
        .version a { color: #0366d6; font-family: monospace; }
        .projects { font-size: 0.9em; color: #666; }
    </style>
</head>
<body>
    <h1>NuGet Packages Report</h1>
"#,
    );

    html.push_str(&format!(
        "    <p>Generated on: {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S %:z")
    ));

    html.push_str(
        r#"    <table>
        <thead>
            <tr>
                <th>Name</th>
                <th>Version</th>
                <th>Projects</th>
            </tr>
        </thead>
        <tbody>
"#,
    );

    for group in groups {
        if is_excluded(&group.name, exclude_prefixes) {
            continue;
        }

        html.push_str("            <tr>\n");
        html.push_str(&format!(
            "                <td class=\"package-name\">{}</td>\n",
            html_escape(&group.name)
        ));
        html.push_str(&format!(
            "                <td class=\"version\"><a href=\"{}\" target=\"_blank\">{}</a></td>\n",
            group.registry_url,
            html_escape(group.version.as_deref().unwrap_or("N/A"))
        ));
        html.push_str(&format!(
            "                <td class=\"projects\">{}</td>\n",
            html_escape(&group.projects)
        ));
        html.push_str("            </tr>\n");
    }

    html.push_str(
        r#"        </tbody>
    </table>
</body>
</html>
"#,
    );

    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::registry_url;
    use chrono::TimeZone;

    fn group(name: &str, version: Option<&str>, projects: &str) -> PackageGroup {
        PackageGroup {
            name: name.to_string(),
            version: version.map(str::to_owned),
            projects: projects.to_string(),
            registry_url: registry_url(name, version),
        }
    }

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = generate_html_string(&[], &[], fixed_timestamp());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<h1>NuGet Packages Report</h1>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_timestamp_format() {
        let html = generate_html_string(&[], &[], fixed_timestamp());

        assert!(html.contains("Generated on: 2024-05-01 12:30:00 "));
    }

    #[test]
    fn test_row_links_version_to_registry() {
        let groups = vec![group("Newtonsoft.Json", Some("13.0.1"), "ProjectX")];

        let html = generate_html_string(&groups, &[], fixed_timestamp());

        assert!(html.contains(
            "<a href=\"https://www.nuget.org/packages/Newtonsoft.Json/13.0.1\" target=\"_blank\">13.0.1</a>"
        ));
        assert!(html.contains("<td class=\"package-name\">Newtonsoft.Json</td>"));
        assert!(html.contains("<td class=\"projects\">ProjectX</td>"));
    }

    #[test]
    fn test_absent_version_links_as_na() {
        let groups = vec![group("NLog", None, "ProjectX")];

        let html = generate_html_string(&groups, &[], fixed_timestamp());

        assert!(html.contains(
            "<a href=\"https://www.nuget.org/packages/NLog/\" target=\"_blank\">N/A</a>"
        ));
    }

    #[test]
    fn test_text_values_are_entity_encoded() {
        let groups = vec![group("A&B<C>", Some("1.0\"beta"), "P<Q>")];

        let html = generate_html_string(&groups, &[], fixed_timestamp());

        assert!(html.contains("A&amp;B&lt;C&gt;"));
        assert!(html.contains("1.0&quot;beta"));
        assert!(html.contains("P&lt;Q&gt;"));
    }

    #[test]
    fn test_excluded_prefixes_are_dropped() {
        let groups = vec![
            group("Microsoft.Extensions.Logging", Some("8.0.0"), "ProjectX"),
            group("Dapper", Some("2.1.35"), "ProjectX"),
        ];
        let prefixes = vec!["Microsoft.".to_string()];

        let html = generate_html_string(&groups, &prefixes, fixed_timestamp());

        assert!(!html.contains("Microsoft.Extensions.Logging"));
        assert!(html.contains("Dapper"));
    }
}
