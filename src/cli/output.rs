//! Output formatting utilities

use crate::application::FindReport;
use crate::domain::TagSet;

/// Format a tag set for display, one tag per line in set order.
pub fn format_tag_list(tags: &TagSet) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }
    output
}

/// Format a find report: matching paths, one per line.
pub fn format_find_report(report: &FindReport) -> String {
    if report.matches.is_empty() {
        return "No matching files found".to_string();
    }

    let mut output = String::new();
    for path in &report.matches {
        output.push_str(&format!("{}\n", path.display()));
    }
    output
}
