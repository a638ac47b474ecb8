use std::fmt::Write;

use comfy_table::Cell;

use crate::check::CheckReport;

use super::styling::{bright, bright_green, bright_red, cyan, dim};
use super::tables::{color_coded_status_cell, create_table, cyan_header};

/// Prints one row per checked workflow followed by the overall verdict.
pub fn print_check_report(report: &CheckReport) {
    println!("{}", render_check_report(report));
}

pub fn render_check_report(report: &CheckReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} {}", bright("🔎"), bright("Drift check").underlined());

    if report.entries.is_empty() {
        let _ = writeln!(output, "  {}", dim("No workflows found."));
        return output;
    }

    let mut table = create_table();
    table.set_header(cyan_header(&["Workflow", "File", "Status"]));
    for entry in &report.entries {
        table.add_row(vec![
            Cell::new(&entry.filename),
            Cell::new(entry.path.display()),
            color_coded_status_cell(entry.status),
        ]);
    }
    let _ = writeln!(output, "{table}");

    let outdated = report.outdated_count();
    let verdict = if outdated == 0 {
        bright_green(format!("All {} workflows are up to date", report.entries.len()))
    } else {
        bright_red(format!(
            "{outdated} of {} workflows are outdated",
            report.entries.len()
        ))
    };
    let _ = writeln!(output, "\n  {verdict}");
    if outdated > 0 {
        let _ = writeln!(output, "  {} {}", dim("Run"), cyan("gadk sync"));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Status, WorkflowStatus};
    use std::path::PathBuf;

    fn entry(filename: &str, status: Status) -> WorkflowStatus {
        WorkflowStatus {
            filename: filename.to_string(),
            path: PathBuf::from(format!(".github/workflows/{filename}.yml")),
            status,
        }
    }

    #[test]
    fn test_report_lists_every_workflow() {
        let report = CheckReport {
            entries: vec![
                entry("ci", Status::UpToDate),
                entry("release", Status::Missing),
                entry("nightly", Status::Changed),
            ],
        };

        let rendered = render_check_report(&report);
        assert!(rendered.contains("ci.yml"));
        assert!(rendered.contains("release.yml"));
        assert!(rendered.contains("nightly.yml"));
        assert!(rendered.contains("up to date"));
        assert!(rendered.contains("outdated (missing)"));
        assert!(rendered.contains("2 of 3 workflows are outdated"));
        assert!(rendered.contains("gadk sync"));
    }

    #[test]
    fn test_report_all_up_to_date() {
        let report = CheckReport {
            entries: vec![entry("ci", Status::UpToDate)],
        };

        let rendered = render_check_report(&report);
        assert!(rendered.contains("All 1 workflows are up to date"));
        assert!(!rendered.contains("gadk sync"));
    }

    #[test]
    fn test_report_without_workflows() {
        let rendered = render_check_report(&CheckReport::default());
        assert!(rendered.contains("No workflows found."));
    }
}
