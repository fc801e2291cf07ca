//! Console output for the download operation

use std::path::Path;

use console::Style;

use super::DownloadReport;

pub fn output_directory_created(output_dir: &Path) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Output directory created:"),
        output_dir.display()
    );
}

pub fn downloaded(package: &str) {
    println!(
        "{} {}",
        Style::new().green().apply_to("Successfully downloaded"),
        package
    );
}

pub fn moved(file: &Path, output_dir: &Path) {
    let name = file.file_name().map_or_else(
        || file.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    println!(
        "{} {} to {}",
        Style::new().cyan().apply_to("Moved"),
        name,
        output_dir.display()
    );
}

/// Print the closing summary line, plus failure counts when there were any
pub fn summary(report: &DownloadReport) {
    println!(
        "{} {}/{} packages, moved {} files to {}",
        Style::new().bold().green().apply_to("Downloaded"),
        report.fetched.len(),
        report.resolved.len(),
        report.moved.len(),
        report.output_dir.display()
    );

    if report.has_failures() {
        println!(
            "{} {} downloads and {} moves failed",
            Style::new().bold().yellow().apply_to("Warning:"),
            report.fetch_failures.len(),
            report.move_failures.len()
        );
    }
}
