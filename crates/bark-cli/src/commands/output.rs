//! Output formatting for scan results.

use anyhow::Result;
use bark_core::{Finding, ScanFailure, ScanResult};
use serde::Serialize;
use std::fmt::Write;

use crate::OutputFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    marker: &'a str,
    files_scanned: usize,
    findings: &'a [Finding],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    failures: &'a [ScanFailure],
}

/// Print scan results in the specified format.
pub fn print(result: &ScanResult, marker: &str, format: OutputFormat) -> Result<()> {
    print!("{}", render(result, marker, format)?);
    Ok(())
}

/// Render scan results in the specified format.
pub fn render(result: &ScanResult, marker: &str, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result, marker),
        OutputFormat::Json => render_json(result, marker)?,
        OutputFormat::Compact => render_compact(result),
    })
}

fn render_text(result: &ScanResult, marker: &str) -> String {
    let mut out = String::new();

    for finding in &result.findings {
        let _ = write!(
            out,
            "{}:{}: \x1b[33m{marker}\x1b[0m",
            finding.file_path.display(),
            finding.line
        );
        if finding.message.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, ": {}", finding.message);
        }
    }

    for failure in &result.failures {
        let _ = writeln!(
            out,
            "\x1b[31merror\x1b[0m: {}: {}",
            failure.file_path.display(),
            failure.reason
        );
    }

    if !result.findings.is_empty() || !result.failures.is_empty() {
        out.push('\n');
    }

    let summary_color = if result.has_findings() {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    let _ = writeln!(
        out,
        "{summary_color}Found {} {marker} comment(s) in {} file(s), {} file(s) scanned\x1b[0m",
        result.findings.len(),
        result.files_with_findings(),
        result.files_scanned
    );

    out
}

fn render_json(result: &ScanResult, marker: &str) -> Result<String> {
    let report = JsonReport {
        marker,
        files_scanned: result.files_scanned,
        findings: &result.findings,
        failures: &result.failures,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

fn render_compact(result: &ScanResult) -> String {
    let mut out = String::new();
    for finding in &result.findings {
        let line = finding.to_string();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample() -> ScanResult {
        let mut result = ScanResult::new();
        result.files_scanned = 3;
        result.findings.push(Finding::new(
            "src/main.go",
            2,
            1,
            "Remove this",
            "// BARK: Remove this",
        ));
        result
            .findings
            .push(Finding::new("Dockerfile", 1, 1, "", "# BARK"));
        result
    }

    #[test]
    fn compact_output() {
        let out = render(&sample(), "BARK", OutputFormat::Compact).unwrap();
        insta::assert_snapshot!(out, @r"
        src/main.go:2:1: Remove this
        Dockerfile:1:1:
        ");
    }

    #[test]
    fn text_output_lists_findings_and_summary() {
        let out = render(&sample(), "BARK", OutputFormat::Text).unwrap();
        assert!(out.contains("src/main.go:2: \x1b[33mBARK\x1b[0m: Remove this\n"));
        assert!(out.contains("Dockerfile:1: \x1b[33mBARK\x1b[0m\n"));
        assert!(out.contains("Found 2 BARK comment(s) in 2 file(s), 3 file(s) scanned"));
    }

    #[test]
    fn text_output_reports_failures() {
        let mut result = ScanResult::new();
        result
            .failures
            .push(ScanFailure::new(Path::new("locked.go"), "permission denied"));
        let out = render(&result, "BARK", OutputFormat::Text).unwrap();
        assert!(out.contains("locked.go: permission denied"));
        assert!(out.contains("Found 0 BARK comment(s)"));
    }

    #[test]
    fn json_output_is_parseable() {
        let out = render(&sample(), "BARK", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["marker"], "BARK");
        assert_eq!(value["files_scanned"], 3);
        assert_eq!(value["findings"][0]["line"], 2);
        assert_eq!(value["findings"][0]["message"], "Remove this");
        assert_eq!(value["findings"][1]["message"], "");
        assert!(value.get("failures").is_none());
    }
}
