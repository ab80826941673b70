//! Rendering of lint results for the command line.

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::fix::FixReport;
use crate::validation::{Diagnostic, RequirementReport};

#[derive(Serialize)]
struct DiagnosticsJson<'a> {
    valid: bool,
    diagnostics: &'a [Diagnostic],
}

/// Render structural diagnostics
pub fn render_diagnostics(diagnostics: &[Diagnostic], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                return Ok("No structural defects found\n".to_string());
            }
            let mut out = String::new();
            for diagnostic in diagnostics {
                out.push_str(&format!("- {}\n", diagnostic));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = DiagnosticsJson {
                valid: diagnostics.is_empty(),
                diagnostics,
            };
            Ok(serde_json::to_string_pretty(&json)? + "\n")
        }
    }
}

/// Render the requirements checklist
pub fn render_requirements(report: &RequirementReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let width = report.names().map(str::len).max().unwrap_or(0);
            let mut out = String::new();
            for result in &report.results {
                let mark = if result.passed { "pass" } else { "FAIL" };
                out.push_str(&format!("{:<width$}  {}\n", result.name, mark));
            }
            let passed = report.results.iter().filter(|r| r.passed).count();
            out.push_str(&format!("{}/{} requirements met\n", passed, report.len()));
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

/// Render fixed markup; JSON also lists the rewrites that were applied
pub fn render_fix(report: &FixReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = report.markup.clone();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}
