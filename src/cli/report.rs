//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style; resolved metadata is printed as an
//! aligned table or as JSON. Kept out of the library core so bindmeta can be
//! used without any terminal output.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::args::OutputFormat;
use super::commands::CommandResult;
use crate::core::{BindingSource, MetadataKind, PropertyInfo, ResolutionContext, TypeRef};
use crate::issues::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Placeholder for unset metadata values in text output.
const UNSET: &str = "-";

// ============================================================
// Issues
// ============================================================

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(manifest_files: usize, elements: usize) {
    print_success_to(manifest_files, elements, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(manifest_files: usize, elements: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} manifest {}, {} {} - no issues found",
        manifest_files,
        if manifest_files == 1 { "file" } else { "files" },
        elements,
        if elements == 1 { "element" } else { "elements" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print the outcome of `bindmeta check`.
pub fn print(result: &CommandResult, verbose: bool) {
    if result.issues.is_empty() {
        print_success(result.manifest_files_checked, result.elements_checked);
        return;
    }

    report(&result.issues);

    if verbose && result.parse_error_count > 0 {
        eprintln!(
            "{} {} manifest file(s) could not be loaded",
            "note:".bold(),
            result.parse_error_count
        );
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message,
        issue.rule.to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path);

    if let Some(details) = &issue.details {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }
    if let Some(hint) = &issue.hint {
        let _ = writeln!(
            writer,
            "   {} {} {}",
            "=".blue(),
            "hint:".bold().cyan(),
            hint
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 { "problem" } else { "problems" },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

// ============================================================
// Resolved metadata
// ============================================================

/// Serializable view of one resolved element.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataView {
    pub key: String,
    pub kind: MetadataKind,
    pub model_type: TypeRef,
    pub binder_model_name: Option<String>,
    pub binder_type: Option<TypeRef>,
    pub binding_source: Option<BindingSource>,
    /// Markers backing the property filter, in declaration order.
    pub property_filter: Vec<String>,
    pub is_binding_allowed: bool,
    pub is_binding_required: bool,
    pub bound_constructor: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: TypeRef,
    pub included: bool,
}

impl MetadataView {
    /// `properties` are listed with their filter outcome; pass an empty
    /// slice for anything but a type.
    pub fn new(context: &ResolutionContext, properties: &[PropertyInfo]) -> Self {
        let metadata = &context.binding_metadata;
        Self {
            key: context.key.to_string(),
            kind: context.key.kind,
            model_type: context.key.model_type.clone(),
            binder_model_name: metadata.binder_model_name.clone(),
            binder_type: metadata.binder_type.clone(),
            binding_source: metadata.binding_source,
            property_filter: metadata
                .property_filter_provider
                .as_ref()
                .map(|provider| provider.markers().iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
            is_binding_allowed: metadata.is_binding_allowed,
            is_binding_required: metadata.is_binding_required,
            bound_constructor: metadata
                .bound_constructor
                .as_ref()
                .map(|ctor| ctor.signature(&context.key.model_type)),
            properties: properties
                .iter()
                .map(|property| PropertyView {
                    name: property.name.clone(),
                    property_type: property.property_type.clone(),
                    included: metadata.includes_property(property),
                })
                .collect(),
        }
    }
}

pub fn print_metadata(view: &MetadataView, format: OutputFormat) -> Result<()> {
    print_metadata_to(view, format, &mut io::stdout().lock())
}

pub fn print_metadata_to<W: Write>(
    view: &MetadataView,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(writer, "{}", serde_json::to_string_pretty(view)?)?;
        }
        OutputFormat::Text => print_metadata_text(view, writer)?,
    }
    Ok(())
}

fn print_metadata_text<W: Write>(view: &MetadataView, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        view.kind.to_string().dimmed(),
        view.key.bold()
    )?;

    let yes_no = |flag: bool| if flag { "yes" } else { "no" }.to_string();
    let rows = [
        ("name", view.binder_model_name.clone()),
        ("binder type", view.binder_type.as_ref().map(ToString::to_string)),
        ("source", view.binding_source.map(|s| s.to_string())),
        (
            "filter",
            (!view.property_filter.is_empty()).then(|| view.property_filter.join(" & ")),
        ),
        ("allowed", Some(yes_no(view.is_binding_allowed))),
        ("required", Some(yes_no(view.is_binding_required))),
        ("constructor", view.bound_constructor.clone()),
    ];
    let label_width = rows
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0);

    for (label, value) in &rows {
        match value {
            Some(value) => writeln!(writer, "  {}  {}", pad(label, label_width), value)?,
            None => writeln!(writer, "  {}  {}", pad(label, label_width), UNSET.dimmed())?,
        }
    }

    if view.properties.is_empty() {
        return Ok(());
    }

    writeln!(writer)?;
    writeln!(writer, "  {}", "properties".bold())?;
    let name_width = view
        .properties
        .iter()
        .map(|p| p.name.width())
        .max()
        .unwrap_or(0);
    let type_width = view
        .properties
        .iter()
        .map(|p| p.property_type.as_str().width())
        .max()
        .unwrap_or(0);
    for property in &view.properties {
        let status = if property.included {
            "included".green()
        } else {
            "excluded".yellow()
        };
        writeln!(
            writer,
            "    {}  {}  {}",
            pad(&property.name, name_width),
            pad(property.property_type.as_str(), type_width),
            status
        )?;
    }
    Ok(())
}

/// Left-align `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
