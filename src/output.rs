// src/output.rs
use std::io::Write;

use anyhow::Result;
use file_times_shared_kernel::FormattedDate;
use file_times_usecase::TimestampEditor;
use serde::Serialize;

use crate::config::OutputFormat;

const UNAVAILABLE: &str = "unavailable";

/// Snapshot of the selected file's timestamps for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampReport {
    pub path: String,
    pub created: Option<FormattedDate>,
    pub modified: Option<FormattedDate>,
}

impl TimestampReport {
    /// `None` when the editor has no file selected.
    pub fn collect(editor: &TimestampEditor<'_>) -> Option<Self> {
        let handle = editor.current_file()?;
        Some(Self {
            path: handle.path().to_string_lossy().into_owned(),
            created: editor.read_created(),
            modified: editor.read_modified(),
        })
    }
}

/// Emit `report` in the requested format.
pub fn emit(report: &TimestampReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(report, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text(report: &TimestampReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "File:      {}", report.path)?;
    writeln!(out, "Created:   {}", display_or_unavailable(report.created.as_ref()))?;
    writeln!(out, "Modified:  {}", display_or_unavailable(report.modified.as_ref()))
}

fn display_or_unavailable(value: Option<&FormattedDate>) -> &str {
    value.map_or(UNAVAILABLE, FormattedDate::as_str)
}
