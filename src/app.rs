// src/app.rs
use std::{io, process::ExitCode};

use anyhow::Result;
use file_times_domain::ApplyOutcome;
use file_times_infra::FsTimestampStore;
use file_times_shared_kernel::{PresentationError, TimestampKind};
use file_times_usecase::TimestampEditor;

use crate::{
    config::{Action, Config},
    output::{self, TimestampReport},
    session::Session,
};

pub fn run(config: &Config) -> Result<ExitCode> {
    let store = FsTimestampStore::new();
    match &config.action {
        Action::Show { path, format } => {
            let mut editor = TimestampEditor::new(&store);
            editor.select_file(path);
            if let Some(report) = TimestampReport::collect(&editor) {
                output::emit(&report, *format, &mut io::stdout().lock())?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Action::Set { path, created, modified } => {
            let mut editor = TimestampEditor::new(&store);
            editor.select_file(path);
            let created = field_or_current(&editor, TimestampKind::Created, created.as_deref())?;
            let modified = field_or_current(&editor, TimestampKind::Modified, modified.as_deref())?;
            Ok(report_outcome(editor.apply_dates(&created, &modified)))
        }
        Action::Interactive => {
            Session::new(&store).run(io::stdin().lock(), io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Omitted fields keep whatever the file currently shows.
fn field_or_current(editor: &TimestampEditor<'_>, kind: TimestampKind, given: Option<&str>) -> Result<String> {
    if let Some(text) = given {
        return Ok(text.to_string());
    }
    match editor.read(kind) {
        Some(current) => Ok(current.into_inner()),
        None => {
            let path = editor.current_file().map(|h| h.path().to_path_buf()).unwrap_or_default();
            Err(PresentationError::CurrentValueUnavailable { kind, path }.into())
        }
    }
}

fn report_outcome(outcome: ApplyOutcome) -> ExitCode {
    match outcome {
        ApplyOutcome::Success => {
            println!("{}", outcome.message());
            ExitCode::SUCCESS
        }
        ApplyOutcome::Failure => {
            eprintln!("{}", outcome.message());
            ExitCode::FAILURE
        }
        ApplyOutcome::NoFile => {
            eprintln!("{}", outcome.message());
            ExitCode::from(2)
        }
    }
}
