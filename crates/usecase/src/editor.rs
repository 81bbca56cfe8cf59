// crates/usecase/src/editor.rs
use std::{path::Path, time::SystemTime};

use file_times_domain::{ApplyOutcome, DateCodec};
use file_times_ports::TimestampStore;
use file_times_shared_kernel::{
    ApplicationError, ErrorContext, FileHandle, FileTimesError, FormattedDate, Result, TimestampKind, TimestampPair,
};

/// Edit session over a single file's creation and modification times.
///
/// The session holds at most one selected file. Reads collapse every failure
/// into `None`; applies collapse every failure into [`ApplyOutcome::Failure`].
pub struct TimestampEditor<'a> {
    store: &'a dyn TimestampStore,
    current: Option<FileHandle>,
}

impl<'a> TimestampEditor<'a> {
    pub fn new(store: &'a dyn TimestampStore) -> Self {
        Self { store, current: None }
    }

    /// Replace the selected file. The path is not checked until it is used.
    pub fn select_file(&mut self, path: impl AsRef<Path>) {
        let handle = FileHandle::new(path);
        log::debug!("selected {}", handle.display());
        self.current = Some(handle);
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    pub fn current_file(&self) -> Option<&FileHandle> {
        self.current.as_ref()
    }

    pub fn read_created(&self) -> Option<FormattedDate> {
        self.read(TimestampKind::Created)
    }

    pub fn read_modified(&self) -> Option<FormattedDate> {
        self.read(TimestampKind::Modified)
    }

    pub fn read(&self, kind: TimestampKind) -> Option<FormattedDate> {
        let handle = self.current.as_ref()?;
        match self.store.read(handle.path(), kind).and_then(|value| Ok(DateCodec::try_format(value)?)) {
            Ok(text) => Some(text),
            Err(err) => {
                log::debug!("{err}");
                None
            }
        }
    }

    /// Parse, write and verify both timestamps, reporting only the outcome.
    pub fn apply_dates(&self, created_text: &str, modified_text: &str) -> ApplyOutcome {
        match self.apply_dates_detailed(created_text, modified_text) {
            Ok(()) => ApplyOutcome::Success,
            Err(FileTimesError::Application(ApplicationError::NoFileSelected)) => ApplyOutcome::NoFile,
            Err(err) => {
                log::info!("{err}");
                ApplyOutcome::Failure
            }
        }
    }

    /// Same as [`TimestampEditor::apply_dates`] but keeps the failure cause.
    ///
    /// Both texts are parsed before anything is written. If a write or the
    /// verification fails afterwards, attributes already written are put back
    /// to the values read before the edit. That restore is best effort.
    pub fn apply_dates_detailed(&self, created_text: &str, modified_text: &str) -> Result<()> {
        let handle = self.current.as_ref().ok_or(ApplicationError::NoFileSelected)?;
        let target = stage(created_text, modified_text)?;

        let mut journal = WriteJournal::new(self.store, handle.path());
        let result = journal
            .write_all(&target)
            .and_then(|()| self.verify(handle, created_text, modified_text))
            .with_context(|| format!("applying timestamps to {}", handle.display()));

        if result.is_err() {
            journal.rollback();
        }
        result
    }

    fn verify(&self, handle: &FileHandle, created_text: &str, modified_text: &str) -> Result<()> {
        for (kind, expected) in [(TimestampKind::Created, created_text), (TimestampKind::Modified, modified_text)] {
            let actual = DateCodec::try_format(self.store.read(handle.path(), kind)?)?;
            if actual != expected {
                return Err(ApplicationError::VerificationMismatch {
                    kind,
                    expected: expected.to_string(),
                    actual: actual.into_inner(),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn stage(created_text: &str, modified_text: &str) -> Result<TimestampPair> {
    let created = DateCodec::parse(created_text).context("creation time")?;
    let modified = DateCodec::parse(modified_text).context("modification time")?;
    Ok(TimestampPair::new(created, modified))
}

/// Remembers what each write replaced so a failed apply can be undone.
struct WriteJournal<'s, 'p> {
    store: &'s dyn TimestampStore,
    path: &'p Path,
    written: Vec<(TimestampKind, Option<SystemTime>)>,
}

impl<'s, 'p> WriteJournal<'s, 'p> {
    fn new(store: &'s dyn TimestampStore, path: &'p Path) -> Self {
        Self { store, path, written: Vec::with_capacity(TimestampKind::ALL.len()) }
    }

    fn write_all(&mut self, target: &TimestampPair) -> Result<()> {
        for kind in TimestampKind::ALL {
            self.write(kind, SystemTime::from(target.get(kind)))?;
        }
        Ok(())
    }

    fn write(&mut self, kind: TimestampKind, value: SystemTime) -> Result<()> {
        let previous = self.store.read(self.path, kind).ok();
        // Leaving an attribute untouched keeps edits possible where it cannot be set.
        if previous.is_some_and(|p| DateCodec::same_second(p, value)) {
            log::debug!("{kind} time of {} unchanged; not rewriting", self.path.display());
            return Ok(());
        }
        self.store.write(self.path, kind, value)?;
        self.written.push((kind, previous));
        Ok(())
    }

    fn rollback(&mut self) {
        while let Some((kind, previous)) = self.written.pop() {
            let Some(previous) = previous else {
                log::warn!("cannot restore {kind} time of {}: original value unknown", self.path.display());
                continue;
            };
            log::info!("restoring {kind} time of {}", self.path.display());
            if let Err(err) = self.store.write(self.path, kind, previous) {
                log::warn!("rollback failed: {err}");
            }
        }
    }
}
