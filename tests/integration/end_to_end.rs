// tests/integration/end_to_end.rs
use std::time::{Duration, UNIX_EPOCH};

use file_times_domain::ApplyOutcome;
use file_times_infra::{FsTimestampStore, platform};
use file_times_ports::TimestampStore;
use file_times_shared_kernel::TimestampKind;
use file_times_usecase::TimestampEditor;

#[path = "../common/mod.rs"]
mod common;
use common::{CREATED, Fixture, MODIFIED};

#[test]
fn nothing_selected() {
    let store = FsTimestampStore::new();
    let editor = TimestampEditor::new(&store);

    assert_eq!(editor.read_created(), None);
    assert_eq!(editor.read_modified(), None);
    assert_eq!(editor.apply_dates(CREATED, MODIFIED), ApplyOutcome::NoFile);
}

#[test]
fn applies_both_timestamps_where_supported() {
    let fixture = Fixture::new("both.txt");
    let store = FsTimestampStore::new();
    let mut editor = TimestampEditor::new(&store);
    editor.select_file(fixture.path());
    let before = editor.read_modified().expect("mtime readable");

    let outcome = editor.apply_dates(CREATED, MODIFIED);

    if platform::creation_time_writable() && platform::creation_time_readable(fixture.path()) {
        assert_eq!(outcome, ApplyOutcome::Success);
        assert_eq!(editor.read_created().unwrap(), CREATED);
        assert_eq!(editor.read_modified().unwrap(), MODIFIED);
    } else {
        assert_eq!(outcome, ApplyOutcome::Failure);
        assert_eq!(editor.read_modified().unwrap(), before);
    }
}

#[test]
fn unchanged_creation_text_lets_modification_change() {
    let fixture = Fixture::new("mtime_only.txt");
    let store = FsTimestampStore::new();
    let mut editor = TimestampEditor::new(&store);
    editor.select_file(fixture.path());

    // Filesystems without a birth time cannot take part in this scenario.
    let Some(created) = editor.read_created() else { return };

    assert_eq!(editor.apply_dates(&created, MODIFIED), ApplyOutcome::Success);
    assert_eq!(editor.read_created().unwrap(), created);
    assert_eq!(editor.read_modified().unwrap(), MODIFIED);
}

#[test]
fn invalid_hour_changes_nothing() {
    let fixture = Fixture::new("bad_hour.txt");
    let store = FsTimestampStore::new();
    let mut editor = TimestampEditor::new(&store);
    editor.select_file(fixture.path());
    let created_before = editor.read_created();
    let modified_before = editor.read_modified();

    assert_eq!(editor.apply_dates(CREATED, "01/06/2022 25:00:00"), ApplyOutcome::Failure);
    assert_eq!(editor.apply_dates("01/06/2022 25:00:00", MODIFIED), ApplyOutcome::Failure);
    assert_eq!(editor.apply_dates("31/02/2023 10:00:00", "01/01/2023 00:00:00"), ApplyOutcome::Failure);

    assert_eq!(editor.read_created(), created_before);
    assert_eq!(editor.read_modified(), modified_before);
}

#[test]
fn missing_file_reads_nothing_and_fails() {
    let fixture = Fixture::new("present.txt");
    let store = FsTimestampStore::new();
    let mut editor = TimestampEditor::new(&store);
    editor.select_file(fixture.missing("absent.txt"));

    assert!(editor.current_file().is_some());
    assert_eq!(editor.read_created(), None);
    assert_eq!(editor.read_modified(), None);
    assert_eq!(editor.apply_dates(CREATED, MODIFIED), ApplyOutcome::Failure);
}

#[test]
fn reselecting_switches_files() {
    let first = Fixture::new("first.txt");
    let second = Fixture::new("second.txt");
    let store = FsTimestampStore::new();
    let mut editor = TimestampEditor::new(&store);

    editor.select_file(first.path());
    let Some(created) = editor.read_created() else { return };
    assert_eq!(editor.apply_dates(&created, MODIFIED), ApplyOutcome::Success);

    editor.select_file(second.path());
    assert_ne!(editor.read_modified().unwrap(), MODIFIED);
}

#[test]
fn far_future_modification_time_reads_without_panicking() {
    let fixture = Fixture::new("far_future.txt");
    let store = FsTimestampStore::new();
    let Some(far) = UNIX_EPOCH.checked_add(Duration::from_secs(1 << 50)) else { return };
    // Some filesystems refuse the value, others clamp it to their own maximum.
    if store.write(fixture.path(), TimestampKind::Modified, far).is_err() {
        return;
    }

    let mut editor = TimestampEditor::new(&store);
    editor.select_file(fixture.path());
    if let Some(text) = editor.read_modified() {
        assert_eq!(text.len(), 19);
    }
    assert_ne!(editor.apply_dates(CREATED, MODIFIED), ApplyOutcome::NoFile);
}
