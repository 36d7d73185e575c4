//! Inspection session lifecycle tests

use hashtab_core::error::{Error, IoErrorKind};
use hashtab_core::session::{ComputeOutcome, FileSession, SlotStatus};
use hashtab_core::EngineConfig;
use hashtab_test_utils::TestFileBuilder;
use tempfile::TempDir;

fn session_for(temp_dir: &TempDir, name: &str, size: usize) -> FileSession {
    let path = TestFileBuilder::new(name)
        .with_size(size)
        .with_cycling_bytes()
        .create_in(temp_dir)
        .unwrap();
    FileSession::open(&path, &EngineConfig::default()).unwrap()
}

#[test]
fn open_rejects_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone.bin");
    let result = FileSession::open(&missing, &EngineConfig::default());
    match result {
        Err(Error::Io(err)) => assert_eq!(err.kind, IoErrorKind::FileNotFound),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn open_rejects_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = FileSession::open(temp_dir.path(), &EngineConfig::default());
    match result {
        Err(Error::Io(err)) => assert_eq!(err.kind, IoErrorKind::NotRegularFile),
        other => panic!("expected NotRegularFile, got {other:?}"),
    }
}

#[test]
fn session_exposes_file_name_and_descriptors() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_for(&temp_dir, "movie.mkv", 100);
    assert_eq!(session.file_name(), "movie.mkv");

    let ids: Vec<&str> = session.descriptors().iter().map(|d| d.id()).collect();
    assert_eq!(ids[..2], ["MD5", "SHA1"]);
}

#[test]
fn slots_start_unset() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_for(&temp_dir, "a.bin", 10);
    assert_eq!(session.status("MD5"), Some(SlotStatus::NotComputed));
    assert_eq!(session.status("SHA256"), Some(SlotStatus::NotComputed));
    assert_eq!(session.status("SHA3"), None);
}

#[test]
fn compute_fills_the_slot_exactly_once() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_for(&temp_dir, "a.bin", 4096 * 3 + 17);

    let first = session.compute("MD5").unwrap();
    let ComputeOutcome::Computed(hex) = first else {
        panic!("expected a fresh computation, got {first:?}");
    };
    assert_eq!(hex.len(), 32);
    assert_eq!(session.status("MD5"), Some(SlotStatus::Computed(hex.clone())));

    // Re-triggering replays the cached value
    let second = session.compute("MD5").unwrap();
    assert_eq!(second, ComputeOutcome::AlreadyComputed(hex));
}

#[test]
fn compute_accepts_case_insensitive_ids() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_for(&temp_dir, "a.bin", 10);
    assert!(session.compute("sha256").is_ok());
    assert!(matches!(
        session.status("SHA256"),
        Some(SlotStatus::Computed(_))
    ));
}

#[test]
fn compute_unknown_algorithm_fails() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_for(&temp_dir, "a.bin", 10);
    assert!(matches!(
        session.compute("BLAKE3"),
        Err(Error::Algorithm(_))
    ));
}

#[test]
fn algorithms_compute_concurrently() {
    let temp_dir = TempDir::new().unwrap();
    let session = session_for(&temp_dir, "big.bin", 300_000);

    let session = &session;
    std::thread::scope(|scope| {
        for id in ["MD5", "SHA1", "SHA256", "SHA512"] {
            scope.spawn(move || session.compute(id).unwrap());
        }
    });

    for id in ["MD5", "SHA1", "SHA256", "SHA512"] {
        assert!(
            matches!(session.status(id), Some(SlotStatus::Computed(_))),
            "{id} not computed"
        );
    }
}

#[test]
fn failure_leaves_value_unset_and_other_slots_alone() {
    let temp_dir = TempDir::new().unwrap();
    let path = TestFileBuilder::new("volatile.bin")
        .with_size(50)
        .create_in(&temp_dir)
        .unwrap();
    let session = FileSession::open(&path, &EngineConfig::default()).unwrap();

    let sha1 = session.compute("SHA1").unwrap();
    assert!(matches!(sha1, ComputeOutcome::Computed(_)));

    // File disappears between selection and trigger
    std::fs::remove_file(&path).unwrap();
    let result = session.compute("MD5");
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(matches!(session.status("MD5"), Some(SlotStatus::Failed(_))));

    // The already-computed slot is untouched
    assert!(matches!(
        session.status("SHA1"),
        Some(SlotStatus::Computed(_))
    ));

    // Manual retry works once the file is back
    TestFileBuilder::new("volatile.bin")
        .with_size(50)
        .create_in(&temp_dir)
        .unwrap();
    assert!(matches!(
        session.compute("MD5").unwrap(),
        ComputeOutcome::Computed(_)
    ));
}
