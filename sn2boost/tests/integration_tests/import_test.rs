// tests/integration_tests/import_test.rs
use super::common::{
    REGISTRY, create_test_file, read_records, record_names, setup_export, setup_storage,
};
use anyhow::Result;
use sn2boost::import_notes;
use std::fs;
use tempfile::TempDir;

const FOLDER: &str = "c8f4b2d0e6a3f9b5c7d1";

#[test]
fn test_import_export_directory() -> Result<()> {
    let export = setup_export()?;
    let storage = setup_storage()?;

    let summary = import_notes(export.path(), storage.path(), FOLDER)?;
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 2);

    let records = read_records(storage.path())?;
    assert_eq!(records.len(), 2);

    let hello = records
        .iter()
        .find(|r| r.contains("title: \"Hello World\""))
        .expect("Hello World record");
    assert!(hello.contains("createdAt: \"2023-01-01T00:00:00.000Z\""));
    assert!(hello.contains("updatedAt: \"2023-01-01T00:00:00.000Z\""));
    assert!(hello.contains("folder: \"c8f4b2d0e6a3f9b5c7d1\""));
    assert!(hello.contains("isTrashed: false"));

    let trashed = records
        .iter()
        .find(|r| r.contains("title: \"Old list\""))
        .expect("trashed record");
    assert!(trashed.contains("isTrashed: true"));
    assert!(trashed.contains("  - eggs\n  - flour\n"));

    assert_eq!(
        fs::read_to_string(storage.path().join("boostnote.json"))?,
        REGISTRY,
        "Importing should never touch the folder registry"
    );
    Ok(())
}

#[test]
fn test_blank_inputs_produce_nothing() -> Result<()> {
    let export = TempDir::new()?;
    let storage = setup_storage()?;
    create_test_file(export.path(), "zero.txt", "")?;
    create_test_file(export.path(), "blank.txt", " \n \r\n\t")?;

    let summary = import_notes(export.path(), storage.path(), FOLDER)?;
    assert_eq!(summary.imported, 0);
    assert!(read_records(storage.path())?.is_empty());
    assert_eq!(
        fs::read_to_string(storage.path().join("boostnote.json"))?,
        REGISTRY
    );
    Ok(())
}

#[test]
fn test_record_names_are_unique_cson_files() -> Result<()> {
    let export = TempDir::new()?;
    let storage = setup_storage()?;
    for i in 0..5 {
        create_test_file(export.path(), &format!("note{i}.txt"), "Same title\nbody")?;
    }

    import_notes(export.path(), storage.path(), FOLDER)?;

    let names = record_names(storage.path())?;
    assert_eq!(names.len(), 5);
    let mut unique = names.clone();
    unique.dedup();
    assert_eq!(unique, names);
    for name in &names {
        let stem = name.strip_suffix(".cson").expect("cson extension");
        assert_eq!(stem.len(), 36);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
    }
    Ok(())
}

#[test]
fn test_second_run_duplicates_records() -> Result<()> {
    let export = setup_export()?;
    let storage = setup_storage()?;

    import_notes(export.path(), storage.path(), FOLDER)?;
    import_notes(export.path(), storage.path(), FOLDER)?;

    assert_eq!(read_records(storage.path())?.len(), 4);
    Ok(())
}

#[test]
fn test_unwritable_notes_path_is_fatal() -> Result<()> {
    let export = setup_export()?;
    let storage = setup_storage()?;
    create_test_file(storage.path(), "notes", "not a directory")?;

    assert!(import_notes(export.path(), storage.path(), FOLDER).is_err());
    Ok(())
}

#[test]
fn test_non_utf8_note_bytes_survive() -> Result<()> {
    let export = TempDir::new()?;
    let storage = setup_storage()?;
    fs::write(export.path().join("cafe.txt"), b"Caf\xe9\n")?;

    import_notes(export.path(), storage.path(), FOLDER)?;

    let notes: Vec<_> = fs::read_dir(storage.path().join("notes"))?
        .collect::<Result<_, _>>()?;
    assert_eq!(notes.len(), 1);
    let record = fs::read(notes[0].path())?;
    assert!(record.windows(6).any(|w| w == b"  Caf\xe9"));
    assert!(record.ends_with(b"isTrashed: false\n"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_dangling_link_is_skipped() -> Result<()> {
    let export = setup_export()?;
    let storage = setup_storage()?;
    std::os::unix::fs::symlink(
        export.path().join("deleted.txt"),
        export.path().join("b-link.txt"),
    )?;

    let summary = import_notes(export.path(), storage.path(), FOLDER)?;
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 3);
    assert_eq!(read_records(storage.path())?.len(), 2);
    Ok(())
}
