// tests/integration_tests/registry_test.rs
use super::common::{REGISTRY, setup_storage};
use anyhow::Result;
use sn2boost::core::registry::{
    CREATE_NEW_CHOICE, FOLDER_KEY_LENGTH, NEW_FOLDER_NAME, load_registry, registry_path,
};
use sn2boost::{FolderResolution, TerminalPrompter, folder_key_rng, resolve_folder_id};
use std::fs;
use std::io::Cursor;

fn answering(script: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalPrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_select_existing_folder_by_name() -> Result<()> {
    let storage = setup_storage()?;
    let mut rng = folder_key_rng(Some(3));
    let mut prompter = answering("Recipes\n");

    let resolution = resolve_folder_id(storage.path(), &mut prompter, &mut rng)?;
    assert_eq!(resolution.key(), Some("c8f4b2d0e6a3f9b5c7d1"));
    assert_eq!(
        fs::read(storage.path().join("boostnote.json"))?,
        REGISTRY.as_bytes()
    );

    let menu = String::from_utf8(prompter.into_output())?;
    assert!(menu.contains("1) Default"));
    assert!(menu.contains("2) Recipes"));
    assert!(menu.contains("3) Create new folder"));
    assert!(menu.contains("4) Exit"));
    Ok(())
}

#[test]
fn test_create_folder_preserves_existing_entries() -> Result<()> {
    let storage = setup_storage()?;
    let path = registry_path(storage.path());
    let before = load_registry(&path)?;
    let mut rng = folder_key_rng(Some(3));

    let resolution = resolve_folder_id(
        storage.path(),
        &mut answering(&format!("{CREATE_NEW_CHOICE}\n")),
        &mut rng,
    )?;
    let key = match resolution {
        FolderResolution::Created(key) => key,
        other => panic!("expected a new folder, got {other:?}"),
    };
    assert_eq!(key.len(), FOLDER_KEY_LENGTH);

    let after = load_registry(&path)?;
    assert_eq!(after.folders.len(), before.folders.len() + 1);
    assert_eq!(after.folders[0], before.folders[0]);
    assert_eq!(after.folders[1], before.folders[1]);
    assert_eq!(after.folders[2].name, NEW_FOLDER_NAME);
    assert_eq!(after.folders[2].key, key);
    assert_eq!(after.version, before.version);
    Ok(())
}

#[test]
fn test_same_seed_same_folder_key() -> Result<()> {
    let first = setup_storage()?;
    let second = setup_storage()?;

    let a = resolve_folder_id(first.path(), &mut answering("3\n"), &mut folder_key_rng(Some(99)))?;
    let b = resolve_folder_id(second.path(), &mut answering("3\n"), &mut folder_key_rng(Some(99)))?;
    assert_eq!(a, b);
    Ok(())
}
