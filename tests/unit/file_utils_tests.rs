/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use catwork::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files and directories
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() -> Result<()> {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));

    let temp_dir = common::create_temp_dir()?;
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that read_to_string replaces invalid UTF-8
#[test]
fn test_read_to_string_withInvalidUtf8_shouldReplace() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9 <b>ok</b>")?;

    let content = FileManager::read_to_string(&path)?;
    assert_eq!(content, "caf\u{FFFD} <b>ok</b>");

    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("out").join("nested").join("export.txt");

    FileManager::write_to_file(&test_file, "Uno.\n\nDos.")?;

    assert_eq!(fs::read_to_string(&test_file)?, "Uno.\n\nDos.");

    Ok(())
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("test_subdir");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());

    Ok(())
}
