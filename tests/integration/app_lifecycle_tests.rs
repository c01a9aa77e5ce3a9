/*!
 * Integration tests for the file-driven controller
 */

use anyhow::Result;
use std::fs;

use catwork::app_config::Config;
use catwork::app_controller::Controller;
use catwork::{AppError, WorkbenchError};
use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    common::init_test_logger();
    let controller = Controller::new_for_test()?;
    assert!(controller.session().is_empty());
    Ok(())
}

/// Test that an invalid configuration is rejected at construction
#[test]
fn test_controller_withInvalidTagPattern_shouldFail() {
    common::init_test_logger();
    let mut config = Config::default();
    config.tags.pattern = "(".to_string();
    assert!(Controller::with_config(config).is_err());
}

/// Test that the configured whitelist reaches the session's renderer
#[test]
fn test_controller_withCustomWhitelist_shouldRenderOnlyThoseTags() -> Result<()> {
    common::init_test_logger();
    let mut config = Config::default();
    config.tags.render_tags = vec!["i".to_string()];
    let mut controller = Controller::with_config(config)?;

    controller.load_source_text("<b>x</b> <i>y</i>")?;
    controller.import_translations_text("<b>x</b> <i>y</i>")?;

    let preview = controller.session().preview().unwrap_or_default();
    assert!(preview.contains("<i>y</i>"));
    assert!(preview.contains("&lt;b&gt;"));

    Ok(())
}

/// Test loading from files, checking, and exporting to disk
#[test]
fn test_fileWorkflow_shouldWriteExport() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_source(temp_dir.path(), "source.txt")?;
    let translation = common::create_test_file(
        temp_dir.path(),
        "translation.txt",
        "The product costs {precio}.\n\nClick [aquí] to continue.\n\nThanks!<br/> Come back soon.\n",
    )?;

    let mut controller = Controller::new_for_test()?;
    assert_eq!(controller.load_source_file(&source)?, 3);
    assert_eq!(controller.import_translations_file(&translation)?, 3);

    assert_eq!(controller.tag_report(), vec!["#1: missing tag(s): <b> </b>"]);

    controller.session_mut().confirm_all();
    assert_eq!(controller.stats().confirmed_count, 3);

    let path = controller.write_export(None, temp_dir.path())?;
    assert_eq!(path, temp_dir.path().join("translation_english.txt"));
    assert_eq!(
        fs::read_to_string(&path)?,
        "The product costs {precio}.\n\nClick [aquí] to continue.\n\nThanks!<br/> Come back soon."
    );

    Ok(())
}

/// Test that a blank source file is reported as an error
#[test]
fn test_loadSourceFile_withBlankFile_shouldFail() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(temp_dir.path(), "blank.txt", "  \n\n  ")?;

    let mut controller = Controller::new_for_test()?;
    assert!(matches!(
        controller.load_source_file(&source),
        Err(AppError::Workbench(WorkbenchError::EmptyInput))
    ));

    Ok(())
}

/// Test the stats line includes the language pair
#[test]
fn test_statsLine_shouldIncludeLanguages() -> Result<()> {
    common::init_test_logger();
    let mut controller = Controller::new_for_test()?;
    controller.load_source_text(common::SAMPLE_SOURCE)?;

    let line = controller.stats_line();
    assert!(line.contains("Segments: 3"));
    assert!(line.ends_with("Español -> English"));

    Ok(())
}
