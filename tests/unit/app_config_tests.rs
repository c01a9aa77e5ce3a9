/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use catwork::app_config::{Config, LogLevel};
use catwork::tags::{DEFAULT_RENDER_TAGS, DEFAULT_TAG_PATTERN};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "Español");
    assert_eq!(config.target_language, "English");
    assert!(config.show_preview);
    assert_eq!(config.tags.pattern, DEFAULT_TAG_PATTERN);
    assert_eq!(config.tags.render_tags.len(), DEFAULT_RENDER_TAGS.len());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Pattern matching the empty string
    config.tags.pattern = r"\d*".to_string();
    assert!(config.validate().is_err());
    config.tags.pattern = DEFAULT_TAG_PATTERN.to_string();

    // Blank whitelist entry
    config.tags.render_tags.push(String::new());
    assert!(config.validate().is_err());
    config.tags.render_tags.pop();

    // Blank source language
    config.source_language = "".to_string();
    assert!(config.validate().is_err());
    config.source_language = "Français".to_string();

    assert!(config.validate().is_ok());
}

/// Test saving and loading a configuration file
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("catwork.json");

    let mut config = Config::default();
    config.target_language = "Deutsch".to_string();
    config.log_level = LogLevel::Debug;
    config.tags.render_tags = vec!["b".to_string(), "sup".to_string()];
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);

    Ok(())
}

/// Test that a malformed configuration file reports an error
#[test]
fn test_config_fromFile_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let error = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to parse config file"));

    Ok(())
}

/// Test that a missing configuration file reports an error
#[test]
fn test_config_fromFile_withMissingFile_shouldFail() {
    assert!(Config::from_file("does_not_exist_12345.json").is_err());
}
