use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::export::{self, SEGMENT_SEPARATOR};
use crate::file_utils::FileManager;
use crate::render::{self, Renderer};
use crate::session::{SessionStats, TranslationSession};

// @module: Application controller driving a translation session from files

/// Main application controller: configuration plus one session
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Session built with the configured tag pattern
    session: TranslationSession,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self, AppError> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate().map_err(AppError::config)?;
        let session = TranslationSession::with_pattern(config.tag_pattern().map_err(AppError::config)?);

        Ok(Self { config, session })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &TranslationSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TranslationSession {
        &mut self.session
    }

    /// Segment source text into the session; blank text leaves it untouched
    pub fn load_source_text(&mut self, text: &str) -> Result<usize, AppError> {
        Ok(self.session.load_source(text)?)
    }

    /// Read and segment a source file
    pub fn load_source_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, AppError> {
        let path = path.as_ref();
        let text = FileManager::read_to_string(path).map_err(AppError::file)?;
        let count = self.load_source_text(&text).inspect_err(|_| {
            warn!("Nothing to translate in {:?}", path);
        })?;

        info!("{} segment(s) loaded from {:?}", count, path);
        Ok(count)
    }

    /// Fill translations from blank-line-separated text, one block per segment.
    ///
    /// Blocks beyond the segment count are ignored. Returns the number of
    /// blocks applied.
    pub fn import_translations_text(&mut self, text: &str) -> Result<usize, AppError> {
        let normalized = text.replace("\r\n", "\n");
        let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
        if body.is_empty() {
            return Ok(0);
        }

        let blocks: Vec<&str> = body.split(SEGMENT_SEPARATOR).collect();
        let count = self.session.len();
        if blocks.len() > count {
            warn!(
                "Translation has {} block(s) but the source has {} segment(s); ignoring the rest",
                blocks.len(),
                count
            );
        }

        let mut applied = 0;
        for (index, block) in blocks.into_iter().take(count).enumerate() {
            self.session.set_translation(index, block)?;
            applied += 1;
        }

        debug!("Imported {} translation block(s)", applied);
        Ok(applied)
    }

    /// Read translations from a file
    pub fn import_translations_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, AppError> {
        let text = FileManager::read_to_string(&path).map_err(AppError::file)?;
        self.import_translations_text(&text)
    }

    /// Human-readable tag warnings, one line per affected segment
    pub fn tag_report(&self) -> Vec<String> {
        self.session
            .tag_warnings()
            .into_iter()
            .map(|(index, missing)| {
                format!("#{}: missing tag(s): {}", index + 1, missing.join(" "))
            })
            .collect()
    }

    /// HTML warning boxes for segments with missing tags
    pub fn tag_report_html(&self) -> Vec<String> {
        self.session
            .tag_warnings()
            .iter()
            .filter_map(|(_, missing)| render::render_missing_warning(missing))
            .collect()
    }

    /// Highlighted source of every segment
    pub fn highlighted_sources(&self) -> Vec<String> {
        let renderer = Renderer::new(self.session.tag_pattern());
        self.session
            .segments()
            .iter()
            .map(|s| renderer.highlight(s.source_text()))
            .collect()
    }

    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    /// One-line summary including the configured language pair
    pub fn stats_line(&self) -> String {
        format!(
            "{} | {} -> {}",
            self.session.stats(),
            self.config.source_language,
            self.config.target_language
        )
    }

    /// Output path for the export, derived from the target language unless given
    pub fn export_path(&self, output: Option<PathBuf>, output_dir: &Path) -> PathBuf {
        output.unwrap_or_else(|| output_dir.join(export::suggested_filename(&self.config.target_language)))
    }

    /// Write the assembled translation and return where it went
    pub fn write_export(&self, output: Option<PathBuf>, output_dir: &Path) -> Result<PathBuf, AppError> {
        let path = self.export_path(output, output_dir);
        FileManager::write_to_file(&path, &self.session.export()).map_err(AppError::file)?;
        info!("Exported {} segment(s) to {:?}", self.session.len(), path);
        Ok(path)
    }
}
