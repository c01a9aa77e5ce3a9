// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use catwork::app_config::{self, Config};
use catwork::app_controller::Controller;
use catwork::export;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the numbered segments of a source file
    Segment {
        /// Source text file
        #[arg(value_name = "SOURCE")]
        source: PathBuf,
    },

    /// Print the tags found in each segment
    Tags {
        /// Source text file
        #[arg(value_name = "SOURCE")]
        source: PathBuf,
    },

    /// Print each segment with its tags highlighted as chips (HTML)
    Highlight {
        /// Source text file
        #[arg(value_name = "SOURCE")]
        source: PathBuf,
    },

    /// Report source tags missing from a translation
    Check {
        #[command(flatten)]
        files: TranslationArgs,

        /// Print the warnings as HTML boxes instead of text lines
        #[arg(long)]
        html: bool,
    },

    /// Print the formatted preview of a translation (HTML)
    Preview(TranslationArgs),

    /// Print translation progress
    Stats {
        /// Source text file
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Translation file, one blank-line-separated block per segment
        #[arg(value_name = "TRANSLATION")]
        translation: Option<PathBuf>,

        /// Confirm every translated segment before counting
        #[arg(long)]
        confirm_all: bool,
    },

    /// Assemble the translation into an export file
    Export {
        #[command(flatten)]
        files: TranslationArgs,

        /// Output file (defaults to a name derived from the target language)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions for catwork
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct TranslationArgs {
    /// Source text file
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Translation file, one blank-line-separated block per segment
    #[arg(value_name = "TRANSLATION")]
    translation: PathBuf,
}

/// catwork - tag-aware translation workbench
///
/// Segments source text, checks that translations keep every inline tag,
/// renders previews and exports the finished translation.
#[derive(Parser, Debug)]
#[command(name = "catwork")]
#[command(version)]
#[command(about = "Tag-aware translation workbench")]
#[command(long_about = "catwork splits source text into segments and checks translations against them.

EXAMPLES:
    catwork segment source.txt                     # List segments
    catwork check source.txt translation.txt       # Report missing tags
    catwork check --html source.txt translation.txt # Missing tags as HTML boxes
    catwork preview source.txt translation.txt     # Render the live preview
    catwork export source.txt translation.txt      # Write translation_english.txt
    catwork completions bash > catwork.bash        # Generate bash completions

TAGS:
    <b>text</b>, <i>, <u>, <br/>   formatting, rendered in the preview
    {1}, {name}                    placeholders
    [tag], [/tag]                  generic tags

CONFIGURATION:
    Configuration is stored in catwork.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "catwork.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Source language name, overrides the configuration
    #[arg(short, long, global = true)]
    source_language: Option<String>,

    /// Target language name, overrides the configuration
    #[arg(short, long, global = true)]
    target_language: Option<String>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Label and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (label, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "catwork", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let mut controller = Controller::with_config(config)?;
    run_command(&mut controller, cli.command)
}

/// Load or create the configuration file, then apply command-line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = Path::new(&cli.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", cli.config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    if let Some(source_language) = &cli.source_language {
        config.source_language = source_language.clone();
    }
    if let Some(target_language) = &cli.target_language {
        config.target_language = target_language.clone();
    }

    Ok(config)
}

fn run_command(controller: &mut Controller, command: Commands) -> Result<()> {
    match command {
        Commands::Segment { source } => {
            controller.load_source_file(&source)?;
            for segment in controller.session().segments() {
                println!("#{}\t{}", segment.index() + 1, segment.source_text());
            }
        }
        Commands::Tags { source } => {
            controller.load_source_file(&source)?;
            let session = controller.session();
            for segment in session.segments() {
                let tags = session.tag_pattern().extract_tags(segment.source_text());
                println!("#{}\t{}", segment.index() + 1, tags.join(" "));
            }
        }
        Commands::Highlight { source } => {
            controller.load_source_file(&source)?;
            for (index, html) in controller.highlighted_sources().iter().enumerate() {
                println!("<p data-segment=\"{}\">{}</p>", index + 1, html);
            }
        }
        Commands::Check { files, html } => {
            load_translation(controller, &files)?;
            let report = if html {
                controller.tag_report_html()
            } else {
                controller.tag_report()
            };
            if report.is_empty() {
                info!("All tags preserved");
                return Ok(());
            }
            for line in &report {
                println!("{}", line);
            }
            return Err(anyhow!("{} segment(s) have missing tags", report.len()));
        }
        Commands::Preview(files) => {
            load_translation(controller, &files)?;
            if !controller.config().show_preview {
                info!("Preview is disabled in the configuration");
                return Ok(());
            }
            match controller.session().preview() {
                Some(html) => println!("{}", html),
                None => warn!("Nothing translated yet"),
            }
        }
        Commands::Stats { source, translation, confirm_all } => {
            controller.load_source_file(&source)?;
            if let Some(translation) = translation {
                controller.import_translations_file(&translation)?;
            }
            if confirm_all {
                controller.session_mut().confirm_all();
            }
            println!("{}", controller.stats_line());
        }
        Commands::Export { files, output } => {
            load_translation(controller, &files)?;
            for line in controller.tag_report() {
                warn!("{}", line);
            }
            let output_dir = files.source.parent().unwrap_or(Path::new("."));
            let path = controller.write_export(output, output_dir)?;
            info!(
                "Wrote {} (suggested name: {})",
                path.display(),
                export::suggested_filename(&controller.config().target_language)
            );
        }
        Commands::Completions { .. } => unreachable!("handled before configuration is loaded"),
    }

    Ok(())
}

fn load_translation(controller: &mut Controller, files: &TranslationArgs) -> Result<()> {
    controller.load_source_file(&files.source)?;
    controller.import_translations_file(&files.translation)?;
    Ok(())
}
