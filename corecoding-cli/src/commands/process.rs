//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_inputs;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use corecoding_core::{ArgCategory, ClassifierConfig};
use corecoding_engine::{CorpusProcessor, EngineConfig, ProcessingStats};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input CoNLL-U files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report category to emit [default: all]
    #[arg(short, long, value_enum)]
    pub arg: Option<Category>,

    /// Treat the language as not marking finiteness with VerbForm
    #[arg(long)]
    pub no_verbform: bool,

    /// Print relation subtypes (nsubj:pass) in argument lines
    #[arg(long)]
    pub full_deprel: bool,

    /// Force parallel processing even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print a processing summary to stderr
    #[arg(long)]
    pub stats: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Report lines, one per line
    Text,
    /// One JSON object per report line
    Json,
}

/// Report categories selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    /// SUBJECT lines
    Subj,
    /// OBJECT lines
    Obj,
    /// IOBJECT lines
    Iobj,
    /// AGREEMENT lines
    Agreement,
    /// Every line
    All,
}

impl From<Category> for ArgCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Subj => ArgCategory::Subj,
            Category::Obj => ArgCategory::Obj,
            Category::Iobj => ArgCategory::Iobj,
            Category::Agreement => ArgCategory::Agreement,
            Category::All => ArgCategory::All,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting treebank processing");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let classifier = self.classifier_config(&file_config)?;
        let engine = self.engine_config(&file_config)?;
        let format = match self.format {
            Some(format) => format,
            None => file_config.output_format()?,
        };
        log::debug!("Classifier configuration: {:?}", classifier);
        log::debug!("Engine configuration: {:?}", engine);

        let sources = resolve_inputs(&self.input)?;
        log::info!("Found {} input(s) to process", sources.len());

        let processor = CorpusProcessor::with_config(classifier, engine)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut formatter = self.create_formatter(format)?;
        let mut progress = ProgressReporter::new(self.quiet || self.output.is_none());
        progress.init_files(sources.len() as u64);

        let mut total = ProcessingStats::default();
        for source in sources {
            let name = source.to_string();
            log::info!("Processing {name}");

            let stats = processor
                .process(source.into_input(), |sentence| {
                    formatter.write_sentence(sentence).map_err(io::Error::other)
                })
                .map_err(|e| CliError::ProcessingError(e.to_string()))
                .with_context(|| format!("Failed to process {name}"))?;

            if stats.skipped_sentences > 0 {
                log::warn!(
                    "{name}: skipped {} malformed sentence(s)",
                    stats.skipped_sentences
                );
            }
            progress.file_completed(&name, stats.sentences);
            total.merge(&stats);
        }

        formatter.finish()?;
        progress.finish();

        if self.stats {
            eprintln!("{}", summary(&total));
        }

        Ok(())
    }

    /// Classifier configuration: file values overridden by flags
    pub fn classifier_config(&self, file_config: &CliConfig) -> Result<ClassifierConfig> {
        let mut config = file_config.classifier_config()?;
        if let Some(category) = self.arg {
            config.arg = category.into();
        }
        if self.no_verbform {
            config.verbform = false;
        }
        if self.full_deprel {
            config.full_deprel = true;
        }
        Ok(config)
    }

    /// Engine configuration: file values overridden by flags
    pub fn engine_config(&self, file_config: &CliConfig) -> Result<EngineConfig> {
        let parallel = if self.parallel { Some(true) } else { None };
        let mut config = file_config.engine_config(parallel)?;
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
        if config.threads.is_none() {
            config.threads = Some(num_cpus::get());
        }
        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    fn create_formatter(&self, format: OutputFormat) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };

        // A logger may already be installed when running inside tests
        if let Err(e) =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
        {
            log::debug!("Logger already initialized: {e}");
        }

        Ok(())
    }
}

fn summary(stats: &ProcessingStats) -> String {
    format!(
        "Processed {} sentence(s), skipped {}, {} node(s), {} clause head(s), {} line(s) in {:.2}s",
        stats.sentences,
        stats.skipped_sentences,
        stats.nodes,
        stats.clause_heads,
        stats.lines,
        stats.elapsed.as_secs_f64()
    )
}
