use clap::ValueEnum;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::error::{InflectError, Result};

const STORE_SUFFIX: &str = "_candidate_inflections.json";

/// Settings that shape how a single cluster is split into root and endings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Boundary marker for syllabic or morphemic transcriptions (e.g. `-`).
    /// A leading or trailing marker is stripped from the shared substring.
    pub delimiter: Option<String>,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        AnalyzerConfig { delimiter: None }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        self.delimiter = if delimiter.is_empty() {
            None
        } else {
            Some(delimiter)
        };
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    #[default]
    #[value(alias = "critical")]
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Everything a full run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub store_path: PathBuf,
    pub analyzer: AnalyzerConfig,
    pub threads: usize,
    pub fresh: bool,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let store_path = derive_store_path(&input);
        RunConfig {
            input,
            store_path,
            analyzer: AnalyzerConfig::new(),
            threads: num_cpus::get(),
            fresh: false,
        }
    }

    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }

    pub fn with_analyzer(mut self, analyzer: AnalyzerConfig) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }

    /// Rejects settings that would make the run meaningless before any data is read.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(InflectError::Config(format!(
                "input file {:?} does not exist or is not a regular file",
                self.input
            )));
        }
        if self.threads == 0 {
            return Err(InflectError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// `data/linear_b.clusters.csv` becomes `data/linear_b_candidate_inflections.json`.
pub fn derive_store_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let stem = if stem.is_empty() { "clusters" } else { stem };

    input.with_file_name(format!("{stem}{STORE_SUFFIX}"))
}
