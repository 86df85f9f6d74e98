// src/config.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use marker_tally_shared_kernel::{MarkerPair, PresentationError, PresentationResult};
use serde::Deserialize;

use crate::cli::Args;

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "out.txt";
const BACKUP_SUFFIX: &str = ".bak";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Log verbosity requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    pub verbose: u8,
    pub quiet: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    /// `None` when backups are disabled.
    pub backup: Option<PathBuf>,
    pub pairs: Vec<MarkerPair>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        let input = PathBuf::from(DEFAULT_INPUT);
        Self {
            backup: Some(default_backup_path(&input)),
            input,
            pairs: MarkerPair::defaults(),
            format: OutputFormat::Text,
            output: None,
            strict: false,
        }
    }
}

/// Settings read from a YAML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub backup: Option<PathBuf>,
    pub no_backup: Option<bool>,
    pub pairs: Option<Vec<MarkerPair>>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub strict: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> PresentationResult<Self> {
        let load_err = |reason: String| PresentationError::ConfigLoad { path: path.to_path_buf(), reason };
        let text = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        Self::parse(&text).map_err(|e| load_err(e.to_string()))
    }

    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserialises to unit, not to a map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

impl Config {
    /// CLI flags win over the configuration file, which wins over defaults.
    pub fn resolve(args: &Args) -> PresentationResult<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    fn merge(args: &Args, file: FileConfig) -> PresentationResult<Self> {
        let input = args.input.clone().or(file.input).unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        let no_backup = args.no_backup || (args.backup.is_none() && file.no_backup.unwrap_or(false));
        let backup = if no_backup {
            None
        } else {
            Some(args.backup.clone().or(file.backup).unwrap_or_else(|| default_backup_path(&input)))
        };

        let pairs = if !args.pairs.is_empty() {
            args.pairs.clone()
        } else {
            file.pairs.unwrap_or_else(MarkerPair::defaults)
        };
        if pairs.is_empty() {
            return Err(PresentationError::InvalidValue {
                flag: "pairs".into(),
                value: "[]".into(),
                reason: "at least one marker pair is required".into(),
            });
        }

        Ok(Self {
            input,
            backup,
            pairs,
            format: args.format.map(Into::into).or(file.format).unwrap_or_default(),
            output: args.output.clone().or(file.output),
            strict: args.strict || file.strict.unwrap_or(false),
        })
    }
}

impl From<&Args> for Verbosity {
    fn from(args: &Args) -> Self {
        Self { verbose: args.verbose, quiet: args.quiet }
    }
}

/// `out.txt` -> `out.txt.bak`
pub fn default_backup_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
