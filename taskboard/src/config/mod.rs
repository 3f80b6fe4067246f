//! Configuration system for the `taskboard` demo host.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskboard/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;

use taskboard_model::{ListId, Rect};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// Errors in command-line values that clap cannot check on its own.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    /// A box argument did not have four comma-separated numbers.
    #[error("expected `left,top,width,height`, got `{0}`")]
    BoxShape(String),

    /// A box component was not a finite number.
    #[error("invalid number `{0}` in box argument")]
    BoxNumber(String),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    board: BoardFileConfig,
    layout: LayoutFileConfig,
    output: OutputFileConfig,
}

/// `[board]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct BoardFileConfig {
    free_list: Option<String>,
}

/// `[layout]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LayoutFileConfig {
    container_width: Option<f64>,
    container_height: Option<f64>,
    list_gap: Option<f64>,
}

/// `[output]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct OutputFileConfig {
    format: Option<OutputFormat>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// How the resulting board is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block per list, human readable.
    #[default]
    Text,
    /// The full board as pretty-printed JSON.
    Json,
}

/// Fully resolved demo host configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// The list that uses free positioning. An empty string in the file
    /// or on the command line disables free positioning.
    pub free_list: Option<ListId>,
    /// Width of every list container, in pixels.
    pub container_width: f64,
    /// Height of every list container, in pixels.
    pub container_height: f64,
    /// Horizontal space between list containers, in pixels.
    pub list_gap: f64,
    /// Output format for the resulting board.
    pub output: OutputFormat,
    /// Log level filter string.
    pub log_level: String,
    /// Log file path; stderr when `None`.
    pub log_file: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            free_list: Some(ListId::from("list-1")),
            container_width: 250.0,
            container_height: 300.0,
            list_gap: 50.0,
            output: OutputFormat::Text,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl BoardConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path
    /// (`~/.config/taskboard/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `BoardConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        let free_list = cli
            .free_list
            .clone()
            .or_else(|| file.board.free_list.clone())
            .map_or(defaults.free_list, |id| {
                (!id.is_empty()).then(|| ListId::from(id))
            });

        let output = if cli.json {
            OutputFormat::Json
        } else {
            file.output.format.unwrap_or(defaults.output)
        };

        Self {
            free_list,
            container_width: file
                .layout
                .container_width
                .unwrap_or(defaults.container_width),
            container_height: file
                .layout
                .container_height
                .unwrap_or(defaults.container_height),
            list_gap: file.layout.list_gap.unwrap_or(defaults.list_gap),
            output,
            log_level: cli.log_level.clone(),
            log_file: cli.log_file.clone(),
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(
    version,
    about = "Replay one drag gesture on the sample task board and print the result"
)]
pub struct CliArgs {
    /// Task to drag.
    #[arg(long)]
    pub task: String,

    /// Drop onto empty space in this list.
    #[arg(long, conflicts_with = "onto_task")]
    pub onto_list: Option<String>,

    /// Drop onto this task.
    #[arg(long)]
    pub onto_task: Option<String>,

    /// Horizontal drag distance in pixels.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dx: f64,

    /// Vertical drag distance in pixels.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dy: f64,

    /// Dragged element box at drag start, as `left,top,width,height`.
    #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
    pub element_box: Option<Rect>,

    /// Destination container box, as `left,top,width,height`.
    #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
    pub container_box: Option<Rect>,

    /// Free-position list id (empty string for none).
    #[arg(long, env = "TASKBOARD_FREE_LIST")]
    pub free_list: Option<String>,

    /// Print the resulting board as JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to config file (default: `~/.config/taskboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKBOARD_LOG")]
    pub log_level: String,

    /// Path to log file (default: stderr).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Parse a `left,top,width,height` box argument.
///
/// # Errors
///
/// Returns [`CliError`] if there are not exactly four finite numbers.
pub fn parse_rect(value: &str) -> Result<Rect, CliError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [left, top, width, height] = parts.as_slice() else {
        return Err(CliError::BoxShape(value.to_string()));
    };
    let number = |s: &str| -> Result<f64, CliError> {
        s.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| CliError::BoxNumber(s.to_string()))
    };
    Ok(Rect::new(
        number(*left)?,
        number(*top)?,
        number(*width)?,
        number(*height)?,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("taskboard").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
