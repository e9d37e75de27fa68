//! Configuration file loading with precedence handling.

use crate::virtualizer::ScrollAlign;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "VIRTSCROLL_CONFIG";
/// Environment variable overriding the overscan of every pane.
pub const ENV_OVERSCAN: &str = "VIRTSCROLL_OVERSCAN";
/// Environment variable overriding the default alignment of every pane.
pub const ENV_ALIGN: &str = "VIRTSCROLL_ALIGN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Raw value as found in the environment.
        value: String,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/virtscroll/config.toml`:
///
/// ```toml
/// log_file_path = "/tmp/virtscroll.log"
///
/// [rows]
/// count = 50000
/// overscan = 10
///
/// [columns]
/// item_size = 16
/// align = "center"
///
/// [grid]
/// rows = 1000
/// columns = 200
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Vertical list pane.
    #[serde(default)]
    pub rows: Option<AxisSection>,

    /// Horizontal list pane.
    #[serde(default)]
    pub columns: Option<AxisSection>,

    /// Grid pane.
    #[serde(default)]
    pub grid: Option<GridSection>,
}

/// `[rows]` / `[columns]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AxisSection {
    /// Number of items.
    #[serde(default)]
    pub count: Option<usize>,
    /// Fixed item size in terminal cells.
    #[serde(default)]
    pub item_size: Option<u64>,
    /// Items rendered beyond each edge of the viewport.
    #[serde(default)]
    pub overscan: Option<usize>,
    /// Default alignment for jumps.
    #[serde(default)]
    pub align: Option<ScrollAlign>,
}

/// `[grid]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GridSection {
    /// Number of rows.
    #[serde(default)]
    pub rows: Option<usize>,
    /// Number of columns.
    #[serde(default)]
    pub columns: Option<usize>,
    /// Row height in terminal lines.
    #[serde(default)]
    pub row_size: Option<u64>,
    /// Column width in terminal columns.
    #[serde(default)]
    pub column_size: Option<u64>,
    /// Overscan applied to both axes.
    #[serde(default)]
    pub overscan: Option<usize>,
    /// Default alignment for jumps on both axes.
    #[serde(default)]
    pub align: Option<ScrollAlign>,
}

/// Settings for one list pane after precedence resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSettings {
    /// Number of items.
    pub count: usize,
    /// Fixed item size in terminal cells.
    pub item_size: u64,
    /// Items rendered beyond each edge of the viewport.
    pub overscan: usize,
    /// Default alignment for jumps.
    pub align: ScrollAlign,
}

impl AxisSettings {
    fn merge(self, section: Option<AxisSection>) -> Self {
        let Some(section) = section else {
            return self;
        };
        Self {
            count: section.count.unwrap_or(self.count),
            item_size: section.item_size.unwrap_or(self.item_size),
            overscan: section.overscan.unwrap_or(self.overscan),
            align: section.align.unwrap_or(self.align),
        }
    }
}

/// Settings for the grid pane after precedence resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Row height in terminal lines.
    pub row_size: u64,
    /// Column width in terminal columns.
    pub column_size: u64,
    /// Overscan applied to both axes.
    pub overscan: usize,
    /// Default alignment for jumps on both axes.
    pub align: ScrollAlign,
}

impl GridSettings {
    fn merge(self, section: Option<GridSection>) -> Self {
        let Some(section) = section else {
            return self;
        };
        Self {
            rows: section.rows.unwrap_or(self.rows),
            columns: section.columns.unwrap_or(self.columns),
            row_size: section.row_size.unwrap_or(self.row_size),
            column_size: section.column_size.unwrap_or(self.column_size),
            overscan: section.overscan.unwrap_or(self.overscan),
            align: section.align.unwrap_or(self.align),
        }
    }
}

/// Default item count of every axis.
pub const DEFAULT_COUNT: usize = 10_000;
/// Default overscan of every axis.
pub const DEFAULT_OVERSCAN: usize = 5;
/// Default row height (one terminal line).
pub const DEFAULT_ROW_SIZE: u64 = 1;
/// Default column width (fits "Column 10000").
pub const DEFAULT_COLUMN_SIZE: u64 = 12;
/// Default grid cell width (fits "Cell 9999, 9999").
pub const DEFAULT_CELL_WIDTH: u64 = 16;

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Vertical list pane.
    pub rows: AxisSettings,
    /// Horizontal list pane.
    pub columns: AxisSettings,
    /// Grid pane.
    pub grid: GridSettings,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            rows: AxisSettings {
                count: DEFAULT_COUNT,
                item_size: DEFAULT_ROW_SIZE,
                overscan: DEFAULT_OVERSCAN,
                align: ScrollAlign::default(),
            },
            columns: AxisSettings {
                count: DEFAULT_COUNT,
                item_size: DEFAULT_COLUMN_SIZE,
                overscan: DEFAULT_OVERSCAN,
                align: ScrollAlign::default(),
            },
            grid: GridSettings {
                rows: DEFAULT_COUNT,
                columns: DEFAULT_COUNT,
                row_size: DEFAULT_ROW_SIZE,
                column_size: DEFAULT_CELL_WIDTH,
                overscan: DEFAULT_OVERSCAN,
                align: ScrollAlign::default(),
            },
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    fn set_overscan(&mut self, overscan: usize) {
        self.rows.overscan = overscan;
        self.columns.overscan = overscan;
        self.grid.overscan = overscan;
    }

    fn set_align(&mut self, align: ScrollAlign) {
        self.rows.align = align;
        self.columns.align = align;
        self.grid.align = align;
    }

    fn set_count(&mut self, count: usize) {
        self.rows.count = count;
        self.columns.count = count;
        self.grid.rows = count;
        self.grid.columns = count;
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/virtscroll/virtscroll.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("virtscroll").join("virtscroll.log")
    } else {
        PathBuf::from("virtscroll.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/virtscroll/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("virtscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VIRTSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/virtscroll/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        rows: defaults.rows.merge(config.rows),
        columns: defaults.columns.merge(config.columns),
        grid: defaults.grid.merge(config.grid),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `VIRTSCROLL_OVERSCAN`: overscan of every pane
/// - `VIRTSCROLL_ALIGN`: default alignment of every pane
///
/// # Errors
///
/// `InvalidValue` if a variable is set but does not parse.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(ENV_OVERSCAN) {
        let overscan = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidValue {
                name: ENV_OVERSCAN,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        config.set_overscan(overscan);
    }

    if let Ok(raw) = std::env::var(ENV_ALIGN) {
        let align = raw
            .parse::<ScrollAlign>()
            .map_err(|e| ConfigError::InvalidValue {
                name: ENV_ALIGN,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        config.set_align(align);
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    count_override: Option<usize>,
    overscan_override: Option<usize>,
    align_override: Option<ScrollAlign>,
) -> ResolvedConfig {
    if let Some(count) = count_override {
        config.set_count(count);
    }

    if let Some(overscan) = overscan_override {
        config.set_overscan(overscan);
    }

    if let Some(align) = align_override {
        config.set_align(align);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
