//! Configuration module.
//!
//! Settings resolve through four layers, lowest to highest precedence:
//! built-in defaults, the TOML config file, `VIRTSCROLL_*` environment
//! variables, and command-line flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, AxisSettings, ConfigError,
    ConfigFile, GridSettings, ResolvedConfig,
};
