//! Operator configuration
//!
//! The bundled `config.json` and the loader that reads it.

pub mod loader;
pub mod model;

pub use loader::{load_mod_config, parse_mod_config, ConfigError, CONFIG_DIR, CONFIG_FILE_NAME};
pub use model::{ArmorPreset, FactionTarget, MergeSettings, ModConfig, PmcOverrides};
