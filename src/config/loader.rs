//! Config file loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::model::ModConfig;

/// Directory under the plugin install dir that holds the bundled config.
pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    Missing { path: PathBuf },
    #[error("failed reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load `file_name` from `base_dir`.
///
/// There is no fallback: a missing or malformed file is an error and the
/// caller skips every override.
pub fn load_mod_config(base_dir: &Path, file_name: &str) -> Result<ModConfig, ConfigError> {
    let path = base_dir.join(file_name);
    if !path.is_file() {
        return Err(ConfigError::Missing { path });
    }

    let content = fs::read_to_string(&path)
        .map_err(|source| ConfigError::Read { path: path.clone(), source })?;

    let config = parse_mod_config(&content)
        .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

    tracing::debug!(
        path = %path.display(),
        equipment = config.pmc_equipment.len(),
        ammo = config.pmc_ammo.len(),
        "loaded mod config"
    );
    Ok(config)
}

pub fn parse_mod_config(content: &str) -> Result<ModConfig, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::FactionTarget;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_reads_sections() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"{
                "pmcEquipment": {"Holster": {"aaaaaaaaaaaaaaaaaaaaaaaa": 5}},
                "pmcAmmo": {"Caliber9x19PARA": {"bbbbbbbbbbbbbbbbbbbbbbbb": 1}},
                "settings": {"ammoTarget": "bear-only"}
            }"#,
        )
        .expect("write");

        let cfg = load_mod_config(tmp.path(), CONFIG_FILE_NAME).expect("config");
        assert!(cfg.pmc_equipment.contains_key("Holster"));
        assert!(cfg.pmc_ammo.contains_key("Caliber9x19PARA"));
        assert_eq!(cfg.settings.ammo_target, FactionTarget::BearOnly);
    }

    #[test]
    fn test_missing_file_is_error() {
        let tmp = TempDir::new().expect("tmp");
        let result = load_mod_config(tmp.path(), CONFIG_FILE_NAME);
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_invalid_json_syntax_is_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "{ not json").expect("write");

        let result = load_mod_config(tmp.path(), CONFIG_FILE_NAME);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    // --- Wrong field types are structural errors, not per-entry skips ---
    #[test]
    fn test_equipment_section_must_be_an_object() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), r#"{"pmcEquipment": [1, 2]}"#).expect("write");

        let result = load_mod_config(tmp.path(), CONFIG_FILE_NAME);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_ammo_target_is_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), r#"{"settings": {"ammoTarget": "scavs"}}"#)
            .expect("write");

        let err = load_mod_config(tmp.path(), CONFIG_FILE_NAME).unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
    }

    // --- A malformed slot value still loads; it is rejected when applied ---
    #[test]
    fn test_malformed_slot_value_loads() {
        let cfg = parse_mod_config(r#"{"pmcEquipment": {"Holster": "not a map"}}"#).expect("parse");
        assert_eq!(cfg.pmc_equipment["Holster"], serde_json::json!("not a map"));
    }

    #[test]
    fn test_unknown_top_level_keys_are_ignored() {
        let cfg = parse_mod_config(r#"{"comment": "tuned for 0.14", "pmcAmmo": {}}"#).expect("parse");
        assert!(cfg.pmc_ammo.is_empty());
    }
}
