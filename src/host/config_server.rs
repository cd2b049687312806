//! Typed access to the host's named config objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{BotConfig, PmcConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfigType {
    #[serde(rename = "spt-bot")]
    Bot,
    #[serde(rename = "spt-pmc")]
    Pmc,
}

impl ConfigType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigType::Bot => "spt-bot",
            ConfigType::Pmc => "spt-pmc",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigObject {
    Bot(BotConfig),
    Pmc(PmcConfig),
}

/// A config struct the server can hand out by its [`ConfigType`] name.
pub trait HostConfig: Sized {
    const TYPE: ConfigType;

    fn from_object(object: &ConfigObject) -> Option<&Self>;
    fn from_object_mut(object: &mut ConfigObject) -> Option<&mut Self>;
    fn from_owned(object: ConfigObject) -> Option<Self>;
    fn into_object(self) -> ConfigObject;
}

impl HostConfig for BotConfig {
    const TYPE: ConfigType = ConfigType::Bot;

    fn from_object(object: &ConfigObject) -> Option<&Self> {
        match object {
            ConfigObject::Bot(config) => Some(config),
            _ => None,
        }
    }

    fn from_object_mut(object: &mut ConfigObject) -> Option<&mut Self> {
        match object {
            ConfigObject::Bot(config) => Some(config),
            _ => None,
        }
    }

    fn from_owned(object: ConfigObject) -> Option<Self> {
        match object {
            ConfigObject::Bot(config) => Some(config),
            _ => None,
        }
    }

    fn into_object(self) -> ConfigObject {
        ConfigObject::Bot(self)
    }
}

impl HostConfig for PmcConfig {
    const TYPE: ConfigType = ConfigType::Pmc;

    fn from_object(object: &ConfigObject) -> Option<&Self> {
        match object {
            ConfigObject::Pmc(config) => Some(config),
            _ => None,
        }
    }

    fn from_object_mut(object: &mut ConfigObject) -> Option<&mut Self> {
        match object {
            ConfigObject::Pmc(config) => Some(config),
            _ => None,
        }
    }

    fn from_owned(object: ConfigObject) -> Option<Self> {
        match object {
            ConfigObject::Pmc(config) => Some(config),
            _ => None,
        }
    }

    fn into_object(self) -> ConfigObject {
        ConfigObject::Pmc(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigServer {
    configs: BTreeMap<ConfigType, ConfigObject>,
}

impl ConfigServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: HostConfig>(&mut self, config: T) {
        self.configs.insert(T::TYPE, config.into_object());
    }

    pub fn get<T: HostConfig>(&self) -> Option<&T> {
        self.configs.get(&T::TYPE).and_then(T::from_object)
    }

    pub fn get_mut<T: HostConfig>(&mut self) -> Option<&mut T> {
        self.configs.get_mut(&T::TYPE).and_then(T::from_object_mut)
    }

    pub fn remove<T: HostConfig>(&mut self) -> Option<T> {
        self.configs.remove(&T::TYPE).and_then(T::from_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_lookup_by_config_name() {
        let mut server = ConfigServer::new();
        server.insert(PmcConfig { is_usec: Some(60.0), ..PmcConfig::default() });

        assert!(server.get::<BotConfig>().is_none());
        let pmc = server.get_mut::<PmcConfig>().expect("pmc config");
        pmc.is_usec = Some(40.0);
        assert_eq!(server.get::<PmcConfig>().and_then(|c| c.is_usec), Some(40.0));
    }

    #[test]
    fn test_remove_hands_back_owned_config() {
        let mut server = ConfigServer::new();
        server.insert(BotConfig::default());

        assert_eq!(server.remove::<BotConfig>(), Some(BotConfig::default()));
        assert!(server.get::<BotConfig>().is_none());
    }

    #[test]
    fn test_config_type_names() {
        assert_eq!(ConfigType::Bot.to_string(), "spt-bot");
        assert_eq!(ConfigType::Pmc.as_str(), "spt-pmc");
    }
}
