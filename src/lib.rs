//! pmc-loadout-overrides: overwrite a game server's PMC bot-generation tables
//!
//! At server startup the plugin reads its bundled `config/config.json` and
//! copies the operator's equipment and ammo weights into the `usec` and `bear`
//! bot records, rewrites the PMC armor-plate level brackets, and assigns a few
//! PMC settings. The host is reached only through [`host::HostServices`].

pub mod config;
pub mod domain;
pub mod host;
pub mod merge;
pub mod plugin;

pub use config::{load_mod_config, ModConfig};
pub use merge::{generate_pmcs, MergeError, MergeReport};
pub use plugin::PmcLoadoutOverrides;
