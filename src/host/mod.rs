//! Host server seams
//!
//! Everything the plugin consumes from the host is passed in explicitly
//! through [`HostServices`], so tests and the operator harness can stand in
//! for the real server.

pub mod config_server;
pub mod lifecycle;
pub mod logger;
pub mod memory;

pub use config_server::{ConfigObject, ConfigServer, ConfigType, HostConfig};
pub use lifecycle::{load_order, HostServices, OnLoad, StartupSequence};
pub use logger::{HostLogger, LogLevel, MemoryLogger, TracingLogger};
pub use memory::{HostSnapshot, InMemoryHost};
