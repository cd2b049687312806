//! Startup hooks and their ordering

use crate::domain::BotTypes;

use super::config_server::ConfigServer;
use super::logger::HostLogger;

/// Host load-order priorities. Hooks run in ascending order.
pub mod load_order {
    /// The host's own database import.
    pub const DATABASE: i32 = 0;
}

/// Borrowed view of the host state a startup hook may touch.
pub struct HostServices<'a> {
    pub bots: &'a mut BotTypes,
    pub configs: &'a mut ConfigServer,
    pub logger: &'a dyn HostLogger,
}

/// A no-argument, no-return startup callback.
///
/// Implementations must not let failures escape: they log and return.
pub trait OnLoad {
    fn name(&self) -> &str;
    fn priority(&self) -> i32;
    fn on_load(&self, host: &mut HostServices<'_>);
}

#[derive(Default)]
pub struct StartupSequence {
    hooks: Vec<Box<dyn OnLoad>>,
}

impl StartupSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Box<dyn OnLoad>) {
        self.hooks.push(hook);
    }

    /// Run every hook once, lowest priority first, registration order on ties.
    /// Returns the hook names in the order they ran.
    pub fn run(&self, host: &mut HostServices<'_>) -> Vec<String> {
        let mut ordered: Vec<&dyn OnLoad> = self.hooks.iter().map(|hook| hook.as_ref()).collect();
        ordered.sort_by_key(|hook| hook.priority());

        let mut ran = Vec::with_capacity(ordered.len());
        for hook in ordered {
            tracing::debug!(hook = hook.name(), priority = hook.priority(), "running startup hook");
            hook.on_load(host);
            ran.push(hook.name().to_string());
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::logger::MemoryLogger;

    struct Named(&'static str, i32);

    impl OnLoad for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn priority(&self) -> i32 {
            self.1
        }

        fn on_load(&self, host: &mut HostServices<'_>) {
            host.logger.info(self.0);
        }
    }

    #[test]
    fn test_hooks_run_by_ascending_priority() {
        let mut sequence = StartupSequence::new();
        sequence.register(Box::new(Named("late", load_order::DATABASE + 1)));
        sequence.register(Box::new(Named("database", load_order::DATABASE)));
        sequence.register(Box::new(Named("tie", load_order::DATABASE + 1)));

        let mut bots = BotTypes::new();
        let mut configs = ConfigServer::new();
        let logger = MemoryLogger::new();
        let mut host = HostServices { bots: &mut bots, configs: &mut configs, logger: &logger };

        let ran = sequence.run(&mut host);
        assert_eq!(ran, vec!["database", "late", "tie"]);
        assert_eq!(logger.entries().len(), 3);
    }
}
