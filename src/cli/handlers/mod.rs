mod generate;
mod list;
mod utils;

pub use generate::{GenerateParams, handle_generate};
pub use list::handle_list;

use crate::config::OracleConfig;
use crate::storage::{JsonFileRegistry, Registry};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: OracleConfig,
    pub registry: Box<dyn Registry>,
}

impl CommandContext {
    /// Context backed by the registry file named in `config`.
    pub fn new(config: OracleConfig) -> Self {
        let registry = Box::new(JsonFileRegistry::new(config.registry.clone()));
        Self { config, registry }
    }

    pub fn with_registry(config: OracleConfig, registry: Box<dyn Registry>) -> Self {
        Self { config, registry }
    }
}
