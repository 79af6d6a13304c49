mod config_content_provider;
mod config_manager;
mod config_serializer;
mod solver_config;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, StaticContentConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use solver_config::SolverConfig;
pub use validate::Validate;
