use crate::cli::Cli;
use powerup_core::AppConfig;
use powerup_domain::IdeRegistry;
use powerup_persistence::JsonFileStore;

/// Everything a command needs, resolved once from flags, env, and config.
/// The configured default IDE is folded into the registry so every command
/// falls back to the same record.
pub struct CliContext {
    pub registry: IdeRegistry,
    pub store: JsonFileStore,
}

impl CliContext {
    pub fn load(cli: &Cli) -> Self {
        let config = match &cli.config {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        };

        let store_path = cli
            .store
            .clone()
            .unwrap_or_else(|| config.effective_store_file());
        tracing::debug!("Using preference store {}", store_path.display());

        let registry = IdeRegistry::builtin().with_default(config.default_ide.as_deref());

        Self {
            registry,
            store: JsonFileStore::new(store_path),
        }
    }
}
