//! Terminal front end.

pub mod banner;
pub mod calc;
pub mod command;
pub mod config;
pub mod defaults;
pub mod diagnostic;
pub mod menu;
pub mod output;
pub mod paths;
pub mod session;
pub mod theme;
pub mod tutorial;

use tracing::debug;

use crate::adapter::outbound::store::{ConfiguredStore, FileStore, MemoryStore};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::store::StoreBackend;
use command::{Cli, Commands, ConfigCommand};

/// Pick the preference store for this invocation.
///
/// `--ephemeral` and `backend = "memory"` keep everything in memory. Otherwise
/// the file is `--store`, then `[store] path` (or `TRADERISK_STORE`), then
/// `~/.traderisk/preferences.json`.
#[must_use]
pub fn open_store(cli: &Cli, config: &Config) -> ConfiguredStore {
    if cli.ephemeral || config.store.backend == StoreBackend::Memory {
        return ConfiguredStore::Memory(MemoryStore::new());
    }
    let path = cli
        .store
        .clone()
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(paths::default_store);
    ConfiguredStore::File(FileStore::new(path))
}

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli, config: Config) -> Result<()> {
    let store = open_store(&cli, &config);
    debug!(store = %store.describe(), "preference store selected");

    match cli.command {
        Commands::Calc(args) => calc::execute(&args, &store).await,
        Commands::Run(args) => session::execute(&args, &config, &store).await,
        Commands::Defaults(command) => defaults::execute(&command, &store).await,
        Commands::Theme(command) => theme::execute(&command, &store).await,
        Commands::Tutorial(command) => tutorial::execute(&command, &config, &store).await,
        Commands::Menu(args) => {
            menu::execute(&args, &config);
            Ok(())
        }
        Commands::Config(ConfigCommand::Init(args)) => {
            let path = args.path.unwrap_or(cli.config);
            config::execute_init(&path, args.force)
        }
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(&cli.config, &config, &store);
            Ok(())
        }
    }
}
