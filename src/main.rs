use clap::Parser;
use tracing::{debug, info};

use traderisk::adapter::inbound::cli::command::Cli;
use traderisk::adapter::inbound::cli::output::{self, OutputConfig};
use traderisk::adapter::inbound::cli::{diagnostic, execute};
use traderisk::infrastructure::config::settings::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::apply_color(&cli.color);
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{:?}", diagnostic::config_report(&cli.config, e));
            std::process::exit(1);
        }
    };

    config.logging.apply_verbosity(cli.verbose);
    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "traderisk starting");

    if let Err(e) = execute(cli, config).await {
        debug!(error = ?e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
