//! Command-line interface definitions.
//!
//! Defines the CLI structure for the traderisk calculator using `clap`. The
//! calculator can be driven one-shot (`calc`), interactively (`run`), or
//! through the preference subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Trade risk calculator: margin and risk amount from stop-loss, risk % and capital
#[derive(Parser, Debug)]
#[command(name = "traderisk")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Preference file (overrides config and TRADERISK_STORE)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Keep preferences in memory only; nothing is saved
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the traderisk CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute margin and risk amount once
    Calc(CalcArgs),

    /// Start an interactive calculator session
    Run(RunArgs),

    /// Manage saved default capital and risk %
    #[command(subcommand)]
    Defaults(DefaultsCommand),

    /// Show or switch the colour theme
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Show or reset the first-run tutorial
    #[command(subcommand)]
    Tutorial(TutorialCommand),

    /// List menu entries and the pages they open
    Menu(MenuArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `calc` subcommand.
///
/// Values are sanitized like keystrokes, so `2%` and `$10,000` are accepted.
/// Risk and capital fall back to saved defaults when omitted.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Stop-loss distance in percent
    #[arg(short, long)]
    pub stop_loss: Option<String>,

    /// Account risk in percent
    #[arg(short, long)]
    pub risk: Option<String>,

    /// Account capital
    #[arg(long)]
    pub capital: Option<String>,

    /// Ignore saved defaults
    #[arg(long)]
    pub no_defaults: bool,
}

/// Arguments for the interactive `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Do not show the tutorial even on first run
    #[arg(long)]
    pub skip_tutorial: bool,
}

/// Subcommands for `traderisk defaults`.
#[derive(Subcommand, Debug)]
pub enum DefaultsCommand {
    /// Display saved defaults.
    Show,
    /// Save a default account capital.
    SetCapital {
        /// Capital, e.g. 25000 or $25,000
        value: String,
    },
    /// Save a default account risk percentage.
    SetRisk {
        /// Risk percent, e.g. 1.5
        value: String,
    },
    /// Remove both saved defaults.
    Clear,
}

/// Subcommands for `traderisk theme`.
#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Display the current theme.
    Show,
    /// Switch between dark and light.
    Toggle,
}

/// Subcommands for `traderisk tutorial`.
#[derive(Subcommand, Debug)]
pub enum TutorialCommand {
    /// Print every tutorial page and mark it seen.
    Show,
    /// Forget that the tutorial was seen.
    Reset,
}

/// Arguments for the `menu` subcommand.
#[derive(Parser, Debug)]
pub struct MenuArgs {
    /// Expand the About Us group
    #[arg(long)]
    pub about: bool,

    /// Include QA-only entries
    #[arg(long)]
    pub qa: bool,
}

/// Subcommands for `traderisk config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path (defaults to the global --config path)
    pub path: Option<PathBuf>,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
