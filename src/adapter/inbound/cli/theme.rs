//! Handler for the `theme` command group.

use serde_json::json;

use super::command::ThemeCommand;
use super::output;
use crate::application::AppState;
use crate::error::Result;
use crate::port::outbound::store::PreferenceStore;

/// Execute a `theme` subcommand.
pub async fn execute<S: PreferenceStore>(command: &ThemeCommand, store: &S) -> Result<()> {
    let mut state = AppState::load(store).await;

    let theme = match command {
        ThemeCommand::Show => state.theme(),
        ThemeCommand::Toggle => state.toggle_theme(store).await,
    };

    if output::is_json() {
        output::json_output(json!({ "command": "theme", "theme": theme }));
        return Ok(());
    }

    match command {
        ThemeCommand::Show => output::field("Theme", output::highlight(theme)),
        ThemeCommand::Toggle => output::success(&format!("Theme set to {theme}")),
    }
    Ok(())
}
