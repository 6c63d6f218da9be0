//! Handler for the `defaults` command group.

use serde_json::json;

use super::command::DefaultsCommand;
use super::output;
use crate::application::{AppState, SetDefaultOutcome};
use crate::domain::{format_default_capital, DefaultField};
use crate::error::{Error, Result};
use crate::port::outbound::store::PreferenceStore;

/// Execute a `defaults` subcommand.
pub async fn execute<S: PreferenceStore>(command: &DefaultsCommand, store: &S) -> Result<()> {
    let mut state = AppState::load(store).await;

    match command {
        DefaultsCommand::Show => {
            show(&state);
            Ok(())
        }
        DefaultsCommand::SetCapital { value } => {
            state.set_capital(value);
            save(&mut state, store, DefaultField::Capital).await
        }
        DefaultsCommand::SetRisk { value } => {
            state.set_risk_pct(value);
            save(&mut state, store, DefaultField::RiskPct).await
        }
        DefaultsCommand::Clear => {
            state.clear_defaults(store).await;
            if output::is_json() {
                output::json_output(json!({ "command": "defaults clear", "status": "ok" }));
            } else {
                output::success("Default Capital and Default Risk % removed.");
            }
            Ok(())
        }
    }
}

async fn save<S: PreferenceStore>(
    state: &mut AppState,
    store: &S,
    field: DefaultField,
) -> Result<()> {
    match state.save_default(store, field).await {
        SetDefaultOutcome::Empty => Err(Error::Input(format!(
            "{}: type a value first",
            field.label()
        ))),
        SetDefaultOutcome::Saved(value) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "defaults set",
                    "key": field.key(),
                    "value": value,
                }));
            } else {
                output::success(&format!("{} set to {value}", field.label()));
            }
            Ok(())
        }
    }
}

fn show(state: &AppState) {
    let prefs = state.preferences();

    if output::is_json() {
        output::json_output(json!({
            "command": "defaults show",
            "default_capital": prefs.default_capital,
            "default_risk_pct": prefs.default_risk_pct,
        }));
        return;
    }

    output::section("Defaults");
    match prefs.default_capital.as_deref() {
        Some(value) => output::field("Capital", format_default_capital(value)),
        None => output::field("Capital", output::muted("not set")),
    }
    match prefs.default_risk_pct.as_deref() {
        Some(value) => output::field("Risk", format!("{value}%")),
        None => output::field("Risk", output::muted("not set")),
    }
}
