//! Handler for the `calc` command.

use serde_json::json;

use super::command::CalcArgs;
use super::output;
use crate::application::AppState;
use crate::domain::{capital_display, percent_display};
use crate::error::Result;
use crate::port::outbound::store::PreferenceStore;

/// Execute the calc command.
///
/// Reads saved defaults but never writes anything.
pub async fn execute<S: PreferenceStore>(args: &CalcArgs, store: &S) -> Result<()> {
    let mut state = AppState::load(store).await;
    if args.no_defaults {
        state.set_risk_pct("");
        state.set_capital("");
    }
    if let Some(value) = &args.stop_loss {
        state.set_stop_loss(value);
    }
    if let Some(value) = &args.risk {
        state.set_risk_pct(value);
    }
    if let Some(value) = &args.capital {
        state.set_capital(value);
    }

    render(&state);
    Ok(())
}

/// Print the inputs and results for `state`.
pub fn render(state: &AppState) {
    let inputs = state.inputs();
    let results = state.results();

    if output::is_json() {
        output::json_output(json!({
            "command": "calc",
            "inputs": inputs,
            "risk_amount": results.risk_amount,
            "margin_amount": results.margin_amount,
            "display": {
                "margin": state.margin_display(),
                "risk": state.risk_display(),
            },
        }));
        return;
    }

    let palette = state.theme().palette();
    output::header(env!("CARGO_PKG_VERSION"), palette);
    output::field("Stoploss", or_blank(percent_display(&inputs.stop_loss_pct)));
    output::field("Risk", or_blank(percent_display(&inputs.risk_pct)));
    output::field("Capital", or_blank(capital_display(&inputs.capital)));
    if let Some(hint) = state.risk_hint() {
        output::note(&format!("Risk {hint}"));
    }
    if let Some(hint) = state.capital_hint() {
        output::note(&format!("Capital {hint}"));
    }
    println_if_visible();
    output::amount("Margin", &state.margin_display(), palette);
    output::amount("Risk Amount", &state.risk_display(), palette);
}

fn or_blank(value: String) -> String {
    if value.is_empty() {
        output::muted("-")
    } else {
        value
    }
}

fn println_if_visible() {
    if !output::is_quiet() && !output::is_json() {
        println!();
    }
}
