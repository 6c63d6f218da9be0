//! Interactive calculator session for the `run` command.
//!
//! Mirrors the calculator screen: the three fields are edited in place, the
//! results are re-rendered after every change and the menu hangs off the
//! action list.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use super::command::RunArgs;
use super::{banner, calc, menu, output, tutorial};
use crate::application::{AppState, SetDefaultOutcome};
use crate::domain::{format_default_capital, DefaultField, MenuAction, MenuEntry, Tutorial};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    StopLoss,
    Risk,
    Capital,
    SaveRisk,
    SaveCapital,
    ClearAll,
    ToggleTheme,
    Menu,
    Quit,
}

impl Action {
    const ALL: [Action; 9] = [
        Action::StopLoss,
        Action::Risk,
        Action::Capital,
        Action::SaveRisk,
        Action::SaveCapital,
        Action::ClearAll,
        Action::ToggleTheme,
        Action::Menu,
        Action::Quit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::StopLoss => "Edit stoploss %",
            Self::Risk => "Edit account risk %",
            Self::Capital => "Edit account capital",
            Self::SaveRisk => "Set risk % as default",
            Self::SaveCapital => "Set capital as default",
            Self::ClearAll => "Clear all",
            Self::ToggleTheme => "Switch theme",
            Self::Menu => "Menu",
            Self::Quit => "Quit",
        }
    }
}

/// Execute the interactive session.
pub async fn execute<S: PreferenceStore>(args: &RunArgs, config: &Config, store: &S) -> Result<()> {
    if output::is_json() {
        return Err(Error::Input(
            "run is interactive; use `traderisk calc --json` for scripting".to_string(),
        ));
    }

    let mut state = AppState::load(store).await;
    if config.ui.banner && !args.no_banner && !output::is_quiet() {
        banner::print_banner(state.theme());
    }

    let tour = config.ui.tutorial();
    if state.tutorial_visible() && !args.skip_tutorial {
        show_tutorial(&mut state, &tour, store).await?;
    }

    let dialog = ColorfulTheme::default();
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let mut selected = 0;

    loop {
        calc::render(&state);
        println!();

        selected = Select::with_theme(&dialog)
            .with_prompt("Action")
            .items(&labels)
            .default(selected)
            .interact()?;
        let action = Action::ALL[selected];
        debug!(?action, "session action");

        match action {
            Action::StopLoss => {
                let value = edit(&dialog, "Stoploss %", &state.inputs().stop_loss_pct)?;
                state.set_stop_loss(&value);
            }
            Action::Risk => {
                let value = edit(&dialog, "Account risk %", &state.inputs().risk_pct)?;
                state.set_risk_pct(&value);
            }
            Action::Capital => {
                let value = edit(&dialog, "Account capital", &state.inputs().capital)?;
                state.set_capital(&value);
            }
            Action::SaveRisk => {
                let outcome = state.set_default_risk_pct(store).await;
                report_default(DefaultField::RiskPct, &outcome);
            }
            Action::SaveCapital => {
                let outcome = state.set_default_capital(store).await;
                report_default(DefaultField::Capital, &outcome);
            }
            Action::ClearAll => state.clear_all(),
            Action::ToggleTheme => {
                let theme = state.toggle_theme(store).await;
                output::success(&format!("Theme set to {}", output::highlight(theme)));
            }
            Action::Menu => run_menu(&mut state, &dialog, &tour, config, store).await?,
            Action::Quit => break,
        }
    }
    Ok(())
}

async fn show_tutorial<S: PreferenceStore>(
    state: &mut AppState,
    tour: &Tutorial,
    store: &S,
) -> Result<()> {
    state.open_tutorial();
    tutorial::walk(tour, state.theme().palette())?;
    state.close_tutorial(store).await;
    Ok(())
}

/// Browse the menu until an entry other than "About Us" is picked.
async fn run_menu<S: PreferenceStore>(
    state: &mut AppState,
    dialog: &ColorfulTheme,
    tour: &Tutorial,
    config: &Config,
    store: &S,
) -> Result<()> {
    state.open_drawer();

    loop {
        let mut entries = state.menu_entries(config.ui.show_qa_items);
        entries.push(MenuEntry {
            label: "Back",
            action: MenuAction::Close,
            depth: 0,
        });
        let labels: Vec<String> = entries
            .iter()
            .map(|entry| format!("{}{}", "  ".repeat(usize::from(entry.depth)), entry.label))
            .collect();

        let picked = Select::with_theme(dialog)
            .with_prompt("Menu")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let Some(index) = picked else {
            state.close_drawer();
            return Ok(());
        };
        let entry = entries[index];
        debug!(action = menu::action_name(entry.action), "menu selection");

        match entry.action {
            MenuAction::ToggleAbout => {
                state.toggle_about();
                continue;
            }
            MenuAction::OpenTutorial => {
                state.close_drawer();
                show_tutorial(state, tour, store).await?;
            }
            MenuAction::Navigate(route) => {
                state.close_drawer();
                output::section(route.title());
                output::note(&format!("/{}", route.path()));
            }
            MenuAction::RateUs => {
                state.close_drawer();
                output::note("Rating is only available in the app stores.");
            }
            MenuAction::ResetTutorial => {
                state.close_drawer();
                state.reset_tutorial(store).await;
                output::success("Tutorial reset. It will show again on next launch.");
            }
            MenuAction::ClearDefaults => {
                state.close_drawer();
                state.clear_defaults(store).await;
                output::success("Default Capital and Default Risk % removed.");
            }
            MenuAction::Close => state.close_drawer(),
        }
        return Ok(());
    }
}

fn edit(dialog: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    let value: String = Input::with_theme(dialog)
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn report_default(field: DefaultField, outcome: &SetDefaultOutcome) {
    match outcome {
        SetDefaultOutcome::Empty => output::warning("Type a value first."),
        SetDefaultOutcome::Saved(value) => {
            let shown = match field {
                DefaultField::Capital => format_default_capital(value),
                DefaultField::RiskPct => format!("{value}%"),
            };
            output::success(&format!("{} set to {}", field.label(), shown));
        }
    }
}
