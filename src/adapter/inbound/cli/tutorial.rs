//! Tutorial rendering and the `tutorial` command group.

use dialoguer::{theme::ColorfulTheme, Confirm};
use serde_json::json;

use super::command::TutorialCommand;
use super::output;
use crate::application::AppState;
use crate::domain::{Palette, Tutorial, TutorialStep};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::PreferenceStore;

/// Execute a `tutorial` subcommand.
pub async fn execute<S: PreferenceStore>(
    command: &TutorialCommand,
    config: &Config,
    store: &S,
) -> Result<()> {
    let mut state = AppState::load(store).await;

    match command {
        TutorialCommand::Show => {
            let tutorial = config.ui.tutorial();
            if output::is_json() {
                output::json_output(json!({
                    "command": "tutorial show",
                    "steps": tutorial.steps(),
                }));
            } else {
                let palette = state.theme().palette();
                output::section("Quick Tutorial");
                for (index, step) in tutorial.steps().iter().enumerate() {
                    print_step(step);
                    output::progress(tutorial.progress_at(index), palette);
                }
            }
            state.close_tutorial(store).await;
        }
        TutorialCommand::Reset => {
            state.reset_tutorial(store).await;
            if output::is_json() {
                output::json_output(json!({ "command": "tutorial reset", "status": "ok" }));
            } else {
                output::success("Tutorial reset. It will show again on next launch.");
            }
        }
    }
    Ok(())
}

/// Page through the tutorial, one step per prompt.
///
/// Returns once the reader reaches the end or chooses to skip.
pub fn walk(tutorial: &Tutorial, palette: &Palette) -> Result<()> {
    let theme = ColorfulTheme::default();
    output::section("Quick Tutorial");

    for (index, step) in tutorial.steps().iter().enumerate() {
        print_step(step);
        output::progress(tutorial.progress_at(index), palette);
        println!();

        let prompt = if step.is_last || index + 1 == tutorial.len() {
            "Got it"
        } else {
            "Next"
        };
        let keep_going = Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(true)
            .interact()?;
        if !keep_going {
            output::note("Tutorial skipped. Open it again from the menu.");
            break;
        }
    }
    Ok(())
}

fn print_step(step: &TutorialStep) {
    output::section(&step.title);
    output::lines(&step.body);
    if let Some(image) = &step.image {
        output::note(&format!("illustration: {image}"));
    }
}
