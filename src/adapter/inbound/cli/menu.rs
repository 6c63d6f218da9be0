//! Menu listing for the `menu` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::MenuArgs;
use super::output;
use crate::domain::{DrawerState, MenuAction, MenuEntry};
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct MenuRow {
    #[tabled(rename = "Item")]
    label: String,
    #[tabled(rename = "Action")]
    action: &'static str,
    #[tabled(rename = "Opens")]
    target: String,
}

impl From<&MenuEntry> for MenuRow {
    fn from(entry: &MenuEntry) -> Self {
        let indent = "  ".repeat(usize::from(entry.depth));
        Self {
            label: format!("{indent}{}", entry.label),
            action: action_name(entry.action),
            target: match entry.action {
                MenuAction::Navigate(route) => format!("/{}", route.path()),
                _ => "-".to_string(),
            },
        }
    }
}

/// Short, stable name for a menu action.
pub fn action_name(action: MenuAction) -> &'static str {
    match action {
        MenuAction::OpenTutorial => "tutorial",
        MenuAction::Navigate(_) => "navigate",
        MenuAction::RateUs => "rate",
        MenuAction::ToggleAbout => "expand",
        MenuAction::ResetTutorial => "reset-tutorial",
        MenuAction::ClearDefaults => "clear-defaults",
        MenuAction::Close => "close",
    }
}

/// List menu entries.
pub fn execute(args: &MenuArgs, config: &Config) {
    let drawer = DrawerState {
        open: true,
        about_open: args.about,
    };
    let entries = drawer.entries(args.qa || config.ui.show_qa_items);

    if output::is_json() {
        output::json_output(json!({ "command": "menu", "entries": entries }));
        return;
    }

    output::section("Menu");
    println!();
    let rows: Vec<MenuRow> = entries.iter().map(MenuRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    if !args.about {
        println!();
        output::hint(&format!(
            "run {} to list the About Us pages",
            output::highlight("traderisk menu --about")
        ));
    }
}
