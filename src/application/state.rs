//! Calculator application state.
//!
//! [`AppState`] owns everything the calculator screen shows: the three input
//! fields, the saved preferences, tutorial visibility and the menu. It is
//! loaded once from a [`PreferenceStore`] and then mutated only through the
//! setters below, each of which writes at most the one key it concerns.
//! Store failures never reach the caller; they are logged and the in-memory
//! value wins.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    format_default_capital, format_money, keys, sanitize, DefaultField, DrawerState, MenuEntry,
    Preferences, RiskInputs, RiskOutputs, Theme, TUTORIAL_SEEN_VALUE,
};
use crate::error::Result;
use crate::port::outbound::store::PreferenceStore;

/// Result of asking to save the current field value as its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum SetDefaultOutcome {
    /// The field was empty; nothing was written.
    Empty,
    /// The value now serves as the default.
    Saved(String),
}

/// State behind the calculator screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    inputs: RiskInputs,
    preferences: Preferences,
    tutorial_visible: bool,
    drawer: DrawerState,
}

impl AppState {
    /// Load persisted preferences and pre-fill the form.
    ///
    /// The four reads run concurrently and fail independently: a failed key
    /// keeps its default while the others still apply. The tutorial opens
    /// when the seen flag is absent or could not be read.
    pub async fn load<S: PreferenceStore>(store: &S) -> Self {
        let (capital, risk_pct, theme, seen) = tokio::join!(
            store.get(keys::DEFAULT_CAPITAL),
            store.get(keys::DEFAULT_RISK_PCT),
            store.get(keys::THEME),
            store.get(keys::TUTORIAL_SEEN),
        );

        let mut state = Self::default();

        if let Some(value) = saved_number(keys::DEFAULT_CAPITAL, capital) {
            state.inputs.capital.clone_from(&value);
            state.preferences.default_capital = Some(value);
        }
        if let Some(value) = saved_number(keys::DEFAULT_RISK_PCT, risk_pct) {
            state.inputs.risk_pct.clone_from(&value);
            state.preferences.default_risk_pct = Some(value);
        }

        match theme {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => state.preferences.theme = theme,
                Err(e) => warn!(error = %e, "ignoring stored theme"),
            },
            Ok(None) => {}
            Err(e) => warn!(key = keys::THEME, error = %e, "preference read failed"),
        }

        state.preferences.tutorial_seen = match seen {
            Ok(flag) => flag.is_some(),
            Err(e) => {
                warn!(key = keys::TUTORIAL_SEEN, error = %e, "preference read failed");
                false
            }
        };
        state.tutorial_visible = !state.preferences.tutorial_seen;

        debug!(
            theme = %state.preferences.theme,
            default_capital = ?state.preferences.default_capital,
            default_risk_pct = ?state.preferences.default_risk_pct,
            tutorial_seen = state.preferences.tutorial_seen,
            "preferences loaded"
        );
        state
    }

    #[must_use]
    pub fn inputs(&self) -> &RiskInputs {
        &self.inputs
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    #[must_use]
    pub fn tutorial_visible(&self) -> bool {
        self.tutorial_visible
    }

    #[must_use]
    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn set_stop_loss(&mut self, raw: &str) {
        self.inputs.stop_loss_pct = sanitize(raw);
    }

    pub fn set_risk_pct(&mut self, raw: &str) {
        self.inputs.risk_pct = sanitize(raw);
    }

    pub fn set_capital(&mut self, raw: &str) {
        self.inputs.capital = sanitize(raw);
    }

    /// Current risk and margin.
    #[must_use]
    pub fn results(&self) -> RiskOutputs {
        self.inputs.compute()
    }

    #[must_use]
    pub fn margin_display(&self) -> String {
        format_money(self.results().margin_amount)
    }

    #[must_use]
    pub fn risk_display(&self) -> String {
        format_money(self.results().risk_amount)
    }

    /// Hint under the risk field, e.g. `Default: 1.5%`.
    #[must_use]
    pub fn risk_hint(&self) -> Option<String> {
        self.preferences
            .default_for(DefaultField::RiskPct)
            .map(|value| format!("Default: {value}%"))
    }

    /// Hint under the capital field, e.g. `Default: $10,000.00`.
    #[must_use]
    pub fn capital_hint(&self) -> Option<String> {
        self.preferences
            .default_for(DefaultField::Capital)
            .map(|value| format!("Default: {}", format_default_capital(value)))
    }

    pub async fn set_default_capital<S: PreferenceStore>(
        &mut self,
        store: &S,
    ) -> SetDefaultOutcome {
        self.save_default(store, DefaultField::Capital).await
    }

    pub async fn set_default_risk_pct<S: PreferenceStore>(
        &mut self,
        store: &S,
    ) -> SetDefaultOutcome {
        self.save_default(store, DefaultField::RiskPct).await
    }

    /// Save the field's current value as its default.
    pub async fn save_default<S: PreferenceStore>(
        &mut self,
        store: &S,
        field: DefaultField,
    ) -> SetDefaultOutcome {
        let current = match field {
            DefaultField::Capital => &self.inputs.capital,
            DefaultField::RiskPct => &self.inputs.risk_pct,
        };
        if current.is_empty() {
            return SetDefaultOutcome::Empty;
        }
        let value = current.clone();

        log_write(field.key(), store.set(field.key(), &value).await);
        self.preferences.set_default(field, Some(value.clone()));
        info!(field = field.label(), value = %value, "default saved");
        SetDefaultOutcome::Saved(value)
    }

    /// Forget both saved defaults. Field contents are left alone.
    pub async fn clear_defaults<S: PreferenceStore>(&mut self, store: &S) {
        let keys = [keys::DEFAULT_CAPITAL, keys::DEFAULT_RISK_PCT];
        log_write("defaults", store.remove(&keys).await);
        self.preferences.default_capital = None;
        self.preferences.default_risk_pct = None;
        info!("defaults cleared");
    }

    /// Reset the form: stop-loss to `0`, risk and capital to their defaults.
    pub fn clear_all(&mut self) {
        self.inputs.stop_loss_pct = "0".to_string();
        self.inputs.risk_pct = self.field_default(DefaultField::RiskPct);
        self.inputs.capital = self.field_default(DefaultField::Capital);
    }

    fn field_default(&self, field: DefaultField) -> String {
        self.preferences
            .default_for(field)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Switch to the other theme and persist the choice.
    pub async fn toggle_theme<S: PreferenceStore>(&mut self, store: &S) -> Theme {
        let next = self.preferences.theme.toggle();
        self.preferences.theme = next;
        log_write(keys::THEME, store.set(keys::THEME, next.as_str()).await);
        next
    }

    /// Show the tutorial on demand.
    pub fn open_tutorial(&mut self) {
        self.tutorial_visible = true;
    }

    /// Hide the tutorial and remember that it was seen.
    pub async fn close_tutorial<S: PreferenceStore>(&mut self, store: &S) {
        self.tutorial_visible = false;
        self.preferences.tutorial_seen = true;
        log_write(
            keys::TUTORIAL_SEEN,
            store.set(keys::TUTORIAL_SEEN, TUTORIAL_SEEN_VALUE).await,
        );
    }

    /// Forget that the tutorial was seen so it shows on next launch.
    pub async fn reset_tutorial<S: PreferenceStore>(&mut self, store: &S) {
        self.preferences.tutorial_seen = false;
        log_write(keys::TUTORIAL_SEEN, store.remove(&[keys::TUTORIAL_SEEN]).await);
    }

    pub fn open_drawer(&mut self) {
        self.drawer.open();
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }

    pub fn toggle_about(&mut self) {
        self.drawer.toggle_about();
    }

    /// Menu rows for the current drawer state.
    #[must_use]
    pub fn menu_entries(&self, show_qa: bool) -> Vec<MenuEntry> {
        self.drawer.entries(show_qa)
    }
}

/// A saved numeric default, sanitized. Blank or failed reads yield `None`.
fn saved_number(key: &'static str, read: Result<Option<String>>) -> Option<String> {
    match read {
        Ok(Some(raw)) => {
            let value = sanitize(&raw);
            (!value.is_empty()).then_some(value)
        }
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "preference read failed");
            None
        }
    }
}

fn log_write(key: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!(key, error = %e, "preference write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::store::MemoryStore;

    #[tokio::test]
    async fn fresh_store_gives_defaults_and_shows_tutorial() {
        let store = MemoryStore::new();
        let state = AppState::load(&store).await;

        assert_eq!(state.inputs(), &RiskInputs::default());
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.tutorial_visible());
        assert!(!state.preferences().tutorial_seen);
    }

    #[tokio::test]
    async fn saved_defaults_prefill_fields() {
        let store = MemoryStore::with_entries([
            (keys::DEFAULT_CAPITAL, "25000"),
            (keys::DEFAULT_RISK_PCT, "1.5"),
            (keys::THEME, "light"),
            (keys::TUTORIAL_SEEN, "1"),
        ]);
        let state = AppState::load(&store).await;

        assert_eq!(state.inputs().capital, "25000");
        assert_eq!(state.inputs().risk_pct, "1.5");
        assert_eq!(state.inputs().stop_loss_pct, "");
        assert_eq!(state.preferences().default_capital.as_deref(), Some("25000"));
        assert_eq!(state.theme(), Theme::Light);
        assert!(!state.tutorial_visible());
    }

    #[tokio::test]
    async fn blank_saved_values_are_ignored() {
        let store = MemoryStore::with_entries([(keys::DEFAULT_CAPITAL, ""), (keys::THEME, "")]);
        let state = AppState::load(&store).await;

        assert_eq!(state.preferences().default_capital, None);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn unknown_theme_falls_back_to_dark() {
        let store = MemoryStore::with_entries([(keys::THEME, "sepia")]);
        let state = AppState::load(&store).await;
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn each_failed_read_falls_back_alone() {
        let store = MemoryStore::with_entries([
            (keys::DEFAULT_CAPITAL, "5000"),
            (keys::DEFAULT_RISK_PCT, "2"),
            (keys::THEME, "light"),
            (keys::TUTORIAL_SEEN, "1"),
        ]);
        store.fail_key(keys::DEFAULT_CAPITAL);
        store.fail_key(keys::TUTORIAL_SEEN);

        let state = AppState::load(&store).await;

        assert_eq!(state.preferences().default_capital, None);
        assert_eq!(state.inputs().capital, "");
        assert_eq!(state.preferences().default_risk_pct.as_deref(), Some("2"));
        assert_eq!(state.theme(), Theme::Light);
        assert!(state.tutorial_visible());
    }

    #[tokio::test]
    async fn setters_sanitize_input() {
        let mut state = AppState::default();
        state.set_stop_loss("2%");
        state.set_risk_pct("1.2.5");
        state.set_capital("$10,000");

        assert_eq!(state.inputs(), &RiskInputs::new("2", "1.25", "10000"));
        assert_eq!(state.risk_display(), "$125.00");
        assert_eq!(state.margin_display(), "$6,250.00");
    }

    #[tokio::test]
    async fn empty_form_displays_zero() {
        let state = AppState::default();
        assert_eq!(state.margin_display(), "$0.00");
        assert_eq!(state.risk_display(), "$0.00");
    }

    #[tokio::test]
    async fn set_default_requires_a_value() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store).await;

        assert_eq!(
            state.set_default_capital(&store).await,
            SetDefaultOutcome::Empty
        );
        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn set_default_writes_one_key() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store).await;
        state.set_risk_pct("1.5");

        assert_eq!(
            state.set_default_risk_pct(&store).await,
            SetDefaultOutcome::Saved("1.5".into())
        );
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.value(keys::DEFAULT_RISK_PCT).as_deref(), Some("1.5"));
        assert_eq!(state.risk_hint().as_deref(), Some("Default: 1.5%"));
    }

    #[tokio::test]
    async fn failed_write_still_updates_memory() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        let mut state = AppState::load(&store).await;
        state.set_capital("1000");

        assert_eq!(
            state.set_default_capital(&store).await,
            SetDefaultOutcome::Saved("1000".into())
        );
        assert_eq!(state.preferences().default_capital.as_deref(), Some("1000"));
        assert_eq!(state.capital_hint().as_deref(), Some("Default: $1,000.00"));
        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn set_then_clear_defaults_restores_empty_state() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store).await;
        state.set_capital("10000");
        state.set_risk_pct("2");
        state.set_default_capital(&store).await;
        state.set_default_risk_pct(&store).await;

        state.clear_defaults(&store).await;

        assert_eq!(state.preferences().default_capital, None);
        assert_eq!(state.preferences().default_risk_pct, None);
        assert_eq!(store.value(keys::DEFAULT_CAPITAL), None);
        assert_eq!(store.value(keys::DEFAULT_RISK_PCT), None);
        // Fields keep what was typed.
        assert_eq!(state.inputs().capital, "10000");
    }

    #[tokio::test]
    async fn clear_all_restores_defaults() {
        let store = MemoryStore::with_entries([(keys::DEFAULT_CAPITAL, "5000")]);
        let mut state = AppState::load(&store).await;
        state.set_stop_loss("3");
        state.set_risk_pct("2");
        state.set_capital("9999");

        state.clear_all();

        assert_eq!(state.inputs(), &RiskInputs::new("0", "", "5000"));
    }

    #[tokio::test]
    async fn cleared_defaults_drop_hints_and_blank_clear_all() {
        let store = MemoryStore::with_entries([
            (keys::DEFAULT_CAPITAL, "5000"),
            (keys::DEFAULT_RISK_PCT, "1"),
        ]);
        let mut state = AppState::load(&store).await;
        assert!(state.risk_hint().is_some());

        state.clear_defaults(&store).await;
        state.clear_all();

        assert_eq!(state.risk_hint(), None);
        assert_eq!(state.capital_hint(), None);
        assert_eq!(state.inputs(), &RiskInputs::new("0", "", ""));
    }

    #[tokio::test]
    async fn theme_toggle_persists_and_round_trips() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store).await;

        assert_eq!(state.toggle_theme(&store).await, Theme::Light);
        assert_eq!(store.value(keys::THEME).as_deref(), Some("light"));
        assert_eq!(state.toggle_theme(&store).await, Theme::Dark);
        assert_eq!(store.value(keys::THEME).as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn closing_tutorial_marks_it_seen() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store).await;
        assert!(state.tutorial_visible());

        state.close_tutorial(&store).await;
        assert!(!state.tutorial_visible());
        assert_eq!(
            store.value(keys::TUTORIAL_SEEN).as_deref(),
            Some(TUTORIAL_SEEN_VALUE)
        );

        let reloaded = AppState::load(&store).await;
        assert!(!reloaded.tutorial_visible());

        state.open_tutorial();
        assert!(state.tutorial_visible());
    }

    #[tokio::test]
    async fn reset_tutorial_shows_it_next_launch() {
        let store = MemoryStore::with_entries([(keys::TUTORIAL_SEEN, "1")]);
        let mut state = AppState::load(&store).await;

        state.reset_tutorial(&store).await;
        assert_eq!(store.value(keys::TUTORIAL_SEEN), None);
        assert!(AppState::load(&store).await.tutorial_visible());
    }

    #[test]
    fn drawer_close_collapses_about() {
        let mut state = AppState::default();
        state.open_drawer();
        state.toggle_about();
        assert!(state.menu_entries(false).iter().any(|e| e.depth == 1));

        state.close_drawer();
        assert!(!state.drawer().open);
        assert!(state.menu_entries(false).iter().all(|e| e.depth == 0));
    }
}
