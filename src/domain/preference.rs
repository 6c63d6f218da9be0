//! Persisted user preferences and their storage keys.

use serde::Serialize;

use super::theme::Theme;

/// Fixed keys in the preference store.
pub mod keys {
    /// Saved default account capital.
    pub const DEFAULT_CAPITAL: &str = "defCapital";
    /// Saved default account risk percentage.
    pub const DEFAULT_RISK_PCT: &str = "defRiskPct";
    /// `"dark"` or `"light"`.
    pub const THEME: &str = "appTheme";
    /// Present once the tutorial has been dismissed.
    pub const TUTORIAL_SEEN: &str = "hasSeenTutorial_v1";

    /// Every key the calculator reads at startup.
    pub const ALL: [&str; 4] = [DEFAULT_CAPITAL, DEFAULT_RISK_PCT, THEME, TUTORIAL_SEEN];
}

/// Value written under [`keys::TUTORIAL_SEEN`]. Only presence matters.
pub const TUTORIAL_SEEN_VALUE: &str = "1";

/// User preferences loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub default_capital: Option<String>,
    pub default_risk_pct: Option<String>,
    pub theme: Theme,
    pub tutorial_seen: bool,
}

/// Field that can carry a saved default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultField {
    Capital,
    RiskPct,
}

impl DefaultField {
    /// Storage key for this default.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Capital => keys::DEFAULT_CAPITAL,
            Self::RiskPct => keys::DEFAULT_RISK_PCT,
        }
    }

    /// Human-readable name used in confirmations.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Capital => "Default Capital",
            Self::RiskPct => "Default Risk %",
        }
    }
}

impl Preferences {
    #[must_use]
    pub fn default_for(&self, field: DefaultField) -> Option<&str> {
        match field {
            DefaultField::Capital => self.default_capital.as_deref(),
            DefaultField::RiskPct => self.default_risk_pct.as_deref(),
        }
    }

    pub fn set_default(&mut self, field: DefaultField, value: Option<String>) {
        match field {
            DefaultField::Capital => self.default_capital = value,
            DefaultField::RiskPct => self.default_risk_pct = value,
        }
    }
}
