//! Calculator domain: pure logic with no I/O.

mod money;
mod risk;
mod sanitize;

pub mod navigation;
pub mod preference;
pub mod theme;
pub mod tutorial;

// Core calculation
pub use money::{format_default_capital, format_money, ZERO_DISPLAY};
pub use risk::{compute, parse_float, RiskInputs, RiskOutputs};
pub use sanitize::{capital_display, percent_display, sanitize};

// Preferences and presentation
pub use navigation::{DrawerState, MenuAction, MenuEntry, Route};
pub use preference::{keys, DefaultField, Preferences, TUTORIAL_SEEN_VALUE};
pub use theme::{Palette, Rgb, Theme};
pub use tutorial::{ScrollProgress, Tutorial, TutorialStep};
