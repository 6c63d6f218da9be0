//! Traderisk - position sizing from stop-loss, risk and capital.
//!
//! Given a stop-loss distance, the share of the account to risk and the
//! account capital, the calculator reports how much money is at risk and how
//! much margin the position needs so that hitting the stop loses exactly that
//! amount.
//!
//! # Architecture
//!
//! - **`domain`** - Pure logic: input sanitizing, the risk formula, money
//!   formatting, themes, tutorial pages and the menu
//! - **`port`** - The [`PreferenceStore`](port::PreferenceStore) trait
//! - **`adapter`** - File and in-memory preference stores, and the terminal
//!   front end
//! - **`application`** - [`AppState`](application::AppState), the calculator
//!   screen's state and actions
//! - **`infrastructure`** - TOML configuration and logging setup
//!
//! # Example
//!
//! ```
//! use traderisk::domain::{compute, format_money};
//!
//! let out = compute("2", "10", "1000");
//! assert_eq!(format_money(out.margin_amount), "$5,000.00");
//! assert_eq!(format_money(out.risk_amount), "$100.00");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
