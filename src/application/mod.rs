//! Application layer: state and use cases built on the domain and ports.

pub mod state;

pub use state::{AppState, SetDefaultOutcome};
