//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`PreferenceStore`] - Persistence for defaults, theme and onboarding state

pub mod outbound;

pub use outbound::store::PreferenceStore;
