//! Core scorekeeping logic. Keep this crate free of IO and platform concerns.

pub mod config;
pub mod events;
pub mod ledger;
pub mod scoring;
pub mod session;
pub mod state;
pub mod win;

pub use config::*;
pub use events::*;
pub use ledger::*;
pub use scoring::*;
pub use session::*;
pub use state::*;
pub use win::*;
