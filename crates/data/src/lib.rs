//! File-side collaborators: rules config loading and session snapshots.

pub mod load;
pub mod snapshot;

pub use load::*;
pub use snapshot::*;
