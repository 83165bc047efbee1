//! Optional backend integrations
//!
//! Each installer takes its slice of the answer set and is a no-op when that
//! slice is empty: no package installs and no writes.

pub mod ai;
pub mod firebase;
pub mod packages;
pub mod payments;
pub mod pwa;

pub use ai::AiOptions;
