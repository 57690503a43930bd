//! Request handlers.

pub mod catalog;
pub mod classify;
pub mod health;

pub use catalog::*;
pub use classify::*;
pub use health::*;
