//! Domain models for the wardboard system.

mod catalog;
mod patient;
mod transfer;

pub use catalog::*;
pub use patient::*;
pub use transfer::*;
