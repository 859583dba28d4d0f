//! Shared types for the futsync workspace.

pub mod operation;
pub mod types;

pub use operation::{LogLevel, Operation};
