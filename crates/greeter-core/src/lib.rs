//! Core functionality shared across greeter components.
//!
//! Holds the [`Greeter`], which produces the fixed greeting printed by the
//! `greeter` binary.

pub mod greeter;

pub use greeter::{greeting, Greeter, GREETING};
