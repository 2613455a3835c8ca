//! Adapters between the outside world and the ballot engine.

pub mod command;
pub mod csv;
