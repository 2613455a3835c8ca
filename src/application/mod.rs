//! Application layer containing the ballot state machine.
//!
//! `BallotEngine` is the single entry point for reading and mutating poll
//! state. It is built once at startup, seeded with a roster, and shared with
//! whatever handles requests.

pub mod engine;
pub mod seed;
