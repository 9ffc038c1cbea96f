//! Personal habit tracker for the terminal. Records urges you overcame and
//! relapses, computes streak statistics, and keeps a short cooldown after a
//! relapse. Access is gated by a password set on first run.
//!

pub mod auth;
pub mod cli;
pub mod tracker;
pub mod utils;
