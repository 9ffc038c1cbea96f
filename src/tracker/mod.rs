pub mod entities;
pub mod store;
pub mod streak;

/// Waiting period started by a relapse. Display only, never enforced.
pub const COOLDOWN_DAYS: i64 = 2;
