//! Shared primitive types used across the entire simulation.

/// A 0-based simulation day. One `advance_day` call simulates one day.
pub type Day = u64;

/// The zoo's currency. The ledger is real-valued; display layers round.
pub type Money = f64;
