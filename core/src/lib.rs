//! menagerie-core — the simulation engine for a turn-based zoo
//! management game.
//!
//! The engine is a library with no I/O of its own: an interactive menu
//! layer (out of scope here) calls the command methods on [`Zoo`] with
//! already-validated indices and renders the [`DayReport`] that
//! [`Zoo::advance_day`] returns. Everything is single-threaded and
//! turn-stepped; the only nondeterminism is the seeded [`GameRng`], so
//! a replay with the same seed and command script is reproducible.

pub mod animal;
pub mod breeding;
pub mod config;
pub mod error;
pub mod event;
pub mod market;
pub mod pen;
pub mod rng;
pub mod species;
pub mod types;
pub mod worker;
pub mod zoo;

pub use animal::{Animal, Parentage};
pub use config::ZooConfig;
pub use error::{CommandError, CommandResult};
pub use event::{DeathReason, ZooEvent};
pub use market::{Market, MARKET_SIZE};
pub use pen::Pen;
pub use rng::GameRng;
pub use species::{Climate, Diet, Gender, Species};
pub use types::{Day, Money};
pub use worker::{Worker, WorkerRole};
pub use zoo::{DayReport, GameOutcome, LossReason, Zoo};
