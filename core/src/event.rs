//! The day log — everything noteworthy that happened since the last
//! report, both inside the day cycle and in player commands.
//!
//! The log is transient: `advance_day` drains it into the `DayReport`
//! and the presentation layer renders it however it likes. Nothing is
//! persisted.

use crate::species::{Climate, Diet};
use crate::types::{Day, Money};
use crate::worker::WorkerRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathReason {
    Disease,
    OldAge,
}

/// Every event the engine can report. Pens are identified by their
/// human-readable label, animals and workers by name — this is a
/// display log, not an entity reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZooEvent {
    // ── Debt ledger ────────────────────────────────
    LoanTaken { day: Day, amount: Money, days: u64 },
    DebtPayment { day: Day, amount: Money },
    DebtArrears { day: Day },

    // ── Disease engine ─────────────────────────────
    AnimalInfected { day: Day, pen: String, animal: String },
    OutbreakStarted { day: Day, pen: String },
    AnimalDied { day: Day, pen: String, animal: String, reason: DeathReason },

    // ── Feeding ────────────────────────────────────
    FoodShortage { day: Day },
    StarvationDeaths { day: Day, pen: String, count: usize },

    // ── Staffing and economy ───────────────────────
    VetsTreated { day: Day, count: usize },
    SalariesPaid { day: Day, amount: Money },
    VisitorRevenue { day: Day, visitors: i64, amount: Money },
    DailyVisitors { day: Day, celebrities: u64, photographers: u64, bonus: u64 },
    MarketRefreshed { day: Day, paid: bool },

    // ── Player commands ────────────────────────────
    AnimalBought { day: Day, animal: String, price: Money },
    AnimalSold { day: Day, animal: String, price: Money },
    AnimalTreated { day: Day, animal: String, cost: Money },
    AllAnimalsTreated { day: Day, count: usize, cost: Money },
    AnimalRenamed { day: Day, name: String },
    OffspringBorn { day: Day, name: String, hybrid: bool, parents: (String, String) },
    WorkerHired { day: Day, name: String, role: WorkerRole },
    WorkerFired { day: Day, name: String, role: WorkerRole },
    WorkerRenamed { day: Day, name: String },
    PenBuilt { day: Day, diet: Diet, climate: Climate, capacity: usize, cost: Money },
    PenDestroyed { day: Day, pen: String },
    FoodBought { day: Day, units: u32, cost: Money },
    AdvertisingBought { day: Day, cost: Money },
}
