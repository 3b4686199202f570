//! Zoo staff. Salaries are a fixed per-role table; exactly one director
//! must stay on the payroll for the zoo to remain playable, which is
//! enforced at hire (no duplicate) and checked at removal and at the
//! start of every day.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerRole {
    Vet,
    Cleaner,
    Feeder,
    Director,
}

impl WorkerRole {
    /// Daily salary in currency units.
    pub fn salary(&self) -> f64 {
        match self {
            Self::Vet => 50.0,
            Self::Cleaner => 20.0,
            Self::Feeder => 30.0,
            Self::Director => 500.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vet => "veterinarian",
            Self::Cleaner => "cleaner",
            Self::Feeder => "feeder",
            Self::Director => "director",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Worker {
    pub role: WorkerRole,
    pub name: String,
}

impl Worker {
    pub fn new(role: WorkerRole, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }
}
