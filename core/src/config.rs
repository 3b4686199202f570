//! Simulation tunables. Defaults reproduce the classic balance; a
//! presentation layer may load an alternative balance from JSON.

use crate::types::{Day, Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZooConfig {
    pub starting_money: Money,
    pub starting_popularity: i64,
    /// Age in days past which the old-age mortality roll kicks in.
    pub max_age: u32,
    /// Day horizon; reaching it is the win condition.
    pub max_days: Day,
    /// Cost to cure one infected animal, manual or bulk.
    pub treatment_cost: Money,
    pub market_refresh_cost: Money,
    /// Pen construction cost per unit of capacity.
    pub pen_cost_per_capacity: Money,
    /// Total owed = principal × this factor.
    pub loan_interest: f64,
    pub arrears_popularity_penalty: i64,
    /// Chance (percent) of a natural infection seeding in a healthy pen.
    pub infection_seed_percent: u64,
    /// One unit feeds one animal for one day.
    pub food_price: Money,
    /// From this day on, only one animal may be bought per day.
    pub purchase_limit_day: Day,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            starting_money: 10_000.0,
            starting_popularity: 50,
            max_age: 30,
            max_days: 50,
            treatment_cost: 100.0,
            market_refresh_cost: 200.0,
            pen_cost_per_capacity: 10.0,
            loan_interest: 1.2,
            arrears_popularity_penalty: 10,
            infection_seed_percent: 35,
            food_price: 1.0,
            purchase_limit_day: 10,
        }
    }
}

impl ZooConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
