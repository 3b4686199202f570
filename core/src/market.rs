//! The animal market: a transient, fully regenerated inventory.
//!
//! Regeneration throws away the previous offer set and draws a fresh
//! one from the species catalog, with replacement. It is free once per
//! day when due (the day cycle triggers it) and additionally available
//! as a paid manual refresh, gated by the same once-per-day rule.

use crate::animal::Animal;
use crate::rng::GameRng;
use crate::species::{Gender, Species};
use crate::types::Day;

/// Size of every regenerated offer set.
pub const MARKET_SIZE: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct Market {
    offers: Vec<Animal>,
    last_refresh_day: Option<Day>,
}

impl Market {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offers(&self) -> &[Animal] {
        &self.offers
    }

    pub fn last_refresh_day(&self) -> Option<Day> {
        self.last_refresh_day
    }

    /// One refresh per day, free or paid alike.
    pub fn can_refresh(&self, day: Day) -> bool {
        match self.last_refresh_day {
            None => true,
            Some(last) => day > last,
        }
    }

    /// Replace the whole offer set with `MARKET_SIZE` fresh animals.
    pub fn generate(&mut self, day: Day, rng: &mut GameRng) {
        self.offers.clear();
        for _ in 0..MARKET_SIZE {
            let species = Species::ALL[rng.pick_index(Species::ALL.len())];
            let gender = if rng.coin() {
                Gender::Male
            } else {
                Gender::Female
            };
            self.offers.push(Animal::from_catalog(species, gender, rng));
        }
        self.last_refresh_day = Some(day);
        log::debug!("market regenerated on day {day}");
    }

    /// Remove and return an offer. The caller has already validated the
    /// index and settled payment.
    pub fn take(&mut self, index: usize) -> Animal {
        self.offers.remove(index)
    }
}
