//! The animal entity and its derived predicates.
//!
//! Animals are plain data owned by their pen. Lineage is a pair of
//! immutable `Parentage` snapshots captured at breeding time and shared
//! behind `Rc` — offspring never mutate their parents, and the pointers
//! form a DAG by construction (no animal predates its own ancestors).

use crate::rng::GameRng;
use crate::species::{Climate, Diet, Gender, Species};
use crate::types::Day;
use std::rc::Rc;

/// What an offspring remembers about one parent. Frozen at breeding
/// time; later renames or deaths of the parent do not reach back here.
#[derive(Debug, Clone, PartialEq)]
pub struct Parentage {
    pub name: String,
    pub species: String,
    pub climate: Climate,
}

impl Parentage {
    pub fn of(animal: &Animal) -> Self {
        Self {
            name: animal.name.clone(),
            species: animal.species.clone(),
            climate: animal.climate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    pub name: String,
    /// Species string. Hybrids carry a synthesized name that doubles as
    /// their display name.
    pub species: String,
    pub description: String,
    pub diet: Diet,
    pub climate: Climate,
    pub gender: Gender,
    pub price: f64,
    /// Sampled once at creation within [min_weight, max_weight), fixed
    /// for life.
    pub weight: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Age in days, starts at 1, increments once per day cycle.
    pub age_days: u32,
    pub infected: bool,
    /// Day the current (or last cured) infection started. 0 means the
    /// animal has never been infected; curing resets it to 0.
    pub infection_day: Day,
    /// Reserved. No code path sets this; reproduction and the disease
    /// filters still honor it.
    pub dying: bool,
    pub hybrid: bool,
    pub parents: Option<(Rc<Parentage>, Rc<Parentage>)>,
}

impl Animal {
    /// A fresh catalog animal, as sold on the market. Weight is drawn
    /// uniformly within the species bounds.
    pub fn from_catalog(species: Species, gender: Gender, rng: &mut GameRng) -> Self {
        let (min_weight, max_weight) = species.weight_bounds();
        Self {
            name: species.name().to_string(),
            species: species.name().to_string(),
            description: species.climate().label().to_string(),
            diet: species.diet(),
            climate: species.climate(),
            gender,
            price: species.price(),
            weight: rng.uniform(min_weight, max_weight),
            min_weight,
            max_weight,
            age_days: 1,
            infected: false,
            infection_day: 0,
            dying: false,
            hybrid: false,
            parents: None,
        }
    }

    /// Eligible for breeding: at least 5 days old, healthy, not dying.
    pub fn can_reproduce(&self) -> bool {
        self.age_days >= 5 && !self.infected && !self.dying
    }

    /// Old-age mortality roll. Past `max_age`, each day of excess age
    /// adds one percentage point of death risk, uncapped.
    pub fn dies_of_old_age(&self, max_age: u32, rng: &mut GameRng) -> bool {
        if self.age_days > max_age {
            let excess = u64::from(self.age_days - max_age);
            rng.below(100) < excess
        } else {
            false
        }
    }

    /// True if the animal has never carried the disease. Cured animals
    /// count as never-infected again and can be reinfected by spread.
    pub fn never_infected(&self) -> bool {
        !self.infected && self.infection_day == 0
    }

    pub fn set_infected(&mut self, day: Day) {
        self.infected = true;
        self.infection_day = day;
    }

    pub fn cure(&mut self) {
        self.infected = false;
        self.infection_day = 0;
        self.dying = false;
    }
}
