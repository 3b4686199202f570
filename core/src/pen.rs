//! Enclosures and the per-pen disease engine.
//!
//! Disease state is strictly per-pen; there is no cross-pen
//! transmission. The day cycle drives each pen through the fixed stage
//! order: seeding, spread, outbreak detection, then (after auto
//! treatment) mortality. Reordering any pair changes the outcome
//! distribution, so the stages live here as separate named steps and
//! the orchestrator calls them in sequence.

use crate::animal::Animal;
use crate::event::{DeathReason, ZooEvent};
use crate::rng::GameRng;
use crate::species::{Climate, Diet};
use crate::types::Day;

/// Chance that a non-empty pen turns dirty overnight (1 in N).
const DIRTY_ONE_IN: u64 = 3;

/// How many fresh infections each established carrier causes per day.
const SPREAD_FANOUT: usize = 2;

#[derive(Debug, Clone)]
pub struct Pen {
    capacity: usize,
    diet: Diet,
    climate: Climate,
    animals: Vec<Animal>,
    clean: bool,
    /// Throttles natural seeding to one event per pen per day. Starts
    /// at 0, which (with the 0-based day counter) also blocks seeding
    /// on day 0.
    last_infection_day: Day,
    outbreak: bool,
    outbreak_day: Day,
}

impl Pen {
    pub fn new(capacity: usize, diet: Diet, climate: Climate) -> Self {
        Self {
            capacity,
            diet,
            climate,
            animals: Vec::new(),
            clean: true,
            last_infection_day: 0,
            outbreak: false,
            outbreak_day: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn climate(&self) -> Climate {
        self.climate
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn animals_mut(&mut self) -> &mut Vec<Animal> {
        &mut self.animals
    }

    pub fn is_clean(&self) -> bool {
        self.clean
    }

    pub fn set_clean(&mut self, clean: bool) {
        self.clean = clean;
    }

    pub fn outbreak_active(&self) -> bool {
        self.outbreak
    }

    pub fn outbreak_day(&self) -> Day {
        self.outbreak_day
    }

    /// Human-readable label used in the day log.
    pub fn label(&self) -> String {
        format!("{} pen ({})", self.diet.label(), self.climate.label())
    }

    /// Membership rule. Diet must always match. Non-hybrids (and
    /// hybrids whose parents shared a species) additionally need the
    /// pen's climate; true cross-species hybrids are climate-flexible
    /// and only need a climate matching either parent. Capacity is
    /// checked on the non-hybrid branch only — hybrid placement relies
    /// on the insert step for its capacity check.
    pub fn can_add(&self, animal: &Animal) -> bool {
        if animal.diet != self.diet {
            return false;
        }
        if animal.hybrid {
            return match &animal.parents {
                Some((p1, p2)) if p1.species == p2.species => animal.climate == self.climate,
                Some((p1, p2)) => {
                    animal.climate == p1.climate || animal.climate == p2.climate
                }
                None => animal.climate == self.climate,
            };
        }
        animal.climate == self.climate && self.animals.len() < self.capacity
    }

    /// Unconditional insert. Callers check `can_add` and capacity first.
    pub fn add_animal(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    pub fn remove_animal(&mut self, index: usize) -> Animal {
        self.animals.remove(index)
    }

    /// Infected animals that are still on their feet.
    pub fn infected_count(&self) -> usize {
        self.animals
            .iter()
            .filter(|a| a.infected && !a.dying)
            .count()
    }

    pub fn age_animals(&mut self) {
        for animal in &mut self.animals {
            animal.age_days += 1;
        }
    }

    /// Overnight cleanliness roll. Pens never get cleaner on their own.
    pub fn roll_cleanliness(&mut self, rng: &mut GameRng) {
        if !self.animals.is_empty() && rng.below(DIRTY_ONE_IN) == 0 {
            self.clean = false;
            log::debug!("{} turned dirty", self.label());
        }
    }

    /// Natural infection seeding: at most one per pen per day, only
    /// while the pen is fully healthy, with `seed_percent` % chance.
    pub fn infect_random(
        &mut self,
        day: Day,
        seed_percent: u64,
        rng: &mut GameRng,
        events: &mut Vec<ZooEvent>,
    ) {
        if self.infected_count() == 0 && self.last_infection_day != day && rng.percent(seed_percent)
        {
            let healthy: Vec<usize> = self
                .animals
                .iter()
                .enumerate()
                .filter(|(_, a)| !a.infected && !a.dying)
                .map(|(i, _)| i)
                .collect();
            if healthy.is_empty() {
                return;
            }
            let pick = healthy[rng.pick_index(healthy.len())];
            self.animals[pick].set_infected(day);
            self.last_infection_day = day;
            events.push(ZooEvent::AnimalInfected {
                day,
                pen: self.label(),
                animal: self.animals[pick].name.clone(),
            });
        }
    }

    /// Contagion pass. Every animal infected for at least one full day
    /// picks up to two victims from the never-infected pool, without
    /// replacement; the pool shrinks as victims are infected within the
    /// same pass, and today's fresh cases do not spread until tomorrow.
    pub fn spread_disease(&mut self, day: Day, rng: &mut GameRng, events: &mut Vec<ZooEvent>) {
        let label = self.label();
        let spreaders: Vec<usize> = self
            .animals
            .iter()
            .enumerate()
            .filter(|(_, a)| a.infected && !a.dying && (a.infection_day as i64) <= day as i64 - 1)
            .map(|(i, _)| i)
            .collect();

        for _ in spreaders {
            let mut pool: Vec<usize> = self
                .animals
                .iter()
                .enumerate()
                .filter(|(_, a)| !a.dying && a.never_infected())
                .map(|(i, _)| i)
                .collect();

            for _ in 0..SPREAD_FANOUT {
                if pool.is_empty() {
                    break;
                }
                let slot = rng.pick_index(pool.len());
                let victim = pool.remove(slot);
                self.animals[victim].set_infected(day);
                events.push(ZooEvent::AnimalInfected {
                    day,
                    pen: label.clone(),
                    animal: self.animals[victim].name.clone(),
                });
            }
        }
    }

    /// Flags an outbreak once infections exceed half the population.
    /// The flag is sticky; only `handle_dying` clears it, and only once
    /// the pen has no infected animals left.
    pub fn handle_outbreak(&mut self, day: Day, events: &mut Vec<ZooEvent>) {
        let total = self.animals.len();
        let infected = self.infected_count();
        if !self.outbreak && infected > total / 2 {
            self.outbreak = true;
            self.outbreak_day = day;
            log::info!("outbreak in {} on day {day}", self.label());
            events.push(ZooEvent::OutbreakStarted {
                day,
                pen: self.label(),
            });
        }
    }

    /// Mortality pass, active only while an outbreak is flagged: every
    /// infected animal dies of the disease, everyone else faces the
    /// old-age roll. Survivors replace the roster; the outbreak clears
    /// once no infected animals remain.
    pub fn handle_dying(
        &mut self,
        day: Day,
        max_age: u32,
        rng: &mut GameRng,
        events: &mut Vec<ZooEvent>,
    ) {
        if !self.outbreak {
            return;
        }

        let label = self.label();
        let mut survivors = Vec::with_capacity(self.animals.len());
        for animal in self.animals.drain(..) {
            let reason = if animal.infected {
                Some(DeathReason::Disease)
            } else if animal.dies_of_old_age(max_age, rng) {
                Some(DeathReason::OldAge)
            } else {
                None
            };
            match reason {
                Some(reason) => events.push(ZooEvent::AnimalDied {
                    day,
                    pen: label.clone(),
                    animal: animal.name,
                    reason,
                }),
                None => survivors.push(animal),
            }
        }
        self.animals = survivors;

        if self.infected_count() == 0 {
            self.outbreak = false;
        }
    }

    /// Starvation pass for one pen during a food shortage: the first
    /// `ration` animals eat, everyone after that survives on a coin
    /// flip.
    pub fn starve(
        &mut self,
        day: Day,
        mut ration: u32,
        rng: &mut GameRng,
        events: &mut Vec<ZooEvent>,
    ) {
        let before = self.animals.len();
        let label = self.label();
        let mut survivors = Vec::with_capacity(before);
        for animal in self.animals.drain(..) {
            if ration > 0 {
                ration -= 1;
                survivors.push(animal);
            } else if rng.coin() {
                survivors.push(animal);
            }
        }
        let dead = before - survivors.len();
        self.animals = survivors;
        if dead > 0 {
            events.push(ZooEvent::StarvationDeaths {
                day,
                pen: label,
                count: dead,
            });
        }
    }
}
