//! The zoo aggregate and the day-cycle orchestrator.
//!
//! EXECUTION ORDER of `advance_day` (fixed, documented, never reordered):
//!   1.  Terminal guards (horizon reached, director gone)
//!   2.  Reset purchase counter, settle one day of debt
//!   3.  Age every animal
//!   4.  Cleanliness degradation per pen
//!   5.  Disease engine per pen: seeding, spread, outbreak detection
//!   6.  Auto treatment by veterinarians
//!   7.  Mortality per pen (outbreak pens only)
//!   8.  Feeding, with starvation culls on shortage
//!   9.  Cleaning (one pen per cleaner)
//!   10. Popularity update
//!   11. Payroll
//!   12. Visitor revenue
//!   13. Bankruptcy check
//!   14. Free market refresh when due
//!   15. Daily visitor events
//!   16. Day counter advance
//!
//! RULES:
//!   - Aging precedes disease day-stamping, disease precedes mortality,
//!     mortality precedes feeding, feeding precedes cleaning. The order
//!     is load-bearing for the outcome distribution.
//!   - All randomness flows through the one `GameRng`, in stage order.
//!   - Commands return typed `CommandError`s and never mutate state on
//!     the failure path.
//!   - Terminal conditions are reported as `GameOutcome`, never by
//!     aborting the process; once set, `advance_day` is a no-op that
//!     repeats the outcome.

use crate::animal::Animal;
use crate::breeding;
use crate::config::ZooConfig;
use crate::error::{CommandError, CommandResult};
use crate::event::ZooEvent;
use crate::market::Market;
use crate::pen::Pen;
use crate::rng::GameRng;
use crate::species::{Climate, Diet};
use crate::types::{Day, Money};
use crate::worker::{Worker, WorkerRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    Bankrupt,
    DirectorGone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GameOutcome {
    Won,
    Lost { reason: LossReason },
}

/// What one `advance_day` call produced: the simulated day, the drained
/// day log, and the terminal outcome if the session ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: Day,
    pub events: Vec<ZooEvent>,
    pub outcome: Option<GameOutcome>,
}

pub struct Zoo {
    name: String,
    config: ZooConfig,
    rng: GameRng,
    money: Money,
    food: u32,
    popularity: i64,
    day: Day,
    pens: Vec<Pen>,
    workers: Vec<Worker>,
    market: Market,
    debt: Money,
    daily_debt_payment: Money,
    debt_days_left: u64,
    bought_today: u32,
    events: Vec<ZooEvent>,
    outcome: Option<GameOutcome>,
}

impl Zoo {
    pub fn new(name: impl Into<String>, director: impl Into<String>, seed: u64) -> Self {
        Self::with_config(name, director, ZooConfig::default(), seed)
    }

    pub fn with_config(
        name: impl Into<String>,
        director: impl Into<String>,
        config: ZooConfig,
        seed: u64,
    ) -> Self {
        let mut rng = GameRng::new(seed);
        let mut market = Market::new();
        market.generate(0, &mut rng);
        Self {
            name: name.into(),
            money: config.starting_money,
            food: 0,
            popularity: config.starting_popularity,
            day: 0,
            pens: Vec::new(),
            workers: vec![Worker::new(WorkerRole::Director, director)],
            market,
            debt: 0.0,
            daily_debt_payment: 0.0,
            debt_days_left: 0,
            bought_today: 0,
            events: Vec::new(),
            outcome: None,
            config,
            rng,
        }
    }

    // ── Read access ────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn food(&self) -> u32 {
        self.food
    }

    pub fn popularity(&self) -> i64 {
        self.popularity
    }

    pub fn debt(&self) -> Money {
        self.debt
    }

    pub fn debt_days_left(&self) -> u64 {
        self.debt_days_left
    }

    pub fn pens(&self) -> &[Pen] {
        &self.pens
    }

    /// Mutable pen access for the presentation layer (renames, ad-hoc
    /// inspection). The day cycle does not go through this.
    pub fn pens_mut(&mut self) -> &mut [Pen] {
        &mut self.pens
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn config(&self) -> &ZooConfig {
        &self.config
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn total_animals(&self) -> usize {
        self.pens.iter().map(|p| p.animals().len()).sum()
    }

    pub fn has_director(&self) -> bool {
        self.workers.iter().any(|w| w.role == WorkerRole::Director)
    }

    // Staffing guidance shown by the menu layer.

    pub fn recommended_vets(&self) -> usize {
        (self.total_animals() + 19) / 20
    }

    pub fn recommended_cleaners(&self) -> usize {
        self.pens.len()
    }

    pub fn recommended_feeders(&self) -> usize {
        (self.pens.len() + 1) / 2
    }

    // ── Day cycle ──────────────────────────────────────────────────

    /// Advance the simulation by one day. See the module header for the
    /// stage order. Returns the drained day log and, when the session
    /// ends, the terminal outcome; further calls repeat the outcome
    /// without touching state.
    pub fn advance_day(&mut self) -> DayReport {
        if let Some(outcome) = self.outcome {
            return self.terminal_report(outcome);
        }
        if self.day >= self.config.max_days {
            self.outcome = Some(GameOutcome::Won);
            return self.terminal_report(GameOutcome::Won);
        }
        if !self.has_director() {
            let outcome = GameOutcome::Lost {
                reason: LossReason::DirectorGone,
            };
            self.outcome = Some(outcome);
            return self.terminal_report(outcome);
        }

        let day = self.day;
        self.bought_today = 0;
        self.process_debt();

        for pen in &mut self.pens {
            pen.age_animals();
        }

        for pen in &mut self.pens {
            pen.roll_cleanliness(&mut self.rng);
        }

        let seed_percent = self.config.infection_seed_percent;
        for pen in &mut self.pens {
            pen.infect_random(day, seed_percent, &mut self.rng, &mut self.events);
            pen.spread_disease(day, &mut self.rng, &mut self.events);
            pen.handle_outbreak(day, &mut self.events);
        }

        self.auto_treat_animals();

        let max_age = self.config.max_age;
        for pen in &mut self.pens {
            pen.handle_dying(day, max_age, &mut self.rng, &mut self.events);
        }

        self.feed_animals();
        self.clean_pens();
        self.update_popularity();
        self.pay_salaries();
        self.collect_revenue();

        if self.money < 0.0 {
            let outcome = GameOutcome::Lost {
                reason: LossReason::Bankrupt,
            };
            self.outcome = Some(outcome);
            return DayReport {
                day,
                events: std::mem::take(&mut self.events),
                outcome: Some(outcome),
            };
        }

        if self.market.can_refresh(day) {
            self.market.generate(day, &mut self.rng);
            self.events.push(ZooEvent::MarketRefreshed { day, paid: false });
        }

        self.daily_visitors();

        log::debug!(
            "day={day} money={:.0} food={} popularity={} animals={}",
            self.money,
            self.food,
            self.popularity,
            self.total_animals()
        );

        let report = DayReport {
            day,
            events: std::mem::take(&mut self.events),
            outcome: None,
        };
        self.day += 1;
        report
    }

    fn terminal_report(&mut self, outcome: GameOutcome) -> DayReport {
        DayReport {
            day: self.day,
            events: std::mem::take(&mut self.events),
            outcome: Some(outcome),
        }
    }

    /// One day of debt service. A missed payment never blocks the day;
    /// it logs arrears and costs popularity instead.
    fn process_debt(&mut self) {
        if self.debt_days_left == 0 {
            return;
        }
        let day = self.day;
        let payment = self.daily_debt_payment.min(self.debt);
        if self.money >= payment {
            self.money -= payment;
            self.debt -= payment;
            self.debt_days_left -= 1;
            self.events.push(ZooEvent::DebtPayment {
                day,
                amount: payment,
            });
        } else {
            self.events.push(ZooEvent::DebtArrears { day });
            self.popularity -= self.config.arrears_popularity_penalty;
        }
    }

    /// Veterinarian capacity: (animals ÷ vets) × vets cures, scanning
    /// pens in order. Integer division means a large staff can still
    /// under-treat; zero vets treat nothing.
    pub fn auto_treat_animals(&mut self) {
        let vets = self
            .workers
            .iter()
            .filter(|w| w.role == WorkerRole::Vet)
            .count();
        if vets == 0 {
            return;
        }
        let quota = (self.total_animals() / vets) * vets;
        let day = self.day;

        let mut treated = 0;
        for pen in &mut self.pens {
            for animal in pen.animals_mut() {
                if animal.infected && treated < quota {
                    animal.cure();
                    treated += 1;
                }
            }
        }

        if treated > 0 {
            self.events.push(ZooEvent::VetsTreated {
                day,
                count: treated,
            });
        }
    }

    /// Required food equals the head count. On shortage every pen runs
    /// a starvation cull against the (shared, un-decremented) remaining
    /// stock, then the stock zeroes out.
    fn feed_animals(&mut self) {
        let day = self.day;
        let needed = self.total_animals() as u32;
        if self.food >= needed {
            self.food -= needed;
            return;
        }

        self.events.push(ZooEvent::FoodShortage { day });
        let ration = self.food;
        for pen in &mut self.pens {
            pen.starve(day, ration, &mut self.rng, &mut self.events);
        }
        self.food = 0;
    }

    /// Each cleaner cleans at most the first dirty pen found, one pen
    /// per cleaner per day.
    fn clean_pens(&mut self) {
        let cleaners = self
            .workers
            .iter()
            .filter(|w| w.role == WorkerRole::Cleaner)
            .count();
        for _ in 0..cleaners {
            if let Some(pen) = self.pens.iter_mut().find(|p| !p.is_clean()) {
                pen.set_clean(true);
            }
        }
    }

    /// Dirty pens and infections drag popularity down, daily noise in
    /// [-10, 10] moves it either way, and the floor is 0.
    fn update_popularity(&mut self) {
        let dirty = self.pens.iter().filter(|p| !p.is_clean()).count() as i64;
        let infected: i64 = self.pens.iter().map(|p| p.infected_count() as i64).sum();
        let jitter = self.rng.offset(10);
        self.popularity = (self.popularity - dirty - infected + jitter).max(0);
    }

    fn pay_salaries(&mut self) {
        let total: Money = self.workers.iter().map(|w| w.role.salary()).sum();
        self.money -= total;
        self.events.push(ZooEvent::SalariesPaid {
            day: self.day,
            amount: total,
        });
    }

    /// Visitors only come for animals: 2 × popularity of them, paying
    /// per animal on display.
    fn collect_revenue(&mut self) {
        let total = self.total_animals();
        if total == 0 {
            return;
        }
        let visitors = 2 * self.popularity;
        let amount = (visitors * (total as i64).max(1)) as Money;
        self.money += amount;
        self.events.push(ZooEvent::VisitorRevenue {
            day: self.day,
            visitors,
            amount,
        });
    }

    /// Celebrity and photographer sightings: a small popularity bonus
    /// and a log entry when anyone notable showed up.
    fn daily_visitors(&mut self) {
        let day = self.day;
        let celebrities = self.rng.below(3);
        let photographers = self.rng.below(6);
        let bonus = celebrities * 10 + photographers * 5;

        if celebrities > 0 || photographers > 0 {
            self.events.push(ZooEvent::DailyVisitors {
                day,
                celebrities,
                photographers,
                bonus,
            });
        }
        self.popularity += bonus as i64;
    }

    // ── Player commands ────────────────────────────────────────────

    /// Buy a market animal and house it in the first pen that accepts
    /// it. Past the configured day, purchases are limited to one per
    /// day.
    pub fn buy_animal(&mut self, index: usize) -> CommandResult<Animal> {
        if self.day >= self.config.purchase_limit_day && self.bought_today >= 1 {
            return Err(CommandError::DailyPurchaseLimit);
        }
        let offer = self
            .market
            .offers()
            .get(index)
            .ok_or(CommandError::InvalidIndex)?;
        let pen_index = self
            .pens
            .iter()
            .position(|p| p.can_add(offer))
            .ok_or(CommandError::NoSuitablePen)?;
        if self.money < offer.price {
            return Err(CommandError::InsufficientFunds);
        }

        let animal = self.market.take(index);
        self.money -= animal.price;
        self.bought_today += 1;
        self.events.push(ZooEvent::AnimalBought {
            day: self.day,
            animal: animal.name.clone(),
            price: animal.price,
        });
        self.pens[pen_index].add_animal(animal.clone());
        Ok(animal)
    }

    /// Sell an animal for its full price.
    pub fn sell_animal(&mut self, pen_index: usize, animal_index: usize) -> CommandResult<Money> {
        let pen = self
            .pens
            .get_mut(pen_index)
            .ok_or(CommandError::InvalidIndex)?;
        if animal_index >= pen.animals().len() {
            return Err(CommandError::InvalidIndex);
        }
        let animal = pen.remove_animal(animal_index);
        self.money += animal.price;
        self.events.push(ZooEvent::AnimalSold {
            day: self.day,
            animal: animal.name,
            price: animal.price,
        });
        Ok(animal.price)
    }

    /// Derive an offspring from two housed animals. The offspring is
    /// returned unplaced; follow up with `place_offspring`.
    pub fn breed_animals(
        &mut self,
        pen_a: usize,
        animal_a: usize,
        pen_b: usize,
        animal_b: usize,
    ) -> CommandResult<Animal> {
        let a = self
            .pens
            .get(pen_a)
            .and_then(|p| p.animals().get(animal_a))
            .ok_or(CommandError::InvalidIndex)?;
        let b = self
            .pens
            .get(pen_b)
            .and_then(|p| p.animals().get(animal_b))
            .ok_or(CommandError::InvalidIndex)?;
        breeding::breed(a, b, &mut self.rng)
    }

    /// House a newborn. Capacity is checked here for every animal,
    /// which is what keeps climate-flexible hybrids from overfilling a
    /// pen.
    pub fn place_offspring(&mut self, offspring: Animal, pen_index: usize) -> CommandResult<()> {
        let day = self.day;
        let pen = self
            .pens
            .get_mut(pen_index)
            .ok_or(CommandError::InvalidIndex)?;
        if pen.animals().len() >= pen.capacity() {
            return Err(CommandError::NoCapacity);
        }
        if !pen.can_add(&offspring) {
            return Err(CommandError::NotEligiblePen);
        }
        let parents = offspring
            .parents
            .as_ref()
            .map(|(p1, p2)| (p1.name.clone(), p2.name.clone()))
            .unwrap_or_default();
        self.events.push(ZooEvent::OffspringBorn {
            day,
            name: offspring.name.clone(),
            hybrid: offspring.hybrid,
            parents,
        });
        pen.add_animal(offspring);
        Ok(())
    }

    /// Cure one infected animal for the treatment fee.
    pub fn treat_animal(&mut self, pen_index: usize, animal_index: usize) -> CommandResult<()> {
        let animal = self
            .pens
            .get(pen_index)
            .and_then(|p| p.animals().get(animal_index))
            .ok_or(CommandError::InvalidIndex)?;
        if !animal.infected {
            return Err(CommandError::NotInfected);
        }
        if self.money < self.config.treatment_cost {
            return Err(CommandError::InsufficientFunds);
        }

        let cost = self.config.treatment_cost;
        let animal = &mut self.pens[pen_index].animals_mut()[animal_index];
        animal.cure();
        let name = animal.name.clone();
        self.money -= cost;
        self.events.push(ZooEvent::AnimalTreated {
            day: self.day,
            animal: name,
            cost,
        });
        Ok(())
    }

    /// Cure every infected animal at once, all or nothing.
    pub fn treat_all(&mut self) -> CommandResult<usize> {
        let infected: usize = self
            .pens
            .iter()
            .map(|p| p.animals().iter().filter(|a| a.infected).count())
            .sum();
        let cost = infected as Money * self.config.treatment_cost;
        if cost > self.money {
            return Err(CommandError::InsufficientFunds);
        }

        for pen in &mut self.pens {
            for animal in pen.animals_mut() {
                if animal.infected {
                    animal.cure();
                }
            }
        }
        self.money -= cost;
        self.events.push(ZooEvent::AllAnimalsTreated {
            day: self.day,
            count: infected,
            cost,
        });
        Ok(infected)
    }

    /// Hire a worker. The director chair only seats one.
    pub fn hire_worker(&mut self, role: WorkerRole, name: impl Into<String>) -> CommandResult<()> {
        if role == WorkerRole::Director && self.has_director() {
            return Err(CommandError::DirectorAlreadyExists);
        }
        let name = name.into();
        self.events.push(ZooEvent::WorkerHired {
            day: self.day,
            name: name.clone(),
            role,
        });
        self.workers.push(Worker::new(role, name));
        Ok(())
    }

    pub fn rename_worker(&mut self, index: usize, name: impl Into<String>) -> CommandResult<()> {
        let worker = self
            .workers
            .get_mut(index)
            .ok_or(CommandError::InvalidIndex)?;
        worker.name = name.into();
        let name = worker.name.clone();
        self.events
            .push(ZooEvent::WorkerRenamed { day: self.day, name });
        Ok(())
    }

    /// Fire a worker. Firing the director ends the game on the spot —
    /// the terminal outcome is returned, not an error.
    pub fn fire_worker(&mut self, index: usize) -> CommandResult<Option<GameOutcome>> {
        if index >= self.workers.len() {
            return Err(CommandError::InvalidIndex);
        }
        let worker = self.workers.remove(index);
        self.events.push(ZooEvent::WorkerFired {
            day: self.day,
            name: worker.name,
            role: worker.role,
        });
        if worker.role == WorkerRole::Director {
            let outcome = GameOutcome::Lost {
                reason: LossReason::DirectorGone,
            };
            self.outcome = Some(outcome);
            return Ok(Some(outcome));
        }
        Ok(None)
    }

    /// Build a pen; cost scales with capacity.
    pub fn build_pen(&mut self, capacity: usize, diet: Diet, climate: Climate) -> CommandResult<()> {
        let cost = capacity as Money * self.config.pen_cost_per_capacity;
        if self.money < cost {
            return Err(CommandError::InsufficientFunds);
        }
        self.money -= cost;
        self.pens.push(Pen::new(capacity, diet, climate));
        self.events.push(ZooEvent::PenBuilt {
            day: self.day,
            diet,
            climate,
            capacity,
            cost,
        });
        Ok(())
    }

    /// Tear down an empty pen.
    pub fn destroy_pen(&mut self, index: usize) -> CommandResult<()> {
        let pen = self.pens.get(index).ok_or(CommandError::InvalidIndex)?;
        if !pen.animals().is_empty() {
            return Err(CommandError::PenNotEmpty);
        }
        let pen = self.pens.remove(index);
        self.events.push(ZooEvent::PenDestroyed {
            day: self.day,
            pen: pen.label(),
        });
        Ok(())
    }

    /// Take out a loan: the principal lands immediately, the debt
    /// carries interest and amortizes daily. Only one loan at a time.
    /// `days` must be at least 1; the menu layer validates the term
    /// before calling in.
    pub fn take_loan(&mut self, amount: Money, days: u64) -> CommandResult<()> {
        debug_assert!(days > 0, "loan term must be at least one day");
        if self.debt > 0.0 {
            return Err(CommandError::LoanOutstanding);
        }
        self.money += amount;
        self.debt = amount * self.config.loan_interest;
        self.daily_debt_payment = self.debt / days as Money;
        self.debt_days_left = days;
        self.events.push(ZooEvent::LoanTaken {
            day: self.day,
            amount,
            days,
        });
        Ok(())
    }

    /// Paid market refresh, gated by the same once-per-day rule as the
    /// free one.
    pub fn refresh_market(&mut self) -> CommandResult<()> {
        if !self.market.can_refresh(self.day) {
            return Err(CommandError::MarketAlreadyRefreshed);
        }
        if self.money < self.config.market_refresh_cost {
            return Err(CommandError::InsufficientFunds);
        }
        self.money -= self.config.market_refresh_cost;
        self.market.generate(self.day, &mut self.rng);
        self.events.push(ZooEvent::MarketRefreshed {
            day: self.day,
            paid: true,
        });
        Ok(())
    }

    /// Buy food stock; one unit feeds one animal for one day.
    pub fn buy_food(&mut self, units: u32) -> CommandResult<()> {
        let cost = units as Money * self.config.food_price;
        if self.money < cost {
            return Err(CommandError::InsufficientFunds);
        }
        self.money -= cost;
        self.food += units;
        self.events.push(ZooEvent::FoodBought {
            day: self.day,
            units,
            cost,
        });
        Ok(())
    }

    /// Advertising: every currency unit spent buys one point of
    /// popularity.
    pub fn advertise(&mut self, spend: i64) -> CommandResult<()> {
        let cost = spend as Money;
        if cost > self.money {
            return Err(CommandError::InsufficientFunds);
        }
        self.money -= cost;
        self.popularity += spend;
        self.events
            .push(ZooEvent::AdvertisingBought { day: self.day, cost });
        Ok(())
    }

    pub fn rename_animal(
        &mut self,
        pen_index: usize,
        animal_index: usize,
        name: impl Into<String>,
    ) -> CommandResult<()> {
        let animal = self
            .pens
            .get_mut(pen_index)
            .and_then(|p| p.animals_mut().get_mut(animal_index))
            .ok_or(CommandError::InvalidIndex)?;
        animal.name = name.into();
        let name = animal.name.clone();
        self.events
            .push(ZooEvent::AnimalRenamed { day: self.day, name });
        Ok(())
    }
}
