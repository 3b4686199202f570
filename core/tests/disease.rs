//! Disease engine tests: seeding, spread, outbreak detection, and
//! mortality — driven directly against a `Pen`.

use menagerie_core::{Animal, Climate, Diet, GameRng, Gender, Pen, Species, ZooEvent};

fn herd(pen: &mut Pen, count: usize, rng: &mut GameRng) {
    for i in 0..count {
        let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
        let mut animal = Animal::from_catalog(Species::MuskOx, gender, rng);
        animal.age_days = 10;
        pen.add_animal(animal);
    }
}

fn arctic_pen(capacity: usize) -> Pen {
    Pen::new(capacity, Diet::Herbivore, Climate::Arctic)
}

#[test]
fn no_seeding_on_day_zero() {
    let mut rng = GameRng::new(11);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 5, &mut rng);

    let mut events = Vec::new();
    for _ in 0..100 {
        pen.infect_random(0, 100, &mut rng, &mut events);
    }
    assert_eq!(pen.infected_count(), 0, "the day-0 throttle must hold");
    assert!(events.is_empty());
}

#[test]
fn seeding_infects_exactly_one_animal() {
    let mut rng = GameRng::new(12);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 5, &mut rng);

    let mut events = Vec::new();
    pen.infect_random(1, 100, &mut rng, &mut events);
    assert_eq!(pen.infected_count(), 1);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ZooEvent::AnimalInfected { day: 1, .. }));
}

#[test]
fn seeding_is_throttled_to_once_per_day() {
    let mut rng = GameRng::new(13);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 5, &mut rng);

    let mut events = Vec::new();
    pen.infect_random(1, 100, &mut rng, &mut events);
    pen.infect_random(1, 100, &mut rng, &mut events);
    assert_eq!(pen.infected_count(), 1);
    assert_eq!(events.len(), 1);
}

#[test]
fn established_carrier_infects_up_to_two() {
    let mut rng = GameRng::new(14);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 6, &mut rng);
    pen.animals_mut()[0].set_infected(1);

    let mut events = Vec::new();
    pen.spread_disease(2, &mut rng, &mut events);
    assert_eq!(pen.infected_count(), 3, "one carrier infects two victims");
    assert_eq!(events.len(), 2);
}

#[test]
fn fresh_infection_does_not_spread_the_same_day() {
    let mut rng = GameRng::new(15);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 6, &mut rng);
    pen.animals_mut()[0].set_infected(2);

    let mut events = Vec::new();
    pen.spread_disease(2, &mut rng, &mut events);
    assert_eq!(pen.infected_count(), 1, "day-of infections must not spread yet");
}

#[test]
fn spread_is_without_replacement() {
    let mut rng = GameRng::new(16);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 2, &mut rng);
    pen.animals_mut()[0].set_infected(1);

    let mut events = Vec::new();
    pen.spread_disease(5, &mut rng, &mut events);
    assert_eq!(pen.infected_count(), 2, "only one victim was available");
    assert_eq!(events.len(), 1);
}

#[test]
fn infected_count_never_exceeds_population() {
    let mut rng = GameRng::new(17);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 4, &mut rng);
    pen.animals_mut()[0].set_infected(1);
    pen.animals_mut()[1].set_infected(1);
    pen.animals_mut()[2].set_infected(1);

    let mut events = Vec::new();
    pen.spread_disease(3, &mut rng, &mut events);
    assert!(pen.infected_count() <= pen.animals().len());
}

#[test]
fn outbreak_flags_once_majority_is_infected() {
    let mut rng = GameRng::new(18);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 3, &mut rng);
    pen.animals_mut()[0].set_infected(1);
    pen.animals_mut()[1].set_infected(1);

    let mut events = Vec::new();
    pen.handle_outbreak(2, &mut events);
    assert!(pen.outbreak_active());
    assert_eq!(pen.outbreak_day(), 2);
    assert!(matches!(events[0], ZooEvent::OutbreakStarted { day: 2, .. }));
}

#[test]
fn exactly_half_infected_is_not_an_outbreak() {
    let mut rng = GameRng::new(19);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 4, &mut rng);
    pen.animals_mut()[0].set_infected(1);
    pen.animals_mut()[1].set_infected(1);

    let mut events = Vec::new();
    pen.handle_outbreak(2, &mut events);
    assert!(!pen.outbreak_active(), "strictly-more-than-half is required");
}

#[test]
fn no_mortality_without_an_outbreak() {
    let mut rng = GameRng::new(20);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 4, &mut rng);
    pen.animals_mut()[0].set_infected(1);

    let mut events = Vec::new();
    pen.handle_dying(3, 30, &mut rng, &mut events);
    assert_eq!(pen.animals().len(), 4, "mortality only runs during outbreaks");
}

#[test]
fn outbreak_kills_all_infected_and_then_clears() {
    let mut rng = GameRng::new(21);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 3, &mut rng);
    pen.animals_mut()[0].set_infected(1);
    pen.animals_mut()[1].set_infected(1);

    let mut events = Vec::new();
    pen.handle_outbreak(2, &mut events);
    pen.handle_dying(2, 30, &mut rng, &mut events);

    assert_eq!(pen.infected_count(), 0);
    assert_eq!(pen.animals().len(), 1, "the healthy young animal survives");
    assert!(!pen.outbreak_active(), "flag clears once no infected remain");

    let deaths = events
        .iter()
        .filter(|e| matches!(e, ZooEvent::AnimalDied { .. }))
        .count();
    assert_eq!(deaths, 2);
}

#[test]
fn old_age_death_is_reported_during_an_outbreak() {
    let mut rng = GameRng::new(22);
    let mut pen = arctic_pen(10);
    herd(&mut pen, 3, &mut rng);
    pen.animals_mut()[0].set_infected(1);
    pen.animals_mut()[1].set_infected(1);
    // 100 percentage points past max age: the roll always kills.
    pen.animals_mut()[2].age_days = 200;

    let mut events = Vec::new();
    pen.handle_outbreak(2, &mut events);
    pen.handle_dying(2, 30, &mut rng, &mut events);

    assert!(pen.animals().is_empty());
    let old_age = events
        .iter()
        .filter(|e| {
            matches!(
                e,
                ZooEvent::AnimalDied {
                    reason: menagerie_core::DeathReason::OldAge,
                    ..
                }
            )
        })
        .count();
    assert_eq!(old_age, 1);
}
