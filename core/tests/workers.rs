//! Staffing tests: the director chair, hiring and firing, payroll.

use menagerie_core::{
    CommandError, GameOutcome, LossReason, WorkerRole, Zoo, ZooEvent,
};

#[test]
fn a_new_zoo_seats_its_director() {
    let zoo = Zoo::new("Test Zoo", "Dir", 81);
    assert!(zoo.has_director());
    assert_eq!(zoo.workers().len(), 1);
    assert_eq!(zoo.workers()[0].role, WorkerRole::Director);
    assert_eq!(zoo.workers()[0].name, "Dir");
}

#[test]
fn the_director_chair_seats_exactly_one() {
    let mut zoo = Zoo::new("Test Zoo", "Dir", 82);
    assert_eq!(
        zoo.hire_worker(WorkerRole::Director, "Usurper"),
        Err(CommandError::DirectorAlreadyExists)
    );
    assert_eq!(zoo.workers().len(), 1);
}

#[test]
fn firing_ordinary_staff_keeps_the_game_going() {
    let mut zoo = Zoo::new("Test Zoo", "Dir", 83);
    zoo.hire_worker(WorkerRole::Feeder, "F").unwrap();

    assert_eq!(zoo.fire_worker(1), Ok(None));
    assert!(zoo.outcome().is_none());
    assert_eq!(zoo.workers().len(), 1);
}

#[test]
fn firing_the_director_ends_the_game_immediately() {
    let mut zoo = Zoo::new("Test Zoo", "Dir", 84);
    let outcome = zoo.fire_worker(0).unwrap();

    let expected = GameOutcome::Lost {
        reason: LossReason::DirectorGone,
    };
    assert_eq!(outcome, Some(expected));
    assert_eq!(zoo.outcome(), Some(expected));
    assert!(!zoo.has_director());

    // The outcome is sticky and a replacement hire does not revive the
    // session.
    zoo.hire_worker(WorkerRole::Director, "Next").unwrap();
    assert_eq!(zoo.advance_day().outcome, Some(expected));
}

#[test]
fn firing_out_of_range_is_an_error() {
    let mut zoo = Zoo::new("Test Zoo", "Dir", 85);
    assert_eq!(zoo.fire_worker(7), Err(CommandError::InvalidIndex));
}

#[test]
fn salary_table() {
    assert_eq!(WorkerRole::Vet.salary(), 50.0);
    assert_eq!(WorkerRole::Cleaner.salary(), 20.0);
    assert_eq!(WorkerRole::Feeder.salary(), 30.0);
    assert_eq!(WorkerRole::Director.salary(), 500.0);
}

#[test]
fn payroll_sums_every_salary() {
    let mut zoo = Zoo::new("Test Zoo", "Dir", 86);
    zoo.hire_worker(WorkerRole::Vet, "V").unwrap();
    zoo.hire_worker(WorkerRole::Cleaner, "C").unwrap();
    zoo.hire_worker(WorkerRole::Feeder, "F").unwrap();
    let money = zoo.money();

    let report = zoo.advance_day();
    assert!(report
        .events
        .iter()
        .any(|e| matches!(e, ZooEvent::SalariesPaid { amount, .. } if *amount == 600.0)));
    assert_eq!(zoo.money(), money - 600.0, "no animals, so payroll is the only flow");
}

#[test]
fn renaming_a_worker_sticks() {
    let mut zoo = Zoo::new("Test Zoo", "Dir", 87);
    zoo.hire_worker(WorkerRole::Vet, "Before").unwrap();
    zoo.rename_worker(1, "After").unwrap();
    assert_eq!(zoo.workers()[1].name, "After");

    assert_eq!(
        zoo.rename_worker(9, "Ghost"),
        Err(CommandError::InvalidIndex)
    );
}

#[test]
fn cleaners_restore_one_pen_each() {
    use menagerie_core::{Climate, Diet};

    let mut zoo = Zoo::new("Test Zoo", "Dir", 88);
    zoo.build_pen(5, Diet::Herbivore, Climate::Arctic).unwrap();
    zoo.build_pen(5, Diet::Carnivore, Climate::Desert).unwrap();
    zoo.pens_mut()[0].set_clean(false);
    zoo.pens_mut()[1].set_clean(false);
    zoo.hire_worker(WorkerRole::Cleaner, "C").unwrap();

    // Empty pens never re-dirty, so after the cycle exactly one of the
    // two is clean again.
    zoo.advance_day();
    let clean = zoo.pens().iter().filter(|p| p.is_clean()).count();
    assert_eq!(clean, 1);
}
