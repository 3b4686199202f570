//! zoo-runner: headless autopilot for the menagerie simulation.
//!
//! Usage:
//!   zoo-runner --seed 12345 --days 50
//!   zoo-runner --seed 12345 --days 50 --json
//!
//! Builds a small zoo, runs a fixed management policy for the given
//! number of days (or until the game ends), and prints a summary.
//! Useful for balance checks and for eyeballing seed-to-seed variance.

use anyhow::Result;
use menagerie_core::{Climate, Diet, GameOutcome, Worker, WorkerRole, Zoo};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let days = parse_arg(&args, "--days", 50u64);
    let json = args.iter().any(|a| a == "--json");

    let mut zoo = Zoo::new("Menagerie", "Autopilot", seed);

    // Fixed opening: two pens, a vet and a cleaner, a few animals.
    zoo.build_pen(8, Diet::Herbivore, Climate::Tropical)?;
    zoo.build_pen(8, Diet::Carnivore, Climate::Temperate)?;
    zoo.hire_worker(WorkerRole::Vet, "V. Greene")?;
    zoo.hire_worker(WorkerRole::Cleaner, "C. Moss")?;
    for index in (0..zoo.market().offers().len()).rev() {
        let _ = zoo.buy_animal(index);
    }

    let mut outcome = None;
    for _ in 0..days {
        // Keep the larder stocked a day ahead.
        let needed = zoo.total_animals() as u32 + 5;
        if zoo.food() < needed {
            let _ = zoo.buy_food(needed - zoo.food());
        }

        let report = zoo.advance_day();
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            for event in &report.events {
                log::info!("day {}: {:?}", report.day, event);
            }
        }
        if let Some(o) = report.outcome {
            outcome = Some(o);
            break;
        }
    }

    println!("=== {} ===", zoo.name());
    println!("seed:       {seed}");
    println!("day:        {}", zoo.day());
    println!("money:      {:.0}", zoo.money());
    println!("popularity: {}", zoo.popularity());
    println!("animals:    {}", zoo.total_animals());
    println!("staff:      {}", summarize_staff(zoo.workers()));
    match outcome {
        Some(GameOutcome::Won) => println!("outcome:    won"),
        Some(GameOutcome::Lost { reason }) => println!("outcome:    lost ({reason:?})"),
        None => println!("outcome:    still running"),
    }

    Ok(())
}

fn summarize_staff(workers: &[Worker]) -> String {
    let count = |role| workers.iter().filter(|w| w.role == role).count();
    format!(
        "{} vets, {} cleaners, {} feeders, {} director",
        count(WorkerRole::Vet),
        count(WorkerRole::Cleaner),
        count(WorkerRole::Feeder),
        count(WorkerRole::Director),
    )
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
