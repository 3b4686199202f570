//! The breeding engine: a pure function over two animals.
//!
//! Preconditions are checked in a fixed order so the caller gets a
//! distinct failure signal for each: reproduction eligibility first,
//! then gender. Placement of the offspring is the caller's problem
//! (`Zoo::place_offspring`), subject to the pen membership rule.

use crate::animal::{Animal, Parentage};
use crate::error::{CommandError, CommandResult};
use crate::rng::GameRng;
use crate::species::Gender;
use std::rc::Rc;

/// Price factor applied to cross-species offspring.
const HYBRID_DISCOUNT: f64 = 0.8;

/// Derive an offspring from two parents.
///
/// Same-species pairs produce a plain member of that species with
/// averaged weight bounds and price. Cross-species pairs produce a
/// hybrid: a spliced species name (parent order chosen by coin flip),
/// climate and diet each inherited from an independently chosen parent,
/// and the hybrid price discount. Offspring gender is uniform random
/// regardless of the parents. The newborn starts at age 1 with a weight
/// resampled inside the averaged bounds, and keeps immutable snapshots
/// of both parents.
pub fn breed(a: &Animal, b: &Animal, rng: &mut GameRng) -> CommandResult<Animal> {
    if !a.can_reproduce() || !b.can_reproduce() {
        return Err(CommandError::NotEligible);
    }
    if a.gender == b.gender {
        return Err(CommandError::SameGender);
    }

    let hybrid = a.species != b.species;
    let (species, climate) = if hybrid {
        let name = if rng.coin() {
            splice_names(&a.species, &b.species)
        } else {
            splice_names(&b.species, &a.species)
        };
        let climate = if rng.coin() { a.climate } else { b.climate };
        (name, climate)
    } else {
        (a.species.clone(), a.climate)
    };

    let diet = if rng.coin() { a.diet } else { b.diet };
    let gender = if rng.coin() {
        Gender::Male
    } else {
        Gender::Female
    };

    let min_weight = (a.min_weight + b.min_weight) / 2.0;
    let max_weight = (a.max_weight + b.max_weight) / 2.0;
    let price =
        (a.price + b.price) / 2.0 * if hybrid { HYBRID_DISCOUNT } else { 1.0 };
    let description = if hybrid {
        format!("Hybrid of {} and {}", a.species, b.species)
    } else {
        a.species.clone()
    };

    Ok(Animal {
        name: species.clone(),
        species,
        description,
        diet,
        climate,
        gender,
        price,
        weight: rng.uniform(min_weight, max_weight),
        min_weight,
        max_weight,
        age_days: 1,
        infected: false,
        infection_day: 0,
        dying: false,
        hybrid,
        parents: Some((Rc::new(Parentage::of(a)), Rc::new(Parentage::of(b)))),
    })
}

/// Front half (plus one) of the first species name glued to the back
/// half of the second.
fn splice_names(front: &str, back: &str) -> String {
    let front: Vec<char> = front.chars().collect();
    let back: Vec<char> = back.chars().collect();
    front[..front.len() / 2 + 1]
        .iter()
        .chain(back[back.len() / 2..].iter())
        .collect()
}
