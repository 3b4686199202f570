//! The fixed species catalog and the closed trait enums shared by
//! animals, pens, and the market.
//!
//! Catalog data (price, weight bounds, diet, climate) is keyed by the
//! `Species` enum rather than branched on at runtime, so the table is
//! exhaustive by construction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Herbivore,
    Carnivore,
}

impl Diet {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Herbivore => "herbivores",
            Self::Carnivore => "carnivores",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Tropical,
    Temperate,
    Arctic,
    Desert,
}

impl Climate {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tropical => "Tropical",
            Self::Temperate => "Temperate",
            Self::Arctic => "Arctic",
            Self::Desert => "Desert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Every species the market can offer. Hybrids bred in-game carry
/// synthesized species strings and never appear in this catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Lion,
    Tiger,
    Giraffe,
    Elephant,
    Zebra,
    Wolf,
    Cheetah,
    MuskOx,
}

impl Species {
    pub const ALL: [Species; 8] = [
        Species::Lion,
        Species::Tiger,
        Species::Giraffe,
        Species::Elephant,
        Species::Zebra,
        Species::Wolf,
        Species::Cheetah,
        Species::MuskOx,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lion => "Lion",
            Self::Tiger => "Tiger",
            Self::Giraffe => "Giraffe",
            Self::Elephant => "Elephant",
            Self::Zebra => "Zebra",
            Self::Wolf => "Wolf",
            Self::Cheetah => "Cheetah",
            Self::MuskOx => "Musk-ox",
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Self::Lion => 1000.0,
            Self::Tiger => 950.0,
            Self::Giraffe => 700.0,
            Self::Elephant => 800.0,
            Self::Zebra => 600.0,
            Self::Wolf => 700.0,
            Self::Cheetah => 850.0,
            Self::MuskOx => 750.0,
        }
    }

    /// Half-open [min, max) weight bounds in kilograms.
    pub fn weight_bounds(&self) -> (f64, f64) {
        match self {
            Self::Lion => (180.0, 250.0),
            Self::Tiger => (160.0, 230.0),
            Self::Giraffe => (800.0, 1200.0),
            Self::Elephant => (5000.0, 6000.0),
            Self::Zebra => (250.0, 400.0),
            Self::Wolf => (40.0, 80.0),
            Self::Cheetah => (35.0, 65.0),
            Self::MuskOx => (200.0, 400.0),
        }
    }

    pub fn diet(&self) -> Diet {
        match self {
            Self::Lion | Self::Tiger | Self::Wolf | Self::Cheetah => Diet::Carnivore,
            Self::Giraffe | Self::Elephant | Self::Zebra | Self::MuskOx => Diet::Herbivore,
        }
    }

    pub fn climate(&self) -> Climate {
        match self {
            Self::Lion | Self::Giraffe => Climate::Tropical,
            Self::Wolf | Self::MuskOx => Climate::Arctic,
            Self::Zebra | Self::Cheetah => Climate::Desert,
            Self::Tiger | Self::Elephant => Climate::Temperate,
        }
    }
}
