//! Difficulty presets and random instance generation.
//!
//! Sizes stay small on purpose: every preset yields tables a front end can
//! animate cell by cell.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DpError;
use crate::solve::{Instance, Variant};

/// Letters used for generated string instances.
pub const ALPHABET: &[u8] = b"ABCD";

/// Inclusive range for generated item values.
pub const VALUE_RANGE: (i64, i64) = (1, 15);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Problem size parameters for a [`Difficulty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Number of items (string length is `size + 2`).
    pub size: usize,
    /// Knapsack capacity / subset-sum target.
    pub capacity: i64,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn preset(self) -> Preset {
        match self {
            Difficulty::Easy => Preset {
                size: 3,
                capacity: 10,
            },
            Difficulty::Medium => Preset {
                size: 4,
                capacity: 20,
            },
            Difficulty::Hard => Preset {
                size: 5,
                capacity: 30,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = DpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DpError::invalid(
                "level",
                format!("unknown difficulty '{other}'"),
            )),
        }
    }
}

fn random_values<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    (0..n)
        .map(|_| rng.gen_range(VALUE_RANGE.0..=VALUE_RANGE.1))
        .collect()
}

/// Weights in `1..=capacity/2`, so several items fit at once.
fn random_weights<R: Rng + ?Sized>(rng: &mut R, n: usize, capacity: i64) -> Vec<i64> {
    let max = (capacity / 2).max(1);
    (0..n).map(|_| rng.gen_range(1..=max)).collect()
}

fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Draw a random instance of `variant` sized by `difficulty`.
pub fn generate<R: Rng + ?Sized>(variant: Variant, difficulty: Difficulty, rng: &mut R) -> Instance {
    let Preset { size, capacity } = difficulty.preset();
    match variant {
        Variant::ZeroOne | Variant::Unbounded | Variant::Fractional => {
            let values = random_values(rng, size);
            let weights = random_weights(rng, size, capacity);
            match variant {
                Variant::ZeroOne => Instance::ZeroOne {
                    values,
                    weights,
                    capacity,
                },
                Variant::Unbounded => Instance::Unbounded {
                    values,
                    weights,
                    capacity,
                },
                _ => Instance::Fractional {
                    values,
                    weights,
                    capacity,
                },
            }
        }
        Variant::SubsetSum => Instance::SubsetSum {
            values: random_values(rng, size),
            target: capacity,
        },
        Variant::Partition => Instance::Partition {
            values: random_values(rng, size),
        },
        Variant::Lcs | Variant::Substring | Variant::Scs => {
            let s1 = random_string(rng, size + 2);
            let s2 = random_string(rng, size + 2);
            match variant {
                Variant::Lcs => Instance::Lcs { s1, s2 },
                Variant::Substring => Instance::Substring { s1, s2 },
                _ => Instance::Scs { s1, s2 },
            }
        }
    }
}
