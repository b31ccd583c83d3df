//! Random source used by the simulation.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The single RNG that drives enemy placement and wandering.
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl SimRng {
    /// Seeded when a seed is given, from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                info!("Using fixed RNG seed {}", seed);
                Self(StdRng::seed_from_u64(seed))
            }
            None => Self(StdRng::from_entropy()),
        }
    }
}
