use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::cargo::Mineral;
use crate::models::constants::MineralType;
use crate::models::hab::Hab;
use crate::models::rules::Rules;

/// Draws above this value are replaced by a two-dice sum that clusters
/// around 75.
const LOW_CONCENTRATION_CUTOFF: i32 = 30;

/// Mineral concentration for a regular planet.
///
/// Germanium's first draw gets a higher upper bound on high-radiation
/// planets.
pub fn concentration(rng: &mut StdRng, rules: &Rules, hab: &Hab) -> Mineral {
    let mut result = Mineral::default();
    for mineral in MineralType::ALL {
        let mut upper = 100;
        if mineral == MineralType::Germanium && hab.rad >= rules.high_rad_germanium_bonus_threshold {
            upper += rules.high_rad_germanium_bonus;
        }

        let mut value = rng.gen_range(1..=upper);
        if value > LOW_CONCENTRATION_CUTOFF {
            value = LOW_CONCENTRATION_CUTOFF + rng.gen_range(1..=45) + rng.gen_range(0..=44);
        }

        result.set(
            mineral,
            value.clamp(rules.min_mineral_concentration, rules.max_mineral_concentration),
        );
    }
    result
}

/// Surface minerals for a regular planet.
pub fn surface(rng: &mut StdRng, rules: &Rules) -> Mineral {
    uniform(rng, rules.min_planet_surface, rules.max_planet_surface)
}

fn uniform(rng: &mut StdRng, min: i32, max: i32) -> Mineral {
    let mut result = Mineral::default();
    for mineral in MineralType::ALL {
        let value = if max > min { rng.gen_range(min..=max) } else { min };
        result.set(mineral, value);
    }
    result
}

/// Homeworld and extra-world minerals. Drawn once per game and shared by
/// every player so no one starts richer than anyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingWorldMinerals {
    pub homeworld_concentration: Mineral,
    pub homeworld_surface: Mineral,
    pub extra_world_concentration: Mineral,
    pub extra_world_surface: Mineral,
}

impl StartingWorldMinerals {
    pub fn draw(rng: &mut StdRng, rules: &Rules) -> Self {
        let homeworld_concentration = uniform(
            rng,
            rules.min_homeworld_concentration,
            rules.max_homeworld_concentration,
        );
        let homeworld_surface = uniform(
            rng,
            rules.min_homeworld_surface,
            rules.max_homeworld_surface,
        );
        let extra_world_concentration = uniform(
            rng,
            rules.min_extra_world_concentration,
            rules.max_homeworld_concentration,
        );

        StartingWorldMinerals {
            homeworld_concentration,
            homeworld_surface,
            extra_world_concentration,
            extra_world_surface: homeworld_surface.halved(),
        }
    }
}
