use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::errors::{GenerationStage, StepError};
use crate::models::hab::Hab;
use crate::models::planet::Planet;
use crate::models::position::Vector2;
use crate::services::{minerals, placement};

const PLANET_NAMES: &[&str] = &[
    "Abacus", "Accord", "Alcyone", "Alioth", "Altair", "Amber", "Antares", "Arcturus", "Argo",
    "Atlas", "Aurora", "Avalon", "Bellatrix", "Beryl", "Bifrost", "Boreas", "Caelum", "Calypso",
    "Canopus", "Capella", "Castor", "Celeste", "Cinder", "Cobalt", "Corvus", "Cygnus", "Deneb",
    "Diphda", "Draco", "Dusk", "Electra", "Elysium", "Enif", "Equinox", "Fomalhaut", "Forge",
    "Gemma", "Gienah", "Granite", "Hadar", "Halcyon", "Helios", "Hydra", "Icarus", "Indus",
    "Izar", "Jade", "Juno", "Kepler", "Kochab", "Lacerta", "Lyra", "Maia", "Markab", "Merak",
    "Mimosa", "Mirach", "Nadir", "Naos", "Nova", "Nunki", "Obsidian", "Orion", "Pallas",
    "Pavo", "Perseus", "Phact", "Polaris", "Pollux", "Procyon", "Pyxis", "Quill", "Rasalas",
    "Regulus", "Rigel", "Sabik", "Sadr", "Saiph", "Scheat", "Shaula", "Sirius", "Spica",
    "Tarazed", "Thuban", "Tycho", "Umbra", "Vega", "Vesper", "Wezen", "Xenon", "Yildun",
    "Zaniah", "Zenith", "Zephyr", "Zosma", "Zubenelgenubi",
];

/// Places every planet, then rolls its environment and minerals.
pub struct PlanetsStep;

impl GenerationStep for PlanetsStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::Planets
    }

    fn process(&self, ctx: &mut GenerationContext, rng: &mut StdRng) -> Result<(), StepError> {
        let rules = &ctx.rules;
        let settings = ctx.universe.settings;
        let count = rules.num_planets(settings.size, settings.density);
        let area = ctx.universe.area;
        let names = planet_names(count, rng);

        let mut positions: Vec<Vector2> = Vec::with_capacity(count);
        for (id, name) in names.into_iter().enumerate() {
            let placed = placement::place(
                area,
                rules.planet_min_distance,
                &positions,
                rng,
                rules.planet_placement_attempts,
            );
            if !placed.conforming {
                return Err(StepError::PlacementExhausted {
                    what: "planet",
                    attempts: placed.attempts,
                });
            }
            positions.push(placed.position);

            let mut planet = Planet::new(id, name, placed.position);
            planet.hab = Hab::new(
                rng.gen_range(0..=100),
                rng.gen_range(0..=100),
                rng.gen_range(0..=100),
            );
            planet.mineral_concentration = minerals::concentration(rng, rules, &planet.hab);
            planet.set_surface_minerals(minerals::surface(rng, rules));
            tracing::debug!(
                target: "stargen::planets",
                id,
                name = %planet.name,
                attempts = placed.attempts,
                "planet.placed"
            );
            ctx.universe.planets.push(planet);
        }

        tracing::info!(
            target: "stargen::planets",
            count,
            size = %settings.size,
            density = %settings.density,
            "planets.generated"
        );
        Ok(())
    }
}

/// `count` distinct names in shuffled order. Once the stock list runs out
/// it is reused with a numeric suffix.
fn planet_names(count: usize, rng: &mut StdRng) -> Vec<String> {
    let mut base: Vec<&str> = PLANET_NAMES.to_vec();
    base.shuffle(rng);

    (0..count)
        .map(|i| {
            let name = base[i % base.len()];
            match i / base.len() {
                0 => name.to_string(),
                round => format!("{} {}", name, round + 1),
            }
        })
        .collect()
}
