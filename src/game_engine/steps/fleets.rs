use rand::rngs::StdRng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::errors::{GenerationStage, StepError};
use crate::models::fleet::Fleet;
use crate::models::navigation_types::WarpFactor;
use crate::models::player::Player;
use crate::models::techs::TechStore;
use crate::services::{designs, fuel};

/// Puts every player's starting fleets in orbit of their starting planets.
pub struct FleetsStep;

impl GenerationStep for FleetsStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::PlayerFleets
    }

    fn process(&self, ctx: &mut GenerationContext, _rng: &mut StdRng) -> Result<(), StepError> {
        let universe = &mut ctx.universe;
        for player in &universe.players {
            let fleets = designs::starting_fleets(player, &universe.planets, universe.fleets.len())?;
            for fleet in &fleets {
                check_fuel(player, fleet, &ctx.techs)?;
            }
            tracing::info!(
                target: "stargen::fleets",
                player = player.num,
                count = fleets.len(),
                "fleets.created"
            );
            universe.fleets.extend(fleets);
        }
        Ok(())
    }
}

/// A starting fleet must be able to make one full year's jump at the
/// ideal speed of its slowest engine. Fleets without engines always pass.
fn check_fuel(player: &Player, fleet: &Fleet, techs: &TechStore) -> Result<(), StepError> {
    let speed = fleet
        .tokens
        .iter()
        .filter_map(|token| player.design_by_num(token.design_num))
        .map(|design| design.spec.ideal_speed)
        .filter(|speed| *speed > 0)
        .min();
    let warp = match speed.and_then(|speed| WarpFactor::new(speed).ok()) {
        Some(warp) => warp,
        None => return Ok(()),
    };

    let needed = fuel::fleet_fuel_cost(
        fleet,
        &player.designs,
        techs,
        warp,
        warp.distance_per_year(),
        player.race_spec.fuel_efficiency_factor,
    );
    tracing::debug!(
        target: "stargen::fleets",
        fleet = %fleet.name,
        %warp,
        needed,
        fuel = fleet.fuel,
        "fleet.fuel_checked"
    );
    if needed > fleet.fuel {
        return Err(StepError::InsufficientFuel {
            player: player.num,
            fleet: fleet.name.clone(),
            warp: warp.value(),
            needed,
            fuel: fleet.fuel,
        });
    }
    Ok(())
}
