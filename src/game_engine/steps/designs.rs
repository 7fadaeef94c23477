use rand::rngs::StdRng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::errors::{GenerationStage, StepError};
use crate::services::designs;

/// Builds each player's starting ship and starbase designs.
pub struct ShipDesignsStep;

impl GenerationStep for ShipDesignsStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::PlayerShipDesigns
    }

    fn process(&self, ctx: &mut GenerationContext, _rng: &mut StdRng) -> Result<(), StepError> {
        let techs = &ctx.techs;
        for player in ctx.universe.players.iter_mut() {
            let player_designs = designs::starting_designs(player, techs)?;
            tracing::info!(
                target: "stargen::designs",
                player = player.num,
                count = player_designs.len(),
                "designs.created"
            );
            player.designs = player_designs;
        }
        Ok(())
    }
}
