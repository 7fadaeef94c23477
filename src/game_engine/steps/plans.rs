use rand::rngs::StdRng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::errors::{GenerationStage, StepError};
use crate::services::plans;

/// Gives every player the default battle, transport and production plans.
pub struct PlansStep;

impl GenerationStep for PlansStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::PlayerPlans
    }

    fn process(&self, ctx: &mut GenerationContext, _rng: &mut StdRng) -> Result<(), StepError> {
        for player in ctx.universe.players.iter_mut() {
            player.battle_plans = plans::default_battle_plans();
            player.transport_plans = plans::default_transport_plans();
            player.production_plans = plans::default_production_plans();
        }
        Ok(())
    }
}
