use rand::rngs::StdRng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::errors::{GenerationStage, StepError};
use crate::services::homeworlds;
use crate::services::minerals::StartingWorldMinerals;

/// Draws the shared starting-world minerals, then assigns homeworlds.
pub struct HomeworldsStep;

impl GenerationStep for HomeworldsStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::Homeworlds
    }

    fn process(&self, ctx: &mut GenerationContext, rng: &mut StdRng) -> Result<(), StepError> {
        let minerals = StartingWorldMinerals::draw(rng, &ctx.rules);
        homeworlds::assign_homeworlds(&mut ctx.universe, &ctx.rules, &minerals)?;
        ctx.starting_minerals = Some(minerals);
        Ok(())
    }
}
