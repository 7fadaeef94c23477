use rand::rngs::StdRng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::errors::{GenerationStage, StepError};
use crate::services::reports;

/// Fills in what each player knows about every planet.
pub struct PlanetIntelStep;

impl GenerationStep for PlanetIntelStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::PlanetIntel
    }

    fn process(&self, ctx: &mut GenerationContext, _rng: &mut StdRng) -> Result<(), StepError> {
        reports::refresh_intel(&mut ctx.universe, &ctx.techs);
        Ok(())
    }
}
