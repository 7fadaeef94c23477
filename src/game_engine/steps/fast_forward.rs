use rand::rngs::StdRng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::errors::{GenerationStage, StepError};
use crate::services::{fast_forward, reports};

/// Simulates the early years for mid- and late-game starts. Intel gathered
/// at generation time is reissued for the new year.
pub struct FastForwardStep;

impl GenerationStep for FastForwardStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::FastForward
    }

    fn process(&self, ctx: &mut GenerationContext, _rng: &mut StdRng) -> Result<(), StepError> {
        if fast_forward::fast_forward(&mut ctx.universe, &ctx.rules) > 0 {
            reports::refresh_intel(&mut ctx.universe, &ctx.techs);
        }
        Ok(())
    }
}
