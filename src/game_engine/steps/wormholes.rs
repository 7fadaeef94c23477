use rand::rngs::StdRng;
use rand::Rng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::constants::WormholeStability;
use crate::models::errors::{GenerationStage, StepError};
use crate::models::wormhole::Wormhole;
use crate::services::placement;

/// Adds linked wormhole pairs. Both ends of a pair share one stability.
///
/// Ends keep clear of planets and of each other. When a clear spot cannot
/// be found in budget the last candidate is used and a warning logged.
pub struct WormholesStep;

impl GenerationStep for WormholesStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::Wormholes
    }

    fn process(&self, ctx: &mut GenerationContext, rng: &mut StdRng) -> Result<(), StepError> {
        let rules = &ctx.rules;
        let pairs = rules.wormhole_pairs(ctx.universe.settings.size);
        let area = ctx.universe.area;
        let mut occupied = ctx.universe.planet_positions();

        for _ in 0..pairs {
            let stability =
                WormholeStability::ALL[rng.gen_range(0..WormholeStability::ALL.len())];
            let first_id = ctx.universe.wormholes.len();

            for end in 0..2 {
                let placed = placement::place(
                    area,
                    rules.wormhole_min_distance,
                    &occupied,
                    rng,
                    rules.wormhole_placement_attempts,
                );
                if !placed.conforming {
                    tracing::warn!(
                        target: "stargen::wormholes",
                        attempts = placed.attempts,
                        x = placed.position.x,
                        y = placed.position.y,
                        "wormhole.placement_exhausted"
                    );
                }
                occupied.push(placed.position);

                let id = first_id + end;
                ctx.universe.wormholes.push(Wormhole {
                    id,
                    position: placed.position,
                    // Ends of a pair point at each other
                    destination: first_id + (1 - end),
                    stability,
                });
            }
        }

        tracing::info!(target: "stargen::wormholes", pairs, "wormholes.generated");
        Ok(())
    }
}
