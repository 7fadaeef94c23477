use rand::rngs::StdRng;

use crate::game_engine::{GenerationContext, GenerationStep};
use crate::models::constants::{ResearchCost, TechField};
use crate::models::errors::{GenerationStage, StepError};
use crate::models::player::Player;
use crate::models::rules::Rules;
use crate::models::tech::TechLevel;

/// Sets each player's starting tech levels and first research field.
pub struct TechLevelsStep;

impl GenerationStep for TechLevelsStep {
    fn stage(&self) -> GenerationStage {
        GenerationStage::PlayerTechLevels
    }

    fn process(&self, ctx: &mut GenerationContext, _rng: &mut StdRng) -> Result<(), StepError> {
        let rules = &ctx.rules;
        for player in ctx.universe.players.iter_mut() {
            player.tech_levels = starting_tech_levels(player, rules);
            player.tech_levels_spent = TechLevel::default();
            player.researching = player.tech_levels.lowest_field();
            tracing::info!(
                target: "stargen::tech",
                player = player.num,
                total_levels = player.tech_levels.sum(),
                researching = player.researching.name(),
                "tech_levels.assigned"
            );
        }
        Ok(())
    }
}

/// Trait bonuses, plus the "techs start high" floor on every field the
/// race pays extra for.
pub fn starting_tech_levels(player: &Player, rules: &Rules) -> TechLevel {
    let mut levels = player.race_spec.starting_tech_levels;
    if player.race.techs_start_high {
        for field in TechField::ALL {
            if player.race.research_cost_for(field) == ResearchCost::Extra {
                levels.set(field, levels.get(field).max(rules.techs_start_high_level));
            }
        }
    }
    levels
}
