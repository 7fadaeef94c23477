//! Per-turn growth and research formulas
//!
//! Fast-forward replays these exact functions; a turn processor must call
//! them too rather than keep its own copy.

use crate::models::constants::{TechField, COLONISTS_PER_KILOTON};
use crate::models::planet::Planet;
use crate::models::player::{NextResearchField, Player};
use crate::models::rules::Rules;
use crate::services::habitability::habitability;

/// Planets below this habitability still hold a small population.
const MIN_HAB_FOR_CAPACITY: i32 = 5;

/// Population a planet can hold for a player.
pub fn max_population(planet: &Planet, player: &Player, rules: &Rules) -> i32 {
    let hab = habitability(&player.race, &planet.hab).max(MIN_HAB_FOR_CAPACITY);
    let spec = &player.race_spec;
    let factor = spec.max_population_factor as f64 * (1.0 + spec.max_population_offset as f64);
    (rules.max_planet_population as f64 * hab as f64 / 100.0 * factor) as i32
}

/// Yearly population change, in whole hundreds.
///
/// Growth slows once a planet is a quarter full and turns into die-off when
/// it is over capacity. Hostile planets lose a share of their population
/// proportional to their red penalty.
pub fn population_growth(planet: &Planet, player: &Player, rules: &Rules) -> i32 {
    let population = planet.population() as f64;
    if population <= 0.0 {
        return 0;
    }

    let hab = habitability(&player.race, &planet.hab);
    let max = max_population(planet, player, rules) as f64;
    let capacity = if max > 0.0 { population / max } else { 1.0 };

    let growth = if hab < 0 {
        population * hab as f64 / 1000.0
    } else if capacity >= 1.0 {
        -(population * (capacity - 1.0) * 0.04)
    } else {
        let rate = player.race.growth_rate as f64 * player.race_spec.growth_factor as f64;
        let mut growth = population * rate * hab as f64 / 10_000.0;
        if capacity > 0.25 {
            let crowding = 1.0 - capacity;
            growth *= 16.0 / 9.0 * crowding * crowding;
        }
        growth
    };

    let step = COLONISTS_PER_KILOTON;
    (growth as i32 / step) * step
}

/// Apply one year of growth. Growth never pushes a planet past capacity.
pub fn grow_population(planet: &mut Planet, player: &Player, rules: &Rules) {
    let population = planet.population();
    let growth = population_growth(planet, player, rules);
    let next = if growth > 0 {
        (population + growth).min(max_population(planet, player, rules).max(population))
    } else {
        population + growth
    };
    planet.set_population(next);
}

pub fn max_mines(planet: &Planet, player: &Player, rules: &Rules) -> i32 {
    (max_population(planet, player, rules) as i64 * player.race.num_mines as i64 / 10_000) as i32
}

pub fn max_factories(planet: &Planet, player: &Player, rules: &Rules) -> i32 {
    (max_population(planet, player, rules) as i64 * player.race.num_factories as i64 / 10_000)
        as i32
}

pub fn max_defenses(player: &Player, rules: &Rules) -> i32 {
    if player.race_spec.can_build_defenses {
        rules.max_defenses
    } else {
        0
    }
}

/// Research points needed to raise `field` one level. None at the cap.
pub fn research_cost(player: &Player, field: TechField, rules: &Rules) -> Option<i32> {
    let level = player.tech_levels.get(field);
    if level >= rules.max_tech_level {
        return None;
    }
    let base = *rules.tech_base_cost.get(level.max(0) as usize)?;
    let total_levels = player.tech_levels.sum();
    let factor = player.race_spec.research_cost_factors[field as usize];
    Some(((base + 10 * total_levels) as f32 * factor).ceil() as i32)
}

/// Spend a year's research budget.
///
/// The current field receives `budget * research_factor`. With generalized
/// research every other field also gets the splash share. After each level
/// gained in the current field the next field is picked by the player's
/// research setting.
///
/// # Returns
///
/// The number of levels gained across all fields.
pub fn research(player: &mut Player, budget: i32, rules: &Rules) -> i32 {
    let primary = (budget as f32 * player.race_spec.research_factor) as i32;
    let splash = (budget as f32 * player.race_spec.research_splash_factor) as i32;
    let mut gained = 0;

    if splash > 0 {
        let current = player.researching;
        for field in TechField::ALL.into_iter().filter(|field| *field != current) {
            gained += add_research_points(player, field, splash, rules);
        }
    }

    let field = player.researching;
    let levels = add_research_points(player, field, primary, rules);
    if levels > 0 && player.next_research_field == NextResearchField::LowestField {
        player.researching = player.tech_levels.lowest_field();
    }
    gained + levels
}

fn add_research_points(player: &mut Player, field: TechField, points: i32, rules: &Rules) -> i32 {
    let mut spent = player.tech_levels_spent.get(field) + points;
    let mut gained = 0;

    while let Some(cost) = research_cost(player, field, rules) {
        if spent < cost {
            break;
        }
        spent -= cost;
        let level = player.tech_levels.get(field);
        player.tech_levels.set(field, level + 1);
        gained += 1;
    }

    if research_cost(player, field, rules).is_none() {
        spent = 0;
    }
    player.tech_levels_spent.set(field, spent);
    gained
}
