use crate::models::constants::StartMode;
use crate::models::rules::Rules;
use crate::models::universe::Universe;
use crate::services::turn;

/// Advance a freshly generated universe to a later start.
///
/// Each simulated year grows every owned planet and then gives every player
/// a fixed research budget, using the same formulas as regular turns.
/// Afterwards owned planets get their installation bonuses, each capped at
/// what the planet can support.
///
/// # Returns
///
/// The number of years simulated (0 for a normal start).
pub fn fast_forward(universe: &mut Universe, rules: &Rules) -> i32 {
    let budget = match universe.settings.start_mode {
        StartMode::Normal => return 0,
        StartMode::MidGame => rules.fast_forward_research_per_year,
        StartMode::LateGame => {
            rules.fast_forward_research_per_year * rules.late_game_research_multiplier
        }
    };
    let years = rules.fast_forward_years.max(0);

    for _ in 0..years {
        grow_owned_planets(universe, rules);
        for player in universe.players.iter_mut() {
            turn::research(player, budget, rules);
        }
    }

    apply_installation_bonuses(universe, rules);
    universe.year += years;

    tracing::info!(
        target: "stargen::fast_forward",
        years,
        year = universe.year,
        start_mode = universe.settings.start_mode.name(),
        "fast_forward.complete"
    );
    years
}

fn grow_owned_planets(universe: &mut Universe, rules: &Rules) {
    let players = &universe.players;
    for planet in universe.planets.iter_mut() {
        let owner = match planet.owner.and_then(|num| players.get(num)) {
            Some(owner) => owner,
            None => continue,
        };
        turn::grow_population(planet, owner, rules);
    }
}

fn apply_installation_bonuses(universe: &mut Universe, rules: &Rules) {
    let players = &universe.players;
    for planet in universe.planets.iter_mut() {
        let owner = match planet.owner.and_then(|num| players.get(num)) {
            Some(owner) => owner,
            None => continue,
        };
        let max_mines = turn::max_mines(planet, owner, rules);
        let max_factories = turn::max_factories(planet, owner, rules);
        let max_defenses = turn::max_defenses(owner, rules);

        planet.mines = (planet.mines + rules.fast_forward_mine_bonus).min(max_mines.max(planet.mines));
        planet.factories = (planet.factories + rules.fast_forward_factory_bonus)
            .min(max_factories.max(planet.factories));
        planet.defenses = (planet.defenses + rules.fast_forward_defense_bonus)
            .min(max_defenses.max(planet.defenses));
    }
}
