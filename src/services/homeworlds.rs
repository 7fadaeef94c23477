//! Homeworld and extra-world assignment

use crate::models::constants::{GalaxySize, HabType};
use crate::models::errors::StepError;
use crate::models::hab::Hab;
use crate::models::planet::Planet;
use crate::models::player::Player;
use crate::models::position::Vector2;
use crate::models::race_spec::StartingPlanet;
use crate::models::rules::Rules;
use crate::models::universe::Universe;
use crate::services::designs;
use crate::services::minerals::StartingWorldMinerals;

/// Give every player, in player order, a homeworld and (when their traits
/// grant one and the galaxy is not tiny) an extra world.
pub fn assign_homeworlds(
    universe: &mut Universe,
    rules: &Rules,
    minerals: &StartingWorldMinerals,
) -> Result<(), StepError> {
    let player_count = universe.players.len();
    if player_count == 0 {
        return Ok(());
    }
    // Galaxies are square, so the side length is the spatial scale
    let threshold = universe.area.x / player_count as f32;

    for index in 0..player_count {
        let player_num = universe.players[index].num;
        let taken: Vec<Vector2> = universe.homeworlds().map(|planet| planet.position).collect();
        let homeworld_id = choose_homeworld(&universe.planets, &taken, threshold)
            .ok_or(StepError::NoPlanetAvailable { player: player_num })?;

        {
            let player = &universe.players[index];
            let template = player
                .race_spec
                .homeworld_template()
                .ok_or(StepError::MissingStartingPlanet { player: player_num })?;
            let planet = &mut universe.planets[homeworld_id];
            settle(planet, player, rules, template)?;
            planet.homeworld = true;
            planet.mineral_concentration = minerals.homeworld_concentration;
            planet.set_surface_minerals(minerals.homeworld_surface);
            planet.defenses = if player.race_spec.can_build_defenses {
                rules.starting_defenses
            } else {
                0
            };
            tracing::info!(
                target: "stargen::homeworlds",
                player = player_num,
                planet = %planet.name,
                population = planet.population(),
                "homeworld.assigned"
            );
        }
        universe.players[index].homeworld = Some(homeworld_id);

        let wants_extra_world = universe.players[index]
            .race_spec
            .extra_world_template()
            .is_some();
        if !wants_extra_world || universe.settings.size == GalaxySize::Tiny {
            continue;
        }

        let home_position = universe.planets[homeworld_id].position;
        let extra_id = choose_extra_world(&universe.planets, home_position, rules)
            .ok_or(StepError::NoPlanetAvailable { player: player_num })?;
        {
            let player = &universe.players[index];
            let template = player
                .race_spec
                .extra_world_template()
                .ok_or(StepError::MissingStartingPlanet { player: player_num })?;
            let planet = &mut universe.planets[extra_id];
            init_extra_world(planet, player, rules, template, minerals)?;
            tracing::info!(
                target: "stargen::homeworlds",
                player = player_num,
                planet = %planet.name,
                "extra_world.assigned"
            );
        }
        universe.players[index].extra_world = Some(extra_id);
    }

    Ok(())
}

/// The first unowned planet farther than `threshold` from every taken
/// homeworld. When none qualifies, the unowned planet whose nearest taken
/// homeworld is farthest away.
pub fn choose_homeworld(planets: &[Planet], taken: &[Vector2], threshold: f32) -> Option<usize> {
    let threshold_squared = threshold * threshold;
    let fair = planets.iter().find(|planet| {
        !planet.is_owned()
            && taken
                .iter()
                .all(|home| planet.position.distance_squared_to(*home) > threshold_squared)
    });
    if let Some(planet) = fair {
        return Some(planet.id);
    }

    let nearest_home = |planet: &Planet| {
        taken
            .iter()
            .map(|home| planet.position.distance_squared_to(*home))
            .fold(f32::INFINITY, f32::min)
    };
    let mut best: Option<(&Planet, f32)> = None;
    for planet in planets.iter().filter(|planet| !planet.is_owned()) {
        let distance = nearest_home(planet);
        if best.map_or(true, |(_, best_distance)| distance > best_distance) {
            best = Some((planet, distance));
        }
    }

    let (planet, distance) = best?;
    tracing::warn!(
        target: "stargen::homeworlds",
        threshold,
        chosen = %planet.name,
        nearest_homeworld = distance.sqrt(),
        "homeworld.fairness_fallback"
    );
    Some(planet.id)
}

/// The first unowned planet strictly inside the extra-world annulus around
/// `home`. When none qualifies, the unowned planet closest to the middle of
/// the annulus.
pub fn choose_extra_world(planets: &[Planet], home: Vector2, rules: &Rules) -> Option<usize> {
    let min = rules.min_extra_world_distance;
    let max = rules.max_extra_world_distance;
    let candidates = || planets.iter().filter(|planet| !planet.is_owned());

    if let Some(planet) = candidates().find(|planet| {
        let distance = planet.position.distance_to(home);
        distance > min && distance < max
    }) {
        return Some(planet.id);
    }

    let middle = (min + max) / 2.0;
    let mut best: Option<(&Planet, f32)> = None;
    for planet in candidates() {
        let miss = (planet.position.distance_to(home) - middle).abs();
        if best.map_or(true, |(_, best_miss)| miss < best_miss) {
            best = Some((planet, miss));
        }
    }

    let (planet, miss) = best?;
    tracing::warn!(
        target: "stargen::homeworlds",
        chosen = %planet.name,
        miss,
        "extra_world.annulus_fallback"
    );
    Some(planet.id)
}

/// Environment for a starting world: the race's ideal, pushed toward the
/// upper tolerance bound by `penalty` times the half-width on each axis.
pub fn starting_hab(player: &Player, penalty: f32) -> Hab {
    let race = &player.race;
    let mut hab = player.race_spec.hab_center;
    if penalty <= 0.0 {
        return hab;
    }
    let width = race.hab_width();
    for hab_type in HabType::ALL {
        if race.is_immune(hab_type) {
            continue;
        }
        let shift = (width.get(hab_type) as f32 * penalty) as i32;
        let value = (hab.get(hab_type) + shift).clamp(
            race.hab_low.get(hab_type),
            race.hab_high.get(hab_type),
        );
        hab.set(hab_type, value);
    }
    hab
}

/// Starting population for a template. Planets store it in whole hundreds.
pub fn starting_population(player: &Player, rules: &Rules, template: &StartingPlanet) -> i32 {
    (rules.starting_population as f64
        * player.race_spec.starting_population_factor as f64
        * template.population_factor as f64)
        .round() as i32
}

/// Ownership, environment, population, installations and starbase shared
/// by homeworlds and extra worlds.
fn settle(
    planet: &mut Planet,
    player: &Player,
    rules: &Rules,
    template: &StartingPlanet,
) -> Result<(), StepError> {
    let design = player
        .design(&template.starbase_design)
        .ok_or_else(|| StepError::UnknownDesign {
            player: player.num,
            name: template.starbase_design.clone(),
        })?;

    planet.owner = Some(player.num);
    planet.hab = starting_hab(player, template.hab_penalty_factor);
    planet.set_population(starting_population(player, rules, template));
    planet.mines = rules.starting_mines;
    planet.factories = rules.starting_factories;
    planet.scanner = true;
    planet.starbase = Some(designs::build_starbase(player, planet, design));
    Ok(())
}

fn init_extra_world(
    planet: &mut Planet,
    player: &Player,
    rules: &Rules,
    template: &StartingPlanet,
    minerals: &StartingWorldMinerals,
) -> Result<(), StepError> {
    settle(planet, player, rules, template)?;
    planet.homeworld = false;
    planet.defenses = 0;
    planet.mineral_concentration = minerals.extra_world_concentration;
    planet.set_surface_minerals(minerals.extra_world_surface);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{Lrt, Prt};
    use crate::models::player::PlayerSetup;
    use crate::models::race::Race;
    use crate::services::race_traits;

    fn planet_at(id: usize, x: f32, y: f32) -> Planet {
        Planet::new(id, format!("Planet {}", id), Vector2::new(x, y))
    }

    fn player(prt: Prt, lrts: &[Lrt]) -> Player {
        let race = Race::with_traits(prt, lrts);
        let spec = race_traits::resolve(&race, &Rules::default());
        Player::new(0, PlayerSetup::new("Tester", race), spec)
    }

    #[test]
    fn first_fair_planet_wins() {
        let planets = vec![
            planet_at(0, 10.0, 10.0),
            planet_at(1, 50.0, 50.0),
            planet_at(2, 300.0, 300.0),
            planet_at(3, 390.0, 390.0),
        ];
        assert_eq!(choose_homeworld(&planets, &[], 200.0), Some(0));
        assert_eq!(
            choose_homeworld(&planets, &[Vector2::new(10.0, 10.0)], 200.0),
            Some(2)
        );
    }

    #[test]
    fn owned_planets_are_skipped() {
        let mut planets = vec![planet_at(0, 10.0, 10.0), planet_at(1, 20.0, 20.0)];
        planets[0].owner = Some(3);
        assert_eq!(choose_homeworld(&planets, &[], 200.0), Some(1));
    }

    #[test]
    fn fallback_maximizes_distance_to_nearest_homeworld() {
        let planets = vec![
            planet_at(0, 10.0, 10.0),
            planet_at(1, 60.0, 10.0),
            planet_at(2, 30.0, 10.0),
        ];
        let taken = [Vector2::new(0.0, 10.0)];
        assert_eq!(choose_homeworld(&planets, &taken, 500.0), Some(1));
    }

    #[test]
    fn no_unowned_planet_means_none() {
        let mut planets = vec![planet_at(0, 10.0, 10.0)];
        planets[0].owner = Some(0);
        assert_eq!(choose_homeworld(&planets, &[], 10.0), None);
    }

    #[test]
    fn extra_world_sits_inside_the_annulus() {
        let rules = Rules::default();
        let home = Vector2::new(0.0, 0.0);
        let planets = vec![
            planet_at(0, 100.0, 0.0),
            planet_at(1, 200.0, 0.0),
            planet_at(2, 150.0, 0.0),
        ];
        assert_eq!(choose_extra_world(&planets, home, &rules), Some(2));

        let outside = vec![planet_at(0, 100.0, 0.0), planet_at(1, 190.0, 0.0)];
        assert_eq!(choose_extra_world(&outside, home, &rules), Some(1));
    }

    #[test]
    fn low_starting_population_scales_down() {
        let rules = Rules::default();
        let plain = player(Prt::JoaT, &[]);
        let lsp = player(Prt::JoaT, &[Lrt::LSP]);
        let template = plain.race_spec.homeworld_template().unwrap().clone();
        assert_eq!(starting_population(&plain, &rules, &template), 25_000);
        assert_eq!(starting_population(&lsp, &rules, &template), 17_500);
    }

    #[test]
    fn penalized_hab_stays_within_tolerance() {
        let p = player(Prt::IT, &[]);
        assert_eq!(starting_hab(&p, 0.0), Hab::new(50, 50, 50));
        // Half-width 35, penalty 0.5 -> +17
        assert_eq!(starting_hab(&p, 0.5), Hab::new(67, 67, 67));
        assert_eq!(starting_hab(&p, 5.0), Hab::new(85, 85, 85));
    }
}
