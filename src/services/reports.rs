use crate::models::constants::NO_SCANNER;
use crate::models::planet::Planet;
use crate::models::player::{PlanetIntel, Player};
use crate::models::tech::ComponentCategory;
use crate::models::techs::TechStore;
use crate::models::universe::Universe;

/// Range of the best planetary scanner a player can build, after race
/// scan factors. `NO_SCANNER` if none is available.
pub fn planetary_scan_range(player: &Player, techs: &TechStore) -> i32 {
    techs
        .best_available(
            ComponentCategory::PlanetaryScanner,
            &player.tech_levels,
            &player.race,
        )
        .filter(|scanner| scanner.scan_range != NO_SCANNER)
        .map(|scanner| (scanner.scan_range as f32 * player.race_spec.scan_range_factor) as i32)
        .unwrap_or(NO_SCANNER)
}

/// What a player knows about every planet at the start of the game.
///
/// Every planet is listed by name and position. Owned planets get a full
/// report. Planets inside the scan range of an owned scanner planet get
/// their environment and mineral concentration.
pub fn planet_intel(player: &Player, planets: &[Planet], techs: &TechStore, year: i32) -> Vec<PlanetIntel> {
    let range = planetary_scan_range(player, techs);
    let scanners: Vec<_> = planets
        .iter()
        .filter(|planet| planet.owner == Some(player.num) && planet.scanner)
        .map(|planet| planet.position)
        .collect();
    let range_squared = (range as f32) * (range as f32);

    planets
        .iter()
        .map(|planet| {
            let mut intel = PlanetIntel {
                planet_id: planet.id,
                name: planet.name.clone(),
                position: planet.position,
                report_year: None,
                owner: None,
                hab: None,
                mineral_concentration: None,
                surface_minerals: None,
                population: None,
            };

            if planet.owner == Some(player.num) {
                intel.report_year = Some(year);
                intel.owner = planet.owner;
                intel.hab = Some(planet.hab);
                intel.mineral_concentration = Some(planet.mineral_concentration);
                intel.surface_minerals = Some(planet.surface_minerals());
                intel.population = Some(planet.population());
            } else if range != NO_SCANNER
                && scanners
                    .iter()
                    .any(|scanner| planet.position.distance_squared_to(*scanner) <= range_squared)
            {
                intel.report_year = Some(year);
                intel.hab = Some(planet.hab);
                intel.mineral_concentration = Some(planet.mineral_concentration);
            }
            intel
        })
        .collect()
}

/// Rebuilds every player's planet intel as of the current universe year.
pub fn refresh_intel(universe: &mut Universe, techs: &TechStore) {
    let reports: Vec<_> = universe
        .players
        .iter()
        .map(|player| planet_intel(player, &universe.planets, techs, universe.year))
        .collect();
    for (player, intel) in universe.players.iter_mut().zip(reports) {
        player.planet_intel = intel;
    }
}
