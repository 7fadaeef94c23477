//! Starting ship designs and fleets
//!
//! Ships are filled slot by slot according to their purpose. Starbases and
//! forts follow their own fill rules. Design stats are linear sums over the
//! filled slots, except scanning, which combines ranges as the fourth root
//! of the sum of fourth powers.

use crate::models::constants::{ShipDesignPurpose, NO_SCANNER};
use crate::models::fleet::{Fleet, ShipToken, Waypoint};
use crate::models::planet::Planet;
use crate::models::player::Player;
use crate::models::race_spec::{RaceSpec, StartingFleet, StartingPlanet};
use crate::models::ship_design::{ShipDesign, ShipDesignSlot, ShipDesignSpec};
use crate::models::tech::{ComponentCategory, HullSlotType, TechHull, TechHullComponent, TechLevel};
use crate::models::techs::TechStore;
use crate::models::errors::StepError;

/// Every design a player starts with: one per distinct starting fleet
/// template, then one starbase design per starting planet template.
pub fn starting_designs(player: &Player, techs: &TechStore) -> Result<Vec<ShipDesign>, StepError> {
    let mut designs: Vec<ShipDesign> = Vec::new();

    for planet_template in &player.race_spec.starting_planets {
        for fleet_template in &planet_template.starting_fleets {
            if designs.iter().any(|design| design.name == fleet_template.name) {
                continue;
            }
            let num = designs.len() + 1;
            designs.push(ship_design(player, techs, fleet_template, num)?);
        }
    }

    for (index, planet_template) in player.race_spec.starting_planets.iter().enumerate() {
        if designs
            .iter()
            .any(|design| design.name == planet_template.starbase_design)
        {
            continue;
        }
        let purpose = if index == 0 {
            ShipDesignPurpose::Starbase
        } else {
            ShipDesignPurpose::Fort
        };
        let num = designs.len() + 1;
        designs.push(starbase_design(player, techs, planet_template, purpose, num)?);
    }

    Ok(designs)
}

fn find_hull<'a>(techs: &'a TechStore, name: &str) -> Result<&'a TechHull, StepError> {
    techs.hull(name).ok_or_else(|| StepError::MissingHull {
        name: name.to_string(),
    })
}

fn ship_design(
    player: &Player,
    techs: &TechStore,
    template: &StartingFleet,
    num: usize,
) -> Result<ShipDesign, StepError> {
    let hull = find_hull(techs, &template.hull)?;
    let mut slots = Vec::new();

    for (index, hull_slot) in hull.slots.iter().enumerate() {
        let component = ship_slot_component(player, techs, hull_slot.slot_type, template.purpose)?;
        if let Some(component) = component {
            slots.push(ShipDesignSlot {
                hull_slot_index: index,
                component: component.name.clone(),
                quantity: hull_slot.capacity,
            });
        }
    }

    let spec = compute_spec(hull, &slots, techs, &player.race_spec, &player.tech_levels);
    Ok(ShipDesign {
        num,
        player_num: player.num,
        name: template.name.clone(),
        hull: hull.name.clone(),
        purpose: template.purpose,
        slots,
        spec,
    })
}

/// Pick the component for one ship slot. Only the engine is mandatory.
fn ship_slot_component<'a>(
    player: &Player,
    techs: &'a TechStore,
    slot_type: HullSlotType,
    purpose: ShipDesignPurpose,
) -> Result<Option<&'a TechHullComponent>, StepError> {
    let levels = &player.tech_levels;
    let race = &player.race;
    let best = move |category| techs.best_available(category, levels, race);
    let first = move |category| techs.first_available(category, levels, race);

    let component = match slot_type {
        HullSlotType::Engine => {
            return best(ComponentCategory::Engine)
                .map(Some)
                .ok_or(StepError::MissingComponent {
                    player: player.num,
                    category: ComponentCategory::Engine,
                });
        }
        HullSlotType::Scanner => best(ComponentCategory::Scanner),
        HullSlotType::Mechanical => match purpose {
            ShipDesignPurpose::Colonizer => first(ComponentCategory::ColonyModule),
            ShipDesignPurpose::Freighter => {
                best(ComponentCategory::CargoPod).or_else(|| best(ComponentCategory::FuelTank))
            }
            _ => best(ComponentCategory::FuelTank),
        },
        HullSlotType::Mining => match purpose {
            ShipDesignPurpose::Miner => best(ComponentCategory::MiningRobot),
            _ => None,
        },
        HullSlotType::Armor | HullSlotType::ShieldArmor => best(ComponentCategory::Armor),
        HullSlotType::Shield => first(ComponentCategory::Shield),
        HullSlotType::Weapon => best(ComponentCategory::BeamWeapon),
        HullSlotType::General => match purpose {
            ShipDesignPurpose::Scout => best(ComponentCategory::Scanner),
            ShipDesignPurpose::Freighter => best(ComponentCategory::CargoPod),
            _ => best(ComponentCategory::Armor),
        },
        HullSlotType::Electrical | HullSlotType::Orbital => None,
    };
    Ok(component)
}

fn starbase_design(
    player: &Player,
    techs: &TechStore,
    template: &StartingPlanet,
    purpose: ShipDesignPurpose,
    num: usize,
) -> Result<ShipDesign, StepError> {
    let hull = find_hull(techs, &template.starbase_hull)?;
    let levels = &player.tech_levels;
    let race = &player.race;
    let required = |component: Option<&TechHullComponent>, category: ComponentCategory| {
        component.cloned().ok_or(StepError::MissingComponent {
            player: player.num,
            category,
        })
    };

    let mut placed_stargate = false;
    let mut placed_mass_driver = false;
    let mut slots = Vec::new();

    for (index, hull_slot) in hull.slots.iter().enumerate() {
        let half = hull_slot.capacity / 2;
        let (component, quantity) = match hull_slot.slot_type {
            HullSlotType::Weapon => (
                required(
                    techs.first_available(ComponentCategory::BeamWeapon, levels, race),
                    ComponentCategory::BeamWeapon,
                )?,
                half,
            ),
            HullSlotType::Shield => (
                required(
                    techs.first_available(ComponentCategory::Shield, levels, race),
                    ComponentCategory::Shield,
                )?,
                half,
            ),
            HullSlotType::Armor => {
                match techs.best_available(ComponentCategory::Armor, levels, race) {
                    Some(armor) => (armor.clone(), half),
                    None => continue,
                }
            }
            HullSlotType::Orbital if template.has_stargate && !placed_stargate => {
                placed_stargate = true;
                (
                    required(
                        techs.best_available(ComponentCategory::Stargate, levels, race),
                        ComponentCategory::Stargate,
                    )?,
                    1,
                )
            }
            HullSlotType::Orbital if template.has_mass_driver && !placed_mass_driver => {
                placed_mass_driver = true;
                (
                    required(
                        techs.best_available(ComponentCategory::MassDriver, levels, race),
                        ComponentCategory::MassDriver,
                    )?,
                    1,
                )
            }
            _ => continue,
        };

        if quantity > 0 {
            slots.push(ShipDesignSlot {
                hull_slot_index: index,
                component: component.name,
                quantity,
            });
        }
    }

    let spec = compute_spec(hull, &slots, techs, &player.race_spec, &player.tech_levels);
    Ok(ShipDesign {
        num,
        player_num: player.num,
        name: template.starbase_design.clone(),
        hull: hull.name.clone(),
        purpose,
        slots,
        spec,
    })
}

/// Aggregate stats of a hull with its filled slots.
///
/// Slots naming a component missing from the store are ignored.
pub fn compute_spec(
    hull: &TechHull,
    slots: &[ShipDesignSlot],
    techs: &TechStore,
    race_spec: &RaceSpec,
    tech_levels: &TechLevel,
) -> ShipDesignSpec {
    let mut spec = ShipDesignSpec {
        mass: hull.mass,
        armor: hull.armor,
        fuel_capacity: hull.fuel_capacity,
        cargo_capacity: hull.cargo_capacity,
        starbase: hull.starbase,
        ..ShipDesignSpec::default()
    };
    let mut cost = hull.cost;
    let mut scan_sum = 0.0_f64;
    let mut pen_scan_sum = 0.0_f64;
    let mut scanning = false;
    let mut pen_scanning = false;

    if hull.built_in_scanner && race_spec.built_in_scanner_multiplier > 0 {
        let range = race_spec.built_in_scanner_multiplier * tech_levels.electronics;
        scan_sum += (range as f64).powi(4);
        scanning = true;
    }

    for slot in slots {
        let component = match techs.component(&slot.component) {
            Some(component) => component,
            None => continue,
        };
        let quantity = slot.quantity;

        spec.mass += component.mass * quantity;
        spec.armor += component.armor * quantity;
        spec.shield += component.shield * quantity;
        spec.cargo_capacity += component.cargo_capacity * quantity;
        spec.fuel_capacity += component.fuel_capacity * quantity;
        spec.beam_power += component.beam_power * quantity;
        spec.mining_rate += component.mining_rate * quantity;

        let component_cost = if component.category == ComponentCategory::Engine {
            component.cost.scaled(race_spec.engine_cost_factor)
        } else {
            component.cost
        };
        cost = cost + component_cost * quantity;

        if component.scan_range != NO_SCANNER {
            scan_sum += (component.scan_range as f64).powi(4) * quantity as f64;
            scanning = true;
        }
        if component.pen_scan_range != NO_SCANNER {
            pen_scan_sum += (component.pen_scan_range as f64).powi(4) * quantity as f64;
            pen_scanning = true;
        }

        match component.category {
            ComponentCategory::Engine => {
                if spec.engine.is_none() {
                    spec.engine = Some(component.name.clone());
                    spec.ideal_speed = component.engine.map(|e| e.ideal_speed).unwrap_or(0);
                }
                spec.num_engines += quantity;
            }
            ComponentCategory::ColonyModule => spec.colonizer = true,
            ComponentCategory::Stargate => spec.stargate = Some(component.name.clone()),
            ComponentCategory::MassDriver => spec.mass_driver = Some(component.name.clone()),
            _ => {}
        }
    }

    spec.armor = (spec.armor as f32 * race_spec.armor_strength_factor) as i32;
    spec.shield = (spec.shield as f32 * race_spec.shield_strength_factor) as i32;
    spec.cost = if hull.starbase {
        cost.scaled(race_spec.starbase_cost_factor)
    } else {
        cost.scaled(race_spec.ship_cost_factor)
    };

    if scanning {
        let range = scan_sum.sqrt().sqrt() as i32;
        spec.scan_range = (range as f32 * race_spec.scan_range_factor) as i32;
    }
    if pen_scanning {
        let range = pen_scan_sum.sqrt().sqrt() as i32;
        spec.pen_scan_range = (range as f32 * race_spec.pen_scan_range_factor) as i32;
    }

    spec
}

/// A starbase fleet for a planet, built from a starbase design.
pub fn build_starbase(player: &Player, planet: &Planet, design: &ShipDesign) -> Fleet {
    Fleet {
        id: None,
        num: 0,
        player_num: player.num,
        name: design.name.clone(),
        tokens: vec![ShipToken {
            design_num: design.num,
            quantity: 1,
        }],
        position: planet.position,
        orbiting_planet: Some(planet.id),
        waypoints: Vec::new(),
        cargo: Default::default(),
        fuel: 0,
        battle_plan: default_battle_plan(player),
        starbase: true,
    }
}

fn default_battle_plan(player: &Player) -> String {
    player
        .battle_plans
        .first()
        .map(|plan| plan.name.clone())
        .unwrap_or_default()
}

/// The starting fleets of a player, one ship each, orbiting the planet of
/// the template that lists them.
///
/// # Arguments
///
/// * `player` - Player with designs and assigned starting planets
/// * `planets` - Universe planets, indexed by id
/// * `first_id` - Universe fleet id for the first fleet returned
pub fn starting_fleets(
    player: &Player,
    planets: &[Planet],
    first_id: usize,
) -> Result<Vec<Fleet>, StepError> {
    let mut fleets = Vec::new();

    for (index, template) in player.race_spec.starting_planets.iter().enumerate() {
        let planet_id = match index {
            0 => player
                .homeworld
                .ok_or(StepError::MissingHomeworld { player: player.num })?,
            _ => match player.extra_world {
                Some(id) => id,
                // Extra worlds are skipped on tiny maps
                None => continue,
            },
        };
        let planet = planets
            .get(planet_id)
            .ok_or(StepError::MissingHomeworld { player: player.num })?;

        for fleet_template in &template.starting_fleets {
            let design = player
                .design(&fleet_template.name)
                .ok_or_else(|| StepError::UnknownDesign {
                    player: player.num,
                    name: fleet_template.name.clone(),
                })?;
            let num = fleets.len() + 1;
            fleets.push(Fleet {
                id: Some(first_id + fleets.len()),
                num,
                player_num: player.num,
                name: format!("{} #{}", design.name, num),
                tokens: vec![ShipToken {
                    design_num: design.num,
                    quantity: 1,
                }],
                position: planet.position,
                orbiting_planet: Some(planet.id),
                waypoints: vec![Waypoint {
                    position: planet.position,
                    target_planet: Some(planet.id),
                    warp_factor: 0,
                }],
                cargo: Default::default(),
                fuel: design.spec.fuel_capacity,
                battle_plan: default_battle_plan(player),
                starbase: false,
            });
        }
    }

    Ok(fleets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{Lrt, Prt};
    use crate::models::player::PlayerSetup;
    use crate::models::race::Race;
    use crate::models::rules::Rules;
    use crate::services::race_traits;

    fn player_with(prt: Prt, lrts: &[Lrt]) -> Player {
        let race = Race::with_traits(prt, lrts);
        let spec = race_traits::resolve(&race, &Rules::default());
        let mut player = Player::new(0, PlayerSetup::new("Tester", race), spec);
        player.tech_levels = player.race_spec.starting_tech_levels;
        player
    }

    #[test]
    fn joat_gets_four_ships_and_a_starbase() {
        let player = player_with(Prt::JoaT, &[]);
        let designs = starting_designs(&player, &TechStore::standard()).unwrap();
        let names: Vec<&str> = designs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Long Range Scout", "Santa Maria", "Teamster", "Cotton Picker", "Starbase"]
        );
        for (i, design) in designs.iter().enumerate() {
            assert_eq!(design.num, i + 1);
        }
    }

    #[test]
    fn starbase_fills_weapons_and_shields_to_half() {
        let player = player_with(Prt::JoaT, &[]);
        let designs = starting_designs(&player, &TechStore::standard()).unwrap();
        let starbase = designs.iter().find(|d| d.name == "Starbase").unwrap();
        assert!(starbase.spec.starbase);
        // Space Station: weapon slots 1 and 3, shield slots 2 and 4, 16 each
        for index in 1..=4 {
            assert_eq!(starbase.quantity_in_slot(index), 8);
        }
        assert!(starbase.slots.iter().any(|s| s.component == "Laser"));
        assert!(starbase.slots.iter().any(|s| s.component == "Mole-skin Shield"));
        assert_eq!(starbase.spec.stargate, None);
        assert_eq!(starbase.spec.mass_driver, None);
    }

    #[test]
    fn interstellar_traveler_starbase_gets_a_stargate() {
        let player = player_with(Prt::IT, &[]);
        let designs = starting_designs(&player, &TechStore::standard()).unwrap();
        let starbase = designs.iter().find(|d| d.name == "Starbase").unwrap();
        assert_eq!(starbase.spec.stargate.as_deref(), Some("Stargate 100/250"));
        let fort = designs.iter().find(|d| d.name == "Fort").unwrap();
        assert_eq!(fort.purpose, ShipDesignPurpose::Fort);
        assert!(fort.spec.stargate.is_some());
    }

    #[test]
    fn packet_physics_starbase_gets_a_mass_driver() {
        let player = player_with(Prt::PP, &[]);
        let designs = starting_designs(&player, &TechStore::standard()).unwrap();
        let starbase = designs.iter().find(|d| d.name == "Starbase").unwrap();
        assert_eq!(starbase.spec.mass_driver.as_deref(), Some("Mass Driver 5"));
        assert_eq!(starbase.spec.stargate, None);
        // The extra world scout shares the homeworld scout design
        assert_eq!(
            designs.iter().filter(|d| d.name == "Long Range Scout").count(),
            1
        );
    }

    #[test]
    fn missing_beam_weapon_is_an_error() {
        let player = player_with(Prt::JoaT, &[]);
        let mut techs = TechStore::standard();
        techs
            .components
            .retain(|c| c.category != ComponentCategory::BeamWeapon);
        let err = starting_designs(&player, &techs).unwrap_err();
        assert!(matches!(
            err,
            StepError::MissingComponent {
                category: ComponentCategory::BeamWeapon,
                ..
            }
        ));
    }

    #[test]
    fn missing_hull_is_an_error() {
        let player = player_with(Prt::JoaT, &[]);
        let mut techs = TechStore::standard();
        techs.hulls.retain(|h| h.name != "Mini-Miner");
        let err = starting_designs(&player, &techs).unwrap_err();
        assert!(matches!(err, StepError::MissingHull { .. }));
    }

    #[test]
    fn scan_ranges_combine_by_fourth_power() {
        let techs = TechStore::standard();
        let player = player_with(Prt::HE, &[]);
        let hull = techs.hull("Scout").unwrap();
        let slot = |index, name: &str| ShipDesignSlot {
            hull_slot_index: index,
            component: name.to_string(),
            quantity: 1,
        };

        // Two 50 ly scanners: (2 * 50^4)^(1/4) = 59.46
        let spec = compute_spec(
            hull,
            &[slot(1, "Rhino Scanner"), slot(2, "Rhino Scanner")],
            &techs,
            &player.race_spec,
            &player.tech_levels,
        );
        assert_eq!(spec.scan_range, 59);
        assert_eq!(spec.pen_scan_range, NO_SCANNER);

        // A zero range scanner still scans
        let spec = compute_spec(hull, &[slot(1, "Bat Scanner")], &techs, &player.race_spec, &player.tech_levels);
        assert_eq!(spec.scan_range, 0);

        // Nothing scans
        let spec = compute_spec(hull, &[], &techs, &player.race_spec, &player.tech_levels);
        assert_eq!(spec.scan_range, NO_SCANNER);
    }

    #[test]
    fn joat_hulls_scan_by_themselves() {
        let techs = TechStore::standard();
        let player = player_with(Prt::JoaT, &[]);
        let hull = techs.hull("Scout").unwrap();
        // 20 * electronics 3 = 60
        let spec = compute_spec(hull, &[], &techs, &player.race_spec, &player.tech_levels);
        assert_eq!(spec.scan_range, 60);
    }

    #[test]
    fn engine_cost_is_discounted_for_cheap_engines() {
        let techs = TechStore::standard();
        let plain = player_with(Prt::JoaT, &[]);
        let cheap = player_with(Prt::JoaT, &[Lrt::CE]);
        let hull = techs.hull("Scout").unwrap();
        let slots = [ShipDesignSlot {
            hull_slot_index: 0,
            component: "Quick Jump 5".to_string(),
            quantity: 1,
        }];
        let full = compute_spec(hull, &slots, &techs, &plain.race_spec, &plain.tech_levels);
        let half = compute_spec(hull, &slots, &techs, &cheap.race_spec, &cheap.tech_levels);
        assert!(half.cost.resources < full.cost.resources);
        assert_eq!(full.engine.as_deref(), Some("Quick Jump 5"));
        assert_eq!(full.num_engines, 1);
        assert_eq!(full.ideal_speed, 5);
    }
}
