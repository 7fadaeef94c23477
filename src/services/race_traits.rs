//! Racial trait resolution
//!
//! Each PRT carries a complete `RaceSpec` record. Each LRT carries a partial
//! `LrtModifier` record. Resolution folds the selected LRTs over the PRT
//! record in ascending LRT order:
//!
//! - `*_factor` fields multiply
//! - offsets and starting tech levels add
//! - capability flags OR together
//! - starting fleet and planet templates come from the PRT only

use crate::models::constants::{Lrt, Prt, ShipDesignPurpose, TechField, NUM_TECH_FIELDS};
use crate::models::hab::Hab;
use crate::models::race::Race;
use crate::models::race_spec::{RaceSpec, StartingFleet, StartingPlanet};
use crate::models::rules::Rules;
use crate::models::tech::TechLevel;

pub const HOMEWORLD_STARBASE_DESIGN: &str = "Starbase";
pub const HOMEWORLD_STARBASE_HULL: &str = "Space Station";
pub const EXTRA_WORLD_STARBASE_DESIGN: &str = "Fort";
pub const EXTRA_WORLD_STARBASE_HULL: &str = "Orbital Fort";

/// Resolve the full trait table for a race, including the race-level values
/// that depend on its tolerance and research settings.
pub fn resolve(race: &Race, rules: &Rules) -> RaceSpec {
    let lrts: Vec<Lrt> = race.lrts.iter().copied().collect();
    let mut spec = resolve_traits(race.prt, &lrts);

    spec.hab_center = race.hab_center();
    for field in TechField::ALL {
        spec.research_cost_factors[field as usize] =
            rules.research_cost_factor(race.research_cost_for(field));
    }
    spec
}

/// Fold LRT modifiers over the PRT base record.
///
/// LRTs are applied in ascending order regardless of the order given, and
/// duplicates are applied once.
pub fn resolve_traits(prt: Prt, lrts: &[Lrt]) -> RaceSpec {
    let mut ordered = lrts.to_vec();
    ordered.sort();
    ordered.dedup();

    let mut spec = prt.base_spec();
    for lrt in ordered {
        apply_modifier(&mut spec, &lrt.modifier());
    }
    spec
}

/// Partial trait record. `None` leaves the field as the PRT set it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LrtModifier {
    pub growth_factor: Option<f32>,
    pub max_population_factor: Option<f32>,
    pub research_factor: Option<f32>,
    pub scan_range_factor: Option<f32>,
    pub pen_scan_range_factor: Option<f32>,
    pub ship_cost_factor: Option<f32>,
    pub engine_cost_factor: Option<f32>,
    pub starbase_cost_factor: Option<f32>,
    pub terraform_cost_factor: Option<f32>,
    pub mineral_alchemy_cost_factor: Option<f32>,
    pub fuel_efficiency_factor: Option<f32>,
    pub armor_strength_factor: Option<f32>,
    pub shield_strength_factor: Option<f32>,
    pub repair_factor: Option<f32>,
    pub starbase_repair_factor: Option<f32>,
    pub packet_decay_factor: Option<f32>,
    pub packet_mineral_cost_factor: Option<f32>,
    pub packet_receiver_factor: Option<f32>,
    pub mine_field_decay_factor: Option<f32>,
    pub starting_population_factor: Option<f32>,
    pub new_tech_cost_factor: Option<f32>,
    pub invasion_attack_factor: Option<f32>,
    pub invasion_defend_factor: Option<f32>,
    pub freighter_growth_factor: Option<f32>,

    pub starting_tech_levels: Option<TechLevel>,
    pub built_in_scanner_multiplier: Option<i32>,
    pub movement_bonus: Option<i32>,
    pub built_in_cloak_units: Option<i32>,
    pub starbase_built_in_cloak_units: Option<i32>,
    pub mine_field_safe_warp_bonus: Option<i32>,
    pub packet_built_in_scanner_range: Option<i32>,
    pub minerals_per_single_mineral_packet: Option<i32>,
    pub minerals_per_mixed_mineral_packet: Option<i32>,
    pub packet_resource_cost: Option<i32>,
    pub max_population_offset: Option<f32>,
    pub shield_regeneration_rate: Option<f32>,
    pub research_splash_factor: Option<f32>,
    pub miniaturization_max: Option<f32>,
    pub miniaturization_per_level: Option<f32>,
    pub scrap_mineral_offset: Option<f32>,
    pub scrap_resource_offset: Option<f32>,
    pub engine_failure_rate: Option<f32>,

    pub can_build_defenses: Option<bool>,
    pub lives_on_starbases: Option<bool>,
    pub innate_mining: Option<bool>,
    pub innate_resources: Option<bool>,
    pub can_gate_cargo: Option<bool>,
    pub can_detect_stargate_planets: Option<bool>,
    pub detect_packet_destinations: Option<bool>,
    pub detect_all_packets: Option<bool>,
    pub can_detonate_mine_fields: Option<bool>,
    pub detect_all_mine_fields: Option<bool>,
    pub discover_design_on_scan: Option<bool>,
    pub can_remote_mine_own_planets: Option<bool>,
    pub advanced_remote_mining: Option<bool>,
    pub only_basic_remote_mining: Option<bool>,
    pub no_advanced_scanners: Option<bool>,
    pub no_ram_scoop_engines: Option<bool>,
    pub steals_research: Option<bool>,
    pub free_cargo_cloaking: Option<bool>,
    pub ships_vanish_in_void: Option<bool>,
    pub instaforming: Option<bool>,
    pub permaforming: Option<bool>,
    pub tech_trading: Option<bool>,
    pub generalized_research: Option<bool>,
    pub fuel_mizer_engines: Option<bool>,
}

fn product(target: &mut f32, factor: &Option<f32>) {
    if let Some(factor) = factor {
        *target *= factor;
    }
}

fn offset_f32(target: &mut f32, offset: &Option<f32>) {
    if let Some(offset) = offset {
        *target += offset;
    }
}

fn offset_i32(target: &mut i32, offset: &Option<i32>) {
    if let Some(offset) = offset {
        *target += offset;
    }
}

fn either(target: &mut bool, flag: &Option<bool>) {
    if let Some(flag) = flag {
        *target |= flag;
    }
}

/// Apply one modifier. The destructure below has no `..`, so adding a field
/// to `LrtModifier` without giving it a rule here fails to compile.
fn apply_modifier(spec: &mut RaceSpec, modifier: &LrtModifier) {
    let LrtModifier {
        growth_factor,
        max_population_factor,
        research_factor,
        scan_range_factor,
        pen_scan_range_factor,
        ship_cost_factor,
        engine_cost_factor,
        starbase_cost_factor,
        terraform_cost_factor,
        mineral_alchemy_cost_factor,
        fuel_efficiency_factor,
        armor_strength_factor,
        shield_strength_factor,
        repair_factor,
        starbase_repair_factor,
        packet_decay_factor,
        packet_mineral_cost_factor,
        packet_receiver_factor,
        mine_field_decay_factor,
        starting_population_factor,
        new_tech_cost_factor,
        invasion_attack_factor,
        invasion_defend_factor,
        freighter_growth_factor,
        starting_tech_levels,
        built_in_scanner_multiplier,
        movement_bonus,
        built_in_cloak_units,
        starbase_built_in_cloak_units,
        mine_field_safe_warp_bonus,
        packet_built_in_scanner_range,
        minerals_per_single_mineral_packet,
        minerals_per_mixed_mineral_packet,
        packet_resource_cost,
        max_population_offset,
        shield_regeneration_rate,
        research_splash_factor,
        miniaturization_max,
        miniaturization_per_level,
        scrap_mineral_offset,
        scrap_resource_offset,
        engine_failure_rate,
        can_build_defenses,
        lives_on_starbases,
        innate_mining,
        innate_resources,
        can_gate_cargo,
        can_detect_stargate_planets,
        detect_packet_destinations,
        detect_all_packets,
        can_detonate_mine_fields,
        detect_all_mine_fields,
        discover_design_on_scan,
        can_remote_mine_own_planets,
        advanced_remote_mining,
        only_basic_remote_mining,
        no_advanced_scanners,
        no_ram_scoop_engines,
        steals_research,
        free_cargo_cloaking,
        ships_vanish_in_void,
        instaforming,
        permaforming,
        tech_trading,
        generalized_research,
        fuel_mizer_engines,
    } = modifier;

    product(&mut spec.growth_factor, growth_factor);
    product(&mut spec.max_population_factor, max_population_factor);
    product(&mut spec.research_factor, research_factor);
    product(&mut spec.scan_range_factor, scan_range_factor);
    product(&mut spec.pen_scan_range_factor, pen_scan_range_factor);
    product(&mut spec.ship_cost_factor, ship_cost_factor);
    product(&mut spec.engine_cost_factor, engine_cost_factor);
    product(&mut spec.starbase_cost_factor, starbase_cost_factor);
    product(&mut spec.terraform_cost_factor, terraform_cost_factor);
    product(&mut spec.mineral_alchemy_cost_factor, mineral_alchemy_cost_factor);
    product(&mut spec.fuel_efficiency_factor, fuel_efficiency_factor);
    product(&mut spec.armor_strength_factor, armor_strength_factor);
    product(&mut spec.shield_strength_factor, shield_strength_factor);
    product(&mut spec.repair_factor, repair_factor);
    product(&mut spec.starbase_repair_factor, starbase_repair_factor);
    product(&mut spec.packet_decay_factor, packet_decay_factor);
    product(&mut spec.packet_mineral_cost_factor, packet_mineral_cost_factor);
    product(&mut spec.packet_receiver_factor, packet_receiver_factor);
    product(&mut spec.mine_field_decay_factor, mine_field_decay_factor);
    product(&mut spec.starting_population_factor, starting_population_factor);
    product(&mut spec.new_tech_cost_factor, new_tech_cost_factor);
    product(&mut spec.invasion_attack_factor, invasion_attack_factor);
    product(&mut spec.invasion_defend_factor, invasion_defend_factor);
    product(&mut spec.freighter_growth_factor, freighter_growth_factor);

    if let Some(levels) = starting_tech_levels {
        spec.starting_tech_levels = spec.starting_tech_levels.plus(levels);
    }
    offset_i32(&mut spec.built_in_scanner_multiplier, built_in_scanner_multiplier);
    offset_i32(&mut spec.movement_bonus, movement_bonus);
    offset_i32(&mut spec.built_in_cloak_units, built_in_cloak_units);
    offset_i32(&mut spec.starbase_built_in_cloak_units, starbase_built_in_cloak_units);
    offset_i32(&mut spec.mine_field_safe_warp_bonus, mine_field_safe_warp_bonus);
    offset_i32(&mut spec.packet_built_in_scanner_range, packet_built_in_scanner_range);
    offset_i32(
        &mut spec.minerals_per_single_mineral_packet,
        minerals_per_single_mineral_packet,
    );
    offset_i32(
        &mut spec.minerals_per_mixed_mineral_packet,
        minerals_per_mixed_mineral_packet,
    );
    offset_i32(&mut spec.packet_resource_cost, packet_resource_cost);
    offset_f32(&mut spec.max_population_offset, max_population_offset);
    offset_f32(&mut spec.shield_regeneration_rate, shield_regeneration_rate);
    offset_f32(&mut spec.research_splash_factor, research_splash_factor);
    offset_f32(&mut spec.miniaturization_max, miniaturization_max);
    offset_f32(&mut spec.miniaturization_per_level, miniaturization_per_level);
    offset_f32(&mut spec.scrap_mineral_offset, scrap_mineral_offset);
    offset_f32(&mut spec.scrap_resource_offset, scrap_resource_offset);
    offset_f32(&mut spec.engine_failure_rate, engine_failure_rate);

    either(&mut spec.can_build_defenses, can_build_defenses);
    either(&mut spec.lives_on_starbases, lives_on_starbases);
    either(&mut spec.innate_mining, innate_mining);
    either(&mut spec.innate_resources, innate_resources);
    either(&mut spec.can_gate_cargo, can_gate_cargo);
    either(&mut spec.can_detect_stargate_planets, can_detect_stargate_planets);
    either(&mut spec.detect_packet_destinations, detect_packet_destinations);
    either(&mut spec.detect_all_packets, detect_all_packets);
    either(&mut spec.can_detonate_mine_fields, can_detonate_mine_fields);
    either(&mut spec.detect_all_mine_fields, detect_all_mine_fields);
    either(&mut spec.discover_design_on_scan, discover_design_on_scan);
    either(&mut spec.can_remote_mine_own_planets, can_remote_mine_own_planets);
    either(&mut spec.advanced_remote_mining, advanced_remote_mining);
    either(&mut spec.only_basic_remote_mining, only_basic_remote_mining);
    either(&mut spec.no_advanced_scanners, no_advanced_scanners);
    either(&mut spec.no_ram_scoop_engines, no_ram_scoop_engines);
    either(&mut spec.steals_research, steals_research);
    either(&mut spec.free_cargo_cloaking, free_cargo_cloaking);
    either(&mut spec.ships_vanish_in_void, ships_vanish_in_void);
    either(&mut spec.instaforming, instaforming);
    either(&mut spec.permaforming, permaforming);
    either(&mut spec.tech_trading, tech_trading);
    either(&mut spec.generalized_research, generalized_research);
    either(&mut spec.fuel_mizer_engines, fuel_mizer_engines);
}

impl Lrt {
    /// The partial record this trait layers on top of a PRT.
    pub fn modifier(&self) -> LrtModifier {
        match self {
            Lrt::IFE => LrtModifier {
                fuel_efficiency_factor: Some(0.85),
                starting_tech_levels: Some(TechLevel::new(0, 0, 1, 0, 0, 0)),
                fuel_mizer_engines: Some(true),
                ..LrtModifier::default()
            },
            Lrt::TT => LrtModifier {
                terraform_cost_factor: Some(0.7),
                ..LrtModifier::default()
            },
            Lrt::ARM => LrtModifier {
                advanced_remote_mining: Some(true),
                ..LrtModifier::default()
            },
            Lrt::ISB => LrtModifier {
                starbase_cost_factor: Some(0.8),
                starbase_built_in_cloak_units: Some(20),
                ..LrtModifier::default()
            },
            Lrt::GR => LrtModifier {
                research_factor: Some(0.5),
                research_splash_factor: Some(0.15),
                generalized_research: Some(true),
                ..LrtModifier::default()
            },
            Lrt::UR => LrtModifier {
                scrap_mineral_offset: Some(0.12),
                scrap_resource_offset: Some(0.35),
                ..LrtModifier::default()
            },
            Lrt::MA => LrtModifier {
                mineral_alchemy_cost_factor: Some(0.25),
                ..LrtModifier::default()
            },
            Lrt::NRSE => LrtModifier {
                no_ram_scoop_engines: Some(true),
                ..LrtModifier::default()
            },
            Lrt::CE => LrtModifier {
                engine_cost_factor: Some(0.5),
                engine_failure_rate: Some(0.1),
                starting_tech_levels: Some(TechLevel::new(0, 0, 1, 0, 0, 0)),
                ..LrtModifier::default()
            },
            Lrt::OBRM => LrtModifier {
                only_basic_remote_mining: Some(true),
                max_population_offset: Some(0.1),
                ..LrtModifier::default()
            },
            Lrt::NAS => LrtModifier {
                no_advanced_scanners: Some(true),
                scan_range_factor: Some(2.0),
                ..LrtModifier::default()
            },
            Lrt::LSP => LrtModifier {
                starting_population_factor: Some(0.7),
                ..LrtModifier::default()
            },
            Lrt::BET => LrtModifier {
                new_tech_cost_factor: Some(2.0),
                miniaturization_max: Some(0.05),
                miniaturization_per_level: Some(0.01),
                ..LrtModifier::default()
            },
            Lrt::RS => LrtModifier {
                shield_strength_factor: Some(1.4),
                armor_strength_factor: Some(0.5),
                shield_regeneration_rate: Some(0.1),
                ..LrtModifier::default()
            },
        }
    }
}

fn fleet(name: &str, hull: &str, purpose: ShipDesignPurpose) -> StartingFleet {
    StartingFleet::new(name, hull, purpose)
}

fn scout() -> StartingFleet {
    fleet("Long Range Scout", "Scout", ShipDesignPurpose::Scout)
}

fn colony_ship() -> StartingFleet {
    fleet("Santa Maria", "Colony Ship", ShipDesignPurpose::Colonizer)
}

fn freighter() -> StartingFleet {
    fleet("Teamster", "Medium Freighter", ShipDesignPurpose::Freighter)
}

fn miner() -> StartingFleet {
    fleet("Cotton Picker", "Mini-Miner", ShipDesignPurpose::Miner)
}

fn homeworld(fleets: Vec<StartingFleet>) -> StartingPlanet {
    StartingPlanet {
        population_factor: 1.0,
        hab_penalty_factor: 0.0,
        has_stargate: false,
        has_mass_driver: false,
        starbase_design: HOMEWORLD_STARBASE_DESIGN.to_string(),
        starbase_hull: HOMEWORLD_STARBASE_HULL.to_string(),
        starting_fleets: fleets,
    }
}

fn extra_world(has_stargate: bool, has_mass_driver: bool) -> StartingPlanet {
    StartingPlanet {
        population_factor: 0.4,
        hab_penalty_factor: 0.5,
        has_stargate,
        has_mass_driver,
        starbase_design: EXTRA_WORLD_STARBASE_DESIGN.to_string(),
        starbase_hull: EXTRA_WORLD_STARBASE_HULL.to_string(),
        starting_fleets: vec![scout()],
    }
}

/// Every field at its neutral value, with the standard starting fleet.
fn baseline() -> RaceSpec {
    RaceSpec {
        hab_center: Hab::new(50, 50, 50),
        research_cost_factors: [1.0; NUM_TECH_FIELDS],

        growth_factor: 1.0,
        max_population_factor: 1.0,
        research_factor: 1.0,
        scan_range_factor: 1.0,
        pen_scan_range_factor: 1.0,
        ship_cost_factor: 1.0,
        engine_cost_factor: 1.0,
        starbase_cost_factor: 1.0,
        terraform_cost_factor: 1.0,
        mineral_alchemy_cost_factor: 1.0,
        fuel_efficiency_factor: 1.0,
        armor_strength_factor: 1.0,
        shield_strength_factor: 1.0,
        repair_factor: 1.0,
        starbase_repair_factor: 1.0,
        packet_decay_factor: 1.0,
        packet_mineral_cost_factor: 1.0,
        packet_receiver_factor: 1.0,
        mine_field_decay_factor: 1.0,
        starting_population_factor: 1.0,
        new_tech_cost_factor: 1.0,
        invasion_attack_factor: 1.0,
        invasion_defend_factor: 1.0,
        freighter_growth_factor: 0.0,

        starting_tech_levels: TechLevel::default(),
        built_in_scanner_multiplier: 0,
        movement_bonus: 0,
        built_in_cloak_units: 0,
        starbase_built_in_cloak_units: 0,
        mine_field_safe_warp_bonus: 0,
        packet_built_in_scanner_range: 0,
        minerals_per_single_mineral_packet: 100,
        minerals_per_mixed_mineral_packet: 40,
        packet_resource_cost: 10,
        max_population_offset: 0.0,
        shield_regeneration_rate: 0.0,
        research_splash_factor: 0.0,
        miniaturization_max: 0.75,
        miniaturization_per_level: 0.04,
        scrap_mineral_offset: 0.0,
        scrap_resource_offset: 0.0,
        engine_failure_rate: 0.0,

        can_build_defenses: true,
        lives_on_starbases: false,
        innate_mining: false,
        innate_resources: false,
        can_gate_cargo: false,
        can_detect_stargate_planets: false,
        detect_packet_destinations: false,
        detect_all_packets: false,
        can_detonate_mine_fields: false,
        detect_all_mine_fields: false,
        discover_design_on_scan: false,
        can_remote_mine_own_planets: false,
        advanced_remote_mining: false,
        only_basic_remote_mining: false,
        no_advanced_scanners: false,
        no_ram_scoop_engines: false,
        steals_research: false,
        free_cargo_cloaking: false,
        ships_vanish_in_void: false,
        instaforming: false,
        permaforming: false,
        tech_trading: false,
        generalized_research: false,
        fuel_mizer_engines: false,

        starting_planets: vec![homeworld(vec![scout(), colony_ship()])],
    }
}

impl Prt {
    /// The complete trait record for this PRT before any LRT is applied.
    pub fn base_spec(&self) -> RaceSpec {
        match self {
            Prt::HE => RaceSpec {
                growth_factor: 2.0,
                max_population_factor: 0.5,
                starting_planets: vec![homeworld(vec![scout(), colony_ship(), colony_ship()])],
                ..baseline()
            },
            Prt::SS => RaceSpec {
                starting_tech_levels: TechLevel::new(0, 0, 0, 0, 5, 0),
                built_in_cloak_units: 75,
                steals_research: true,
                free_cargo_cloaking: true,
                ..baseline()
            },
            Prt::WM => RaceSpec {
                starting_tech_levels: TechLevel::new(1, 6, 1, 0, 0, 0),
                movement_bonus: 2,
                invasion_attack_factor: 1.5,
                discover_design_on_scan: true,
                starting_planets: vec![homeworld(vec![
                    scout(),
                    colony_ship(),
                    fleet("Stalwart Defender", "Destroyer", ShipDesignPurpose::ArmedScout),
                ])],
                ..baseline()
            },
            Prt::CA => RaceSpec {
                starting_tech_levels: TechLevel::new(1, 1, 1, 2, 1, 6),
                instaforming: true,
                permaforming: true,
                starting_planets: vec![homeworld(vec![scout(), colony_ship(), miner()])],
                ..baseline()
            },
            Prt::IS => RaceSpec {
                freighter_growth_factor: 0.5,
                invasion_defend_factor: 2.0,
                repair_factor: 2.0,
                starbase_repair_factor: 1.5,
                starting_planets: vec![homeworld(vec![scout(), colony_ship(), freighter()])],
                ..baseline()
            },
            Prt::SD => RaceSpec {
                starting_tech_levels: TechLevel::new(0, 0, 2, 0, 0, 2),
                mine_field_decay_factor: 0.25,
                mine_field_safe_warp_bonus: 2,
                can_detonate_mine_fields: true,
                detect_all_mine_fields: true,
                ..baseline()
            },
            Prt::PP => {
                let mut home = homeworld(vec![scout(), colony_ship()]);
                home.has_mass_driver = true;
                RaceSpec {
                    starting_tech_levels: TechLevel::new(4, 0, 0, 0, 0, 0),
                    packet_decay_factor: 0.5,
                    packet_mineral_cost_factor: 0.5,
                    packet_receiver_factor: 2.0,
                    minerals_per_single_mineral_packet: 70,
                    minerals_per_mixed_mineral_packet: 25,
                    packet_resource_cost: 5,
                    packet_built_in_scanner_range: 1,
                    detect_packet_destinations: true,
                    detect_all_packets: true,
                    starting_planets: vec![home, extra_world(false, true)],
                    ..baseline()
                }
            }
            Prt::IT => {
                let mut home = homeworld(vec![scout(), colony_ship()]);
                home.has_stargate = true;
                RaceSpec {
                    starting_tech_levels: TechLevel::new(0, 0, 5, 5, 0, 0),
                    can_gate_cargo: true,
                    can_detect_stargate_planets: true,
                    starting_planets: vec![home, extra_world(true, false)],
                    ..baseline()
                }
            }
            Prt::AR => RaceSpec {
                starting_tech_levels: TechLevel::new(1, 0, 0, 0, 0, 0),
                can_build_defenses: false,
                lives_on_starbases: true,
                innate_mining: true,
                innate_resources: true,
                can_remote_mine_own_planets: true,
                ..baseline()
            },
            Prt::JoaT => RaceSpec {
                starting_tech_levels: TechLevel::all(3),
                built_in_scanner_multiplier: 20,
                max_population_offset: 0.2,
                tech_trading: true,
                starting_planets: vec![homeworld(vec![
                    scout(),
                    colony_ship(),
                    freighter(),
                    miner(),
                ])],
                ..baseline()
            },
        }
    }
}
