use serde::{Deserialize, Serialize};

use super::constants::{ShipDesignPurpose, NUM_TECH_FIELDS};
use super::hab::Hab;
use super::tech::TechLevel;

/// A ship every player of a trait starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingFleet {
    pub name: String,
    pub hull: String,
    pub purpose: ShipDesignPurpose,
}

impl StartingFleet {
    pub fn new(name: &str, hull: &str, purpose: ShipDesignPurpose) -> Self {
        StartingFleet {
            name: name.to_string(),
            hull: hull.to_string(),
            purpose,
        }
    }
}

/// A planet every player of a trait starts with. The first template is
/// the homeworld; a second one is an extra world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingPlanet {
    /// Fraction of the ruleset's starting population placed here.
    pub population_factor: f32,
    /// How far from the race's ideal environment this world sits,
    /// as a fraction of the tolerance half-width.
    pub hab_penalty_factor: f32,
    pub has_stargate: bool,
    pub has_mass_driver: bool,
    pub starbase_design: String,
    pub starbase_hull: String,
    pub starting_fleets: Vec<StartingFleet>,
}

/// The fully resolved numeric trait table for one race.
///
/// Produced once by `services::race_traits::resolve` and only read after
/// that. Fields are grouped by how the trait fold combines them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceSpec {
    // Race-level values
    pub hab_center: Hab,
    /// Multiplier on research cost per tech field, indexed by `TechField`.
    pub research_cost_factors: [f32; NUM_TECH_FIELDS],

    // Factors: compound by product
    pub growth_factor: f32,
    pub max_population_factor: f32,
    pub research_factor: f32,
    pub scan_range_factor: f32,
    pub pen_scan_range_factor: f32,
    pub ship_cost_factor: f32,
    pub engine_cost_factor: f32,
    pub starbase_cost_factor: f32,
    pub terraform_cost_factor: f32,
    pub mineral_alchemy_cost_factor: f32,
    pub fuel_efficiency_factor: f32,
    pub armor_strength_factor: f32,
    pub shield_strength_factor: f32,
    pub repair_factor: f32,
    pub starbase_repair_factor: f32,
    pub packet_decay_factor: f32,
    pub packet_mineral_cost_factor: f32,
    pub packet_receiver_factor: f32,
    pub mine_field_decay_factor: f32,
    pub starting_population_factor: f32,
    pub new_tech_cost_factor: f32,
    pub invasion_attack_factor: f32,
    pub invasion_defend_factor: f32,
    pub freighter_growth_factor: f32,

    // Offsets: sum
    pub starting_tech_levels: TechLevel,
    pub built_in_scanner_multiplier: i32,
    pub movement_bonus: i32,
    pub built_in_cloak_units: i32,
    pub starbase_built_in_cloak_units: i32,
    pub mine_field_safe_warp_bonus: i32,
    pub packet_built_in_scanner_range: i32,
    pub minerals_per_single_mineral_packet: i32,
    pub minerals_per_mixed_mineral_packet: i32,
    pub packet_resource_cost: i32,
    pub max_population_offset: f32,
    pub shield_regeneration_rate: f32,
    pub research_splash_factor: f32,
    pub miniaturization_max: f32,
    pub miniaturization_per_level: f32,
    pub scrap_mineral_offset: f32,
    pub scrap_resource_offset: f32,
    pub engine_failure_rate: f32,

    // Capabilities: true if the base or any modifier enables them
    pub can_build_defenses: bool,
    pub lives_on_starbases: bool,
    pub innate_mining: bool,
    pub innate_resources: bool,
    pub can_gate_cargo: bool,
    pub can_detect_stargate_planets: bool,
    pub detect_packet_destinations: bool,
    pub detect_all_packets: bool,
    pub can_detonate_mine_fields: bool,
    pub detect_all_mine_fields: bool,
    pub discover_design_on_scan: bool,
    pub can_remote_mine_own_planets: bool,
    pub advanced_remote_mining: bool,
    pub only_basic_remote_mining: bool,
    pub no_advanced_scanners: bool,
    pub no_ram_scoop_engines: bool,
    pub steals_research: bool,
    pub free_cargo_cloaking: bool,
    pub ships_vanish_in_void: bool,
    pub instaforming: bool,
    pub permaforming: bool,
    pub tech_trading: bool,
    pub generalized_research: bool,
    pub fuel_mizer_engines: bool,

    // Templates, from the primary trait only
    pub starting_planets: Vec<StartingPlanet>,
}

impl RaceSpec {
    pub fn homeworld_template(&self) -> Option<&StartingPlanet> {
        self.starting_planets.first()
    }

    pub fn extra_world_template(&self) -> Option<&StartingPlanet> {
        self.starting_planets.get(1)
    }
}
