//! Ruleset constants
//!
//! Every tunable number generation reads lives here. The stock ruleset
//! ships as JSON next to the sources; alternative rulesets can be loaded
//! from a file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{Density, GalaxySize, ResearchCost};
use super::position::Vector2;

pub const BUILTIN_RULES: &str = include_str!("../data/rules.json");

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerSize<T> {
    pub tiny: T,
    pub small: T,
    pub medium: T,
    pub large: T,
    pub huge: T,
}

impl<T: Copy> PerSize<T> {
    pub fn get(&self, size: GalaxySize) -> T {
        match size {
            GalaxySize::Tiny => self.tiny,
            GalaxySize::Small => self.small,
            GalaxySize::Medium => self.medium,
            GalaxySize::Large => self.large,
            GalaxySize::Huge => self.huge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerDensity<T> {
    pub sparse: T,
    pub normal: T,
    pub dense: T,
    pub packed: T,
}

impl<T: Copy> PerDensity<T> {
    pub fn get(&self, density: Density) -> T {
        match density {
            Density::Sparse => self.sparse,
            Density::Normal => self.normal,
            Density::Dense => self.dense,
            Density::Packed => self.packed,
        }
    }
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read rules from {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid rules: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub starting_year: i32,
    /// Side length of the square galaxy, per size.
    pub area: PerSize<f32>,
    pub num_planets: PerSize<PerDensity<usize>>,
    pub wormhole_pairs: PerSize<usize>,

    pub planet_min_distance: f32,
    pub planet_placement_attempts: usize,
    pub wormhole_min_distance: f32,
    pub wormhole_placement_attempts: usize,
    pub min_extra_world_distance: f32,
    pub max_extra_world_distance: f32,

    pub min_mineral_concentration: i32,
    pub max_mineral_concentration: i32,
    pub high_rad_germanium_bonus: i32,
    pub high_rad_germanium_bonus_threshold: i32,
    pub min_planet_surface: i32,
    pub max_planet_surface: i32,
    pub min_homeworld_concentration: i32,
    pub max_homeworld_concentration: i32,
    pub min_extra_world_concentration: i32,
    pub min_homeworld_surface: i32,
    pub max_homeworld_surface: i32,

    pub starting_population: i32,
    pub starting_mines: i32,
    pub starting_factories: i32,
    pub starting_defenses: i32,
    pub max_defenses: i32,
    /// Population a 100% planet holds before race modifiers.
    pub max_planet_population: i32,

    /// Research cost to advance from level `i` to `i + 1`.
    pub tech_base_cost: Vec<i32>,
    pub max_tech_level: i32,
    pub research_cost_less: f32,
    pub research_cost_extra: f32,
    pub techs_start_high_level: i32,

    pub fast_forward_years: i32,
    pub fast_forward_research_per_year: i32,
    pub late_game_research_multiplier: i32,
    pub fast_forward_mine_bonus: i32,
    pub fast_forward_factory_bonus: i32,
    pub fast_forward_defense_bonus: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            starting_year: 2400,
            area: PerSize {
                tiny: 400.0,
                small: 800.0,
                medium: 1200.0,
                large: 1600.0,
                huge: 2000.0,
            },
            num_planets: PerSize {
                tiny: PerDensity {
                    sparse: 24,
                    normal: 32,
                    dense: 40,
                    packed: 60,
                },
                small: PerDensity {
                    sparse: 96,
                    normal: 128,
                    dense: 160,
                    packed: 240,
                },
                medium: PerDensity {
                    sparse: 216,
                    normal: 288,
                    dense: 360,
                    packed: 540,
                },
                large: PerDensity {
                    sparse: 384,
                    normal: 512,
                    dense: 640,
                    packed: 960,
                },
                huge: PerDensity {
                    sparse: 600,
                    normal: 800,
                    dense: 1000,
                    packed: 1500,
                },
            },
            wormhole_pairs: PerSize {
                tiny: 1,
                small: 3,
                medium: 4,
                large: 5,
                huge: 6,
            },
            planet_min_distance: 15.0,
            planet_placement_attempts: 10_000,
            wormhole_min_distance: 30.0,
            wormhole_placement_attempts: 100,
            min_extra_world_distance: 130.0,
            max_extra_world_distance: 180.0,
            min_mineral_concentration: 1,
            max_mineral_concentration: 120,
            high_rad_germanium_bonus: 5,
            high_rad_germanium_bonus_threshold: 81,
            min_planet_surface: 0,
            max_planet_surface: 100,
            min_homeworld_concentration: 30,
            max_homeworld_concentration: 100,
            min_extra_world_concentration: 30,
            min_homeworld_surface: 300,
            max_homeworld_surface: 700,
            starting_population: 25_000,
            starting_mines: 10,
            starting_factories: 10,
            starting_defenses: 10,
            max_defenses: 100,
            max_planet_population: 1_000_000,
            tech_base_cost: vec![
                50, 80, 130, 210, 340, 550, 890, 1440, 2330, 3770, 6100, 9870, 13850, 18040,
                22440, 27050, 31870, 36900, 42140, 47590, 53250, 59120, 65200, 71490, 77990,
                84700,
            ],
            max_tech_level: 26,
            research_cost_less: 0.5,
            research_cost_extra: 1.75,
            techs_start_high_level: 3,
            fast_forward_years: 20,
            fast_forward_research_per_year: 2000,
            late_game_research_multiplier: 2,
            fast_forward_mine_bonus: 30,
            fast_forward_factory_bonus: 30,
            fast_forward_defense_bonus: 10,
        }
    }
}

impl Rules {
    /// The stock ruleset shipped with the crate.
    pub fn builtin() -> Result<Self, RulesError> {
        Self::from_json_str(BUILTIN_RULES)
    }

    /// Parses and validates a ruleset. Missing fields take their stock values.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Rejects rulesets generation cannot run with: inverted min/max
    /// bounds and galaxies without area.
    pub fn validate(&self) -> Result<(), RulesError> {
        let bounds = [
            (
                "mineral concentration",
                self.min_mineral_concentration as f32,
                self.max_mineral_concentration as f32,
            ),
            (
                "planet surface",
                self.min_planet_surface as f32,
                self.max_planet_surface as f32,
            ),
            (
                "homeworld concentration",
                self.min_homeworld_concentration as f32,
                self.max_homeworld_concentration as f32,
            ),
            (
                "homeworld surface",
                self.min_homeworld_surface as f32,
                self.max_homeworld_surface as f32,
            ),
            (
                "extra world distance",
                self.min_extra_world_distance,
                self.max_extra_world_distance,
            ),
        ];
        for (what, min, max) in bounds {
            if min > max {
                return Err(RulesError::Invalid(format!(
                    "{} minimum {} is above maximum {}",
                    what, min, max
                )));
            }
        }

        for size in GalaxySize::ALL {
            let side = self.area.get(size);
            if side.is_nan() || side <= 0.0 {
                return Err(RulesError::Invalid(format!(
                    "{} galaxy area must be positive, got {}",
                    size, side
                )));
            }
        }
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self, RulesError> {
        let contents = fs::read_to_string(path).map_err(|source| RulesError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Galaxy bounds. Galaxies are square.
    pub fn area(&self, size: GalaxySize) -> Vector2 {
        let side = self.area.get(size);
        Vector2::new(side, side)
    }

    pub fn num_planets(&self, size: GalaxySize, density: Density) -> usize {
        self.num_planets.get(size).get(density)
    }

    pub fn wormhole_pairs(&self, size: GalaxySize) -> usize {
        self.wormhole_pairs.get(size)
    }

    pub fn research_cost_factor(&self, cost: ResearchCost) -> f32 {
        match cost {
            ResearchCost::Less => self.research_cost_less,
            ResearchCost::Standard => 1.0,
            ResearchCost::Extra => self.research_cost_extra,
        }
    }
}
