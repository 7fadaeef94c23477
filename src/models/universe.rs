//! Universe model
//!
//! The aggregate that generation builds up step by step and hands off
//! to turn processing once complete.

use serde::{Deserialize, Serialize};

use super::constants::{Density, GalaxySize, StartMode};
use super::fleet::Fleet;
use super::planet::Planet;
use super::player::Player;
use super::position::Vector2;
use super::wormhole::Wormhole;

/// Galaxy shape and start options chosen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub size: GalaxySize,
    pub density: Density,
    pub start_mode: StartMode,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            size: GalaxySize::Tiny,
            density: Density::Normal,
            start_mode: StartMode::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub year: i32,
    pub settings: GameSettings,
    pub area: Vector2,
    pub planets: Vec<Planet>,
    pub wormholes: Vec<Wormhole>,
    pub players: Vec<Player>,
    /// Mobile fleets. Starbases live on their planet instead.
    pub fleets: Vec<Fleet>,
}

impl Universe {
    pub fn new(year: i32, settings: GameSettings, area: Vector2, players: Vec<Player>) -> Self {
        Universe {
            year,
            settings,
            area,
            planets: Vec::new(),
            wormholes: Vec::new(),
            players,
            fleets: Vec::new(),
        }
    }

    pub fn planet_positions(&self) -> Vec<Vector2> {
        self.planets.iter().map(|planet| planet.position).collect()
    }

    pub fn owned_planets(&self, player_num: usize) -> impl Iterator<Item = &Planet> {
        self.planets
            .iter()
            .filter(move |planet| planet.owner == Some(player_num))
    }

    pub fn homeworlds(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|planet| planet.homeworld)
    }

    pub fn player_fleets(&self, player_num: usize) -> impl Iterator<Item = &Fleet> {
        self.fleets
            .iter()
            .filter(move |fleet| fleet.player_num == player_num)
    }
}
