use serde::{Deserialize, Serialize};

use super::cargo::Cargo;
use super::position::Vector2;

/// A stack of identical ships within a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipToken {
    pub design_num: usize,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Vector2,
    pub target_planet: Option<usize>,
    pub warp_factor: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    /// Index into the universe fleet list. Starbases are not in that list
    /// and keep `None`.
    pub id: Option<usize>,
    /// Per-player fleet number, starting at 1.
    pub num: usize,
    pub player_num: usize,
    pub name: String,
    pub tokens: Vec<ShipToken>,
    pub position: Vector2,
    pub orbiting_planet: Option<usize>,
    pub waypoints: Vec<Waypoint>,
    pub cargo: Cargo,
    pub fuel: i32,
    pub battle_plan: String,
    pub starbase: bool,
}

impl Fleet {
    pub fn ship_count(&self) -> i32 {
        self.tokens.iter().map(|token| token.quantity).sum()
    }
}
