use serde::{Deserialize, Serialize};

use super::cargo::{Cargo, Mineral};
use super::constants::COLONISTS_PER_KILOTON;
use super::fleet::Fleet;
use super::hab::Hab;
use super::position::Vector2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: usize,
    pub name: String,
    pub position: Vector2,
    pub hab: Hab,
    pub mineral_concentration: Mineral,
    /// Surface minerals plus colonists (in kilotons).
    pub cargo: Cargo,
    pub owner: Option<usize>,
    pub mines: i32,
    pub factories: i32,
    pub defenses: i32,
    pub homeworld: bool,
    pub scanner: bool,
    pub starbase: Option<Fleet>,
}

impl Planet {
    pub fn new(id: usize, name: String, position: Vector2) -> Self {
        Planet {
            id,
            name,
            position,
            hab: Hab::default(),
            mineral_concentration: Mineral::default(),
            cargo: Cargo::default(),
            owner: None,
            mines: 0,
            factories: 0,
            defenses: 0,
            homeworld: false,
            scanner: false,
            starbase: None,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn population(&self) -> i32 {
        self.cargo.colonists * COLONISTS_PER_KILOTON
    }

    /// Population is stored as colonist kilotons; partial hundreds are dropped.
    pub fn set_population(&mut self, population: i32) {
        self.cargo.colonists = population.max(0) / COLONISTS_PER_KILOTON;
    }

    pub fn surface_minerals(&self) -> Mineral {
        self.cargo.minerals()
    }

    pub fn set_surface_minerals(&mut self, minerals: Mineral) {
        self.cargo = Cargo::from_minerals(minerals, self.cargo.colonists);
    }
}
