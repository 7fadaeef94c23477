use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use super::constants::MineralType;

/// An amount per mineral. Used for concentrations and surface deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mineral {
    pub ironium: i32,
    pub boranium: i32,
    pub germanium: i32,
}

impl Mineral {
    pub fn new(ironium: i32, boranium: i32, germanium: i32) -> Self {
        Mineral {
            ironium,
            boranium,
            germanium,
        }
    }

    pub fn get(&self, mineral: MineralType) -> i32 {
        match mineral {
            MineralType::Ironium => self.ironium,
            MineralType::Boranium => self.boranium,
            MineralType::Germanium => self.germanium,
        }
    }

    pub fn set(&mut self, mineral: MineralType, value: i32) {
        match mineral {
            MineralType::Ironium => self.ironium = value,
            MineralType::Boranium => self.boranium = value,
            MineralType::Germanium => self.germanium = value,
        }
    }

    pub fn halved(&self) -> Self {
        Mineral::new(self.ironium / 2, self.boranium / 2, self.germanium / 2)
    }

    pub fn total(&self) -> i32 {
        self.ironium + self.boranium + self.germanium
    }
}

/// Anything that can be carried or stored on a planet surface, in kilotons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cargo {
    pub ironium: i32,
    pub boranium: i32,
    pub germanium: i32,
    pub colonists: i32,
}

impl Cargo {
    pub fn from_minerals(minerals: Mineral, colonists: i32) -> Self {
        Cargo {
            ironium: minerals.ironium,
            boranium: minerals.boranium,
            germanium: minerals.germanium,
            colonists,
        }
    }

    pub fn minerals(&self) -> Mineral {
        Mineral::new(self.ironium, self.boranium, self.germanium)
    }

    pub fn total(&self) -> i32 {
        self.ironium + self.boranium + self.germanium + self.colonists
    }
}

/// Build cost of a hull, component or design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cost {
    pub ironium: i32,
    pub boranium: i32,
    pub germanium: i32,
    pub resources: i32,
}

impl Cost {
    pub const fn new(ironium: i32, boranium: i32, germanium: i32, resources: i32) -> Self {
        Cost {
            ironium,
            boranium,
            germanium,
            resources,
        }
    }

    /// Scale every term by a factor, rounding each term up.
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |value: i32| (value as f32 * factor).ceil() as i32;
        Cost::new(
            scale(self.ironium),
            scale(self.boranium),
            scale(self.germanium),
            scale(self.resources),
        )
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost::new(
            self.ironium + rhs.ironium,
            self.boranium + rhs.boranium,
            self.germanium + rhs.germanium,
            self.resources + rhs.resources,
        )
    }
}

impl Mul<i32> for Cost {
    type Output = Cost;

    fn mul(self, rhs: i32) -> Cost {
        Cost::new(
            self.ironium * rhs,
            self.boranium * rhs,
            self.germanium * rhs,
            self.resources * rhs,
        )
    }
}
