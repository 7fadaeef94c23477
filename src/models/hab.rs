use serde::{Deserialize, Serialize};

use super::constants::HabType;

/// A planet environment or a race tolerance bound.
/// Each axis ranges 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hab {
    pub grav: i32,
    pub temp: i32,
    pub rad: i32,
}

impl Hab {
    pub fn new(grav: i32, temp: i32, rad: i32) -> Self {
        Hab { grav, temp, rad }
    }

    pub fn get(&self, hab_type: HabType) -> i32 {
        match hab_type {
            HabType::Gravity => self.grav,
            HabType::Temperature => self.temp,
            HabType::Radiation => self.rad,
        }
    }

    pub fn set(&mut self, hab_type: HabType, value: i32) {
        match hab_type {
            HabType::Gravity => self.grav = value,
            HabType::Temperature => self.temp = value,
            HabType::Radiation => self.rad = value,
        }
    }
}
