use std::fmt;

use serde::{Deserialize, Serialize};

use super::cargo::Cost;
use super::constants::{Lrt, Prt, TechField, NO_SCANNER, NUM_WARP_FACTORS};
use super::race::Race;

/// A level (or an amount) per tech field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TechLevel {
    pub energy: i32,
    pub weapons: i32,
    pub propulsion: i32,
    pub construction: i32,
    pub electronics: i32,
    pub biotechnology: i32,
}

impl TechLevel {
    pub const fn new(
        energy: i32,
        weapons: i32,
        propulsion: i32,
        construction: i32,
        electronics: i32,
        biotechnology: i32,
    ) -> Self {
        TechLevel {
            energy,
            weapons,
            propulsion,
            construction,
            electronics,
            biotechnology,
        }
    }

    pub const fn all(level: i32) -> Self {
        TechLevel::new(level, level, level, level, level, level)
    }

    pub fn get(&self, field: TechField) -> i32 {
        match field {
            TechField::Energy => self.energy,
            TechField::Weapons => self.weapons,
            TechField::Propulsion => self.propulsion,
            TechField::Construction => self.construction,
            TechField::Electronics => self.electronics,
            TechField::Biotechnology => self.biotechnology,
        }
    }

    pub fn set(&mut self, field: TechField, value: i32) {
        match field {
            TechField::Energy => self.energy = value,
            TechField::Weapons => self.weapons = value,
            TechField::Propulsion => self.propulsion = value,
            TechField::Construction => self.construction = value,
            TechField::Electronics => self.electronics = value,
            TechField::Biotechnology => self.biotechnology = value,
        }
    }

    pub fn sum(&self) -> i32 {
        TechField::ALL.iter().map(|field| self.get(*field)).sum()
    }

    pub fn plus(&self, other: &TechLevel) -> TechLevel {
        let mut result = *self;
        for field in TechField::ALL {
            result.set(field, self.get(field) + other.get(field));
        }
        result
    }

    /// True if every field is at least the requirement's level.
    pub fn meets(&self, requirement: &TechLevel) -> bool {
        TechField::ALL
            .iter()
            .all(|field| self.get(*field) >= requirement.get(*field))
    }

    /// The field with the lowest level. Ties go to the earliest field.
    pub fn lowest_field(&self) -> TechField {
        let mut lowest = TechField::Energy;
        for field in TechField::ALL {
            if self.get(field) < self.get(lowest) {
                lowest = field;
            }
        }
        lowest
    }
}

/// What a player needs before a hull or component can be used.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TechRequirements {
    pub levels: TechLevel,
    pub prt_required: Option<Prt>,
    pub lrt_required: Option<Lrt>,
    pub lrt_denied: Option<Lrt>,
}

impl TechRequirements {
    pub const fn levels(levels: TechLevel) -> Self {
        TechRequirements {
            levels,
            prt_required: None,
            lrt_required: None,
            lrt_denied: None,
        }
    }

    pub fn is_met(&self, tech_levels: &TechLevel, race: &Race) -> bool {
        if !tech_levels.meets(&self.levels) {
            return false;
        }
        if let Some(prt) = self.prt_required {
            if race.prt != prt {
                return false;
            }
        }
        if let Some(lrt) = self.lrt_required {
            if !race.has_lrt(lrt) {
                return false;
            }
        }
        if let Some(lrt) = self.lrt_denied {
            if race.has_lrt(lrt) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HullSlotType {
    Engine,
    Scanner,
    Mechanical,
    Electrical,
    Armor,
    Shield,
    ShieldArmor,
    Weapon,
    Mining,
    Orbital,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullSlot {
    pub slot_type: HullSlotType,
    pub capacity: i32,
}

impl HullSlot {
    pub const fn new(slot_type: HullSlotType, capacity: i32) -> Self {
        HullSlot {
            slot_type,
            capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechHull {
    pub name: String,
    pub requirements: TechRequirements,
    pub cost: Cost,
    pub mass: i32,
    pub armor: i32,
    pub fuel_capacity: i32,
    pub cargo_capacity: i32,
    /// Hull scans by itself for races with a built-in scanner multiplier.
    pub built_in_scanner: bool,
    pub starbase: bool,
    pub slots: Vec<HullSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentCategory {
    Engine,
    Scanner,
    Armor,
    Shield,
    BeamWeapon,
    ColonyModule,
    CargoPod,
    FuelTank,
    MiningRobot,
    Stargate,
    MassDriver,
    PlanetaryScanner,
}

impl ComponentCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ComponentCategory::Engine => "engine",
            ComponentCategory::Scanner => "scanner",
            ComponentCategory::Armor => "armor",
            ComponentCategory::Shield => "shield",
            ComponentCategory::BeamWeapon => "beam weapon",
            ComponentCategory::ColonyModule => "colony module",
            ComponentCategory::CargoPod => "cargo pod",
            ComponentCategory::FuelTank => "fuel tank",
            ComponentCategory::MiningRobot => "mining robot",
            ComponentCategory::Stargate => "stargate",
            ComponentCategory::MassDriver => "mass driver",
            ComponentCategory::PlanetaryScanner => "planetary scanner",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Engine performance. `fuel_usage[w - 1]` is mg of fuel per 200 kT per
/// light year at warp `w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub fuel_usage: [i32; NUM_WARP_FACTORS],
    pub ideal_speed: i32,
    pub ram_scoop: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateStats {
    pub safe_hull_mass: i32,
    pub safe_range: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechHullComponent {
    pub name: String,
    pub category: ComponentCategory,
    pub requirements: TechRequirements,
    pub cost: Cost,
    pub mass: i32,
    pub armor: i32,
    pub shield: i32,
    pub cargo_capacity: i32,
    pub fuel_capacity: i32,
    pub scan_range: i32,
    pub pen_scan_range: i32,
    pub beam_power: i32,
    pub mining_rate: i32,
    pub engine: Option<EngineStats>,
    pub gate: Option<GateStats>,
    pub mass_driver_warp: Option<i32>,
}

impl TechHullComponent {
    /// A component with no stats beyond its name, category and requirements.
    pub fn blank(name: &str, category: ComponentCategory, requirements: TechRequirements) -> Self {
        TechHullComponent {
            name: name.to_string(),
            category,
            requirements,
            cost: Cost::default(),
            mass: 0,
            armor: 0,
            shield: 0,
            cargo_capacity: 0,
            fuel_capacity: 0,
            scan_range: NO_SCANNER,
            pen_scan_range: NO_SCANNER,
            beam_power: 0,
            mining_rate: 0,
            engine: None,
            gate: None,
            mass_driver_warp: None,
        }
    }

    pub fn is_scanner(&self) -> bool {
        self.scan_range != NO_SCANNER || self.pen_scan_range != NO_SCANNER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meets_requires_every_field() {
        let player = TechLevel::new(3, 3, 5, 5, 0, 0);
        assert!(player.meets(&TechLevel::new(0, 0, 5, 5, 0, 0)));
        assert!(!player.meets(&TechLevel::new(0, 0, 0, 0, 1, 0)));
    }

    #[test]
    fn lowest_field_prefers_first_on_ties() {
        assert_eq!(TechLevel::all(3).lowest_field(), TechField::Energy);
        assert_eq!(
            TechLevel::new(3, 2, 1, 1, 4, 5).lowest_field(),
            TechField::Propulsion
        );
    }

    #[test]
    fn requirements_respect_trait_gates() {
        let mut requirements = TechRequirements::levels(TechLevel::default());
        requirements.lrt_required = Some(Lrt::IFE);
        let plain = Race::default();
        let ife = Race::with_traits(Prt::JoaT, &[Lrt::IFE]);
        assert!(!requirements.is_met(&TechLevel::default(), &plain));
        assert!(requirements.is_met(&TechLevel::default(), &ife));

        let denied = TechRequirements {
            lrt_denied: Some(Lrt::NAS),
            ..TechRequirements::default()
        };
        let nas = Race::with_traits(Prt::JoaT, &[Lrt::NAS]);
        assert!(denied.is_met(&TechLevel::default(), &plain));
        assert!(!denied.is_met(&TechLevel::default(), &nas));
    }

    #[test]
    fn plus_and_sum() {
        let a = TechLevel::new(1, 0, 2, 0, 0, 0);
        let b = TechLevel::new(0, 0, 1, 0, 0, 3);
        assert_eq!(a.plus(&b), TechLevel::new(1, 0, 3, 0, 0, 3));
        assert_eq!(a.plus(&b).sum(), 7);
    }
}
