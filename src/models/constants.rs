use std::fmt;

use serde::{Deserialize, Serialize};

pub const NUM_HAB_TYPES: usize = 3;
pub const NUM_MINERAL_TYPES: usize = 3;
pub const NUM_TECH_FIELDS: usize = 6;
/// Number of entries in an engine's fuel usage table (warp 1 through 10).
pub const NUM_WARP_FACTORS: usize = 10;

/// Scan range value reserved for "this component or design does not scan".
/// Components carrying it are skipped when ranges are aggregated.
pub const NO_SCANNER: i32 = -1;

/// Colonists are carried as cargo in kilotons of 100 people each.
pub const COLONISTS_PER_KILOTON: i32 = 100;

/// Hab value used for an axis the race is immune to.
pub const IMMUNE_HAB_CENTER: i32 = 50;

/// Maximum habitability "green" points an axis can contribute (100 squared).
pub const MAX_HAB_AXIS_POINTS: i32 = 10_000;

/// Red penalty contributed by a single axis is capped at this distance.
pub const MAX_RED_PENALTY_PER_AXIS: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GalaxySize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

impl GalaxySize {
    pub const ALL: [GalaxySize; 5] = [
        GalaxySize::Tiny,
        GalaxySize::Small,
        GalaxySize::Medium,
        GalaxySize::Large,
        GalaxySize::Huge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GalaxySize::Tiny => "tiny",
            GalaxySize::Small => "small",
            GalaxySize::Medium => "medium",
            GalaxySize::Large => "large",
            GalaxySize::Huge => "huge",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Density {
    Sparse,
    Normal,
    Dense,
    Packed,
}

impl Density {
    pub const ALL: [Density; 4] = [
        Density::Sparse,
        Density::Normal,
        Density::Dense,
        Density::Packed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Density::Sparse => "sparse",
            Density::Normal => "normal",
            Density::Dense => "dense",
            Density::Packed => "packed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|density| density.name().eq_ignore_ascii_case(name))
    }
}

/// How far into the game the generated universe starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartMode {
    #[default]
    Normal,
    MidGame,
    LateGame,
}

impl StartMode {
    pub fn name(&self) -> &'static str {
        match self {
            StartMode::Normal => "normal",
            StartMode::MidGame => "mid",
            StartMode::LateGame => "late",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [StartMode::Normal, StartMode::MidGame, StartMode::LateGame]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabType {
    Gravity = 0,
    Temperature = 1,
    Radiation = 2,
}

impl HabType {
    pub const ALL: [HabType; NUM_HAB_TYPES] =
        [HabType::Gravity, HabType::Temperature, HabType::Radiation];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineralType {
    Ironium = 0,
    Boranium = 1,
    Germanium = 2,
}

impl MineralType {
    pub const ALL: [MineralType; NUM_MINERAL_TYPES] = [
        MineralType::Ironium,
        MineralType::Boranium,
        MineralType::Germanium,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechField {
    Energy = 0,
    Weapons = 1,
    Propulsion = 2,
    Construction = 3,
    Electronics = 4,
    Biotechnology = 5,
}

impl TechField {
    pub const ALL: [TechField; NUM_TECH_FIELDS] = [
        TechField::Energy,
        TechField::Weapons,
        TechField::Propulsion,
        TechField::Construction,
        TechField::Electronics,
        TechField::Biotechnology,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TechField::Energy => "Energy",
            TechField::Weapons => "Weapons",
            TechField::Propulsion => "Propulsion",
            TechField::Construction => "Construction",
            TechField::Electronics => "Electronics",
            TechField::Biotechnology => "Biotechnology",
        }
    }
}

/// Primary racial trait. Mutually exclusive; selects the baseline trait record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Prt {
    /// Hyper-Expansion
    HE,
    /// Super-Stealth
    SS,
    /// War Monger
    WM,
    /// Claim Adjuster
    CA,
    /// Inner-Strength
    IS,
    /// Space Demolition
    SD,
    /// Packet Physics
    PP,
    /// Interstellar Traveler
    IT,
    /// Alternate Reality
    AR,
    /// Jack of all Trades
    JoaT,
}

impl Prt {
    pub const ALL: [Prt; 10] = [
        Prt::HE,
        Prt::SS,
        Prt::WM,
        Prt::CA,
        Prt::IS,
        Prt::SD,
        Prt::PP,
        Prt::IT,
        Prt::AR,
        Prt::JoaT,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prt::HE => "Hyper-Expansion",
            Prt::SS => "Super-Stealth",
            Prt::WM => "War Monger",
            Prt::CA => "Claim Adjuster",
            Prt::IS => "Inner-Strength",
            Prt::SD => "Space Demolition",
            Prt::PP => "Packet Physics",
            Prt::IT => "Interstellar Traveler",
            Prt::AR => "Alternate Reality",
            Prt::JoaT => "Jack of all Trades",
        }
    }
}

/// Lesser racial trait. Any combination may be layered on top of a PRT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Lrt {
    /// Improved Fuel Efficiency
    IFE,
    /// Total Terraforming
    TT,
    /// Advanced Remote Mining
    ARM,
    /// Improved Starbases
    ISB,
    /// Generalized Research
    GR,
    /// Ultimate Recycling
    UR,
    /// Mineral Alchemy
    MA,
    /// No Ram Scoop Engines
    NRSE,
    /// Cheap Engines
    CE,
    /// Only Basic Remote Mining
    OBRM,
    /// No Advanced Scanners
    NAS,
    /// Low Starting Population
    LSP,
    /// Bleeding Edge Technology
    BET,
    /// Regenerating Shields
    RS,
}

impl Lrt {
    pub const ALL: [Lrt; 14] = [
        Lrt::IFE,
        Lrt::TT,
        Lrt::ARM,
        Lrt::ISB,
        Lrt::GR,
        Lrt::UR,
        Lrt::MA,
        Lrt::NRSE,
        Lrt::CE,
        Lrt::OBRM,
        Lrt::NAS,
        Lrt::LSP,
        Lrt::BET,
        Lrt::RS,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Lrt::IFE => "Improved Fuel Efficiency",
            Lrt::TT => "Total Terraforming",
            Lrt::ARM => "Advanced Remote Mining",
            Lrt::ISB => "Improved Starbases",
            Lrt::GR => "Generalized Research",
            Lrt::UR => "Ultimate Recycling",
            Lrt::MA => "Mineral Alchemy",
            Lrt::NRSE => "No Ram Scoop Engines",
            Lrt::CE => "Cheap Engines",
            Lrt::OBRM => "Only Basic Remote Mining",
            Lrt::NAS => "No Advanced Scanners",
            Lrt::LSP => "Low Starting Population",
            Lrt::BET => "Bleeding Edge Technology",
            Lrt::RS => "Regenerating Shields",
        }
    }
}

/// Per-field research cost setting chosen at race creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResearchCost {
    Less,
    #[default]
    Standard,
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WormholeStability {
    RockSolid,
    Stable,
    MostlyStable,
    Average,
    SlightlyVolatile,
    Volatile,
    ExtremelyVolatile,
}

impl WormholeStability {
    pub const ALL: [WormholeStability; 7] = [
        WormholeStability::RockSolid,
        WormholeStability::Stable,
        WormholeStability::MostlyStable,
        WormholeStability::Average,
        WormholeStability::SlightlyVolatile,
        WormholeStability::Volatile,
        WormholeStability::ExtremelyVolatile,
    ];
}

/// What a starting ship design is meant to do. Drives slot filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipDesignPurpose {
    Scout,
    ArmedScout,
    Colonizer,
    Freighter,
    Miner,
    Starbase,
    Fort,
}

impl fmt::Display for GalaxySize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_names_round_trip_through_parser() {
        for size in GalaxySize::ALL {
            assert_eq!(GalaxySize::from_name(size.name()), Some(size));
        }
        assert_eq!(GalaxySize::from_name("HUGE"), Some(GalaxySize::Huge));
        assert_eq!(GalaxySize::from_name("enormous"), None);
    }

    #[test]
    fn density_and_start_mode_parse_case_insensitively() {
        assert_eq!(Density::from_name("Packed"), Some(Density::Packed));
        assert_eq!(StartMode::from_name("MID"), Some(StartMode::MidGame));
        assert_eq!(StartMode::from_name("tomorrow"), None);
    }

    #[test]
    fn tech_fields_are_indexed_in_declaration_order() {
        for (i, field) in TechField::ALL.iter().enumerate() {
            assert_eq!(*field as usize, i);
        }
    }
}
