use std::fmt;

use thiserror::Error;

use super::tech::ComponentCategory;

/// Stages of universe generation, in the order the standard pipeline runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStage {
    Planets,
    Wormholes,
    PlayerTechLevels,
    PlayerPlans,
    PlayerShipDesigns,
    Homeworlds,
    PlayerFleets,
    PlanetIntel,
    FastForward,
}

impl GenerationStage {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationStage::Planets => "planets",
            GenerationStage::Wormholes => "wormholes",
            GenerationStage::PlayerTechLevels => "player tech levels",
            GenerationStage::PlayerPlans => "player plans",
            GenerationStage::PlayerShipDesigns => "player ship designs",
            GenerationStage::Homeworlds => "homeworlds",
            GenerationStage::PlayerFleets => "player fleets",
            GenerationStage::PlanetIntel => "planet intel",
            GenerationStage::FastForward => "fast forward",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Failure inside a single generation step.
#[derive(Debug, Error)]
pub enum StepError {
    /// A component the step needs is missing from the tech store or not
    /// available to the player.
    #[error("player {player} has no {category} available")]
    MissingComponent {
        player: usize,
        category: ComponentCategory,
    },
    #[error("hull '{name}' is not in the tech store")]
    MissingHull { name: String },
    #[error("could not place {what} after {attempts} attempts")]
    PlacementExhausted { what: &'static str, attempts: usize },
    #[error("no unowned planet left for player {player}")]
    NoPlanetAvailable { player: usize },
    #[error("player {player} has no homeworld")]
    MissingHomeworld { player: usize },
    #[error("player {player} has no design named '{name}'")]
    UnknownDesign { player: usize, name: String },
    #[error("player {player} has no starting planet template")]
    MissingStartingPlanet { player: usize },
    #[error("fleet '{fleet}' of player {player} needs {needed}mg of fuel for one year at warp {warp} but carries {fuel}mg")]
    InsufficientFuel {
        player: usize,
        fleet: String,
        warp: i32,
        needed: i32,
        fuel: i32,
    },
}

/// Failure of a whole generation run. No partial universe is usable.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation stage '{stage}' failed: {source}")]
    Step {
        stage: GenerationStage,
        #[source]
        source: StepError,
    },
    #[error("invalid game settings: {0}")]
    InvalidSettings(String),
    #[error("generator has already run")]
    AlreadyExecuted,
}

impl GenerationError {
    /// The stage that failed, if the failure came from a step.
    pub fn stage(&self) -> Option<GenerationStage> {
        match self {
            GenerationError::Step { stage, .. } => Some(*stage),
            GenerationError::InvalidSettings(_) | GenerationError::AlreadyExecuted => None,
        }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;
