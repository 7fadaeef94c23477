//! Universe generation for a 4X space strategy game
//!
//! Given a ruleset, galaxy settings, a seed and the players' races, this
//! library builds a complete starting universe: planets, wormholes,
//! homeworlds, ship designs, fleets, tech levels, plans and planet intel.
//! The same seed and inputs always produce the same universe.
//!
//! # Modules
//!
//! - [`game_engine`] - Generation pipeline and its steps
//! - [`models`] - Domain models (Universe, Planet, Race, RaceSpec, etc.)
//! - [`services`] - Formulas and builders (habitability, traits, fuel, etc.)
//! - [`io`] - Progress and output abstractions for testing
//! - [`ui`] - Text presentation
//!
//! # Example
//!
//! ```rust,no_run
//! use stargen::io::LogProgress;
//! use stargen::models::player::PlayerSetup;
//! use stargen::models::race::Race;
//! use stargen::models::rules::Rules;
//! use stargen::models::techs::TechStore;
//! use stargen::models::universe::GameSettings;
//!
//! let players = vec![
//!     PlayerSetup::new("Humanoids", Race::default()),
//!     PlayerSetup::new("Rabbitoids", Race::default()),
//! ];
//! let universe = stargen::generate_universe(
//!     Rules::default(),
//!     TechStore::standard(),
//!     GameSettings::default(),
//!     players,
//!     42,
//!     &mut LogProgress,
//! )
//! .unwrap();
//! assert_eq!(universe.players.len(), 2);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{generate_universe, GenerationContext, GenerationStep, UniverseGenerator};
pub use models::errors::{GenerationError, GenerationResult, GenerationStage, StepError};
pub use models::universe::{GameSettings, Universe};
