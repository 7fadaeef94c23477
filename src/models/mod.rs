//! Domain models
//!
//! This module contains all domain models representing universe entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod cargo;
pub mod constants;
pub mod errors;
pub mod fleet;
pub mod hab;
pub mod navigation_types;
pub mod planet;
pub mod player;
pub mod position;
pub mod race;
pub mod race_spec;
pub mod rules;
pub mod ship_design;
pub mod tech;
pub mod techs;
pub mod universe;
pub mod wormhole;
