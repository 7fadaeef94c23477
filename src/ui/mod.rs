//! Text presentation of generated universes

pub mod presenters;
