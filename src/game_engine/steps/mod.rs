//! The standard generation steps, one per stage

mod designs;
mod fast_forward;
mod fleets;
mod homeworlds;
mod intel;
mod planets;
mod plans;
mod tech_levels;
mod wormholes;

pub use designs::ShipDesignsStep;
pub use fast_forward::FastForwardStep;
pub use fleets::FleetsStep;
pub use homeworlds::HomeworldsStep;
pub use intel::PlanetIntelStep;
pub use planets::PlanetsStep;
pub use plans::PlansStep;
pub use tech_levels::TechLevelsStep;
pub use wormholes::WormholesStep;

use super::GenerationStep;

/// Steps in the order the stock pipeline runs them. Designs exist before
/// homeworlds so starbases can be built on assignment.
pub fn standard_steps() -> Vec<Box<dyn GenerationStep>> {
    vec![
        Box::new(PlanetsStep),
        Box::new(WormholesStep),
        Box::new(TechLevelsStep),
        Box::new(PlansStep),
        Box::new(ShipDesignsStep),
        Box::new(HomeworldsStep),
        Box::new(FleetsStep),
        Box::new(PlanetIntelStep),
        Box::new(FastForwardStep),
    ]
}
