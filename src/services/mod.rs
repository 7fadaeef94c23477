//! Generation and economy services
//!
//! Stateless formulas and builders used by the generation steps. Anything
//! random takes the shared `&mut StdRng` from the caller.

pub mod designs;
pub mod fast_forward;
pub mod fuel;
pub mod habitability;
pub mod homeworlds;
pub mod minerals;
pub mod placement;
pub mod plans;
pub mod race_traits;
pub mod reports;
pub mod turn;
