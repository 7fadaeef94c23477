use serde::{Deserialize, Serialize};

use super::constants::WormholeStability;
use super::position::Vector2;

/// One end of a wormhole pair. `destination` is the id of the other end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wormhole {
    pub id: usize,
    pub position: Vector2,
    pub destination: usize,
    pub stability: WormholeStability,
}
