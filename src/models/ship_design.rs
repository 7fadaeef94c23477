use serde::{Deserialize, Serialize};

use super::cargo::Cost;
use super::constants::{ShipDesignPurpose, NO_SCANNER};

/// One hull slot filled with a quantity of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipDesignSlot {
    pub hull_slot_index: usize,
    pub component: String,
    pub quantity: i32,
}

/// Aggregate stats of a design, derived from its hull and slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipDesignSpec {
    pub mass: i32,
    pub armor: i32,
    pub shield: i32,
    pub cargo_capacity: i32,
    pub fuel_capacity: i32,
    pub cost: Cost,
    pub scan_range: i32,
    pub pen_scan_range: i32,
    pub engine: Option<String>,
    pub num_engines: i32,
    pub ideal_speed: i32,
    pub beam_power: i32,
    pub mining_rate: i32,
    pub colonizer: bool,
    pub starbase: bool,
    pub stargate: Option<String>,
    pub mass_driver: Option<String>,
}

impl Default for ShipDesignSpec {
    fn default() -> Self {
        ShipDesignSpec {
            mass: 0,
            armor: 0,
            shield: 0,
            cargo_capacity: 0,
            fuel_capacity: 0,
            cost: Cost::default(),
            scan_range: NO_SCANNER,
            pen_scan_range: NO_SCANNER,
            engine: None,
            num_engines: 0,
            ideal_speed: 0,
            beam_power: 0,
            mining_rate: 0,
            colonizer: false,
            starbase: false,
            stargate: None,
            mass_driver: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipDesign {
    pub num: usize,
    pub player_num: usize,
    pub name: String,
    pub hull: String,
    pub purpose: ShipDesignPurpose,
    pub slots: Vec<ShipDesignSlot>,
    pub spec: ShipDesignSpec,
}

impl ShipDesign {
    pub fn quantity_in_slot(&self, hull_slot_index: usize) -> i32 {
        self.slots
            .iter()
            .filter(|slot| slot.hull_slot_index == hull_slot_index)
            .map(|slot| slot.quantity)
            .sum()
    }
}
