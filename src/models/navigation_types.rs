//! Type-safe wrappers for navigation values

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::NUM_WARP_FACTORS;

/// Warp factor (0 to 10)
///
/// Discretized fleet speed. Warp `w` covers `w²` light years per year and
/// selects entry `w - 1` of an engine's fuel usage table.
/// - 0 = Stationary
/// - 1 - 10 = Moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WarpFactor(u8);

impl WarpFactor {
    pub const STOPPED: WarpFactor = WarpFactor(0);

    /// Create a new warp factor
    ///
    /// # Arguments
    /// * `value` - Warp speed (0 to 10)
    ///
    /// # Returns
    /// Ok(WarpFactor) if valid, Err with message if invalid
    pub fn new(value: i32) -> Result<Self, &'static str> {
        if (0..=NUM_WARP_FACTORS as i32).contains(&value) {
            Ok(WarpFactor(value as u8))
        } else {
            Err("Warp factor must be between 0 and 10")
        }
    }

    /// Get the warp factor value
    pub fn value(&self) -> i32 {
        self.0 as i32
    }

    pub fn is_stopped(&self) -> bool {
        self.0 == 0
    }

    /// Index into an engine fuel usage table. None when stopped.
    pub fn fuel_table_index(&self) -> Option<usize> {
        if self.is_stopped() {
            None
        } else {
            Some(self.0 as usize - 1)
        }
    }

    /// Light years travelled in one year.
    pub fn distance_per_year(&self) -> f32 {
        (self.0 as f32) * (self.0 as f32)
    }
}

impl fmt::Display for WarpFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Warp {}", self.0)
    }
}
