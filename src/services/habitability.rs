//! Planet habitability scoring.
//!
//! Scores run from -45 (hostile on every axis) to 100 (ideal on every axis).
//! The integer rounding sequence drives population growth and colonization
//! value everywhere, so it must not be rearranged.

use crate::models::constants::{HabType, MAX_HAB_AXIS_POINTS, MAX_RED_PENALTY_PER_AXIS};
use crate::models::hab::Hab;
use crate::models::race::Race;

const IDEALITY_SCALE: i32 = 10_000;

/// Habitability of an environment for a race.
///
/// # Returns
///
/// * Positive score (0 to 100) when every axis is within tolerance
/// * Negative red penalty when any axis is outside tolerance
pub fn habitability(race: &Race, hab: &Hab) -> i32 {
    let center = race.hab_center();
    let mut planet_value_points = 0;
    let mut red_value = 0;
    let mut ideality = IDEALITY_SCALE;

    for hab_type in HabType::ALL {
        if race.is_immune(hab_type) {
            planet_value_points += MAX_HAB_AXIS_POINTS;
            continue;
        }

        let low = race.hab_low.get(hab_type);
        let high = race.hab_high.get(hab_type);
        let value = hab.get(hab_type);

        if value < low || value > high {
            let distance = if value < low { low - value } else { value - high };
            red_value += distance.min(MAX_RED_PENALTY_PER_AXIS);
            continue;
        }

        let center = center.get(hab_type);
        let from_ideal = (value - center).abs();
        let radius = if value > center {
            high - center
        } else {
            center - low
        };

        let closeness = if radius == 0 {
            100
        } else {
            100 - from_ideal * 100 / radius
        };
        planet_value_points += closeness * closeness;

        let poor_planet_mod = from_ideal * 2 - radius;
        if poor_planet_mod > 0 && radius > 0 {
            ideality = ideality * (radius * 2 - poor_planet_mod) / (radius * 2);
        }
    }

    if red_value > 0 {
        return -red_value;
    }

    let base = ((planet_value_points as f64 / 3.0).sqrt() + 0.9) as i32;
    base * ideality / IDEALITY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn humanoid() -> Race {
        Race::default()
    }

    #[test]
    fn centered_planet_is_perfect() {
        assert_eq!(habitability(&humanoid(), &Hab::new(50, 50, 50)), 100);
    }

    #[test]
    fn edge_of_range_degrades_ideality() {
        // Gravity at the lower bound: closeness 0, ideality halved.
        // sqrt(20000 / 3) + 0.9 = 82.5 -> 82, then 82 * 5000 / 10000 = 41
        assert_eq!(habitability(&humanoid(), &Hab::new(15, 50, 50)), 41);
    }

    #[test]
    fn red_axis_returns_capped_penalty() {
        assert_eq!(habitability(&humanoid(), &Hab::new(10, 50, 50)), -5);
        assert_eq!(habitability(&humanoid(), &Hab::new(0, 50, 50)), -15);
        assert_eq!(habitability(&humanoid(), &Hab::new(0, 100, 0)), -45);
    }

    #[test]
    fn red_axis_discards_green_points() {
        assert!(habitability(&humanoid(), &Hab::new(50, 50, 86)) < 0);
    }

    #[test]
    fn immune_axes_score_full_points() {
        let race = Race {
            immune_grav: true,
            immune_temp: true,
            immune_rad: true,
            ..Race::default()
        };
        assert_eq!(habitability(&race, &Hab::new(0, 100, 0)), 100);
    }

    #[test]
    fn zero_width_axis_counts_as_ideal() {
        let race = Race {
            hab_low: Hab::new(40, 15, 15),
            hab_high: Hab::new(40, 85, 85),
            ..Race::default()
        };
        assert_eq!(habitability(&race, &Hab::new(40, 50, 50)), 100);
        assert_eq!(habitability(&race, &Hab::new(41, 50, 50)), -1);
    }
}
