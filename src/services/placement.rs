use rand::rngs::StdRng;
use rand::Rng;

use crate::models::position::Vector2;

/// Result of one placement search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vector2,
    pub attempts: usize,
    /// False when the attempt budget ran out and `position` is just the
    /// last candidate sampled.
    pub conforming: bool,
}

/// Rejection-sample a point in `[0, area.x) x [0, area.y)` that is more than
/// `min_distance` away from every point in `existing`.
///
/// At least one candidate is always drawn, even with a zero budget.
pub fn place(
    area: Vector2,
    min_distance: f32,
    existing: &[Vector2],
    rng: &mut StdRng,
    max_attempts: usize,
) -> Placement {
    let min_distance_squared = min_distance * min_distance;
    let budget = max_attempts.max(1);

    let mut candidate = Vector2::default();
    for attempt in 1..=budget {
        candidate = Vector2::new(sample_axis(rng, area.x), sample_axis(rng, area.y));
        if is_clear(candidate, existing, min_distance_squared) {
            return Placement {
                position: candidate,
                attempts: attempt,
                conforming: true,
            };
        }
    }

    Placement {
        position: candidate,
        attempts: budget,
        conforming: false,
    }
}

fn sample_axis(rng: &mut StdRng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

fn is_clear(candidate: Vector2, existing: &[Vector2], min_distance_squared: f32) -> bool {
    existing
        .iter()
        .all(|point| candidate.distance_squared_to(*point) > min_distance_squared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn first_point_always_conforms() {
        let mut rng = StdRng::seed_from_u64(7);
        let placement = place(Vector2::new(100.0, 100.0), 10.0, &[], &mut rng, 10);
        assert!(placement.conforming);
        assert_eq!(placement.attempts, 1);
        assert!(placement.position.x >= 0.0 && placement.position.x < 100.0);
        assert!(placement.position.y >= 0.0 && placement.position.y < 100.0);
    }

    #[test]
    fn placed_points_respect_min_distance() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut points = Vec::new();
        for _ in 0..20 {
            let placement = place(Vector2::new(400.0, 400.0), 15.0, &points, &mut rng, 10_000);
            assert!(placement.conforming);
            points.push(placement.position);
        }
        for (i, a) in points.iter().enumerate() {
            for b in points.iter().skip(i + 1) {
                assert!(a.distance_to(*b) >= 15.0);
            }
        }
    }

    #[test]
    fn exhausted_budget_returns_last_candidate() {
        let mut rng = StdRng::seed_from_u64(3);
        // Every point in a 10x10 area is within 100 of the center
        let existing = [Vector2::new(5.0, 5.0)];
        let placement = place(Vector2::new(10.0, 10.0), 100.0, &existing, &mut rng, 25);
        assert!(!placement.conforming);
        assert_eq!(placement.attempts, 25);
    }

    #[test]
    fn same_seed_same_point() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let area = Vector2::new(800.0, 800.0);
        assert_eq!(
            place(area, 15.0, &[], &mut a, 100),
            place(area, 15.0, &[], &mut b, 100)
        );
    }
}
