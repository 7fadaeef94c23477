use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stargen::io::StageRecorder;
use stargen::models::constants::{Lrt, Prt};
use stargen::models::hab::Hab;
use stargen::models::navigation_types::WarpFactor;
use stargen::models::player::PlayerSetup;
use stargen::models::position::Vector2;
use stargen::models::race::Race;
use stargen::models::rules::Rules;
use stargen::models::techs::TechStore;
use stargen::services::fuel::fuel_cost;
use stargen::services::habitability::habitability;
use stargen::services::placement::place;
use stargen::services::race_traits::resolve_traits;
use stargen::{GameSettings, GenerationContext, UniverseGenerator};

fn prt_strategy() -> impl Strategy<Value = Prt> {
    prop::sample::select(Prt::ALL.to_vec())
}

fn lrts_strategy() -> impl Strategy<Value = Vec<Lrt>> {
    prop::sample::subsequence(Lrt::ALL.to_vec(), 0..=Lrt::ALL.len())
}

fn race_strategy() -> impl Strategy<Value = Race> {
    (
        prop::array::uniform3(0..=40i32),
        prop::array::uniform3(60..=100i32),
        any::<[bool; 3]>(),
    )
        .prop_map(|(low, high, immune)| {
            let mut race = Race::default();
            race.hab_low = Hab::new(low[0], low[1], low[2]);
            race.hab_high = Hab::new(high[0], high[1], high[2]);
            race.immune_grav = immune[0];
            race.immune_temp = immune[1];
            race.immune_rad = immune[2];
            race
        })
}

fn hab_strategy() -> impl Strategy<Value = Hab> {
    (0..=100i32, 0..=100i32, 0..=100i32).prop_map(|(g, t, r)| Hab::new(g, t, r))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: Generated planets never sit closer than the minimum distance
    #[test]
    fn planets_keep_their_distance(seed in any::<u64>()) {
        let rules = Rules::default();
        let min_squared = rules.planet_min_distance * rules.planet_min_distance;
        let mut ctx = GenerationContext::new(
            rules,
            TechStore::standard(),
            GameSettings::default(),
            vec![
                PlayerSetup::new("A", Race::default()),
                PlayerSetup::new("B", Race::default()),
            ],
        )
        .unwrap();
        UniverseGenerator::standard(seed)
            .execute(&mut ctx, &mut StageRecorder::default())
            .unwrap();

        let planets = &ctx.universe.planets;
        for (i, a) in planets.iter().enumerate() {
            for b in &planets[i + 1..] {
                prop_assert!(
                    a.position.distance_squared_to(b.position) > min_squared,
                    "{} and {} are too close",
                    a.name,
                    b.name
                );
            }
        }
    }

    /// Property: Every wormhole's destination points back at it
    #[test]
    fn wormhole_links_are_symmetric(seed in any::<u64>()) {
        let mut ctx = GenerationContext::new(
            Rules::default(),
            TechStore::standard(),
            GameSettings::default(),
            vec![PlayerSetup::new("A", Race::default())],
        )
        .unwrap();
        UniverseGenerator::standard(seed)
            .execute(&mut ctx, &mut StageRecorder::default())
            .unwrap();

        let wormholes = &ctx.universe.wormholes;
        prop_assert_eq!(wormholes.len() % 2, 0);
        for wormhole in wormholes {
            let other = &wormholes[wormhole.destination];
            prop_assert_eq!(other.destination, wormhole.id);
            prop_assert_ne!(other.id, wormhole.id);
        }
    }
}

proptest! {
    /// Property: Placement never returns a conforming point that is too close
    #[test]
    fn conforming_placements_respect_min_distance(
        seed in any::<u64>(),
        existing in prop::collection::vec((0.0f32..400.0, 0.0f32..400.0), 0..20),
    ) {
        let existing: Vec<Vector2> = existing.into_iter().map(|(x, y)| Vector2::new(x, y)).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let placed = place(Vector2::new(400.0, 400.0), 15.0, &existing, &mut rng, 1000);

        prop_assert!(placed.position.x >= 0.0 && placed.position.x < 400.0);
        prop_assert!(placed.position.y >= 0.0 && placed.position.y < 400.0);
        prop_assert!(placed.attempts >= 1 && placed.attempts <= 1000);
        if placed.conforming {
            for point in &existing {
                prop_assert!(placed.position.distance_squared_to(*point) > 225.0);
            }
        }
    }

    /// Property: Habitability is deterministic and bounded
    #[test]
    fn habitability_is_pure_and_bounded(race in race_strategy(), hab in hab_strategy()) {
        let first = habitability(&race, &hab);
        prop_assert_eq!(first, habitability(&race, &hab));
        prop_assert!((-45..=100).contains(&first), "score {} out of range", first);
    }

    /// Property: Any axis outside the tolerance range makes the score negative
    #[test]
    fn out_of_range_axis_is_negative(race in race_strategy(), hab in hab_strategy()) {
        let outside = (!race.immune_grav && (hab.grav < race.hab_low.grav || hab.grav > race.hab_high.grav))
            || (!race.immune_temp && (hab.temp < race.hab_low.temp || hab.temp > race.hab_high.temp))
            || (!race.immune_rad && (hab.rad < race.hab_low.rad || hab.rad > race.hab_high.rad));
        let score = habitability(&race, &hab);
        if outside {
            prop_assert!(score < 0, "red planet scored {}", score);
        } else {
            prop_assert!(score >= 0, "green planet scored {}", score);
        }
    }

    /// Property: Fuel cost never decreases with more mass or distance
    #[test]
    fn fuel_cost_is_monotonic(
        warp in 0..=10i32,
        mass in 1..5000i32,
        extra_mass in 0..1000i32,
        distance in 0.0f32..500.0,
        extra_distance in 0.0f32..200.0,
    ) {
        let techs = TechStore::standard();
        let engine = techs.engine("Long Hump 6").unwrap();
        let warp = WarpFactor::new(warp).unwrap();

        let base = fuel_cost(warp, mass, distance, 1.0, engine);
        prop_assert!(base >= 0);
        prop_assert!(fuel_cost(warp, mass + extra_mass, distance, 1.0, engine) >= base);
        prop_assert!(fuel_cost(warp, mass, distance + extra_distance, 1.0, engine) >= base);
        prop_assert!(fuel_cost(warp, mass, distance, 0.85, engine) <= base);
    }

    /// Property: Trait resolution depends only on the chosen traits, not their order
    #[test]
    fn trait_resolution_is_order_independent(prt in prt_strategy(), lrts in lrts_strategy()) {
        let forward = resolve_traits(prt, &lrts);
        let mut reversed = lrts.clone();
        reversed.reverse();
        prop_assert_eq!(&forward, &resolve_traits(prt, &reversed));
        prop_assert_eq!(&forward, &resolve_traits(prt, &lrts));
        prop_assert_eq!(forward.starting_planets, prt.base_spec().starting_planets);
    }
}
