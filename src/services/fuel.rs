use crate::models::fleet::Fleet;
use crate::models::navigation_types::WarpFactor;
use crate::models::ship_design::ShipDesign;
use crate::models::tech::EngineStats;
use crate::models::techs::TechStore;

/// Fuel (mg) needed to move `mass` kT a `distance` in light years.
///
/// # Arguments
///
/// * `warp` - Travel speed; warp 0 costs nothing
/// * `mass` - Total mass moved, cargo included
/// * `distance` - Light years travelled, rounded up before use
/// * `ife_factor` - Race fuel efficiency multiplier (0.85 with IFE)
/// * `engine` - Engine whose fuel table is used
pub fn fuel_cost(
    warp: WarpFactor,
    mass: i32,
    distance: f32,
    ife_factor: f32,
    engine: &EngineStats,
) -> i32 {
    let index = match warp.fuel_table_index() {
        Some(index) => index,
        None => return 0,
    };

    let efficiency = (ife_factor as f64 * engine.fuel_usage[index] as f64).ceil() as i64;
    let distance = (distance as f64).ceil() as i64;

    // The usage table is in 200ths of a kT per light year
    let theoretical = (mass as i64 * efficiency * distance / 2000) as f64 / 10.0;
    theoretical.ceil() as i32
}

/// Fuel for a whole fleet. Each token carries a share of the fleet cargo
/// proportional to its share of fleet cargo capacity.
pub fn fleet_fuel_cost(
    fleet: &Fleet,
    designs: &[ShipDesign],
    techs: &TechStore,
    warp: WarpFactor,
    distance: f32,
    ife_factor: f32,
) -> i32 {
    let find_design = |num: usize| designs.iter().find(|design| design.num == num);

    let fleet_capacity: i32 = fleet
        .tokens
        .iter()
        .filter_map(|token| {
            find_design(token.design_num).map(|design| design.spec.cargo_capacity * token.quantity)
        })
        .sum();
    let cargo = fleet.cargo.total() as i64;

    fleet
        .tokens
        .iter()
        .filter_map(|token| find_design(token.design_num).map(|design| (token, design)))
        .map(|(token, design)| {
            let engine = match design
                .spec
                .engine
                .as_deref()
                .and_then(|name| techs.engine(name))
            {
                Some(engine) => engine,
                None => return 0,
            };

            let token_capacity = (design.spec.cargo_capacity * token.quantity) as i64;
            let cargo_share = if fleet_capacity > 0 {
                (cargo * token_capacity / fleet_capacity as i64) as i32
            } else {
                0
            };
            let mass = design.spec.mass * token.quantity + cargo_share;
            fuel_cost(warp, mass, distance, ife_factor, engine)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cargo::Cargo;
    use crate::models::constants::ShipDesignPurpose;
    use crate::models::fleet::ShipToken;
    use crate::models::position::Vector2;
    use crate::models::ship_design::ShipDesignSpec;

    fn quick_jump() -> EngineStats {
        EngineStats {
            fuel_usage: [0, 25, 100, 100, 100, 180, 500, 800, 900, 1080],
            ideal_speed: 5,
            ram_scoop: false,
        }
    }

    fn warp(value: i32) -> WarpFactor {
        WarpFactor::new(value).unwrap()
    }

    fn design(num: usize, mass: i32, cargo_capacity: i32, engine: Option<&str>) -> ShipDesign {
        ShipDesign {
            num,
            player_num: 0,
            name: format!("Design {}", num),
            hull: "Scout".to_string(),
            purpose: ShipDesignPurpose::Freighter,
            slots: Vec::new(),
            spec: ShipDesignSpec {
                mass,
                cargo_capacity,
                engine: engine.map(str::to_string),
                ..ShipDesignSpec::default()
            },
        }
    }

    fn fleet(tokens: Vec<ShipToken>, cargo: Cargo) -> Fleet {
        Fleet {
            id: Some(0),
            num: 1,
            player_num: 0,
            name: "Test #1".to_string(),
            tokens,
            position: Vector2::default(),
            orbiting_planet: None,
            waypoints: Vec::new(),
            cargo,
            fuel: 0,
            battle_plan: "Default".to_string(),
            starbase: false,
        }
    }

    #[test]
    fn stopped_fleets_burn_nothing() {
        assert_eq!(fuel_cost(WarpFactor::STOPPED, 1000, 500.0, 1.0, &quick_jump()), 0);
    }

    #[test]
    fn cost_follows_floor_then_ceil_sequence() {
        // 100 kT, 100 ly at warp 5: 100 * 100 * 100 / 2000 = 500 -> 50.0
        assert_eq!(fuel_cost(warp(5), 100, 100.0, 1.0, &quick_jump()), 50);
        // IFE: efficiency 85 -> 425 -> 42.5 -> 43
        assert_eq!(fuel_cost(warp(5), 100, 100.0, 0.85, &quick_jump()), 43);
        // Distance rounds up before use
        assert_eq!(fuel_cost(warp(5), 100, 99.2, 1.0, &quick_jump()), 50);
        // Free warp on this engine
        assert_eq!(fuel_cost(warp(1), 100, 100.0, 1.0, &quick_jump()), 0);
    }

    #[test]
    fn small_moves_can_round_to_zero() {
        // 10 * 25 * 1 / 2000 = 0 -> 0.0
        assert_eq!(fuel_cost(warp(2), 10, 1.0, 1.0, &quick_jump()), 0);
    }

    #[test]
    fn fleet_cost_apportions_cargo_by_capacity() {
        let mut techs = TechStore::default();
        let mut engine = crate::models::tech::TechHullComponent::blank(
            "Quick Jump 5",
            crate::models::tech::ComponentCategory::Engine,
            Default::default(),
        );
        engine.engine = Some(quick_jump());
        techs.components.push(engine);

        let designs = vec![
            design(1, 100, 150, Some("Quick Jump 5")),
            design(2, 50, 50, Some("Quick Jump 5")),
            design(3, 500, 0, None),
        ];
        let cargo = Cargo {
            ironium: 100,
            boranium: 0,
            germanium: 0,
            colonists: 100,
        };
        let fleet = fleet(
            vec![
                ShipToken { design_num: 1, quantity: 1 },
                ShipToken { design_num: 2, quantity: 1 },
                ShipToken { design_num: 3, quantity: 1 },
            ],
            cargo,
        );

        // Token 1 carries 150 of 200 cargo, token 2 carries 50,
        // token 3 has no engine and contributes nothing.
        let expected = fuel_cost(warp(5), 250, 100.0, 1.0, &quick_jump())
            + fuel_cost(warp(5), 100, 100.0, 1.0, &quick_jump());
        assert_eq!(
            fleet_fuel_cost(&fleet, &designs, &techs, warp(5), 100.0, 1.0),
            expected
        );
    }
}
