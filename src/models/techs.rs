//! Tech data store
//!
//! The catalog of hulls and hull components that generation draws from.
//! Within each category, components are listed from weakest to strongest,
//! so "best available" is the last one a player qualifies for.

use serde::{Deserialize, Serialize};

use super::cargo::Cost;
use super::constants::{Lrt, Prt};
use super::race::Race;
use super::tech::{
    ComponentCategory, EngineStats, GateStats, HullSlot, HullSlotType, TechHull,
    TechHullComponent, TechLevel, TechLevel as L, TechRequirements,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechStore {
    pub hulls: Vec<TechHull>,
    pub components: Vec<TechHullComponent>,
}

impl TechStore {
    pub fn hull(&self, name: &str) -> Option<&TechHull> {
        self.hulls.iter().find(|hull| hull.name == name)
    }

    pub fn component(&self, name: &str) -> Option<&TechHullComponent> {
        self.components.iter().find(|component| component.name == name)
    }

    pub fn engine(&self, name: &str) -> Option<&EngineStats> {
        self.component(name).and_then(|component| component.engine.as_ref())
    }

    /// Every component of a category the player can use, in catalog order.
    pub fn available<'a, 'b>(
        &'a self,
        category: ComponentCategory,
        levels: &'b TechLevel,
        race: &'b Race,
    ) -> impl Iterator<Item = &'a TechHullComponent> + 'b
    where
        'a: 'b,
    {
        self.components.iter().filter(move |component| {
            component.category == category && component.requirements.is_met(levels, race)
        })
    }

    pub fn first_available(
        &self,
        category: ComponentCategory,
        levels: &TechLevel,
        race: &Race,
    ) -> Option<&TechHullComponent> {
        self.available(category, levels, race).next()
    }

    pub fn best_available(
        &self,
        category: ComponentCategory,
        levels: &TechLevel,
        race: &Race,
    ) -> Option<&TechHullComponent> {
        self.available(category, levels, race).last()
    }

    /// The stock catalog.
    pub fn standard() -> Self {
        TechStore {
            hulls: standard_hulls(),
            components: standard_components(),
        }
    }
}

fn req(levels: TechLevel) -> TechRequirements {
    TechRequirements::levels(levels)
}

fn prt_only(levels: TechLevel, prt: Prt) -> TechRequirements {
    TechRequirements {
        prt_required: Some(prt),
        ..req(levels)
    }
}

fn lrt_only(levels: TechLevel, lrt: Lrt) -> TechRequirements {
    TechRequirements {
        lrt_required: Some(lrt),
        ..req(levels)
    }
}

fn lrt_denied(levels: TechLevel, lrt: Lrt) -> TechRequirements {
    TechRequirements {
        lrt_denied: Some(lrt),
        ..req(levels)
    }
}

fn hull(
    name: &str,
    requirements: TechRequirements,
    cost: Cost,
    stats: (i32, i32, i32, i32),
    slots: &[HullSlot],
) -> TechHull {
    let (mass, armor, fuel_capacity, cargo_capacity) = stats;
    TechHull {
        name: name.to_string(),
        requirements,
        cost,
        mass,
        armor,
        fuel_capacity,
        cargo_capacity,
        built_in_scanner: false,
        starbase: false,
        slots: slots.to_vec(),
    }
}

fn standard_hulls() -> Vec<TechHull> {
    use HullSlotType::*;

    let none = L::default();
    vec![
        TechHull {
            built_in_scanner: true,
            ..hull(
                "Scout",
                req(none),
                Cost::new(4, 2, 4, 10),
                (8, 20, 50, 0),
                &[
                    HullSlot::new(Engine, 1),
                    HullSlot::new(Scanner, 1),
                    HullSlot::new(General, 1),
                ],
            )
        },
        hull(
            "Colony Ship",
            req(none),
            Cost::new(9, 0, 13, 18),
            (20, 20, 200, 25),
            &[HullSlot::new(Engine, 1), HullSlot::new(Mechanical, 1)],
        ),
        hull(
            "Medium Freighter",
            req(L::new(0, 0, 0, 3, 0, 0)),
            Cost::new(20, 0, 19, 40),
            (60, 50, 450, 210),
            &[
                HullSlot::new(Engine, 1),
                HullSlot::new(ShieldArmor, 1),
                HullSlot::new(Mechanical, 1),
            ],
        ),
        hull(
            "Mini-Miner",
            req(L::new(0, 0, 0, 2, 0, 0)),
            Cost::new(25, 0, 6, 50),
            (80, 130, 210, 0),
            &[
                HullSlot::new(Engine, 1),
                HullSlot::new(Scanner, 1),
                HullSlot::new(Mining, 1),
                HullSlot::new(Mining, 1),
            ],
        ),
        TechHull {
            built_in_scanner: true,
            ..hull(
                "Destroyer",
                req(L::new(0, 0, 0, 3, 0, 0)),
                Cost::new(15, 3, 5, 35),
                (30, 200, 280, 0),
                &[
                    HullSlot::new(Engine, 1),
                    HullSlot::new(Weapon, 1),
                    HullSlot::new(Weapon, 1),
                    HullSlot::new(General, 1),
                    HullSlot::new(Armor, 2),
                    HullSlot::new(Mechanical, 1),
                    HullSlot::new(Electrical, 1),
                ],
            )
        },
        TechHull {
            starbase: true,
            ..hull(
                "Space Station",
                req(none),
                Cost::new(120, 80, 250, 600),
                (0, 500, 0, 0),
                &[
                    HullSlot::new(Orbital, 1),
                    HullSlot::new(Weapon, 16),
                    HullSlot::new(Shield, 16),
                    HullSlot::new(Weapon, 16),
                    HullSlot::new(Shield, 16),
                    HullSlot::new(Armor, 16),
                    HullSlot::new(Electrical, 3),
                    HullSlot::new(Electrical, 3),
                ],
            )
        },
        TechHull {
            starbase: true,
            ..hull(
                "Orbital Fort",
                req(none),
                Cost::new(24, 0, 34, 80),
                (0, 100, 0, 0),
                &[
                    HullSlot::new(Orbital, 1),
                    HullSlot::new(Weapon, 12),
                    HullSlot::new(Armor, 12),
                    HullSlot::new(Shield, 12),
                ],
            )
        },
    ]
}

fn engine(
    name: &str,
    requirements: TechRequirements,
    mass: i32,
    cost: Cost,
    fuel_usage: [i32; 10],
    ideal_speed: i32,
) -> TechHullComponent {
    TechHullComponent {
        mass,
        cost,
        engine: Some(EngineStats {
            fuel_usage,
            ideal_speed,
            ram_scoop: false,
        }),
        ..TechHullComponent::blank(name, ComponentCategory::Engine, requirements)
    }
}

fn scanner(
    name: &str,
    category: ComponentCategory,
    requirements: TechRequirements,
    mass: i32,
    cost: Cost,
    ranges: (i32, i32),
) -> TechHullComponent {
    TechHullComponent {
        mass,
        cost,
        scan_range: ranges.0,
        pen_scan_range: ranges.1,
        ..TechHullComponent::blank(name, category, requirements)
    }
}

fn standard_components() -> Vec<TechHullComponent> {
    use crate::models::constants::NO_SCANNER;
    use ComponentCategory::*;

    let none = L::default();
    let mut components = vec![
        // Engines
        engine(
            "Settler's Delight",
            prt_only(none, Prt::HE),
            2,
            Cost::new(1, 0, 1, 2),
            [0, 0, 0, 0, 0, 0, 140, 275, 480, 576],
            6,
        ),
        engine(
            "Quick Jump 5",
            req(none),
            4,
            Cost::new(3, 0, 1, 3),
            [0, 25, 100, 100, 100, 180, 500, 800, 900, 1080],
            5,
        ),
        engine(
            "Fuel Mizer",
            lrt_only(L::new(0, 0, 2, 0, 0, 0), Lrt::IFE),
            6,
            Cost::new(8, 0, 0, 11),
            [0, 0, 0, 0, 0, 35, 120, 175, 235, 360],
            6,
        ),
        engine(
            "Long Hump 6",
            req(L::new(0, 0, 3, 0, 0, 0)),
            9,
            Cost::new(5, 0, 1, 6),
            [0, 20, 60, 100, 100, 105, 450, 750, 900, 1080],
            6,
        ),
        engine(
            "Daddy Long Legs 7",
            req(L::new(0, 0, 5, 0, 0, 0)),
            13,
            Cost::new(11, 0, 3, 12),
            [0, 20, 60, 70, 100, 100, 110, 600, 750, 900],
            7,
        ),
    ];

    let mut ram_scoop = engine(
        "Radiating Hydro-Ram Scoop",
        lrt_denied(L::new(2, 0, 6, 0, 0, 0), Lrt::NRSE),
        10,
        Cost::new(3, 2, 9, 8),
        [0, 0, 0, 0, 0, 0, 0, 165, 375, 600],
        6,
    );
    if let Some(stats) = ram_scoop.engine.as_mut() {
        stats.ram_scoop = true;
    }
    components.push(ram_scoop);

    components.push(engine(
        "Alpha Drive 8",
        req(L::new(0, 0, 7, 0, 0, 0)),
        17,
        Cost::new(16, 0, 3, 28),
        [0, 15, 50, 60, 70, 100, 100, 115, 700, 840],
        8,
    ));

    // Ship scanners
    components.extend([
        scanner("Bat Scanner", Scanner, req(none), 2, Cost::new(1, 0, 1, 1), (0, NO_SCANNER)),
        scanner(
            "Rhino Scanner",
            Scanner,
            req(L::new(0, 0, 0, 0, 1, 0)),
            5,
            Cost::new(3, 0, 2, 3),
            (50, NO_SCANNER),
        ),
        scanner(
            "Mole Scanner",
            Scanner,
            req(L::new(0, 0, 0, 0, 4, 0)),
            2,
            Cost::new(2, 0, 2, 9),
            (100, NO_SCANNER),
        ),
        scanner(
            "Possum Scanner",
            Scanner,
            req(L::new(0, 0, 0, 0, 5, 0)),
            3,
            Cost::new(3, 0, 3, 18),
            (150, NO_SCANNER),
        ),
        scanner(
            "Chameleon Scanner",
            Scanner,
            prt_only(L::new(3, 0, 0, 0, 6, 0), Prt::SS),
            6,
            Cost::new(4, 6, 4, 25),
            (160, 45),
        ),
        scanner(
            "Ferret Scanner",
            Scanner,
            lrt_denied(L::new(3, 0, 0, 0, 7, 2), Lrt::NAS),
            2,
            Cost::new(2, 0, 8, 36),
            (185, 50),
        ),
        scanner(
            "Dolphin Scanner",
            Scanner,
            lrt_denied(L::new(5, 0, 0, 0, 10, 4), Lrt::NAS),
            4,
            Cost::new(5, 5, 10, 40),
            (220, 100),
        ),
    ]);

    // Armor, shields and beams
    for (name, levels, mass, cost, armor) in [
        ("Tritanium", none, 60, Cost::new(5, 0, 0, 10), 50),
        ("Crobmnium", L::new(0, 0, 0, 3, 0, 0), 56, Cost::new(6, 0, 0, 13), 75),
        ("Carbonic Armor", L::new(0, 0, 0, 0, 0, 4), 25, Cost::new(0, 0, 5, 15), 100),
        ("Strobnium", L::new(0, 0, 0, 6, 0, 0), 54, Cost::new(8, 0, 0, 18), 120),
    ] {
        components.push(TechHullComponent {
            mass,
            cost,
            armor,
            ..TechHullComponent::blank(name, Armor, req(levels))
        });
    }
    for (name, levels, cost, shield) in [
        ("Mole-skin Shield", none, Cost::new(1, 0, 1, 4), 25),
        ("Cow-hide Shield", L::new(3, 0, 0, 0, 0, 0), Cost::new(2, 0, 2, 5), 40),
        ("Wolverine Diffuse Shield", L::new(6, 0, 0, 0, 0, 0), Cost::new(3, 0, 3, 6), 60),
    ] {
        components.push(TechHullComponent {
            mass: 1,
            cost,
            shield,
            ..TechHullComponent::blank(name, Shield, req(levels))
        });
    }
    for (name, levels, cost, beam_power) in [
        ("Laser", none, Cost::new(0, 6, 0, 5), 10),
        ("X-Ray Laser", L::new(0, 3, 0, 0, 0, 0), Cost::new(0, 6, 0, 6), 16),
        ("Yakimora Light Phaser", L::new(0, 6, 0, 0, 0, 0), Cost::new(0, 8, 0, 7), 26),
    ] {
        components.push(TechHullComponent {
            mass: 1,
            cost,
            beam_power,
            ..TechHullComponent::blank(name, BeamWeapon, req(levels))
        });
    }

    // Mechanical
    components.push(TechHullComponent {
        mass: 32,
        cost: Cost::new(12, 10, 10, 10),
        ..TechHullComponent::blank("Colonization Module", ColonyModule, req(none))
    });
    components.push(TechHullComponent {
        mass: 5,
        cost: Cost::new(5, 0, 2, 10),
        cargo_capacity: 50,
        ..TechHullComponent::blank("Cargo Pod", CargoPod, req(L::new(0, 0, 0, 3, 0, 0)))
    });
    components.push(TechHullComponent {
        mass: 3,
        cost: Cost::new(6, 0, 0, 4),
        fuel_capacity: 250,
        ..TechHullComponent::blank("Fuel Tank", FuelTank, req(none))
    });

    // Mining robots
    for (name, requirements, mass, cost, mining_rate) in [
        (
            "Robo-Mini-Miner",
            req(L::new(0, 0, 0, 2, 1, 0)),
            240,
            Cost::new(30, 0, 7, 100),
            4,
        ),
        (
            "Robo-Midget-Miner",
            lrt_only(none, Lrt::ARM),
            80,
            Cost::new(14, 0, 4, 50),
            5,
        ),
        (
            "Robo-Miner",
            lrt_denied(L::new(0, 0, 0, 4, 2, 0), Lrt::OBRM),
            240,
            Cost::new(30, 0, 7, 100),
            12,
        ),
    ] {
        components.push(TechHullComponent {
            mass,
            cost,
            mining_rate,
            ..TechHullComponent::blank(name, MiningRobot, requirements)
        });
    }

    // Orbital
    components.push(TechHullComponent {
        cost: Cost::new(50, 20, 20, 200),
        gate: Some(GateStats {
            safe_hull_mass: 100,
            safe_range: 250,
        }),
        ..TechHullComponent::blank("Stargate 100/250", Stargate, req(L::new(0, 0, 5, 5, 0, 0)))
    });
    components.push(TechHullComponent {
        cost: Cost::new(24, 20, 20, 70),
        mass_driver_warp: Some(5),
        ..TechHullComponent::blank("Mass Driver 5", MassDriver, req(L::new(4, 0, 0, 0, 0, 0)))
    });

    // Planetary scanners
    components.extend([
        scanner("Viewer 50", PlanetaryScanner, req(none), 0, Cost::new(10, 10, 70, 100), (50, NO_SCANNER)),
        scanner(
            "Viewer 90",
            PlanetaryScanner,
            req(L::new(0, 0, 0, 0, 1, 0)),
            0,
            Cost::new(10, 10, 70, 100),
            (90, NO_SCANNER),
        ),
        scanner(
            "Scoper 150",
            PlanetaryScanner,
            req(L::new(0, 0, 0, 0, 3, 0)),
            0,
            Cost::new(10, 10, 70, 100),
            (150, NO_SCANNER),
        ),
        scanner(
            "Scoper 220",
            PlanetaryScanner,
            req(L::new(0, 0, 0, 0, 6, 0)),
            0,
            Cost::new(10, 10, 70, 100),
            (220, NO_SCANNER),
        ),
        scanner(
            "Scoper 280",
            PlanetaryScanner,
            req(L::new(0, 0, 0, 0, 8, 0)),
            0,
            Cost::new(10, 10, 70, 100),
            (280, NO_SCANNER),
        ),
        scanner(
            "Snooper 320X",
            PlanetaryScanner,
            lrt_denied(L::new(3, 0, 0, 0, 10, 3), Lrt::NAS),
            0,
            Cost::new(10, 10, 70, 100),
            (320, 160),
        ),
    ]);

    components
}
