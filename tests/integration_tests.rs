use stargen::io::{LogProgress, StageRecorder};
use stargen::models::constants::{GalaxySize, Prt, StartMode};
use stargen::models::player::PlayerSetup;
use stargen::models::race::Race;
use stargen::models::rules::Rules;
use stargen::models::tech::ComponentCategory;
use stargen::models::techs::TechStore;
use stargen::{
    generate_universe, GameSettings, GenerationContext, GenerationError, GenerationStage,
    StepError, Universe, UniverseGenerator,
};

fn setups(prts: &[Prt]) -> Vec<PlayerSetup> {
    prts.iter()
        .enumerate()
        .map(|(i, prt)| PlayerSetup::new(&format!("Player {}", i + 1), Race::with_traits(*prt, &[])))
        .collect()
}

fn generate(settings: GameSettings, prts: &[Prt], seed: u64) -> Universe {
    generate_universe(
        Rules::default(),
        TechStore::standard(),
        settings,
        setups(prts),
        seed,
        &mut LogProgress,
    )
    .expect("generation should succeed")
}

#[test]
fn two_player_tiny_galaxy_end_to_end() {
    let universe = generate(GameSettings::default(), &[Prt::JoaT, Prt::JoaT], 42);

    assert_eq!(universe.year, 2400);
    assert_eq!(universe.planets.len(), 32);
    assert_eq!(universe.wormholes.len(), 2);
    assert_eq!(universe.homeworlds().count(), 2);

    for player in &universe.players {
        let homeworld_id = player.homeworld.expect("every player gets a homeworld");
        let homeworld = &universe.planets[homeworld_id];
        assert_eq!(homeworld.owner, Some(player.num));
        assert!(homeworld.homeworld);
        assert!(homeworld.scanner);
        assert_eq!(homeworld.population(), 25_000);
        assert_eq!(homeworld.mines, 10);
        assert_eq!(homeworld.factories, 10);
        assert_eq!(homeworld.defenses, 10);
        assert_eq!(homeworld.hab, player.race_spec.hab_center);
        let starbase = homeworld.starbase.as_ref().expect("homeworlds have a starbase");
        assert_eq!(starbase.name, "Starbase");
        assert!(starbase.starbase);

        // Tiny galaxies never get extra worlds
        assert_eq!(player.extra_world, None);
        assert_eq!(universe.owned_planets(player.num).count(), 1);

        let names: Vec<&str> = player.designs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Long Range Scout", "Santa Maria", "Teamster", "Cotton Picker", "Starbase"]
        );
        assert_eq!(player.tech_levels.energy, 3);
        assert_eq!(player.battle_plans[0].name, "Default");
        assert_eq!(player.production_plans.len(), 1);
        assert_eq!(player.transport_plans.len(), 2);

        let fleets: Vec<_> = universe.player_fleets(player.num).collect();
        assert_eq!(fleets.len(), 4);
        for fleet in fleets {
            assert_eq!(fleet.orbiting_planet, Some(homeworld_id));
            assert_eq!(fleet.position, homeworld.position);
            assert!(fleet.fuel > 0);
        }

        assert_eq!(player.planet_intel.len(), universe.planets.len());
        let home_intel = &player.planet_intel[homeworld_id];
        assert_eq!(home_intel.population, Some(25_000));
        assert_eq!(home_intel.report_year, Some(2400));
    }

    let first = universe.players[0].homeworld;
    let second = universe.players[1].homeworld;
    assert_ne!(first, second);

    for (id, fleet) in universe.fleets.iter().enumerate() {
        assert_eq!(fleet.id, Some(id));
    }
}

#[test]
fn homeworlds_share_starting_minerals() {
    let universe = generate(GameSettings::default(), &[Prt::HE, Prt::SD, Prt::WM], 7);
    let homeworlds: Vec<_> = universe.homeworlds().collect();
    assert_eq!(homeworlds.len(), 3);
    for planet in &homeworlds[1..] {
        assert_eq!(planet.mineral_concentration, homeworlds[0].mineral_concentration);
        assert_eq!(planet.surface_minerals(), homeworlds[0].surface_minerals());
    }
}

#[test]
fn same_seed_same_universe() {
    let a = generate(GameSettings::default(), &[Prt::JoaT, Prt::IT], 1234);
    let b = generate(GameSettings::default(), &[Prt::JoaT, Prt::IT], 1234);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn different_seeds_produce_different_universes() {
    let a = generate(GameSettings::default(), &[Prt::JoaT, Prt::JoaT], 1);
    let b = generate(GameSettings::default(), &[Prt::JoaT, Prt::JoaT], 2);
    assert_ne!(a.planet_positions(), b.planet_positions());
}

#[test]
fn progress_reports_every_stage_in_order() {
    let mut ctx = GenerationContext::new(
        Rules::default(),
        TechStore::standard(),
        GameSettings::default(),
        setups(&[Prt::JoaT]),
    )
    .unwrap();
    let mut recorder = StageRecorder::default();
    UniverseGenerator::standard(9)
        .execute(&mut ctx, &mut recorder)
        .unwrap();

    assert_eq!(
        recorder.stages,
        vec![
            GenerationStage::Planets,
            GenerationStage::Wormholes,
            GenerationStage::PlayerTechLevels,
            GenerationStage::PlayerPlans,
            GenerationStage::PlayerShipDesigns,
            GenerationStage::Homeworlds,
            GenerationStage::PlayerFleets,
            GenerationStage::PlanetIntel,
            GenerationStage::FastForward,
        ]
    );
    assert_eq!(recorder.completed, (1..=9).collect::<Vec<_>>());
    assert!(recorder.totals.iter().all(|total| *total == 9));
    assert!(ctx.starting_minerals.is_some());
}

#[test]
fn missing_beam_weapons_fail_at_ship_designs() {
    let mut techs = TechStore::standard();
    techs
        .components
        .retain(|c| c.category != ComponentCategory::BeamWeapon);
    let mut recorder = StageRecorder::default();

    let err = generate_universe(
        Rules::default(),
        techs,
        GameSettings::default(),
        setups(&[Prt::JoaT, Prt::JoaT]),
        3,
        &mut recorder,
    )
    .unwrap_err();

    assert_eq!(err.stage(), Some(GenerationStage::PlayerShipDesigns));
    assert!(matches!(
        err,
        GenerationError::Step {
            source: StepError::MissingComponent { .. },
            ..
        }
    ));
    assert!(err.to_string().contains("player ship designs"));
    assert_eq!(recorder.stages.len(), 4);
}

#[test]
fn no_players_is_invalid() {
    let err = generate_universe(
        Rules::default(),
        TechStore::standard(),
        GameSettings::default(),
        Vec::new(),
        1,
        &mut LogProgress,
    )
    .unwrap_err();
    assert!(matches!(err, GenerationError::InvalidSettings(_)));
    assert_eq!(err.stage(), None);
}

#[test]
fn traveler_in_small_galaxy_gets_an_extra_world() {
    let settings = GameSettings {
        size: GalaxySize::Small,
        ..GameSettings::default()
    };
    let universe = generate(settings, &[Prt::IT, Prt::JoaT], 99);

    let traveler = &universe.players[0];
    let extra_id = traveler.extra_world.expect("IT starts with a second world");
    let extra = &universe.planets[extra_id];
    assert_eq!(extra.owner, Some(0));
    assert!(!extra.homeworld);
    assert_eq!(extra.defenses, 0);
    assert_eq!(extra.population(), 10_000);
    let fort = extra.starbase.as_ref().expect("extra worlds have a fort");
    assert_eq!(fort.name, "Fort");
    assert!(traveler.design("Fort").is_some());
    assert!(universe
        .player_fleets(0)
        .any(|fleet| fleet.orbiting_planet == Some(extra_id)));

    let homeworld = &universe.planets[traveler.homeworld.unwrap()];
    assert_eq!(
        extra.surface_minerals().ironium,
        homeworld.surface_minerals().ironium / 2
    );

    let joat = &universe.players[1];
    assert_eq!(joat.extra_world, None);
}

#[test]
fn mid_game_start_fast_forwards() {
    let normal = generate(GameSettings::default(), &[Prt::JoaT], 5);
    let mid = generate(
        GameSettings {
            start_mode: StartMode::MidGame,
            ..GameSettings::default()
        },
        &[Prt::JoaT],
        5,
    );

    assert_eq!(mid.year, 2420);
    let normal_home = &normal.planets[normal.players[0].homeworld.unwrap()];
    let mid_home = &mid.planets[mid.players[0].homeworld.unwrap()];
    assert_eq!(normal_home.position, mid_home.position);
    assert!(mid_home.population() > normal_home.population());
    assert!(mid_home.mines > normal_home.mines);
    assert!(mid.players[0].tech_levels.sum() > normal.players[0].tech_levels.sum());

    let home_intel = &mid.players[0].planet_intel[mid_home.id];
    assert_eq!(home_intel.report_year, Some(mid.year));
    assert_eq!(home_intel.population, Some(mid_home.population()));
    assert_eq!(home_intel.surface_minerals, Some(mid_home.surface_minerals()));
}
