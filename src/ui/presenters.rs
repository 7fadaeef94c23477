use crate::io::OutputWriter;
use crate::models::constants::TechField;
use crate::models::player::Player;
use crate::models::universe::Universe;

pub struct UniversePresenter;

impl UniversePresenter {
    pub fn show_summary(universe: &Universe, output: &mut dyn OutputWriter) {
        let settings = &universe.settings;
        output.writeln(&format!(
            "YEAR {}  {} {} GALAXY ({:.0} x {:.0})",
            universe.year,
            settings.size.name().to_uppercase(),
            settings.density.name().to_uppercase(),
            universe.area.x,
            universe.area.y
        ));
        output.writeln(&format!(
            "{} PLANETS, {} WORMHOLE PAIRS, {} FLEETS",
            universe.planets.len(),
            universe.wormholes.len() / 2,
            universe.fleets.len()
        ));

        for player in &universe.players {
            output.writeln("");
            Self::show_player(universe, player, output);
        }
    }

    pub fn show_player(universe: &Universe, player: &Player, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "PLAYER {}: {} ({})",
            player.num + 1,
            player.name,
            player.race.prt.name()
        ));

        for planet in universe.owned_planets(player.num) {
            let role = if planet.homeworld { "HOMEWORLD" } else { "EXTRA WORLD" };
            output.writeln(&format!(
                "  {:<12}{} AT ({:.0},{:.0}) POP {} MINES {} FACTORIES {} DEFENSES {}",
                role,
                planet.name,
                planet.position.x,
                planet.position.y,
                planet.population(),
                planet.mines,
                planet.factories,
                planet.defenses
            ));
        }

        let levels: Vec<String> = TechField::ALL
            .iter()
            .map(|field| format!("{} {}", field.name(), player.tech_levels.get(*field)))
            .collect();
        output.writeln(&format!("  TECH        {}", levels.join(", ")));

        let designs: Vec<&str> = player.designs.iter().map(|design| design.name.as_str()).collect();
        output.writeln(&format!("  DESIGNS     {}", designs.join(", ")));

        for fleet in universe.player_fleets(player.num) {
            output.writeln(&format!("  FLEET       {} (FUEL {})", fleet.name, fleet.fuel));
        }

        let explored = player.planet_intel.iter().filter(|intel| intel.explored()).count();
        output.writeln(&format!(
            "  INTEL       {} OF {} PLANETS EXPLORED",
            explored,
            player.planet_intel.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::planet::Planet;
    use crate::models::player::PlayerSetup;
    use crate::models::position::Vector2;
    use crate::models::race::Race;
    use crate::models::rules::Rules;
    use crate::models::universe::GameSettings;
    use crate::services::race_traits;

    #[test]
    fn summary_lists_players_and_homeworlds() {
        let race = Race::default();
        let spec = race_traits::resolve(&race, &Rules::default());
        let player = Player::new(0, PlayerSetup::new("Humans", race), spec);
        let mut universe = Universe::new(
            2400,
            GameSettings::default(),
            Vector2::new(400.0, 400.0),
            vec![player],
        );
        let mut home = Planet::new(0, "Sol".to_string(), Vector2::new(10.0, 20.0));
        home.owner = Some(0);
        home.homeworld = true;
        home.set_population(25_000);
        universe.planets.push(home);

        let mut output = MockOutput::default();
        UniversePresenter::show_summary(&universe, &mut output);
        let text = output.text();

        assert!(text.contains("YEAR 2400  TINY NORMAL GALAXY (400 x 400)"));
        assert!(text.contains("1 PLANETS, 0 WORMHOLE PAIRS"));
        assert!(text.contains("PLAYER 1: Humans (Jack of all Trades)"));
        assert!(text.contains("Sol AT (10,20) POP 25000"));
    }
}
