use crate::models::errors::{GenerationError, GenerationResult};
use crate::models::player::{Player, PlayerSetup};
use crate::models::rules::Rules;
use crate::models::techs::TechStore;
use crate::models::universe::{GameSettings, Universe};
use crate::services::minerals::StartingWorldMinerals;
use crate::services::race_traits;

/// Everything generation steps read and write.
///
/// The universe starts with its players (race specs already resolved) and
/// no planets. Each step adds to it in turn.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub rules: Rules,
    pub techs: TechStore,
    pub universe: Universe,
    /// Homeworld minerals shared by every player, drawn once when
    /// homeworlds are assigned.
    pub starting_minerals: Option<StartingWorldMinerals>,
}

impl GenerationContext {
    /// # Arguments
    ///
    /// * `rules` - Ruleset constants
    /// * `techs` - Hull and component catalog
    /// * `settings` - Galaxy size, density and start mode
    /// * `setups` - Player races, in player order
    ///
    /// # Returns
    ///
    /// `InvalidSettings` when there are no players or more players than
    /// the galaxy has planets.
    pub fn new(
        rules: Rules,
        techs: TechStore,
        settings: GameSettings,
        setups: Vec<PlayerSetup>,
    ) -> GenerationResult<Self> {
        if setups.is_empty() {
            return Err(GenerationError::InvalidSettings(
                "at least one player is required".to_string(),
            ));
        }
        let num_planets = rules.num_planets(settings.size, settings.density);
        if setups.len() > num_planets {
            return Err(GenerationError::InvalidSettings(format!(
                "{} players do not fit in a {} {} galaxy of {} planets",
                setups.len(),
                settings.density,
                settings.size,
                num_planets
            )));
        }

        let players = setups
            .into_iter()
            .enumerate()
            .map(|(num, setup)| {
                let spec = race_traits::resolve(&setup.race, &rules);
                Player::new(num, setup, spec)
            })
            .collect();
        let universe = Universe::new(
            rules.starting_year,
            settings,
            rules.area(settings.size),
            players,
        );

        Ok(GenerationContext {
            rules,
            techs,
            universe,
            starting_minerals: None,
        })
    }

    pub fn into_universe(self) -> Universe {
        self.universe
    }
}
