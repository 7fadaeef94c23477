//! Universe generation pipeline
//!
//! A `UniverseGenerator` owns an ordered list of steps and the one seeded
//! RNG every step draws from. Steps run exactly once, in order, against a
//! shared `GenerationContext`. The first failing step ends the run, and a
//! generator runs at most once.

pub mod context;
pub mod steps;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::io::ProgressListener;
use crate::models::errors::{GenerationError, GenerationResult, GenerationStage, StepError};
use crate::models::player::PlayerSetup;
use crate::models::rules::Rules;
use crate::models::techs::TechStore;
use crate::models::universe::{GameSettings, Universe};

pub use context::GenerationContext;

/// One stage of universe generation.
pub trait GenerationStep {
    fn stage(&self) -> GenerationStage;
    fn process(&self, ctx: &mut GenerationContext, rng: &mut StdRng) -> Result<(), StepError>;
}

pub struct UniverseGenerator {
    steps: Vec<Box<dyn GenerationStep>>,
    rng: StdRng,
    executed: bool,
}

impl UniverseGenerator {
    /// Creates a generator running `steps` in the order given
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the RNG shared by every step
    /// * `steps` - Steps to run, in order
    pub fn new(seed: u64, steps: Vec<Box<dyn GenerationStep>>) -> Self {
        Self {
            steps,
            rng: StdRng::seed_from_u64(seed),
            executed: false,
        }
    }

    /// The stock pipeline: planets through fast-forward.
    pub fn standard(seed: u64) -> Self {
        Self::new(seed, steps::standard_steps())
    }

    pub fn stages(&self) -> Vec<GenerationStage> {
        self.steps.iter().map(|step| step.stage()).collect()
    }

    /// Runs every step once, in order, reporting each completed stage
    ///
    /// # Returns
    ///
    /// The first step failure, tagged with its stage. The context is left
    /// as that step abandoned it and should be discarded. A second call
    /// fails with `AlreadyExecuted` and leaves the context untouched.
    pub fn execute(
        &mut self,
        ctx: &mut GenerationContext,
        progress: &mut dyn ProgressListener,
    ) -> GenerationResult<()> {
        if self.executed {
            return Err(GenerationError::AlreadyExecuted);
        }
        self.executed = true;

        let total = self.steps.len();
        for (index, step) in self.steps.iter().enumerate() {
            let stage = step.stage();
            tracing::debug!(target: "stargen::pipeline", %stage, "stage.started");

            if let Err(source) = step.process(ctx, &mut self.rng) {
                tracing::error!(
                    target: "stargen::pipeline",
                    %stage,
                    error = %source,
                    "stage.failed"
                );
                return Err(GenerationError::Step { stage, source });
            }

            tracing::info!(
                target: "stargen::pipeline",
                %stage,
                completed = index + 1,
                total,
                "stage.completed"
            );
            progress.on_stage_complete(stage, index + 1, total);
        }
        Ok(())
    }
}

/// Builds a universe with the standard pipeline in one call.
pub fn generate_universe(
    rules: Rules,
    techs: TechStore,
    settings: GameSettings,
    players: Vec<PlayerSetup>,
    seed: u64,
    progress: &mut dyn ProgressListener,
) -> GenerationResult<Universe> {
    let mut ctx = GenerationContext::new(rules, techs, settings, players)?;
    UniverseGenerator::standard(seed).execute(&mut ctx, progress)?;
    Ok(ctx.into_universe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::StageRecorder;
    use crate::models::race::Race;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        stage: GenerationStage,
        log: Rc<RefCell<Vec<GenerationStage>>>,
        fail: bool,
    }

    impl GenerationStep for Probe {
        fn stage(&self) -> GenerationStage {
            self.stage
        }

        fn process(&self, _ctx: &mut GenerationContext, _rng: &mut StdRng) -> Result<(), StepError> {
            self.log.borrow_mut().push(self.stage);
            if self.fail {
                return Err(StepError::NoPlanetAvailable { player: 0 });
            }
            Ok(())
        }
    }

    fn context() -> GenerationContext {
        GenerationContext::new(
            Rules::default(),
            TechStore::standard(),
            GameSettings::default(),
            vec![PlayerSetup::new("Solo", Race::default())],
        )
        .unwrap()
    }

    fn probe(stage: GenerationStage, log: &Rc<RefCell<Vec<GenerationStage>>>, fail: bool) -> Box<dyn GenerationStep> {
        Box::new(Probe {
            stage,
            log: Rc::clone(log),
            fail,
        })
    }

    #[test]
    fn steps_run_once_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut generator = UniverseGenerator::new(
            1,
            vec![
                probe(GenerationStage::Wormholes, &log, false),
                probe(GenerationStage::Planets, &log, false),
            ],
        );
        let mut recorder = StageRecorder::default();
        generator.execute(&mut context(), &mut recorder).unwrap();

        assert_eq!(*log.borrow(), vec![GenerationStage::Wormholes, GenerationStage::Planets]);
        assert_eq!(recorder.stages, vec![GenerationStage::Wormholes, GenerationStage::Planets]);
        assert_eq!(recorder.totals, vec![2, 2]);
    }

    #[test]
    fn failure_stops_the_run_and_names_the_stage() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut generator = UniverseGenerator::new(
            1,
            vec![
                probe(GenerationStage::Planets, &log, false),
                probe(GenerationStage::Homeworlds, &log, true),
                probe(GenerationStage::PlayerFleets, &log, false),
            ],
        );
        let mut recorder = StageRecorder::default();
        let err = generator.execute(&mut context(), &mut recorder).unwrap_err();

        assert_eq!(err.stage(), Some(GenerationStage::Homeworlds));
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(recorder.stages, vec![GenerationStage::Planets]);
    }

    #[test]
    fn generator_refuses_a_second_run() {
        let mut generator = UniverseGenerator::standard(4);
        let mut ctx = context();
        generator.execute(&mut ctx, &mut StageRecorder::default()).unwrap();
        let planets = ctx.universe.planets.len();
        let wormholes = ctx.universe.wormholes.len();

        let mut recorder = StageRecorder::default();
        let err = generator.execute(&mut ctx, &mut recorder).unwrap_err();

        assert!(matches!(err, GenerationError::AlreadyExecuted));
        assert_eq!(err.stage(), None);
        assert!(recorder.stages.is_empty());
        assert_eq!(ctx.universe.planets.len(), planets);
        assert_eq!(ctx.universe.wormholes.len(), wormholes);
    }

    #[test]
    fn standard_pipeline_stage_order() {
        assert_eq!(
            UniverseGenerator::standard(0).stages(),
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
    }
}
