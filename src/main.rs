use std::error::Error;

use stargen::cli::args;
use stargen::game_engine::generate_universe;
use stargen::io::{LogProgress, OutputWriter, TerminalIO};
use stargen::models::player::PlayerSetup;
use stargen::models::race::Race;
use stargen::models::rules::Rules;
use stargen::models::techs::TechStore;
use stargen::models::universe::GameSettings;
use stargen::ui::presenters::UniversePresenter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: args::Args) -> Result<(), Box<dyn Error>> {
    let rules = match &args.rules {
        Some(path) => Rules::from_file(path)?,
        None => Rules::builtin()?,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(target: "stargen::cli", seed, "generation.seed");

    let settings = GameSettings {
        size: args.size,
        density: args.density,
        start_mode: args.start,
    };
    let players = args
        .players
        .iter()
        .enumerate()
        .map(|(i, prt)| PlayerSetup::new(&format!("Player {}", i + 1), Race::with_traits(*prt, &[])))
        .collect();

    let universe = generate_universe(
        rules,
        TechStore::standard(),
        settings,
        players,
        seed,
        &mut LogProgress,
    )?;

    let mut output = TerminalIO;
    if args.json {
        output.writeln(&serde_json::to_string_pretty(&universe)?);
    } else {
        output.writeln(&format!("SEED {}", seed));
        UniversePresenter::show_summary(&universe, &mut output);
    }
    Ok(())
}
