use anyhow::Context;
use life_engine::config::DEFAULT_CONFIG_FILE;
use life_engine::{render, Config, Simulation};
use std::env;
use std::io::{stdin, stdout};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Welcome to the game of life");

    let config_file = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let config = Config::load(&config_file)
        .with_context(|| format!("Could not load configuration from {}", config_file))?;

    println!("Using {}", config_file);
    println!("{}", serde_json::to_string_pretty(&config)?);

    let mut simulation = Simulation::new(&config).context("Could not create the board")?;

    if let Some(seed) = simulation.seed() {
        println!("Generating board with seed: {}", seed);
        print!("{}", render::digits(simulation.grid(), &config.separator));
    }

    println!("Press enter to begin");
    stdin()
        .read_line(&mut String::new())
        .context("Could not read from stdin")?;

    simulation
        .run(&mut stdout())
        .context("Could not draw to the terminal")
}
