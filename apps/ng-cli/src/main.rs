use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use ng_graph::Network;
use ng_sim::{GameOptions, NamingGame, SimResult};

#[derive(Parser)]
#[command(name = "ng-cli")]
#[command(about = "Naming game - social consensus simulation over random networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a random connected network and print its adjacency matrix
    Network {
        /// Number of nodes
        #[arg(long, default_value_t = 10)]
        nodes: u32,
        /// Lower edge-density coefficient in [0, 1]
        #[arg(long, default_value_t = 0.2)]
        min_density: f64,
        /// Upper edge-density coefficient in [0, 1]
        #[arg(long, default_value_t = 0.6)]
        max_density: f64,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a naming game until the population agrees on one word
    Run {
        /// Number of agents
        #[arg(long, default_value_t = 10)]
        agents: usize,
        /// Lower edge-density coefficient in [0, 1]
        #[arg(long, default_value_t = 0.2)]
        min_density: f64,
        /// Upper edge-density coefficient in [0, 1]
        #[arg(long, default_value_t = 0.6)]
        max_density: f64,
        /// Sweep limit before giving up
        #[arg(long, default_value_t = 10_000)]
        max_steps: usize,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Print every agent's inventory after each sweep
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> SimResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Network {
            nodes,
            min_density,
            max_density,
            seed,
        } => cmd_network(nodes, min_density, max_density, seed),
        Commands::Run {
            agents,
            min_density,
            max_density,
            max_steps,
            seed,
            verbose,
        } => cmd_run(
            GameOptions {
                agents,
                min_density,
                max_density,
                max_steps,
            },
            seed,
            verbose,
        ),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "seeding rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

fn cmd_network(nodes: u32, min_density: f64, max_density: f64, seed: Option<u64>) -> SimResult<()> {
    let mut rng = make_rng(seed);
    let network = Network::build((0..nodes).collect(), min_density, max_density, &mut rng)?;

    println!("nodes: {}", network.num_nodes());
    println!("edges: {}", network.num_edges());
    println!("connected: {}", network.is_connected());
    print!("{}", network.graph());
    Ok(())
}

fn cmd_run(options: GameOptions, seed: Option<u64>, verbose: bool) -> SimResult<()> {
    let mut rng = make_rng(seed);
    let mut game = NamingGame::new(&options, &mut rng)?;

    if verbose {
        while !game.converged() && game.steps() < options.max_steps {
            print!("{game}");
            game.step(&mut rng)?;
        }
        print!("{game}");
    } else {
        game.run(&mut rng)?;
    }

    match game.consensus() {
        Some(word) => println!("converged on {word:?} after {} sweeps", game.steps()),
        None => println!("no consensus after {} sweeps", game.steps()),
    }
    Ok(())
}
