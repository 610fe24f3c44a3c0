use clap::{Parser, Subcommand};

use otter_know::config::{Config, SearchStrategy};

mod knights;
mod walk;
mod zebra;

/// Propositional knowledge, and what follows from it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the knights and knaves riddle "I am both a knight and a knave!"
    Knights {
        /// Print the knowledge base.
        #[arg(long)]
        show_kb: bool,

        /// Print each model of the knowledge base.
        #[arg(long)]
        models: bool,
    },

    /// Solve a small zebra-style puzzle of houses and colours.
    Zebra {
        /// Print the knowledge base.
        #[arg(long)]
        show_kb: bool,
    },

    /// Search for a walk between two integers.
    Walk {
        #[arg(long, allow_hyphen_values = true, default_value_t = 12)]
        start: i64,

        #[arg(long, allow_hyphen_values = true, default_value_t = 4)]
        goal: i64,

        /// Either 'bfs' or 'dfs'.
        #[arg(long, default_value = "bfs")]
        strategy: String,

        /// The greatest count of states to expand, with zero for no limit.
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let result = match args.command {
        Command::Knights { show_kb, models } => knights::run(show_kb, models),

        Command::Zebra { show_kb } => zebra::run(show_kb),

        Command::Walk {
            start,
            goal,
            strategy,
            limit,
        } => {
            let mut config = Config::default();

            match strategy.parse::<SearchStrategy>() {
                Ok(strategy) => {
                    config.search_strategy.value = strategy;
                }
                Err(_) => {
                    println!("Unknown strategy: {strategy}");
                    std::process::exit(1);
                }
            }

            if !config.expansion_limit.set(limit) {
                let (min, max) = config.expansion_limit.min_max();
                println!("{} requires a value between {min} and {max}", config.expansion_limit.name);
                std::process::exit(1);
            }

            walk::run(start, goal, &config)
        }
    };

    if let Err(e) = result {
        println!("Error: {e}");
        std::process::exit(2);
    }
}
