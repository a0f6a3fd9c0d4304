//! Crossword generator CLI - Solve every word list in a directory.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crossword_evo::{Grid, batch::BatchRunner, schema::EvolutionConfig};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 3 {
        eprintln!("Usage: {} <inputs_dir> <outputs_dir> [config.json]", args[0]);
        eprintln!();
        eprintln!("Generate a crossword layout for every word list in inputs_dir.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  inputs_dir   Directory of word lists, one word per line");
        eprintln!("  outputs_dir  Directory for solutions (created if missing)");
        eprintln!("  config.json  Optional search configuration");
        eprintln!();
        eprintln!("Print the default configuration with --example.");
        std::process::exit(1);
    }

    let inputs_dir = PathBuf::from(&args[1]);
    let outputs_dir = PathBuf::from(&args[2]);

    let config: EvolutionConfig = match args.get(3) {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => EvolutionConfig::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    println!("Crossword Layout Search");
    println!("=======================");
    println!("Grid: {}x{}", config.grid_size, config.grid_size);
    println!("Population: {}", config.population_size);
    println!(
        "Crossover: {} | Mutation: {} | Tournament: {}",
        config.crossover_rate,
        config.mutation_rate,
        config.tournament_size()
    );
    println!("Restart after: {} generations", config.restart_generation);
    println!();

    let grid_size = config.grid_size;
    let runner = BatchRunner::new(config);
    let start = Instant::now();

    let summary = runner
        .run(&inputs_dir, &outputs_dir)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    for solved in &summary.solved {
        println!(
            "{} -> {} ({} generations, {} restarts, {:.2}s)",
            solved.input.display(),
            solved.output.display(),
            solved.result.stats.total_generations,
            solved.result.stats.restarts,
            solved.result.stats.elapsed_seconds
        );
        println!(
            "{}",
            Grid::from_placements(grid_size, solved.result.best.placements())
        );
    }

    println!(
        "Solved: {} | Unsolved: {} | Failed: {}",
        summary.solved.len(),
        summary.unsolved.len(),
        summary.failed.len()
    );
    println!("Time elapsed: {}", format_elapsed(start.elapsed().as_secs()));
}

/// Format seconds as HH:MM:SS.
fn format_elapsed(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn print_example_config() {
    let config = EvolutionConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
