//! Torus Life CLI - Run Life patterns from JSON files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use torus_life::{
    engine::{GameController, GridStats, ManualDriver, TickOutcome},
    schema::{GameConfig, Pattern},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pattern.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life pattern on a toroidal grid.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  pattern.json  Path to a 0/1 matrix pattern file");
        eprintln!("  generations   Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("A <pattern>.config.json next to the pattern file overrides the");
        eprintln!("default 64x64 grid and 100ms frame interval.");
        eprintln!();
        eprintln!("Example files are generated with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_files();
        return;
    }

    let pattern_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load pattern
    let pattern_str = fs::read_to_string(&pattern_path).unwrap_or_else(|e| {
        eprintln!("Error reading pattern file: {}", e);
        std::process::exit(1);
    });

    let pattern: Pattern = serde_json::from_str(&pattern_str).unwrap_or_else(|e| {
        eprintln!("Error parsing pattern: {}", e);
        std::process::exit(1);
    });

    // Load or default config
    let config_path = pattern_path.with_extension("config.json");
    let config: GameConfig = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        })
    } else {
        GameConfig::default()
    };

    let mut game = GameController::new(&config, ManualDriver::new()).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    game.load_pattern(&pattern).unwrap_or_else(|e| {
        eprintln!("Cannot load pattern: {}", e);
        std::process::exit(1);
    });

    println!("Torus Life");
    println!("==========");
    println!("Grid: {}x{} (toroidal)", config.cols, config.rows);
    println!("Pattern: {}x{}", pattern.cols(), pattern.rows());
    println!("Frame interval: {}ms", config.frame_interval_ms);
    println!("Generations: {}", generations);
    println!();

    let initial = GridStats::from_controller(&game);
    println!("Initial population: {} live cells", initial.live_cells);
    println!();

    // Drive the scheduler with a synthetic clock advancing one frame
    // interval per tick, so each delivered tick steps one generation.
    println!("Running...");
    let start = Instant::now();
    let mut clock_ms = 0u64;
    game.toggle_playing(clock_ms);

    for i in 0..generations {
        clock_ms += config.frame_interval_ms;
        game.scheduler_mut().driver_mut().fire();
        let outcome = game.tick(clock_ms);
        debug_assert_eq!(outcome, TickOutcome::Step);

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = GridStats::from_controller(&game);
            let elapsed = start.elapsed().as_secs_f32();
            let gens_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: population={}, density={:.4}, {:.0} gens/s",
                stats.generation, generations, stats.live_cells, stats.density, gens_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = GridStats::from_controller(&game);

    println!();
    println!("Final population: {} live cells", final_stats.live_cells);
    println!(
        "Time: {:.2}s ({:.0} generations/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_files() {
    let glider = Pattern::new(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]])
        .expect("glider is a valid matrix");
    let config = GameConfig::default();

    println!("Example pattern (glider.json):");
    println!("{}", serde_json::to_string_pretty(&glider).unwrap());
    println!();
    println!("Example config (glider.config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
