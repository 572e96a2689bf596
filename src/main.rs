// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use trajectory_render::constants::{DEFAULT_SOURCE_SUBCOMMAND, DT_SECONDS};
use trajectory_render::data_input::trajectory_parser::parse_trajectory;
use trajectory_render::data_input::trajectory_source::capture_trajectory_output;
use trajectory_render::plot_functions::plot_trajectory::plot_trajectory;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!(
            "Usage: {} <trajectory_source> [subcommand] [output.png]",
            args[0]
        );
        std::process::exit(1);
    }
    let source_program = &args[1];
    let subcommand = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_SOURCE_SUBCOMMAND);
    let root_name = Path::new(source_program)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    let output_file = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| format!("{root_name}_trajectory.png"));

    // --- Trajectory Acquisition and Parsing ---
    println!("Invoking trajectory source '{source_program} {subcommand}'...");
    let blob = capture_trajectory_output(source_program, subcommand)?;
    let trajectory = parse_trajectory(&blob)?;
    println!(
        "Parsed {} trajectory samples ({} fields each, dt = {}s).",
        trajectory.len(),
        trajectory.width(),
        DT_SECONDS
    );

    // --- Plot Generation ---
    println!("\n--- Generating Trajectory Plot ---");
    plot_trajectory(&trajectory, &output_file)?;

    Ok(())
}
