//! End-to-end generation example: build a config, generate a map,
//! print it with per-run statistics.

use karst::prelude::*;
use karst_bench::reference_profile;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let generator = CaveGenerator::new(reference_profile(seed)).expect("profile is valid");
    match generator.generate() {
        Ok(cave) => {
            print!("{}", cave.grid);
            println!(
                "seed {seed}: {} caves joined by {} tunnels ({} cells carved)",
                cave.stats.initial_regions, cave.stats.tunnels_carved, cave.stats.cells_carved,
            );
        }
        Err(err) => {
            eprintln!("generation failed: {err}");
            std::process::exit(1);
        }
    }
}
