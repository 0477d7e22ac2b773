//! Shelf-filling demo CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::warn;
use rand::prelude::*;
use shelfpack::{Shelf, ShelfPacker};
use shelfpack_demo::catalog;

#[derive(Parser)]
#[command(name = "shelfpack-demo")]
#[command(about = "Fill a shelf with catalog cartons and print the layout")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the carton catalog
    List,

    /// Fill a shelf with randomly chosen catalog cartons
    Fill {
        /// Number of cartons to attempt
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// RNG seed for a reproducible fill
        #[arg(short, long)]
        seed: Option<u64>,

        /// Shelf width in millimeters
        #[arg(long, default_value = "2006")]
        width: f64,

        /// Shelf height in millimeters
        #[arg(long, default_value = "798")]
        height: f64,

        /// Shelf depth in millimeters
        #[arg(long, default_value = "500")]
        depth: f64,

        /// Write placements to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Carton catalog:");
            for spec in catalog::standard_catalog() {
                let dims = spec.dimensions();
                let cap = spec
                    .pile_options()
                    .max_tower_count
                    .map(|cap| format!("  (max {} per tower)", cap))
                    .unwrap_or_default();
                println!(
                    "  {:<20} {:>4} x {:>4} x {:>4} mm{}",
                    spec.name(),
                    dims.width(),
                    dims.height(),
                    dims.depth(),
                    cap
                );
            }
        }

        Commands::Fill {
            count,
            seed,
            width,
            height,
            depth,
            output,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let templates = catalog::standard_catalog();
            let mut packer = ShelfPacker::new(Shelf::new(width, height, depth))?;

            let mut refused = 0usize;
            for _ in 0..count {
                let Some(spec) = templates.choose(&mut rng) else {
                    break;
                };
                match packer.add_box(spec) {
                    Ok(_) => {}
                    Err(err) if err.is_refusal() => {
                        warn!("{err}");
                        refused += 1;
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            println!("{:<20} {:>9} {:>9} {:>9}", "carton", "x", "y", "z");
            println!("{:-<50}", "");
            packer.each(|carton, position| {
                println!(
                    "{:<20} {:>9.1} {:>9.1} {:>9.1}",
                    carton.name(),
                    position.x,
                    position.y,
                    position.z
                );
            });

            let report = packer.report();
            println!();
            println!(
                "placed {} cartons in {} piles, {} of the shelf filled ({} refused)",
                report.carton_count,
                report.pile_count,
                report.utilization_percent(),
                refused
            );

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&packer.placements())?;
                std::fs::write(&path, json)?;
                println!("Placements saved to: {}", path.display());
            }
        }
    }

    Ok(())
}
