//! Petri quickstart — a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Building a `WorldConfig` and `World`
//!   2. Seeding from a v2.0 document, with the random-fill fallback
//!   3. Stepping until a steady state is detected
//!   4. Rendering through a `RenderSink` implementation
//!   5. Emitting the terminal state as a canonical seed
//!
//! Run with:
//!   cargo run --example quickstart

use petri_engine::{Intensity, RenderSink, Steadiness, World, WorldConfig};
use petri_seed::{load, rasterise, SeedPlan};

const SEED_DOC: &str = "#version=2.0\n\
                        (o) rectangle: 5, 4, 5, 6\n\
                        (o) cell: 2, 2\n";

/// Renders each generation as ASCII art on stdout.
struct AsciiGrid {
    cols: usize,
    row_buf: String,
}

impl AsciiGrid {
    fn new(cols: u32) -> Self {
        Self {
            cols: cols as usize,
            row_buf: String::new(),
        }
    }
}

impl RenderSink for AsciiGrid {
    fn update_cell(&mut self, _row: i32, _col: i32, intensity: Intensity) {
        self.row_buf.push(match intensity {
            Intensity::Full => '#',
            Intensity::Dark => '+',
            Intensity::Medium => '-',
            Intensity::Light => '.',
            Intensity::Blank => ' ',
        });
        if self.row_buf.len() == self.cols {
            println!("|{}|", self.row_buf);
            self.row_buf.clear();
        }
    }
}

fn main() {
    let config = WorldConfig {
        rows: 12,
        cols: 12,
        seed: 42,
        ..WorldConfig::default()
    };
    let mut world = World::new(config).expect("config is valid");

    // Seed the world, falling back to a random fill on any seed problem.
    match load(Some(SEED_DOC.as_bytes())) {
        Ok(SeedPlan::RandomFill) => world.randomise(),
        Ok(SeedPlan::Shapes(instructions)) => {
            match rasterise(&instructions, world.config().rows, world.config().cols) {
                Ok(grid) => world.install(grid).expect("dimensions match"),
                Err(e) => {
                    eprintln!("warning: seed abandoned ({e}); using random fill");
                    world.randomise();
                }
            }
        }
        Err(e) => {
            eprintln!("warning: seed abandoned ({e}); using random fill");
            world.randomise();
        }
    }

    let max_generations = world.config().max_generations;
    let mut sink = AsciiGrid::new(world.config().cols);
    loop {
        println!("generation {}:", world.generation());
        world.draw(&mut sink);

        if world.generation() >= max_generations {
            println!("generation budget exhausted");
            break;
        }
        match world.step().steadiness {
            Steadiness::Progressing => {}
            Steadiness::FixedPoint => {
                println!("fixed point after {} generations", world.generation());
                break;
            }
            Steadiness::Cycling { period } => {
                println!(
                    "cycle of period {period} detected at generation {}",
                    world.generation(),
                );
                break;
            }
        }
    }

    println!("terminal state as a seed:");
    print!("{}", petri_seed::seed_string(world.grid()));
}
