//! Render-sink interface and ghost-trail shading.
//!
//! The engine performs no I/O: a caller-side renderer implements
//! [`RenderSink`] and receives one [`update_cell`](RenderSink::update_cell)
//! per cell per generation. Ghost shading is derived from the snapshot
//! memory — cells alive in the recent past fade out over
//! [`GHOST_GENERATIONS`] generations.

use crate::world::World;

/// Number of generations (including the current one) contributing to
/// the ghost trail.
pub const GHOST_GENERATIONS: usize = 4;

/// Display intensity of a cell, from blank to full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intensity {
    /// Dead now and throughout the ghost window.
    Blank,
    /// Last alive three generations ago.
    Light,
    /// Last alive two generations ago.
    Medium,
    /// Alive in the previous generation.
    Dark,
    /// Alive now.
    Full,
}

/// Consumer of per-cell display updates.
pub trait RenderSink {
    /// Record that the cell at `(row, col)` should display `intensity`.
    fn update_cell(&mut self, row: i32, col: i32, intensity: Intensity);
}

/// Ghost shades by age: the previous generation renders darkest.
const GHOST_SHADES: [Intensity; GHOST_GENERATIONS - 1] =
    [Intensity::Dark, Intensity::Medium, Intensity::Light];

impl World {
    /// Push the current state into `sink`, one cell at a time in
    /// row-major order, with ghost shading from the snapshot memory.
    ///
    /// A living cell is [`Intensity::Full`]; a dead cell takes the shade
    /// of the most recent retained generation in which it was alive
    /// (up to [`GHOST_GENERATIONS`] back), or [`Intensity::Blank`].
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        let rows = self.grid().rows() as i32;
        let cols = self.grid().cols() as i32;
        for row in 0..rows {
            for col in 0..cols {
                let mut intensity = Intensity::Blank;
                if self.grid().state(row, col).is_alive() {
                    intensity = Intensity::Full;
                } else {
                    // Memory index 0 is the current generation; the
                    // trail starts one generation back.
                    for (age, shade) in GHOST_SHADES.iter().enumerate() {
                        let alive_then = self
                            .memory()
                            .get(age + 1)
                            .is_some_and(|snapshot| snapshot.state(row, col).is_alive());
                        if alive_then {
                            intensity = *shade;
                            break;
                        }
                    }
                }
                sink.update_cell(row, col, intensity);
            }
        }
    }
}
