//! Canonical seed emission.
//!
//! Output is always the v2.0 format: a version header followed by one
//! `(o) cell: ROW, COL` line per living cell in row-major order.
//! Whether anything is written at all (the caller may not have asked
//! for an output file) is the caller's decision.

use petri_core::CellGrid;
use std::io::Write;

/// Write `grid`'s living cells as a v2.0 seed document.
pub fn write_seed<W: Write>(mut writer: W, grid: &CellGrid) -> std::io::Result<()> {
    writeln!(writer, "#version=2.0")?;
    for (row, col) in grid.live_cells() {
        writeln!(writer, "(o) cell: {row}, {col}")?;
    }
    Ok(())
}

/// Render `grid` as a v2.0 seed document in memory.
pub fn seed_string(grid: &CellGrid) -> String {
    let mut buf = Vec::new();
    write_seed(&mut buf, grid).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("seed output is ASCII")
}
