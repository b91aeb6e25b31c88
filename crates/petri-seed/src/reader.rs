//! Seed document parsing.
//!
//! The first line selects the format; every later line is one
//! instruction. Commas in v2.0 argument lists are separators, not
//! syntax: `(o) cell: 2, 3` and `(o) cell: 2 3` parse identically.

use crate::error::SeedError;
use crate::instruction::{Bounds, SeedInstruction, Shape};
use petri_core::CellState;
use std::io::BufRead;

/// Version selector for the flat cell-pair format.
const VERSION_1: &str = "#version=1.0";
/// Version selector for the marker/shape format.
const VERSION_2: &str = "#version=2.0";

/// A parsed seeding plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedPlan {
    /// No seed source was given: fill the grid at random. This is the
    /// explicit absent-source signal, not an error.
    RandomFill,
    /// Apply these instructions in file order.
    Shapes(Vec<SeedInstruction>),
}

/// Load a seeding plan from an optional source.
///
/// `None` means no seed was specified and yields
/// [`SeedPlan::RandomFill`]; otherwise the source is parsed with
/// [`parse_seed`].
pub fn load<R: BufRead>(source: Option<R>) -> Result<SeedPlan, SeedError> {
    match source {
        None => Ok(SeedPlan::RandomFill),
        Some(reader) => Ok(SeedPlan::Shapes(parse_seed(reader)?)),
    }
}

enum Format {
    V1,
    V2,
}

/// Parse a seed document into shape instructions.
///
/// Blank lines are skipped. Unknown v2.0 shape types are ignored as a
/// forward-compatible no-op; everything else that fails to parse is a
/// [`SeedError::Malformed`] carrying the line number.
pub fn parse_seed<R: BufRead>(reader: R) -> Result<Vec<SeedInstruction>, SeedError> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(SeedError::UnknownVersion {
                line: String::new(),
            })
        }
    };
    let format = match header.trim() {
        VERSION_1 => Format::V1,
        VERSION_2 => Format::V2,
        _ => return Err(SeedError::UnknownVersion { line: header }),
    };

    let mut instructions = Vec::new();
    let mut line_no = 1;
    for line in lines {
        line_no += 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parsed = match format {
            Format::V1 => parse_v1_line(line_no, trimmed)?,
            Format::V2 => parse_v2_line(line_no, trimmed)?,
        };
        if let Some(instruction) = parsed {
            instructions.push(instruction);
        }
    }
    Ok(instructions)
}

fn malformed(line_no: usize, reason: impl Into<String>) -> SeedError {
    SeedError::Malformed {
        line_no,
        reason: reason.into(),
    }
}

fn parse_int(line_no: usize, token: Option<&str>, what: &str) -> Result<i32, SeedError> {
    let token = token.ok_or_else(|| malformed(line_no, format!("missing {what}")))?;
    token
        .parse::<i32>()
        .map_err(|_| malformed(line_no, format!("{what} is not an integer: '{token}'")))
}

/// v1.0 body line: `ROW COL`, setting that cell alive.
fn parse_v1_line(line_no: usize, line: &str) -> Result<Option<SeedInstruction>, SeedError> {
    let mut fields = line.split_whitespace();
    let row = parse_int(line_no, fields.next(), "row")?;
    let col = parse_int(line_no, fields.next(), "column")?;
    if fields.next().is_some() {
        return Err(malformed(
            line_no,
            "expected exactly two fields (row, column)",
        ));
    }
    Ok(Some(SeedInstruction {
        state: CellState::Alive,
        shape: Shape::Cell { row, col },
    }))
}

/// v2.0 body line: `MARKER TYPE: ARGS`.
fn parse_v2_line(line_no: usize, line: &str) -> Result<Option<SeedInstruction>, SeedError> {
    let cleaned = line.replace(',', " ");
    let mut fields = cleaned.split_whitespace();

    let marker = fields
        .next()
        .ok_or_else(|| malformed(line_no, "missing state marker"))?;
    let state = match marker {
        "(o)" => CellState::Alive,
        "(x)" => CellState::Dead,
        other => {
            return Err(malformed(
                line_no,
                format!("unknown state marker '{other}' (expected '(o)' or '(x)')"),
            ))
        }
    };

    let shape_type = fields
        .next()
        .ok_or_else(|| malformed(line_no, "missing shape type"))?;
    // Unknown shape types are reserved for future formats; skip the
    // whole line rather than failing.
    if !matches!(shape_type, "cell:" | "rectangle:" | "ellipse:") {
        return Ok(None);
    }

    let args = fields
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| malformed(line_no, format!("argument is not an integer: '{token}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let arity = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(malformed(
                line_no,
                format!("{shape_type} takes {n} arguments, got {}", args.len()),
            ))
        }
    };

    let shape = match shape_type {
        "cell:" => {
            arity(2)?;
            Shape::Cell {
                row: args[0],
                col: args[1],
            }
        }
        "rectangle:" => {
            arity(4)?;
            Shape::Rectangle {
                bounds: Bounds {
                    top: args[0],
                    left: args[1],
                    bottom: args[2],
                    right: args[3],
                },
            }
        }
        "ellipse:" => {
            arity(4)?;
            Shape::Ellipse {
                bounds: Bounds {
                    top: args[0],
                    left: args[1],
                    bottom: args[2],
                    right: args[3],
                },
            }
        }
        _ => unreachable!("shape type filtered above"),
    };

    Ok(Some(SeedInstruction { state, shape }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<SeedInstruction>, SeedError> {
        parse_seed(text.as_bytes())
    }

    // ── Format selection ────────────────────────────────────────

    #[test]
    fn absent_source_means_random_fill() {
        let plan = load(None::<&[u8]>).unwrap();
        assert_eq!(plan, SeedPlan::RandomFill);
    }

    #[test]
    fn present_source_yields_shapes() {
        let plan = load(Some("#version=1.0\n1 2\n".as_bytes())).unwrap();
        assert_eq!(
            plan,
            SeedPlan::Shapes(vec![SeedInstruction {
                state: CellState::Alive,
                shape: Shape::Cell { row: 1, col: 2 },
            }])
        );
    }

    #[test]
    fn unknown_version_line_fails() {
        assert!(matches!(
            parse("#version=3.0\n"),
            Err(SeedError::UnknownVersion { .. })
        ));
        assert!(matches!(
            parse("1 2\n"),
            Err(SeedError::UnknownVersion { .. })
        ));
        assert!(matches!(
            parse(""),
            Err(SeedError::UnknownVersion { .. })
        ));
    }

    // ── v1.0 ────────────────────────────────────────────────────

    #[test]
    fn v1_parses_cell_pairs() {
        let instructions = parse("#version=1.0\n0 0\n2 3\n").unwrap();
        assert_eq!(instructions.len(), 2);
        assert_eq!(
            instructions[1],
            SeedInstruction {
                state: CellState::Alive,
                shape: Shape::Cell { row: 2, col: 3 },
            }
        );
    }

    #[test]
    fn v1_rejects_short_line() {
        assert!(matches!(
            parse("#version=1.0\n4\n"),
            Err(SeedError::Malformed { line_no: 2, .. })
        ));
    }

    #[test]
    fn v1_rejects_non_integer() {
        assert!(matches!(
            parse("#version=1.0\n1 x\n"),
            Err(SeedError::Malformed { line_no: 2, .. })
        ));
    }

    // ── v2.0 ────────────────────────────────────────────────────

    #[test]
    fn v2_parses_each_shape_type() {
        let instructions = parse(
            "#version=2.0\n\
             (o) cell: 1, 2\n\
             (x) rectangle: 0, 0, 3, 3\n\
             (o) ellipse: 2, 2, 6, 8\n",
        )
        .unwrap();
        assert_eq!(instructions.len(), 3);
        assert_eq!(
            instructions[0].shape,
            Shape::Cell { row: 1, col: 2 }
        );
        assert_eq!(instructions[1].state, CellState::Dead);
        assert_eq!(
            instructions[2].shape,
            Shape::Ellipse {
                bounds: Bounds {
                    top: 2,
                    left: 2,
                    bottom: 6,
                    right: 8,
                },
            }
        );
    }

    #[test]
    fn v2_commas_are_optional() {
        let with = parse("#version=2.0\n(o) cell: 4, 5\n").unwrap();
        let without = parse("#version=2.0\n(o) cell: 4 5\n").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn v2_unknown_shape_type_is_skipped() {
        let instructions = parse(
            "#version=2.0\n\
             (o) spiral: 1, 2, 3\n\
             (o) cell: 0, 0\n",
        )
        .unwrap();
        assert_eq!(instructions.len(), 1);
        assert_eq!(instructions[0].shape, Shape::Cell { row: 0, col: 0 });
    }

    #[test]
    fn v2_rejects_unknown_marker() {
        assert!(matches!(
            parse("#version=2.0\n(z) cell: 1, 1\n"),
            Err(SeedError::Malformed { line_no: 2, .. })
        ));
    }

    #[test]
    fn v2_rejects_wrong_arity() {
        assert!(matches!(
            parse("#version=2.0\n(o) rectangle: 1, 2, 3\n"),
            Err(SeedError::Malformed { line_no: 2, .. })
        ));
        assert!(matches!(
            parse("#version=2.0\n(o) cell: 1\n"),
            Err(SeedError::Malformed { line_no: 2, .. })
        ));
    }

    #[test]
    fn v2_rejects_non_integer_argument() {
        assert!(matches!(
            parse("#version=2.0\n(o) cell: 1, b\n"),
            Err(SeedError::Malformed { line_no: 2, .. })
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let instructions = parse("#version=2.0\n\n(o) cell: 1, 1\n\n").unwrap();
        assert_eq!(instructions.len(), 1);
    }
}
