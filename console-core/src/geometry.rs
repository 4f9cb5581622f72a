//! Console geometry and parsing of `stty size` output

use crate::error::{ConsoleError, Result};

/// Text grid size of the display under the active font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Number of text rows
    pub rows: i32,
    /// Number of text columns
    pub columns: i32,
}

impl Geometry {
    pub fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }

    /// Both dimensions are strictly positive
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.columns > 0
    }

    /// Whether the 1-based position lies on the grid
    pub fn contains(&self, column: i32, row: i32) -> bool {
        (1..=self.columns).contains(&column) && (1..=self.rows).contains(&row)
    }
}

/// Parse the standard output of `stty size` (`"<rows> <columns>\n"`).
///
/// A single trailing line terminator is stripped and the rest is split on
/// single spaces. Fewer than two fields is an error. A field that is not a
/// base-10 `i32` becomes `0` instead of failing, so callers must validate
/// the result. Fields past the second are ignored.
pub fn parse_size(output: &[u8]) -> Result<Geometry> {
    let text = String::from_utf8_lossy(chomp(output));
    let fields: Vec<&str> = text.split(' ').collect();
    if fields.len() < 2 {
        return Err(ConsoleError::Parse {
            output: text.to_string(),
        });
    }

    Ok(Geometry {
        rows: parse_field(fields[0]),
        columns: parse_field(fields[1]),
    })
}

fn chomp(bytes: &[u8]) -> &[u8] {
    match bytes {
        [rest @ .., b'\r', b'\n'] => rest,
        [rest @ .., b'\n'] => rest,
        _ => bytes,
    }
}

fn parse_field(field: &str) -> i32 {
    field.parse::<i32>().unwrap_or(0)
}
