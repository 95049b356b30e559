use std::str::FromStr;

use anyhow::{bail, Result};

use crate::{CellKind, Grid, MAX_SIZE};

/// Reasons a cell matrix is rejected before any search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("row {row} has {len} cells, expecting {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[display("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: i64 },
    #[display("board side {size} is too large")]
    TooLarge { size: usize },
}

impl Grid {
    /// Builds a grid from rows of `0` (empty), `1` (wall) and `2` (start).
    ///
    /// A zero-sized matrix is accepted; it simply has no start.
    pub fn from_matrix<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size > MAX_SIZE {
            return Err(BoardError::TooLarge { size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }
            for (col, &value) in line.iter().enumerate() {
                cells.push(match value {
                    0 => CellKind::Empty,
                    1 => CellKind::Wall,
                    2 => CellKind::Start,
                    _ => return Err(BoardError::InvalidCell { row, col, value }),
                });
            }
        }

        Ok(Grid::new(size as _, cells.into()))
    }
}

impl FromStr for Grid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.trim().lines() {
            let row = line
                .trim()
                .chars()
                .map(|ch| {
                    Ok(match ch {
                        '.' | '0' => 0,
                        '#' | '1' => 1,
                        'S' | '2' => 2,
                        _ => bail!("Invalid cell: {ch:?}"),
                    })
                })
                .collect::<Result<Vec<i64>>>()?;
            rows.push(row);
        }
        Ok(Grid::from_matrix(&rows)?)
    }
}
