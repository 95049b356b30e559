use std::fmt;

use crate::{CellKind, Direction, Grid, Outcome, State};

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.cells() {
            cell.fmt(f)?;
            if pos.1 + 1 == self.size {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Empty => ".".fmt(f),
            CellKind::Wall => "#".fmt(f),
            CellKind::Start => "S".fmt(f),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyph().fmt(f)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(steps) => {
                "solved".fmt(f)?;
                for dir in steps {
                    write!(f, " {dir}")?;
                }
                Ok(())
            }
            Outcome::NoStart => "no start".fmt(f),
            Outcome::NoSolution => "no solution".fmt(f),
        }
    }
}

/// A board with the token and the filled cells of a [`State`] drawn on it.
pub struct Trail<'a> {
    pub(crate) grid: &'a Grid,
    pub(crate) state: &'a State,
}

impl fmt::Display for Trail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ((pos, cell), idx) in self.grid.cells().zip(0..) {
            if pos == self.state.pos {
                "@".fmt(f)?;
            } else if self.state.filled.contains(idx) {
                "o".fmt(f)?;
            } else {
                cell.fmt(f)?;
            }
            if pos.1 + 1 == self.grid.size {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}
