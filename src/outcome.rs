use crate::solve::{self, Exhausted, Limits, SearchError};
use crate::{Direction, Grid};

/// What a solve request resolves to. Budget overruns are reported separately
/// as [`Exhausted`] and never produce a partial path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Solved(Vec<Direction>),
    NoStart,
    NoSolution,
}

impl Outcome {
    pub fn steps(&self) -> Option<&[Direction]> {
        match self {
            Outcome::Solved(steps) => Some(steps),
            Outcome::NoStart | Outcome::NoSolution => None,
        }
    }
}

pub fn solve(grid: &Grid, limits: &Limits, on_step: impl FnMut()) -> Result<Outcome, Exhausted> {
    match solve::bfs(grid, limits, on_step) {
        Ok(steps) => Ok(Outcome::Solved(steps)),
        Err(SearchError::NoStart) => Ok(Outcome::NoStart),
        Err(SearchError::NoSolution) => Ok(Outcome::NoSolution),
        Err(SearchError::Exhausted(err)) => Err(err),
    }
}
