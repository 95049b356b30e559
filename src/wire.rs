//! JSON request and response bodies for a solve endpoint.
//!
//! A request looks like `{"board": [[2, 0], [0, 0]]}`. Every response carries
//! a `status` tag, so failures never masquerade as a path:
//!
//! ```json
//! {"status": "solved", "solution": ["↓", "→", "↑"]}
//! {"status": "no_start"}
//! ```

use serde::{Deserialize, Serialize};

use crate::outcome::{self, Outcome};
use crate::solve::Limits;
use crate::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub board: Vec<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveResponse {
    Solved { solution: Vec<String> },
    NoStart,
    NoSolution,
    InvalidBoard { message: String },
    ResourceExhausted { explored: usize },
}

impl From<Outcome> for SolveResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Solved(steps) => SolveResponse::Solved {
                solution: steps.iter().map(|dir| dir.glyph().to_owned()).collect(),
            },
            Outcome::NoStart => SolveResponse::NoStart,
            Outcome::NoSolution => SolveResponse::NoSolution,
        }
    }
}

pub fn respond(request: &SolveRequest, limits: &Limits) -> SolveResponse {
    let grid = match Grid::from_matrix(&request.board) {
        Ok(grid) => grid,
        Err(err) => {
            return SolveResponse::InvalidBoard {
                message: err.to_string(),
            }
        }
    };
    match outcome::solve(&grid, limits, || {}) {
        Ok(outcome) => outcome.into(),
        Err(err) => SolveResponse::ResourceExhausted {
            explored: err.explored,
        },
    }
}
