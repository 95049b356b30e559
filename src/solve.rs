use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::{Direction, Grid, State};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Default cap on expanded states.
pub const DEFAULT_MAX_STATES: usize = 1 << 22;

/// How far a single search may go before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_states: Option<usize>,
    pub timeout: Option<Duration>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_states: Some(DEFAULT_MAX_STATES),
            timeout: None,
        }
    }
}

impl Limits {
    pub const UNBOUNDED: Self = Self {
        max_states: None,
        timeout: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Budget {
    #[display("state")]
    States,
    #[display("time")]
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{budget} budget exhausted after {explored} states")]
pub struct Exhausted {
    pub budget: Budget,
    pub explored: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    #[display("no start")]
    NoStart,
    #[display("no solution")]
    NoSolution,
    #[display("{_0}")]
    Exhausted(Exhausted),
}

impl From<Exhausted> for SearchError {
    fn from(err: Exhausted) -> Self {
        Self::Exhausted(err)
    }
}

/// Finds a shortest sequence of slides that fills every empty cell, starting
/// from the grid's start cell.
pub fn bfs(
    grid: &Grid,
    limits: &Limits,
    on_step: impl FnMut(),
) -> Result<Vec<Direction>, SearchError> {
    let init = grid.initial_state().ok_or(SearchError::NoStart)?;
    if grid.need_fill() == 0 {
        return Ok(Vec::new());
    }
    bfs_from(grid, init, limits, on_step)
}

/// Like [`bfs`], but continues from an arbitrary state.
pub fn bfs_from(
    grid: &Grid,
    init: State,
    limits: &Limits,
    mut on_step: impl FnMut(),
) -> Result<Vec<Direction>, SearchError> {
    let deadline = limits.timeout.map(|timeout| Instant::now() + timeout);

    // Expanded states with the (parent index, direction) that first reached them.
    let mut expanded = IndexMap::<State, Option<(usize, Direction)>>::default();
    // Duplicates are allowed here and dropped when dequeued.
    let mut queue = VecDeque::new();
    queue.push_back((init, None));
    let mut generated = 1usize;
    let mut queue_peak = 1usize;

    let last_link = loop {
        #[cfg(feature = "coz")]
        coz::scope!("Expand");

        let Some((state, link)) = queue.pop_front() else {
            log::debug!(
                "no solution: expanded {} states, generated {generated}, queue peak {queue_peak}",
                expanded.len(),
            );
            return Err(SearchError::NoSolution);
        };

        // Stale duplicate.
        if expanded.contains_key(&state) {
            continue;
        }

        if grid.is_complete(&state) {
            break link;
        }

        let explored = expanded.len();
        if let Some(budget) = over_budget(limits, deadline, explored) {
            log::warn!("{budget} budget exhausted after {explored} states");
            return Err(Exhausted { budget, explored }.into());
        }

        for (dir, next) in grid.moves(&state) {
            on_step();

            #[cfg(feature = "coz")]
            coz::progress!("Slide");

            queue.push_back((next, Some((explored, dir))));
            generated += 1;
        }
        queue_peak = queue_peak.max(queue.len());
        expanded.insert(state, link);
    };

    let mut steps = std::iter::successors(last_link, |&(parent, _)| expanded[parent])
        .map(|(_, dir)| dir)
        .collect::<Vec<_>>();
    steps.reverse();

    log::debug!(
        "solved in {} moves: expanded {} states, generated {generated}, queue peak {queue_peak}",
        steps.len(),
        expanded.len(),
    );
    Ok(steps)
}

fn over_budget(limits: &Limits, deadline: Option<Instant>, explored: usize) -> Option<Budget> {
    if limits.max_states.is_some_and(|max| explored >= max) {
        return Some(Budget::States);
    }
    // The clock is only sampled every 256 expansions.
    if explored % 256 == 0 && deadline.is_some_and(|deadline| Instant::now() >= deadline) {
        return Some(Budget::Time);
    }
    None
}
