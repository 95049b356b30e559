use std::ops::Index;

use arrayvec::ArrayVec;

mod fmt;
mod mask;
mod parse;
pub mod outcome;
pub mod solve;
pub mod wire;

pub use fmt::Trail;
pub use mask::FilledMask;
pub use outcome::Outcome;
pub use parse::BoardError;

/// Largest supported side length. Coordinates are stored as `u8`.
pub const MAX_SIZE: usize = u8::MAX as usize;

/// A `(row, column)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vec2(pub u8, pub u8);

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order of the search. Among equally short solutions the one
    /// that comes first in this order is returned.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
        }
    }
}

/// An interactive step that would leave the token in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot slide {dir:?}")]
pub struct Blocked {
    pub dir: Direction,
}

/// An immutable, classified square board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Box<[CellKind]>,
    start: Option<Vec2>,
    need_fill: usize,
    empty: FilledMask,
}

/// Search node: token position plus every cell passed over so far.
///
/// The start cell is not marked initially. Sliding back over it marks it,
/// which blocks re-entry even though it never counts toward completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pos: Vec2,
    filled: FilledMask,
}

impl State {
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn filled(&self) -> &FilledMask {
        &self.filled
    }
}

impl Index<Vec2> for Grid {
    type Output = CellKind;
    fn index(&self, pos: Vec2) -> &Self::Output {
        &self.cells[self.offset(pos)]
    }
}

impl Grid {
    fn new(size: u8, cells: Box<[CellKind]>) -> Self {
        let mut grid = Grid {
            size,
            empty: FilledMask::new(cells.len()),
            cells,
            start: None,
            need_fill: 0,
        };
        // First start in row-major order wins; later ones are inert.
        let start = grid
            .cells()
            .find(|&(_, cell)| cell == CellKind::Start)
            .map(|(pos, _)| pos);
        grid.start = start;
        for (idx, &cell) in grid.cells.iter().enumerate() {
            if cell == CellKind::Empty {
                grid.empty.insert(idx);
            }
        }
        grid.need_fill = grid.empty.count();
        grid
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn start(&self) -> Option<Vec2> {
        self.start
    }

    /// Number of empty cells a solution has to pass over.
    pub fn need_fill(&self) -> usize {
        self.need_fill
    }

    fn offset(&self, pos: Vec2) -> usize {
        pos.0 as usize * self.size as usize + pos.1 as usize
    }

    fn cells(&self) -> impl Iterator<Item = (Vec2, CellKind)> + '_ {
        let idx_iter = std::iter::successors(Some(Vec2(0, 0)), |&Vec2(x, y)| {
            Some(if y + 1 < self.size {
                Vec2(x, y + 1)
            } else {
                Vec2(x + 1, 0)
            })
        });
        idx_iter.zip(self.cells.iter().copied())
    }

    fn sibling_pos(&self, pos: Vec2, dir: Direction) -> Option<Vec2> {
        const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let x = pos.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let y = pos.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if self.size <= x || self.size <= y {
            return None;
        }
        Some(Vec2(x, y))
    }

    /// The token on the start cell with nothing filled, or `None` if the
    /// board has no start.
    pub fn initial_state(&self) -> Option<State> {
        Some(State {
            pos: self.start?,
            filled: FilledMask::new(self.cells.len()),
        })
    }

    /// Slides the token from `state` in `dir` until the next cell is off the
    /// board, a wall, or already filled.
    ///
    /// Returns `None` when the very first step is blocked.
    pub fn slide(&self, state: &State, dir: Direction) -> Option<State> {
        let mut next = state.clone();
        while let Some(pos) = self.sibling_pos(next.pos, dir) {
            let idx = self.offset(pos);
            if self.cells[idx] == CellKind::Wall || next.filled.contains(idx) {
                break;
            }
            next.filled.insert(idx);
            next.pos = pos;
        }
        (next.pos != state.pos).then_some(next)
    }

    /// Every slide that moves the token, in canonical direction order.
    pub fn moves(&self, state: &State) -> ArrayVec<(Direction, State), 4> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| Some((dir, self.slide(state, dir)?)))
            .collect()
    }

    pub fn is_complete(&self, state: &State) -> bool {
        state.filled.is_superset(&self.empty)
    }

    pub fn go(&self, state: &mut State, dir: Direction) -> Result<(), Blocked> {
        *state = self.slide(state, dir).ok_or(Blocked { dir })?;
        Ok(())
    }

    /// Applies `steps` one after another, failing at the first one that
    /// does not move.
    pub fn replay(
        &self,
        mut state: State,
        steps: impl IntoIterator<Item = Direction>,
    ) -> Result<State, Blocked> {
        for dir in steps {
            self.go(&mut state, dir)?;
        }
        Ok(state)
    }

    pub fn trail<'a>(&'a self, state: &'a State) -> Trail<'a> {
        Trail { grid: self, state }
    }
}
