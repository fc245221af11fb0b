//! Grid worlds and the world-provider capability set.
//!
//! A [`GridWorld`] is parsed from the classic maze text format:
//!
//! ```text
//! S..#.
//! .#.#.
//! ...#G
//! ```
//!
//! `S` marks the start cell, `G` the goal, `#` a wall; every other
//! character is a free cell. Coordinates are `(x, y)` with `(0, 0)` in the
//! top-left corner and `y` growing downward.
//!
//! Planning code never talks to `GridWorld` directly; it goes through the
//! [`WorldView`] capability trait, which is also implemented by the agent's
//! belief overlay in [`crate::belief`]. That is what lets one grid problem
//! definition plan against either full or partial knowledge.

use std::path::Path;

use crate::error::{Result, WayfindError};

/// A grid cell position as `(x, y)`.
pub type Coordinate = (i32, i32);

/// The capability set a world must expose to be planned over: a bounds
/// check, an obstacle check, and 4-connected neighbor enumeration.
pub trait WorldView {
    /// Whether `(x, y)` lies inside the grid bounds.
    fn is_inside(&self, x: i32, y: i32) -> bool;

    /// Whether `(x, y)` is blocked. Out-of-bounds cells are always walls.
    fn is_wall(&self, x: i32, y: i32) -> bool;

    /// Whether `(x, y)` is inside the bounds and not a wall.
    fn is_free(&self, x: i32, y: i32) -> bool {
        self.is_inside(x, y) && !self.is_wall(x, y)
    }

    /// The free cells among the four orthogonal neighbors of `state`, in
    /// up/down/left/right order.
    fn neighbors4(&self, state: Coordinate) -> Vec<Coordinate> {
        let (x, y) = state;
        [(x, y - 1), (x, y + 1), (x - 1, y), (x + 1, y)]
            .into_iter()
            .filter(|&(nx, ny)| self.is_free(nx, ny))
            .collect()
    }
}

/// The true maze: a rectangular character grid with optional start and goal
/// markers.
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: Vec<Vec<char>>,
    width: i32,
    height: i32,
    start: Option<Coordinate>,
    goal: Option<Coordinate>,
}

impl GridWorld {
    /// Parses a maze from text. Blank lines are skipped; the remaining rows
    /// must be non-empty and of equal width.
    ///
    /// # Errors
    ///
    /// Returns [`WayfindError::InvalidMaze`] when the text contains no rows
    /// or the rows differ in width.
    pub fn from_text(text: &str) -> Result<Self> {
        let grid: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().collect())
            .collect();

        if grid.is_empty() {
            return Err(WayfindError::InvalidMaze("no rows".to_string()));
        }
        let width = grid[0].len();
        if grid.iter().any(|row| row.len() != width) {
            return Err(WayfindError::InvalidMaze(
                "rows must all have the same width".to_string(),
            ));
        }

        let mut world = Self {
            height: grid.len() as i32,
            width: width as i32,
            grid,
            start: None,
            goal: None,
        };
        world.start = world.find_symbol('S');
        world.goal = world.find_symbol('G');
        Ok(world)
    }

    /// Loads a maze from a text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    fn find_symbol(&self, symbol: char) -> Option<Coordinate> {
        for (y, row) in self.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if *cell == symbol {
                    return Some((x as i32, y as i32));
                }
            }
        }
        None
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Position of the `S` marker, if present.
    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    /// Position of the `G` marker, if present.
    pub fn goal(&self) -> Option<Coordinate> {
        self.goal
    }

    /// Renders the grid as text, marking the cells of `path` with `*`
    /// (start and goal markers are kept visible). Purely a helper for
    /// callers that want to display a result; the planning core never
    /// prints.
    pub fn render_with_path(&self, path: &[Coordinate]) -> String {
        let mut out = String::new();
        for (y, row) in self.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let here = (x as i32, y as i32);
                if path.contains(&here) && *cell != 'S' && *cell != 'G' {
                    out.push('*');
                } else {
                    out.push(*cell);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl WorldView for GridWorld {
    fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn is_wall(&self, x: i32, y: i32) -> bool {
        if !self.is_inside(x, y) {
            return true;
        }
        self.grid[y as usize][x as usize] == '#'
    }
}
