use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::{pattern::Pattern, Error, Result};

/// A `(row, col)` coordinate.
pub type Cell = (isize, isize);

/// How the edges of a grid connect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Edges wrap around to the opposite edge.
    #[default]
    Torus,
    /// Cells beyond the edges are always dead.
    Bounded,
}

/// A fixed-size Life grid holding the set of live cells.
///
/// Live cells are stored sparsely and always in canonical form, i.e. with
/// `0 <= row < height` and `0 <= col < width`.
#[derive(Clone, Debug)]
pub struct Grid {
    width: isize,
    height: isize,
    topology: Topology,
    cells: HashSet<Cell>,
    generation: u64,
}

impl Grid {
    pub fn new(width: isize, height: isize) -> Result<Self> {
        Self::with_topology(width, height, Topology::default())
    }

    pub fn with_topology(width: isize, height: isize, topology: Topology) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            topology,
            cells: HashSet::new(),
            generation: 0,
        })
    }

    pub fn width(&self) -> isize {
        self.width
    }

    pub fn height(&self) -> isize {
        self.height
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of steps taken since the state was last set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_alive(&self, p: Cell) -> bool {
        self.canonicalize(p)
            .is_some_and(|p| self.cells.contains(&p))
    }

    /// Replace the live cells. Coordinates outside the grid wrap on a torus
    /// and are dropped on a bounded grid.
    pub fn set_state(&mut self, cells: impl IntoIterator<Item = Cell>) {
        let mut given = 0;
        let cells: HashSet<Cell> = cells
            .into_iter()
            .inspect(|_| given += 1)
            .filter_map(|p| self.canonicalize(p))
            .collect();
        self.cells = cells;
        self.generation = 0;
        log::trace!(
            "set_state: {given} coordinates given, {} cells live",
            self.cells.len()
        );
    }

    /// Replace the live cells with `pattern` placed at `origin`.
    pub fn set_pattern(&mut self, pattern: &Pattern, origin: Cell) {
        match self.topology {
            Topology::Torus => {
                let (r0, c0) = self.wrap(origin);
                let cells: Vec<Cell> = pattern
                    .cells()
                    .iter()
                    .map(|&p| {
                        let (r, c) = self.wrap(p);
                        (add_mod(r, r0, self.height), add_mod(c, c0, self.width))
                    })
                    .collect();
                self.set_state(cells);
            }
            Topology::Bounded => self.set_state(pattern.offset(origin)),
        }
    }

    /// A snapshot of the live cells.
    pub fn get_state(&self) -> HashSet<Cell> {
        self.cells.clone()
    }

    pub fn count_live_neighbors(&self, row: isize, col: isize) -> usize {
        self.neighbours((row, col))
            .filter(|p| self.cells.contains(p))
            .count()
    }

    pub fn step(&mut self) {
        // Every count is taken from the current generation before any cell
        // of the next one is written.
        let mut counts: HashMap<Cell, usize> = HashMap::new();
        for &p1 in &self.cells {
            for p2 in self.neighbours(p1) {
                *counts.entry(p2).or_default() += 1;
            }
        }
        let mut cells = HashSet::new();
        for (p, count) in counts {
            let alive = self.cells.contains(&p);
            if let (2 | 3, true) | (3, false) = (count, alive) {
                cells.insert(p);
            }
        }
        self.cells = cells;
        self.generation += 1;
        log::debug!(
            "generation {}: population {}",
            self.generation,
            self.cells.len()
        );
    }

    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }
}

impl Grid {
    fn wrap(&self, (row, col): Cell) -> Cell {
        (row.rem_euclid(self.height), col.rem_euclid(self.width))
    }

    fn canonicalize(&self, (row, col): Cell) -> Option<Cell> {
        match self.topology {
            Topology::Torus => Some(self.wrap((row, col))),
            Topology::Bounded => {
                ((0..self.height).contains(&row) && (0..self.width).contains(&col))
                    .then_some((row, col))
            }
        }
    }

    fn neighbours(&self, p: Cell) -> impl Iterator<Item = Cell> + '_ {
        let (row, col) = match self.topology {
            Topology::Torus => self.wrap(p),
            Topology::Bounded => p,
        };
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dr, dc)| {
                self.canonicalize((row.checked_add(dr)?, col.checked_add(dc)?))
            })
    }
}

/// `(a + b) mod m` for `a` and `b` already in `0..m`.
fn add_mod(a: isize, b: isize, m: isize) -> isize {
    if a >= m - b {
        a - (m - b)
    } else {
        a + b
    }
}
