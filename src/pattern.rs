use std::{
    collections::HashSet,
    fmt::{Display, Write},
    ops::Range,
    str::FromStr,
};

use itertools::{Itertools, MinMaxResult};

use crate::{grid::Cell, Error};

/// A shape of live cells, independent of any grid.
///
/// Patterns parsed from text are normalized so their bounding box starts at
/// `(0, 0)`, which makes them convenient to place with [`Pattern::offset`].
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: HashSet<Cell>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Empty,
    Covers { rows: Range<isize>, cols: Range<isize> },
}

impl Pattern {
    fn set_bit(&mut self, p: Cell) {
        self.cells.insert(p);
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells shifted by `(dr, dc)`. Cells whose shifted position does not
    /// fit in an `isize` are left out.
    pub fn offset(&self, (dr, dc): Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .filter_map(move |&(r, c)| Some((r.checked_add(dr)?, c.checked_add(dc)?)))
    }

    /// Shift the pattern so its bounding box starts at `(0, 0)`.
    pub fn normalize(mut self) -> Self {
        let Span::Covers { rows, cols } = self.span() else {
            return self;
        };
        if (rows.start, cols.start) != (0, 0) {
            for (r, c) in std::mem::take(&mut self.cells) {
                self.set_bit((r - rows.start, c - cols.start));
            }
        }
        self
    }

    /// Bounding box of the cells.
    pub fn span(&self) -> Span {
        fn range(mm: MinMaxResult<isize>) -> Option<Range<isize>> {
            match mm {
                MinMaxResult::NoElements => None,
                MinMaxResult::OneElement(v) => Some(v..v + 1),
                MinMaxResult::MinMax(lo, hi) => Some(lo..hi + 1),
            }
        }
        let rows = range(self.cells.iter().map(|&(r, _)| r).minmax());
        let cols = range(self.cells.iter().map(|&(_, c)| c).minmax());
        match (rows, cols) {
            (Some(rows), Some(cols)) => Span::Covers { rows, cols },
            _ => Span::Empty,
        }
    }
}

impl FromIterator<Cell> for Pattern {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pattern = Pattern::default();
        for (row, line) in s.lines().enumerate() {
            for (col, character) in line.chars().enumerate() {
                match character {
                    ' ' => (),
                    'o' => pattern.set_bit((row as isize, col as isize)),
                    _ => {
                        return Err(Error::InvalidPattern {
                            character,
                            row,
                            col,
                        })
                    }
                }
            }
        }
        Ok(pattern.normalize())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span::Covers { rows, cols } = self.span() else {
            return Ok(());
        };
        let (mut current_r, mut current_c) = (rows.start, cols.start);
        for &(r, c) in self.cells.iter().sorted() {
            while current_r < r {
                f.write_char('\n')?;
                current_c = cols.start;
                current_r += 1;
            }
            f.write_str(&" ".repeat(c.abs_diff(current_c)))?;
            f.write_char('o')?;
            current_c = c + 1;
        }
        Ok(())
    }
}
