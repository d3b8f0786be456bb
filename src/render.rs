use std::fmt::Display;

use itertools::Itertools;

use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub alive: char,
    pub dead: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: '.',
        }
    }
}

impl Grid {
    /// Draw the whole grid, one line per row, row 0 first.
    pub fn render(&self, settings: Settings) -> String {
        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| match self.is_alive((row, col)) {
                        true => settings.alive,
                        false => settings.dead,
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Settings::default()))
    }
}
