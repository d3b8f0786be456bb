use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: isize, height: isize },

    #[error("unexpected character {character:?} at row {row}, column {col} of pattern")]
    InvalidPattern {
        character: char,
        row: usize,
        col: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
