//! Conway's Game of Life on a fixed-size grid whose edges wrap around.

mod error;
pub mod grid;
pub mod pattern;
pub mod render;


pub use crate::{
    error::{Error, Result},
    grid::{Cell, Grid, Topology},
    pattern::Pattern,
};
