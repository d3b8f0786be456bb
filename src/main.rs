use std::str::FromStr;

use torus_life::{render::Settings, Grid, Pattern, Result};

const DEFAULT_GENERATIONS: usize = 8;

fn main() -> Result<()> {
    env_logger::init();

    let generations = match std::env::args().nth(1) {
        None => DEFAULT_GENERATIONS,
        Some(arg) => arg.parse().unwrap_or_else(|err| {
            log::warn!("ignoring generation count {arg:?}: {err}");
            DEFAULT_GENERATIONS
        }),
    };

    // The glider starts next to the bottom-right corner so it wraps early.
    let glider = Pattern::from_str(
        "
         o
          o
        ooo",
    )?;
    let mut grid = Grid::new(10, 8)?;
    grid.set_pattern(&glider, (5, 6));
    show("glider", &mut grid, generations, Settings::default());

    let blinker = Pattern::from_str("ooo")?;
    let mut grid = Grid::new(5, 5)?;
    grid.set_pattern(&blinker, (2, 1));
    let settings = Settings {
        alive: 'o',
        dead: '·',
    };
    show("blinker", &mut grid, generations.min(4), settings);

    Ok(())
}

fn show(name: &str, grid: &mut Grid, generations: usize, settings: Settings) {
    println!("{name} on a {}x{} torus", grid.width(), grid.height());
    loop {
        println!("generation {}:", grid.generation());
        println!("{}\n", grid.render(settings));
        if grid.generation() >= generations as u64 {
            break;
        }
        grid.step();
    }
}
