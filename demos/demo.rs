//! Headless board demo: scatter obstacles, query both representations and
//! print the board with the path drawn on it.
//!
//! Usage: `gridlink-demo [seed] [obstacle-percent]`

use std::collections::HashSet;

use gridlink_core::{CellId, GridConfig, Point};
use gridlink_paths::{Board, PathResult, Representation};
use log::info;
use rand::{RngExt, SeedableRng};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_DENSITY: u32 = 25;

fn render(board: &Board, result: &PathResult) -> String {
    let on_path: HashSet<CellId> = result.interior().iter().copied().collect();
    let cells = board.cells();
    let mut out = String::with_capacity(cells.len() + cells.height() as usize);
    for p in cells.bounds() {
        let ch = match cells.id_at(p).and_then(|id| cells.cell(id).ok()) {
            Some(c) if c.source => 'S',
            Some(c) if c.destination => 'D',
            Some(c) if c.obstacle => '#',
            Some(c) if on_path.contains(&c.id) => '*',
            _ => '.',
        };
        out.push(ch);
        if p.x == cells.width() - 1 {
            out.push('\n');
        }
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_SEED,
    };
    let density: u32 = match args.next() {
        Some(s) => s.parse()?,
        None => DEFAULT_DENSITY,
    };

    let config = GridConfig::default();
    let mut board = Board::new(&config)?;
    let source = board
        .cells()
        .id_at(Point::at(0, 0))
        .ok_or("grid has no top-left cell")?;
    let destination = board
        .cells()
        .id_at(Point::at(config.height - 1, config.width - 1))
        .ok_or("grid has no bottom-right cell")?;
    board.set_source(source)?;
    board.set_destination(destination)?;

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    for i in 0..board.cells().len() {
        let id = CellId(i);
        if id != source && id != destination && rng.random_range(0..100) < density {
            board.set_obstacle(id, true)?;
        }
    }
    info!(
        "seed {seed}: {} obstacles on a {}x{} board",
        board.cells().obstacle_count(),
        config.width,
        config.height
    );

    let mut last = None;
    for repr in Representation::ALL {
        let result = board.run(repr)?;
        println!("{repr:>14}: {result} ({} locator steps)", result.locator_steps);
        last = Some(result);
    }
    if let Some(result) = last {
        println!();
        print!("{}", render(&board, &result));
    }
    Ok(())
}
