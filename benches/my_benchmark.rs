extern crate grid_search;
use env_logger::Env;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grid_search::prelude::*;
use log::warn;
use nanorand::{Rng, WyRand};

fn new_random(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = WyRand::new_seed(seed);
    let values: Vec<Vec<u8>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| u8::from(rng.generate_range(0..10u32) < 3))
                .collect()
        })
        .collect();
    let mut grid = Grid::from_values(&values).unwrap();
    grid.set((0, 0), Tile::Free);
    grid.set((rows - 1, cols - 1), Tile::Free);
    grid
}

/// A Grid with long walls that force the search to snake back and forth
fn new_maze(rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    for row in (1..rows).step_by(2) {
        let gap = if row % 4 == 1 { cols - 1 } else { 0 };
        for col in (0..cols).filter(|&col| col != gap) {
            grid.set((row, col), Tile::Blocked);
        }
    }
    grid.set((rows - 1, cols - 1), Tile::Free);
    grid
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug to see a summary of every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    group.sample_size(20);

    // Log to stdout
    init();

    let map_sizes = [32, 128];

    for map_size in map_sizes {
        let (rows, cols) = (map_size, map_size);
        let goal = (rows - 1, cols - 1);
        let maps = [
            ("Open", Grid::new(rows, cols).unwrap()),
            ("Random", new_random(rows, cols, 4)),
            ("Maze", new_maze(rows, cols)),
        ];

        for (name, grid) in maps.iter() {
            let probe = breadth_first_search(grid, (0, 0), goal);
            if !probe.is_reachable() {
                warn!("{} map of size {} has no path, only measuring exploration", name, map_size);
            }

            for strategy in Strategy::ALL {
                let id = format!(
                    "{}, {} map, Map Size: ({}, {})",
                    strategy, name, rows, cols
                );
                group.bench_function(&id, |b| {
                    b.iter(|| search(strategy, black_box(grid), (0, 0), goal))
                });
            }
        }
    }
}

fn bench_replay(c: &mut Criterion) {
    let grid = new_random(256, 256, 7);
    let result = breadth_first_search(&grid, (0, 0), (255, 255));

    c.bench_function("Replay full BFS trace, Map Size: (256, 256)", |b| {
        b.iter(|| {
            let mut replay = Replay::new(&result, ReplayConfig::default());
            while replay.advance() {}
            replay.visible_path().len()
        })
    });
}

criterion_group!(benches, bench_strategies, bench_replay);
criterion_main!(benches);
