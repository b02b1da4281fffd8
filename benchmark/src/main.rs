use grid_search::{prelude::*, Cell};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SIZE: usize = 512;
const GRIDS: u64 = 64;
const WALL_CHANCE: f64 = 0.3;

struct Run {
    time: Duration,
    visited: usize,
    steps: Option<usize>,
}

fn random_grid(seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<Vec<u8>> = (0..SIZE)
        .map(|_| (0..SIZE).map(|_| rng.gen_bool(WALL_CHANCE) as u8).collect())
        .collect();
    let mut grid = Grid::from_values(&values).expect("SIZE is not 0");
    for corner in corners() {
        grid.set(corner, Tile::Free);
    }
    grid
}

fn corners() -> [Cell; 4] {
    [(0, 0), (0, SIZE - 1), (SIZE - 1, 0), (SIZE - 1, SIZE - 1)]
}

fn main() {
    let start_time = Instant::now();

    // every grid is searched on its own thread, the searches themselves are sequential
    let runs: Vec<HashMap<Strategy, Vec<Run>>> = (0..GRIDS)
        .into_par_iter()
        .map(|seed| {
            let grid = random_grid(seed);
            let points = corners();
            let mut runs: HashMap<Strategy, Vec<Run>> = HashMap::new();

            for i in 0..4 {
                for j in (0..4).filter(|&j| j != i) {
                    for strategy in Strategy::ALL {
                        let timer = Instant::now();
                        let result = search(strategy, &grid, points[i], points[j]);
                        runs.entry(strategy).or_default().push(Run {
                            time: timer.elapsed(),
                            visited: result.visited_order.len(),
                            steps: result.path.steps(),
                        });
                    }
                }
            }
            runs
        })
        .collect();

    println!(
        "searched {} grids of {}x{} in {:.3}s",
        GRIDS,
        SIZE,
        SIZE,
        start_time.elapsed().as_secs_f64()
    );

    let mut merged: HashMap<Strategy, Vec<Run>> = HashMap::new();
    for grid_runs in runs {
        for (strategy, results) in grid_runs {
            merged.entry(strategy).or_default().extend(results);
        }
    }

    let best: Vec<Option<usize>> = merged[&Strategy::BreadthFirst]
        .iter()
        .map(|r| r.steps)
        .collect();

    for strategy in Strategy::ALL {
        let results = &merged[&strategy];
        let times = results.iter().map(|r| r.time.as_secs_f64() * 1000.0);
        let min_time = times.clone().fold(f64::INFINITY, f64::min);
        let max_time = times.clone().fold(0.0_f64, f64::max);
        let avg_time = times.sum::<f64>() / results.len() as f64;

        let avg_visited =
            results.iter().map(|r| r.visited).sum::<usize>() as f64 / results.len() as f64;

        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.steps.is_some() == b.is_some()));

        let ratios: Vec<f64> = results
            .iter()
            .zip(best.iter())
            .filter_map(|(r, b)| Some((*b)? as f64 * 100.0 / r.steps?.max(1) as f64))
            .collect();
        let avg_ratio = ratios.iter().sum::<f64>() / ratios.len().max(1) as f64;

        println!(
            "{:>3} | {:.3}ms - {:.3}ms; {:.3}ms | {:.0} cells visited | {:.2}% of optimal",
            strategy, min_time, max_time, avg_time, avg_visited, avg_ratio,
        );
    }
}
