#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to explore a Grid with interchangeable Search Strategies.
//!
//! ## Introduction
//! Given a Grid of free and blocked Tiles, a start and a goal, this crate searches for a Route
//! between the two using one of three Strategies:
//! - Breadth-First Search, which always finds a Path with the fewest Steps
//! - Depth-First Search, which finds *some* Path and explores the Grid in a very different shape
//! - A* Search, which finds a Path with the fewest Steps while usually expanding far fewer Cells
//!
//! All three Strategies are driven by the same engine, parameterized by the
//! [`Frontier`](frontier::Frontier) that decides which Cell is expanded next.
//!
//! Besides the Path, every search records the order in which Cells were expanded. That
//! trace is meant to be replayed: a presentation layer can reveal it a few Cells per frame
//! (see [`Replay`](replay::Replay)) and overlay the Path once exploration has been shown.
//!
//! ## Examples
//! Searching a Grid:
//! ```
//! use grid_search::prelude::*;
//!
//! // '.' = free, '#' = wall
//! let grid: Grid = "\
//! ..#..
//! ..#..
//! .....
//! ".parse().unwrap();
//!
//! let start = (0, 0);
//! let goal = (0, 4);
//!
//! let result = breadth_first_search(&grid, start, goal);
//!
//! assert_eq!(result.path.steps(), Some(8));
//! assert_eq!(result.path.first(), Some(&start));
//! assert_eq!(result.path.last(), Some(&goal));
//! ```
//! The same Grid can be searched with any other Strategy:
//! ```
//! # use grid_search::prelude::*;
//! # let grid: Grid = "\
//! # ..#..
//! # ..#..
//! # .....
//! # ".parse().unwrap();
//! # let (start, goal) = ((0, 0), (0, 4));
//! let bfs = search(Strategy::BreadthFirst, &grid, start, goal);
//! let a_star = search(Strategy::AStar, &grid, start, goal);
//!
//! // both are optimal
//! assert_eq!(bfs.path.steps(), a_star.path.steps());
//! // but A* does not need to look at as many Cells
//! assert!(a_star.visited_order.len() <= bfs.visited_order.len());
//! ```
//!
//! ### Unreachable Goals
//! If the goal cannot be reached, the Path is empty. The trace still contains every Cell that
//! was explored before the search gave up:
//! ```
//! # use grid_search::prelude::*;
//! let grid = Grid::from_values(&[
//!     [0u8, 1, 0],
//!     [1, 1, 0],
//!     [0, 0, 0],
//! ]).unwrap();
//!
//! let result = a_star_search(&grid, (0, 0), (2, 2));
//!
//! assert!(result.path.is_empty());
//! assert_eq!(result.visited_order, vec![(0, 0)]);
//! ```
//!
//! ### Stepping
//! A [`Search`](search::Search) can also be advanced one expansion at a time, which allows
//! interleaving the search with rendering or imposing a step budget:
//! ```
//! # use grid_search::prelude::*;
//! let grid = Grid::new(4, 4).unwrap();
//! let mut search = Search::new(Strategy::DepthFirst, &grid, (0, 0), (3, 3));
//!
//! assert_eq!(search.step(), Step::Expanded((0, 0)));
//! while !search.is_finished() {
//!     search.step();
//! }
//! assert!(!search.into_result().path.is_empty());
//! ```

/// A position on the Grid, as `(row, column)`
pub type Cell = (usize, usize);

/// A HashMap keyed by [`Cell`]s
pub type CellMap<V> = hashbrown::HashMap<Cell, V>;
/// A HashSet of [`Cell`]s
pub type CellSet = hashbrown::HashSet<Cell>;

pub mod grid;

pub mod neighbors;

pub mod frontier;

pub mod path;

pub mod search;

pub mod replay;

mod render;
pub use render::render;

/// The most commonly used Types and Functions
pub mod prelude {
	pub use crate::{
		grid::{Grid, GridError, Tile},
		neighbors::{manhattan_distance, ManhattanNeighborhood, Neighborhood},
		path::{reconstruct_path, Path},
		replay::{Replay, ReplayConfig},
		search::{
			a_star_search, breadth_first_search, depth_first_search, search, Search,
			SearchResult, Step, Strategy,
		},
		Cell,
	};
}
