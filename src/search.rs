//! The search engine shared by all Strategies

use crate::{
	frontier::{Entry, Frontier},
	grid::Grid,
	neighbors::{ManhattanNeighborhood, Neighborhood},
	path::{reconstruct_path, Path},
	Cell, CellMap, CellSet,
};
use log::{debug, trace};
use std::fmt;
use std::time::Instant;

/// The available search Strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Expands Cells in the order they were discovered. Finds a Path with the fewest steps.
	BreadthFirst,
	/// Expands the most recently discovered Cell first. Finds *a* Path, not necessarily a short one.
	DepthFirst,
	/// Expands the Cell with the lowest estimated total cost first. Finds a Path with the
	/// fewest steps, given an admissible Heuristic.
	AStar,
}

impl Strategy {
	/// All Strategies, in the order they are usually presented
	pub const ALL: [Strategy; 3] = [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::AStar];

	/// a short name for logs and UIs
	pub fn name(self) -> &'static str {
		match self {
			Strategy::BreadthFirst => "BFS",
			Strategy::DepthFirst => "DFS",
			Strategy::AStar => "A*",
		}
	}

	/// `true` if the Path found by this Strategy always has the fewest possible steps
	pub fn is_optimal(self) -> bool {
		self != Strategy::DepthFirst
	}

	fn frontier(self) -> Frontier {
		match self {
			Strategy::BreadthFirst => Frontier::fifo(),
			Strategy::DepthFirst => Frontier::lifo(),
			Strategy::AStar => Frontier::priority(),
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.name())
	}
}

/// The outcome of a single expansion, see [`Search::step`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
	/// the Cell was expanded and its neighbors were added to the Frontier
	Expanded(Cell),
	/// the goal was expanded. The search is finished
	Reached(Cell),
	/// the Frontier is empty and the goal was never reached. The search is finished
	Exhausted,
}

/// Everything a search produces.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchResult {
	/// Every Cell that was expanded, in the order of expansion. Contains no duplicates.
	///
	/// This includes the goal if it was reached.
	pub visited_order: Vec<Cell>,
	/// The Path from start to goal, or an empty Path if the goal is unreachable.
	pub path: Path,
}

impl SearchResult {
	/// `true` if a Path to the goal was found
	pub fn is_reachable(&self) -> bool {
		!self.path.is_empty()
	}
}

/// A search in progress.
///
/// Each call to [`step`](Search::step) expands exactly one Cell, so a caller can interleave the
/// search with other work or stop it after a fixed number of steps. Use [`run`](Search::run)
/// to finish it in one go.
///
/// The Grid is borrowed for the lifetime of the search and can therefore not change under it.
///
/// ## Examples
/// ```
/// # use grid_search::prelude::*;
/// let grid: Grid = "\
/// ...
/// .#.
/// ...
/// ".parse().unwrap();
///
/// let mut search = Search::new(Strategy::BreadthFirst, &grid, (0, 0), (2, 2));
///
/// // give up after two expansions
/// for _ in 0..2 {
///     search.step();
/// }
/// assert_eq!(search.visited(), &[(0, 0), (1, 0)]);
/// assert!(!search.is_finished());
///
/// // or keep going until the end
/// assert_eq!(search.run(), Step::Reached((2, 2)));
/// assert_eq!(search.into_result().path.steps(), Some(4));
/// ```
#[derive(Clone, Debug)]
pub struct Search<'a, N: Neighborhood = ManhattanNeighborhood> {
	strategy: Strategy,
	grid: &'a Grid,
	neighborhood: N,
	start: Cell,
	goal: Cell,
	frontier: Frontier,
	parents: CellMap<Option<Cell>>,
	/// best known cost per Cell, only maintained by A*
	costs: CellMap<usize>,
	/// Cells whose cost is final, only maintained by A*
	closed: CellSet,
	visited_order: Vec<Cell>,
	pushes: usize,
	outcome: Option<Step>,
	all_neighbors: Vec<Cell>,
}

impl<'a> Search<'a, ManhattanNeighborhood> {
	/// Prepares a search from `start` to `goal` on `grid`.
	///
	/// `start` and `goal` are expected to be free Cells on the Grid. A goal that is blocked or
	/// out of bounds is simply never reached.
	pub fn new(strategy: Strategy, grid: &'a Grid, start: Cell, goal: Cell) -> Self {
		Search::with_neighborhood(strategy, grid, *grid.neighborhood(), start, goal)
	}
}

impl<'a, N: Neighborhood> Search<'a, N> {
	/// Like [`new`](Search::new), but with a custom [`Neighborhood`] that provides the
	/// neighbors and the Heuristic.
	///
	/// Neighbors that are blocked or outside of the Grid are skipped.
	pub fn with_neighborhood(
		strategy: Strategy,
		grid: &'a Grid,
		neighborhood: N,
		start: Cell,
		goal: Cell,
	) -> Self {
		let mut frontier = strategy.frontier();
		let mut parents = CellMap::new();
		let mut costs = CellMap::new();

		parents.insert(start, None);
		if strategy == Strategy::AStar {
			costs.insert(start, 0);
			let estimate = neighborhood.heuristic(start, goal);
			frontier.push(Entry::with_estimate(start, 0, estimate));
		} else {
			frontier.push(Entry::new(start, 0));
		}

		Search {
			strategy,
			grid,
			neighborhood,
			start,
			goal,
			frontier,
			parents,
			costs,
			closed: CellSet::new(),
			visited_order: vec![],
			pushes: 1,
			outcome: None,
			all_neighbors: Vec::with_capacity(4),
		}
	}

	/// Expands the next Cell of the Frontier.
	///
	/// Stale Frontier entries are skipped without counting as a step. Once the search is
	/// finished, the final [`Step`] is returned again on every call.
	pub fn step(&mut self) -> Step {
		if let Some(outcome) = self.outcome {
			return outcome;
		}

		while let Some(entry) = self.frontier.pop() {
			let current = entry.cell;

			if self.strategy == Strategy::AStar {
				if self.costs.get(&current).map_or(false, |&best| entry.cost > best) {
					trace!("{}: discarding stale entry {:?}", self.strategy, entry);
					continue;
				}
				if !self.closed.insert(current) {
					continue;
				}
			}

			self.visited_order.push(current);
			trace!("{}: expanding {:?} at cost {}", self.strategy, current, entry.cost);

			if current == self.goal {
				let outcome = Step::Reached(current);
				self.outcome = Some(outcome);
				return outcome;
			}

			self.expand(entry);
			return Step::Expanded(current);
		}

		self.outcome = Some(Step::Exhausted);
		Step::Exhausted
	}

	fn expand(&mut self, entry: Entry) {
		let current = entry.cell;
		let other_cost = entry.cost + 1;

		self.all_neighbors.clear();
		self.neighborhood
			.get_all_neighbors(current, &mut self.all_neighbors);

		for &other in self.all_neighbors.iter() {
			if !self.grid.is_free(other) {
				continue;
			}

			match self.strategy {
				Strategy::BreadthFirst | Strategy::DepthFirst => {
					if self.parents.contains_key(&other) {
						continue;
					}
					self.parents.insert(other, Some(current));
					self.frontier.push(Entry::new(other, other_cost));
				}
				Strategy::AStar => {
					if self.closed.contains(&other) {
						continue;
					}
					let improves = self
						.costs
						.get(&other)
						.map_or(true, |&prev_cost| other_cost < prev_cost);
					if !improves {
						continue;
					}
					self.costs.insert(other, other_cost);
					self.parents.insert(other, Some(current));
					let estimate = other_cost + self.neighborhood.heuristic(other, self.goal);
					self.frontier
						.push(Entry::with_estimate(other, other_cost, estimate));
				}
			}
			self.pushes += 1;
		}
	}

	/// Steps until the search is finished and returns the final [`Step`]
	pub fn run(&mut self) -> Step {
		loop {
			match self.step() {
				Step::Expanded(_) => {}
				outcome => return outcome,
			}
		}
	}

	/// `true` once the goal was reached or the Frontier ran empty
	pub fn is_finished(&self) -> bool {
		self.outcome.is_some()
	}

	/// The Cells expanded so far, in order
	pub fn visited(&self) -> &[Cell] {
		&self.visited_order
	}

	/// The parent pointers recorded so far. The start maps to `None`.
	pub fn parents(&self) -> &CellMap<Option<Cell>> {
		&self.parents
	}

	/// The best known number of steps from the start to `cell`.
	///
	/// Only A* tracks costs; the other Strategies return `None` for every Cell but the start.
	pub fn cost(&self, cell: Cell) -> Option<usize> {
		if cell == self.start {
			Some(0)
		} else {
			self.costs.get(&cell).copied()
		}
	}

	/// How many entries were pushed to the Frontier, including the start and entries that
	/// later turned out to be stale
	pub fn frontier_pushes(&self) -> usize {
		self.pushes
	}

	/// Number of entries currently waiting in the Frontier
	pub fn frontier_len(&self) -> usize {
		self.frontier.len()
	}

	/// The Strategy of this search
	pub fn strategy(&self) -> Strategy {
		self.strategy
	}

	/// Finishes the search, returning the trace and the Path.
	///
	/// A search that was stopped before reaching the goal returns an empty Path, even if the
	/// goal was already discovered.
	pub fn into_result(self) -> SearchResult {
		let path = match self.outcome {
			Some(Step::Reached(_)) => reconstruct_path(&self.parents, self.goal),
			_ => Path::empty(),
		};
		SearchResult {
			visited_order: self.visited_order,
			path,
		}
	}
}

/// Runs a complete search with the given Strategy.
///
/// ## Examples
/// ```
/// # use grid_search::prelude::*;
/// let grid = Grid::new(3, 3).unwrap();
///
/// for strategy in Strategy::ALL {
///     let result = search(strategy, &grid, (0, 0), (2, 2));
///     assert_eq!(result.visited_order[0], (0, 0));
///     assert_eq!(result.path.last(), Some(&(2, 2)));
/// }
/// ```
pub fn search(strategy: Strategy, grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
	let timer = Instant::now();

	let mut search = Search::new(strategy, grid, start, goal);
	search.run();
	let pushes = search.frontier_pushes();
	let result = search.into_result();

	debug!(
		"{}: visited {} cells, path length {}, {} frontier pushes, took {:?}",
		strategy,
		result.visited_order.len(),
		result.path.len(),
		pushes,
		timer.elapsed()
	);
	result
}

/// Searches with [`Strategy::BreadthFirst`]
pub fn breadth_first_search(grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
	search(Strategy::BreadthFirst, grid, start, goal)
}

/// Searches with [`Strategy::DepthFirst`]
pub fn depth_first_search(grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
	search(Strategy::DepthFirst, grid, start, goal)
}

/// Searches with [`Strategy::AStar`], using the Manhattan distance as the Heuristic
pub fn a_star_search(grid: &Grid, start: Cell, goal: Cell) -> SearchResult {
	search(Strategy::AStar, grid, start, goal)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn open_3x3() -> Grid {
		Grid::new(3, 3).unwrap()
	}

	#[test]
	fn breadth_first_order() {
		let result = breadth_first_search(&open_3x3(), (0, 0), (2, 2));
		assert_eq!(
			result.visited_order,
			vec![(0, 0), (1, 0), (0, 1), (2, 0), (1, 1), (0, 2), (2, 1), (1, 2), (2, 2)]
		);
		assert_eq!(result.path.cells(), &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
	}

	#[test]
	fn depth_first_prefers_last_direction() {
		let result = depth_first_search(&open_3x3(), (0, 0), (2, 2));
		assert_eq!(
			result.visited_order,
			vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
		);
		assert_eq!(result.path.cells(), &result.visited_order[..]);
	}

	#[test]
	fn a_star_order() {
		let result = a_star_search(&open_3x3(), (0, 0), (2, 2));
		assert_eq!(
			result.visited_order,
			vec![(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (2, 0), (1, 2), (2, 1), (2, 2)]
		);
		assert_eq!(result.path.cells(), &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
	}

	#[test]
	fn start_is_goal() {
		let grid = open_3x3();
		for strategy in Strategy::ALL {
			let result = search(strategy, &grid, (1, 1), (1, 1));
			assert_eq!(result.visited_order, vec![(1, 1)], "{}", strategy);
			assert_eq!(result.path.cells(), &[(1, 1)], "{}", strategy);
		}
	}

	#[test]
	fn walled_in_start() {
		let grid: Grid = ".#.\n##.\n...".parse().unwrap();
		for strategy in Strategy::ALL {
			let result = search(strategy, &grid, (0, 0), (2, 2));
			assert!(!result.is_reachable(), "{}", strategy);
			assert_eq!(result.visited_order, vec![(0, 0)], "{}", strategy);
		}
	}

	#[test]
	fn step_after_finish_repeats_outcome() {
		let grid: Grid = ".#.".parse().unwrap();
		let mut search = Search::new(Strategy::BreadthFirst, &grid, (0, 0), (0, 2));
		assert_eq!(search.step(), Step::Expanded((0, 0)));
		assert_eq!(search.step(), Step::Exhausted);
		assert!(search.is_finished());
		assert_eq!(search.step(), Step::Exhausted);
		assert_eq!(search.visited(), &[(0, 0)]);
	}

	#[test]
	fn stopped_search_has_no_path() {
		let grid = open_3x3();
		let mut search = Search::new(Strategy::BreadthFirst, &grid, (0, 0), (0, 1));
		search.step();
		// (0, 1) is discovered, but was never expanded
		assert!(search.parents().contains_key(&(0, 1)));
		assert!(search.into_result().path.is_empty());
	}

	#[test]
	fn a_star_tracks_costs() {
		let grid: Grid = "...\n##.\n...".parse().unwrap();
		let mut search = Search::new(Strategy::AStar, &grid, (0, 0), (2, 0));
		assert_eq!(search.run(), Step::Reached((2, 0)));
		assert_eq!(search.cost((0, 0)), Some(0));
		assert_eq!(search.cost((1, 2)), Some(3));
		assert_eq!(search.cost((2, 0)), Some(6));
		assert_eq!(search.into_result().path.steps(), Some(6));
	}

	/// Neighbors like [`ManhattanNeighborhood`], but a hand picked Heuristic per Cell
	#[derive(Clone, Debug)]
	struct TableHeuristic {
		inner: ManhattanNeighborhood,
		table: [[usize; 4]; 2],
	}

	impl Neighborhood for TableHeuristic {
		fn get_all_neighbors(&self, cell: Cell, target: &mut Vec<Cell>) {
			self.inner.get_all_neighbors(cell, target)
		}
		fn heuristic(&self, cell: Cell, _goal: Cell) -> usize {
			self.table[cell.0][cell.1]
		}
	}

	#[test]
	fn a_star_discards_stale_entries() {
		// The inflated estimate at (0, 1) delays the short route along the top row, so (0, 2)
		// is first discovered from below at cost 4, then improved to cost 2. The old entry is
		// popped just before the goal and must be skipped.
		let grid = Grid::new(2, 4).unwrap();
		let neighborhood = TableHeuristic {
			inner: *grid.neighborhood(),
			table: [[2, 3, 0, 0], [0, 0, 0, 0]],
		};
		let mut search =
			Search::with_neighborhood(Strategy::AStar, &grid, neighborhood, (0, 0), (1, 3));

		assert_eq!(search.run(), Step::Reached((1, 3)));
		assert_eq!(search.cost((0, 2)), Some(2));
		// 8 distinct cells, but (0, 2) was pushed twice
		assert_eq!(search.parents().len(), 8);
		assert_eq!(search.frontier_pushes(), 9);
		assert_eq!(search.frontier_len(), 0);
		assert_eq!(
			search.visited(),
			&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 1), (0, 2), (0, 3), (1, 3)]
		);
		assert_eq!(
			search.into_result().path.cells(),
			&[(0, 0), (1, 0), (1, 1), (1, 2), (1, 3)]
		);
	}

	#[test]
	fn strategy_names() {
		let names: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
		assert_eq!(names, vec!["BFS", "DFS", "A*"]);
		assert!(Strategy::AStar.is_optimal());
		assert!(!Strategy::DepthFirst.is_optimal());
	}
}
