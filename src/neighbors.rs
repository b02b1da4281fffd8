//! How the search moves across the Grid

use crate::Cell;
use std::fmt::Debug;

/// Defines how a search can move along the Grid.
///
/// It provides a function to query all neighboring Cells of an existing Cell and a Heuristic
/// for how long it might take to reach a goal from a Cell.
///
/// The order in which neighbors are returned matters: every search expands them in exactly
/// that order, so it shapes the visitation trace.
pub trait Neighborhood: Clone + Debug {
	/// Provides the in-bounds Neighbors of a Cell
	///
	/// Note that these are not checked for walls. That check is done by the search.
	fn get_all_neighbors(&self, cell: Cell, target: &mut Vec<Cell>);
	/// Gives a Heuristic for how long it takes to reach `goal` from `cell`.
	///
	/// To keep A* optimal, this must never overestimate the actual number of steps.
	fn heuristic(&self, cell: Cell, goal: Cell) -> usize;
}

/// The number of steps between two Cells when only moving up, down, left or right.
///
/// Also known as [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
/// ```
/// # use grid_search::neighbors::manhattan_distance;
/// assert_eq!(manhattan_distance((3, 1), (0, 0)), 3 + 1);
/// ```
pub fn manhattan_distance(a: Cell, b: Cell) -> usize {
	a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Row and column offsets for up, down, left, right
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A Neighborhood for moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
/// Neighbors are always listed up, down, left, right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManhattanNeighborhood {
	rows: usize,
	cols: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `rows` and `cols` are the size of the Grid to move on.
	pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { rows, cols }
	}

	/// Iterates over the in-bounds neighbors of `cell`, without allocating
	pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
		let (rows, cols) = (self.rows, self.cols);

		DIRECTIONS
			.into_iter()
			.map(move |(dr, dc)| (cell.0 as isize + dr, cell.1 as isize + dc))
			.filter(move |&(r, c)| r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols)
			.map(|(r, c)| (r as usize, c as usize))
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, cell: Cell, target: &mut Vec<Cell>) {
		target.extend(self.neighbors(cell));
	}
	fn heuristic(&self, cell: Cell, goal: Cell) -> usize {
		manhattan_distance(cell, goal)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn get_all_neighbors() {
		let neighborhood = ManhattanNeighborhood::new(5, 5);
		let mut target = vec![];
		neighborhood.get_all_neighbors((0, 2), &mut target);
		assert_eq!(target, vec![(1, 2), (0, 1), (0, 3)]);
	}

	#[test]
	fn get_all_neighbors_corner() {
		let neighborhood = ManhattanNeighborhood::new(2, 3);
		let mut target = vec![];
		neighborhood.get_all_neighbors((1, 2), &mut target);
		assert_eq!(target, vec![(0, 2), (1, 1)]);
	}

	#[test]
	fn single_cell_has_no_neighbors() {
		let neighborhood = ManhattanNeighborhood::new(1, 1);
		assert_eq!(neighborhood.neighbors((0, 0)).count(), 0);
	}

	#[test]
	fn heuristic() {
		let neighborhood = ManhattanNeighborhood::new(5, 5);
		assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
		assert_eq!(neighborhood.heuristic((0, 4), (4, 0)), 8);
		assert_eq!(neighborhood.heuristic((2, 2), (2, 2)), 0);
	}
}
