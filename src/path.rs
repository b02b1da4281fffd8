//! Paths and their reconstruction from parent pointers

use crate::{Cell, CellMap};
use std::fmt;
use std::ops::{Deref, Index};

/// A sequence of Cells from a start to a goal.
///
/// An empty Path means that the goal could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
	cells: Vec<Cell>,
}

impl Path {
	/// creates a new Path with the given sequence of Cells
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_search::path::Path;
	/// let path = Path::new(vec![(0, 0), (0, 1), (1, 1)]);
	///
	/// assert_eq!(path.len(), 3);
	/// assert_eq!(path.steps(), Some(2));
	/// ```
	pub fn new(cells: Vec<Cell>) -> Path {
		Path { cells }
	}

	/// the Path of an unreachable goal
	pub fn empty() -> Path {
		Path { cells: vec![] }
	}

	/// The number of moves along the Path, which is one less than the number of Cells.
	///
	/// Returns `None` for an empty Path.
	pub fn steps(&self) -> Option<usize> {
		self.cells.len().checked_sub(1)
	}

	/// the Cells of the Path
	pub fn cells(&self) -> &[Cell] {
		&self.cells
	}

	/// consumes the Path, returning its Cells
	pub fn into_cells(self) -> Vec<Cell> {
		self.cells
	}
}

impl From<Vec<Cell>> for Path {
	fn from(cells: Vec<Cell>) -> Path {
		Path::new(cells)
	}
}

impl Index<usize> for Path {
	type Output = Cell;
	fn index(&self, index: usize) -> &Cell {
		&self.cells[index]
	}
}

impl Deref for Path {
	type Target = [Cell];
	fn deref(&self) -> &[Cell] {
		&self.cells
	}
}

impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self.steps() {
			None => write!(fmt, "Path[Steps = 0]: <empty>"),
			Some(steps) => {
				write!(fmt, "Path[Steps = {}]: ", steps)?;
				let (r, c) = self.cells[0];
				write!(fmt, "({}, {})", r, c)?;
				for (r, c) in self.cells.iter().skip(1) {
					write!(fmt, " -> ({}, {})", r, c)?;
				}
				Ok(())
			}
		}
	}
}

/// Walks the parent pointers from `goal` back to the Cell without a parent (the start) and
/// returns the Cells in start to goal order.
///
/// If `goal` has no entry in `parents`, it was never reached and the Path is empty.
///
/// ## Examples
/// ```
/// # use grid_search::{path::reconstruct_path, CellMap};
/// let mut parents = CellMap::new();
/// parents.insert((0, 0), None);
/// parents.insert((0, 1), Some((0, 0)));
/// parents.insert((1, 1), Some((0, 1)));
///
/// assert_eq!(reconstruct_path(&parents, (1, 1)).cells(), &[(0, 0), (0, 1), (1, 1)]);
/// assert!(reconstruct_path(&parents, (5, 5)).is_empty());
/// ```
pub fn reconstruct_path(parents: &CellMap<Option<Cell>>, goal: Cell) -> Path {
	let mut cells = vec![];
	let mut current = Some(goal);

	while let Some(cell) = current {
		let Some(&parent) = parents.get(&cell) else {
			return Path::empty();
		};
		cells.push(cell);
		// the pointers loop without reaching a start
		if cells.len() > parents.len() {
			return Path::empty();
		}
		current = parent;
	}

	cells.reverse();
	Path::new(cells)
}
