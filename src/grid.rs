//! The Grid that is searched

use crate::{neighbors::ManhattanNeighborhood, Cell};
use std::fmt;
use std::str::FromStr;

/// The state of a single Cell on the Grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tile {
	/// can be walked across
	#[default]
	Free,
	/// a wall
	Blocked,
}

impl Tile {
	/// the character used for this Tile by [`Grid`]'s `Display` and `FromStr` implementations
	pub fn symbol(self) -> char {
		match self {
			Tile::Free => '.',
			Tile::Blocked => '#',
		}
	}

	/// parses a character produced by [`symbol`](Tile::symbol)
	pub fn from_symbol(symbol: char) -> Option<Tile> {
		match symbol {
			'.' => Some(Tile::Free),
			'#' => Some(Tile::Blocked),
			_ => None,
		}
	}

	/// returns the other Tile
	pub fn toggled(self) -> Tile {
		match self {
			Tile::Free => Tile::Blocked,
			Tile::Blocked => Tile::Free,
		}
	}
}

/// Reasons why a [`Grid`] could not be constructed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
	/// the Grid would have no rows or no columns
	Empty,
	/// `rows * cols` Tiles do not fit into memory
	TooLarge {
		/// requested number of rows
		rows: usize,
		/// requested number of columns
		cols: usize,
	},
	/// a row does not have the same length as the first row
	RaggedRow {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},
	/// a character that is neither `'.'` nor `'#'`
	UnknownTile {
		/// row of the character
		row: usize,
		/// column of the character
		col: usize,
		/// the character itself
		symbol: char,
	},
}

impl fmt::Display for GridError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GridError::Empty => write!(f, "a grid needs at least one row and one column"),
			GridError::TooLarge { rows, cols } => {
				write!(f, "a grid of {}x{} tiles is too large", rows, cols)
			}
			GridError::RaggedRow {
				row,
				expected,
				found,
			} => write!(
				f,
				"row {} has {} columns, but the grid has {} columns",
				row, found, expected
			),
			GridError::UnknownTile { row, col, symbol } => {
				write!(f, "unknown tile {:?} at ({}, {})", symbol, row, col)
			}
		}
	}
}

impl std::error::Error for GridError {}

/// A rectangular occupancy map of free and blocked [`Tile`]s.
///
/// The Grid is addressed by [`Cell`]s in `(row, column)` order, with `(0, 0)` in the top left.
/// It always has at least one row and one column, and every row has the same length.
///
/// ## Examples
/// ```
/// # use grid_search::prelude::*;
/// let grid = Grid::from_values(&[
///     [0u8, 1, 0],
///     [0, 0, 0],
/// ]).unwrap();
///
/// assert_eq!(grid.dimensions(), (2, 3));
/// assert!(grid.is_free((0, 0)));
/// assert!(!grid.is_free((0, 1)));
/// assert!(!grid.is_free((5, 5))); // out of bounds
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
	rows: usize,
	cols: usize,
	tiles: Vec<Tile>,
	neighborhood: ManhattanNeighborhood,
}

impl Grid {
	/// Creates a Grid of the given size where every Tile is [`Free`](Tile::Free)
	pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
		if rows == 0 || cols == 0 {
			return Err(GridError::Empty);
		}
		let len = rows
			.checked_mul(cols)
			.filter(|&len| len <= isize::MAX as usize)
			.ok_or(GridError::TooLarge { rows, cols })?;
		Ok(Grid {
			rows,
			cols,
			tiles: vec![Tile::Free; len],
			neighborhood: ManhattanNeighborhood::new(rows, cols),
		})
	}

	/// Creates a Grid from a list of rows of Tiles
	pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Grid, GridError> {
		let cols = rows.first().map_or(0, |row| row.as_ref().len());
		let mut grid = Grid::new(rows.len(), cols)?;
		for (r, row) in rows.iter().enumerate() {
			let row = row.as_ref();
			if row.len() != cols {
				return Err(GridError::RaggedRow {
					row: r,
					expected: cols,
					found: row.len(),
				});
			}
			grid.tiles[r * cols..(r + 1) * cols].copy_from_slice(row);
		}
		Ok(grid)
	}

	/// Creates a Grid from a numeric matrix, where `0` is free and anything else is a wall
	pub fn from_values<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, GridError> {
		let rows: Vec<Vec<Tile>> = rows
			.iter()
			.map(|row| {
				row.as_ref()
					.iter()
					.map(|&value| if value == 0 { Tile::Free } else { Tile::Blocked })
					.collect()
			})
			.collect();
		Grid::from_rows(&rows)
	}

	/// The size of the Grid as `(rows, columns)`
	pub fn dimensions(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// Checks if a Cell is inside the Grid
	pub fn in_bounds(&self, (row, col): Cell) -> bool {
		row < self.rows && col < self.cols
	}

	/// The Tile at `cell`, or `None` if `cell` is out of bounds
	pub fn get(&self, cell: Cell) -> Option<Tile> {
		self.index(cell).map(|i| self.tiles[i])
	}

	/// Checks if a Cell can be walked across.
	///
	/// Cells outside of the Grid are never free.
	pub fn is_free(&self, cell: Cell) -> bool {
		self.get(cell) == Some(Tile::Free)
	}

	/// All in-bounds neighbors of `cell`, in the order up, down, left, right.
	///
	/// Blocked neighbors are included.
	pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
		self.neighborhood.neighbors(cell)
	}

	/// The [`Neighborhood`](crate::neighbors::Neighborhood) that defines how the Grid is traversed
	pub fn neighborhood(&self) -> &ManhattanNeighborhood {
		&self.neighborhood
	}

	/// Replaces the Tile at `cell` and returns the previous one.
	///
	/// Returns `None` and leaves the Grid unchanged if `cell` is out of bounds.
	pub fn set(&mut self, cell: Cell, tile: Tile) -> Option<Tile> {
		let index = self.index(cell)?;
		Some(std::mem::replace(&mut self.tiles[index], tile))
	}

	/// Turns a wall into a free Tile and vice versa. Returns the new Tile.
	///
	/// ## Examples
	/// ```
	/// # use grid_search::prelude::*;
	/// let mut grid = Grid::new(2, 2).unwrap();
	///
	/// assert_eq!(grid.toggle((1, 1)), Some(Tile::Blocked));
	/// assert_eq!(grid.toggle((1, 1)), Some(Tile::Free));
	/// assert_eq!(grid.toggle((2, 0)), None);
	/// ```
	pub fn toggle(&mut self, cell: Cell) -> Option<Tile> {
		let index = self.index(cell)?;
		let tile = self.tiles[index].toggled();
		self.tiles[index] = tile;
		Some(tile)
	}

	/// Number of free Tiles on the Grid
	pub fn free_count(&self) -> usize {
		self.tiles.iter().filter(|&&t| t == Tile::Free).count()
	}

	fn index(&self, cell: Cell) -> Option<usize> {
		if self.in_bounds(cell) {
			Some(cell.0 * self.cols + cell.1)
		} else {
			None
		}
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in self.tiles.chunks(self.cols) {
			for tile in row {
				write!(f, "{}", tile.symbol())?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

impl FromStr for Grid {
	type Err = GridError;

	/// Parses one line per row, `'.'` for free and `'#'` for blocked Tiles.
	///
	/// Blank lines and surrounding whitespace are ignored.
	fn from_str(s: &str) -> Result<Grid, GridError> {
		let mut rows = vec![];
		for (r, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
			let row = line
				.chars()
				.enumerate()
				.map(|(col, symbol)| {
					Tile::from_symbol(symbol).ok_or(GridError::UnknownTile { row: r, col, symbol })
				})
				.collect::<Result<Vec<_>, _>>()?;
			rows.push(row);
		}
		Grid::from_rows(&rows)
	}
}
