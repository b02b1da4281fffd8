use crate::{grid::Grid, Cell, CellSet};

/// Draws the Grid as text, one character per Cell and one line per row.
///
/// Overlapping markers are resolved in this order: start `S`, goal `G`, path `*`,
/// visited `o`, wall `#`, free `.`.
///
/// ## Examples
/// ```
/// # use grid_search::prelude::*;
/// let grid: Grid = "\
/// ...
/// .#.
/// ...
/// ".parse().unwrap();
/// let result = breadth_first_search(&grid, (0, 0), (2, 2));
///
/// assert_eq!(
///     grid_search::render(&grid, (0, 0), (2, 2), &result.visited_order, &result.path),
///     "Soo\n*#o\n**G\n",
/// );
/// ```
pub fn render(grid: &Grid, start: Cell, goal: Cell, visited: &[Cell], path: &[Cell]) -> String {
	let (rows, cols) = grid.dimensions();
	let visited: CellSet = visited.iter().copied().collect();
	let path: CellSet = path.iter().copied().collect();

	let mut out = String::with_capacity(rows * (cols + 1));
	for row in 0..rows {
		for col in 0..cols {
			let cell = (row, col);
			let symbol = if cell == start {
				'S'
			} else if cell == goal {
				'G'
			} else if path.contains(&cell) {
				'*'
			} else if visited.contains(&cell) {
				'o'
			} else if grid.is_free(cell) {
				'.'
			} else {
				'#'
			};
			out.push(symbol);
		}
		out.push('\n');
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn walls_and_free() {
		let grid: Grid = "#.\n.#".parse().unwrap();
		assert_eq!(render(&grid, (0, 1), (1, 0), &[], &[]), "#S\nG#\n");
	}

	#[test]
	fn path_over_visited() {
		let grid = Grid::new(1, 4).unwrap();
		let visited = [(0, 0), (0, 1), (0, 2)];
		let path = [(0, 0), (0, 1)];
		assert_eq!(render(&grid, (0, 0), (0, 3), &visited, &path), "S*oG\n");
	}
}
