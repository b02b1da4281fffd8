//! Revealing a finished search a few Cells at a time

use crate::{search::SearchResult, Cell};

/// Options for configuring a [`Replay`]
///
/// Default options:
/// ```
/// # use grid_search::replay::ReplayConfig;
/// assert_eq!(
/// 	ReplayConfig {
/// 		cells_per_frame: 3,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayConfig {
	/// How many Cells of the visitation trace are revealed per call to
	/// [`advance`](Replay::advance) (defaults to `3`).
	///
	/// A value of `0` is treated as `1`.
	pub cells_per_frame: usize,
}

impl ReplayConfig {
	/// reveal one Cell per frame
	pub const SLOW: ReplayConfig = ReplayConfig { cells_per_frame: 1 };
	/// reveal everything on the first frame
	pub const INSTANT: ReplayConfig = ReplayConfig {
		cells_per_frame: usize::MAX,
	};
}

impl Default for ReplayConfig {
	fn default() -> ReplayConfig {
		ReplayConfig { cells_per_frame: 3 }
	}
}

/// A cursor into the visitation trace of a [`SearchResult`].
///
/// A presentation layer calls [`advance`](Replay::advance) once per frame and draws
/// [`revealed`](Replay::revealed) as explored Cells. The Path is only shown once the whole
/// trace has been revealed.
///
/// ## Examples
/// ```
/// # use grid_search::prelude::*;
/// let grid = Grid::new(3, 3).unwrap();
/// let result = breadth_first_search(&grid, (0, 0), (2, 2));
///
/// let mut replay = Replay::new(&result, ReplayConfig { cells_per_frame: 4 });
/// assert!(replay.revealed().is_empty());
///
/// assert!(replay.advance());
/// assert_eq!(replay.revealed().len(), 4);
/// assert!(replay.visible_path().is_empty());
///
/// while replay.advance() {}
/// assert_eq!(replay.revealed().len(), result.visited_order.len());
/// assert_eq!(replay.visible_path(), result.path.cells());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Replay<'a> {
	result: &'a SearchResult,
	config: ReplayConfig,
	index: usize,
}

impl<'a> Replay<'a> {
	/// Starts a Replay with nothing revealed yet
	pub fn new(result: &'a SearchResult, config: ReplayConfig) -> Replay<'a> {
		Replay {
			result,
			config,
			index: 0,
		}
	}

	/// Reveals the next `cells_per_frame` Cells.
	///
	/// Returns `true` while there is more to reveal after this frame.
	pub fn advance(&mut self) -> bool {
		let total = self.result.visited_order.len();
		let step = self.config.cells_per_frame.max(1);
		self.index = self.index.saturating_add(step).min(total);
		!self.is_finished()
	}

	/// Reveals everything at once
	pub fn finish(&mut self) {
		self.index = self.result.visited_order.len();
	}

	/// Hides everything again
	pub fn reset(&mut self) {
		self.index = 0;
	}

	/// `true` once the whole trace has been revealed
	pub fn is_finished(&self) -> bool {
		self.index >= self.result.visited_order.len()
	}

	/// The part of the visitation trace that has been revealed so far
	pub fn revealed(&self) -> &'a [Cell] {
		&self.result.visited_order[..self.index]
	}

	/// How many Cells have been revealed
	pub fn position(&self) -> usize {
		self.index
	}

	/// The Path, once the trace is fully revealed. Empty before that and for unreachable goals.
	pub fn visible_path(&self) -> &'a [Cell] {
		if self.is_finished() {
			self.result.path.cells()
		} else {
			&[]
		}
	}

	/// The configuration of this Replay
	pub fn config(&self) -> ReplayConfig {
		self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::path::Path;

	fn result(len: usize) -> SearchResult {
		let visited_order: Vec<Cell> = (0..len).map(|i| (0, i)).collect();
		SearchResult {
			path: Path::new(visited_order.clone()),
			visited_order,
		}
	}

	#[test]
	fn advance_clamps_to_trace() {
		let result = result(7);
		let mut replay = Replay::new(&result, ReplayConfig::default());
		assert!(replay.advance());
		assert_eq!(replay.position(), 3);
		assert!(replay.advance());
		assert_eq!(replay.position(), 6);
		assert!(!replay.advance());
		assert_eq!(replay.position(), 7);
		assert!(!replay.advance());
		assert_eq!(replay.position(), 7);
	}

	#[test]
	fn instant_does_not_overflow() {
		let result = result(5);
		let mut replay = Replay::new(&result, ReplayConfig::INSTANT);
		assert!(!replay.advance());
		assert_eq!(replay.revealed().len(), 5);
		assert_eq!(replay.visible_path().len(), 5);
	}

	#[test]
	fn zero_cells_per_frame_still_progresses() {
		let result = result(2);
		let mut replay = Replay::new(&result, ReplayConfig { cells_per_frame: 0 });
		assert!(replay.advance());
		assert_eq!(replay.revealed(), &[(0, 0)]);
	}

	#[test]
	fn reset_and_finish() {
		let result = result(4);
		let mut replay = Replay::new(&result, ReplayConfig::SLOW);
		replay.finish();
		assert!(replay.is_finished());
		assert_eq!(replay.visible_path().len(), 4);
		replay.reset();
		assert!(replay.revealed().is_empty());
		assert!(replay.visible_path().is_empty());
	}

	#[test]
	fn empty_trace_is_finished() {
		let result = SearchResult::default();
		let mut replay = Replay::new(&result, ReplayConfig::default());
		assert!(replay.is_finished());
		assert!(!replay.advance());
	}
}
