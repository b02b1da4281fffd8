//! The orderings in which discovered Cells are expanded

use crate::Cell;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// An entry of the [`Frontier`]: a Cell together with the Cost it was discovered with.
///
/// `estimate` is the estimated total Cost of a Path through `cell`. It is only meaningful for the
/// [`Priority`](Frontier::Priority) Frontier and is ignored by the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
	/// the Cell to expand
	pub cell: Cell,
	/// number of steps from the start when this Entry was pushed
	pub cost: usize,
	/// `cost` plus the Heuristic
	pub estimate: usize,
}

impl Entry {
	/// Creates an Entry without an estimate, for uninformed searches
	pub fn new(cell: Cell, cost: usize) -> Entry {
		Entry {
			cell,
			cost,
			estimate: cost,
		}
	}

	/// Creates an Entry with an estimated total cost
	pub fn with_estimate(cell: Cell, cost: usize, estimate: usize) -> Entry {
		Entry {
			cell,
			cost,
			estimate,
		}
	}
}

// BinaryHeap is a max-heap, so the ordering is reversed: the lowest estimate is the greatest
// element. Ties go to the lower cost, then to the lower Cell.
impl Ord for Entry {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.estimate
			.cmp(&self.estimate)
			.then_with(|| rhs.cost.cmp(&self.cost))
			.then_with(|| rhs.cell.cmp(&self.cell))
	}
}
impl PartialOrd for Entry {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}

/// The set of discovered but not yet expanded Cells, ordered by one of three disciplines.
///
/// ## Examples
/// ```
/// # use grid_search::frontier::{Entry, Frontier};
/// let mut fifo = Frontier::fifo();
/// let mut lifo = Frontier::lifo();
/// for cell in [(0, 0), (0, 1)] {
///     fifo.push(Entry::new(cell, 0));
///     lifo.push(Entry::new(cell, 0));
/// }
/// assert_eq!(fifo.pop().map(|e| e.cell), Some((0, 0)));
/// assert_eq!(lifo.pop().map(|e| e.cell), Some((0, 1)));
/// ```
#[derive(Clone, Debug)]
pub enum Frontier {
	/// first in, first out: Breadth-First Search
	Fifo(VecDeque<Entry>),
	/// last in, first out: Depth-First Search
	Lifo(Vec<Entry>),
	/// lowest estimate first: A* Search
	Priority(BinaryHeap<Entry>),
}

impl Frontier {
	/// an empty queue
	pub fn fifo() -> Frontier {
		Frontier::Fifo(VecDeque::new())
	}
	/// an empty stack
	pub fn lifo() -> Frontier {
		Frontier::Lifo(Vec::new())
	}
	/// an empty min-heap, keyed by `(estimate, cost, cell)`
	pub fn priority() -> Frontier {
		Frontier::Priority(BinaryHeap::new())
	}

	/// Adds an Entry to the Frontier
	pub fn push(&mut self, entry: Entry) {
		match self {
			Frontier::Fifo(queue) => queue.push_back(entry),
			Frontier::Lifo(stack) => stack.push(entry),
			Frontier::Priority(heap) => heap.push(entry),
		}
	}

	/// Removes the next Entry to expand
	pub fn pop(&mut self) -> Option<Entry> {
		match self {
			Frontier::Fifo(queue) => queue.pop_front(),
			Frontier::Lifo(stack) => stack.pop(),
			Frontier::Priority(heap) => heap.pop(),
		}
	}

	/// Number of pending Entries, including stale ones
	pub fn len(&self) -> usize {
		match self {
			Frontier::Fifo(queue) => queue.len(),
			Frontier::Lifo(stack) => stack.len(),
			Frontier::Priority(heap) => heap.len(),
		}
	}

	/// `true` if nothing is left to expand
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
