use crate::{cell::Cell, strategy::Strategy};

/// Greedy best-first search: the priority is the Manhattan distance to the end, ignoring the
/// cost of getting there. Finds a path whenever one exists but not necessarily a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn initial_priority(&self, start: Cell, end: Cell) -> u32 {
        start.manhattan(&end)
    }

    fn priority(&self, next: Cell, end: Cell, _: u32) -> u32 {
        next.manhattan(&end)
    }
}
