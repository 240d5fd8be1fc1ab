use crate::{cell::Cell, strategy::Strategy};

/// Uniform-cost search: the priority is the path cost alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dijkstra;

impl Strategy for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn initial_priority(&self, _: Cell, _: Cell) -> u32 {
        0
    }

    fn priority(&self, _: Cell, _: Cell, cost: u32) -> u32 {
        cost
    }
}
