use crate::{cell::Cell, strategy::Strategy, DEFAULT_HEURISTIC_FACTOR};

/// A* with the Manhattan distance heuristic, which never overestimates on a unit-cost
/// 4-connected grid, so the paths it finds are shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Astar;

impl Strategy for Astar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn initial_priority(&self, _: Cell, _: Cell) -> u32 {
        0
    }

    fn priority(&self, next: Cell, end: Cell, cost: u32) -> u32 {
        cost + next.manhattan(&end)
    }
}

/// Weighted A*: scales the heuristic, causing cells closer to the end (ignoring walls) to be
/// expanded sooner than in plain [Astar]. Factors above 1.0 give up optimality for fewer
/// expansions.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedAstar {
    pub heuristic_factor: f32,
}

impl WeightedAstar {
    pub fn new(heuristic_factor: f32) -> WeightedAstar {
        WeightedAstar { heuristic_factor }
    }
}

impl Default for WeightedAstar {
    fn default() -> Self {
        WeightedAstar::new(DEFAULT_HEURISTIC_FACTOR)
    }
}

impl Strategy for WeightedAstar {
    fn name(&self) -> &'static str {
        "weighted astar"
    }

    fn initial_priority(&self, _: Cell, _: Cell) -> u32 {
        0
    }

    /// Just the cost plus the heuristic times the factor. Huge or infinite factors saturate
    /// at [u32::MAX]; negative and NaN factors count as zero.
    fn priority(&self, next: Cell, end: Cell, cost: u32) -> u32 {
        cost.saturating_add((next.manhattan(&end) as f32 * self.heuristic_factor) as u32)
    }
}
