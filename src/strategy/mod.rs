//! Frontier priority strategies. A [Strategy] decides in which order the best-first search
//! finalizes cells; the search loop itself is shared by all of them.
use core::fmt;
use core::str::FromStr;
use thiserror::Error;

use crate::cell::Cell;

pub mod astar;
pub mod dijkstra;
pub mod greedy;

pub use astar::{Astar, WeightedAstar};
pub use dijkstra::Dijkstra;
pub use greedy::Greedy;

/// Computes frontier priorities for [find_path](crate::search::find_path). Smaller priorities
/// are expanded first.
pub trait Strategy {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Priority of the start cell when the search begins.
    fn initial_priority(&self, start: Cell, end: Cell) -> u32;

    /// Priority of `next` once it has been reached with best known path cost `cost`.
    fn priority(&self, next: Cell, end: Cell, cost: u32) -> u32;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn initial_priority(&self, start: Cell, end: Cell) -> u32 {
        (**self).initial_priority(start, end)
    }
    fn priority(&self, next: Cell, end: Cell, cost: u32) -> u32 {
        (**self).priority(next, end, cost)
    }
}

/// Selects one of the stock strategies, for callers that pick the algorithm at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    Astar,
    Dijkstra,
    Greedy,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] =
        [StrategyKind::Astar, StrategyKind::Dijkstra, StrategyKind::Greedy];

    /// The concrete strategy behind this kind.
    pub fn strategy(&self) -> &'static dyn Strategy {
        match self {
            StrategyKind::Astar => &Astar,
            StrategyKind::Dijkstra => &Dijkstra,
            StrategyKind::Greedy => &Greedy,
        }
    }

    /// Whether paths found with this strategy are guaranteed to be shortest.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, StrategyKind::Greedy)
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &'static str {
        self.strategy().name()
    }
    fn initial_priority(&self, start: Cell, end: Cell) -> u32 {
        self.strategy().initial_priority(start, end)
    }
    fn priority(&self, next: Cell, end: Cell, cost: u32) -> u32 {
        self.strategy().priority(next, end, cost)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown strategy {0:?}")]
pub struct UnknownStrategy(pub String);

/// Accepts the full names as well as the single-key shortcuts `a`, `d` and `g`.
impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "astar" | "a*" => Ok(StrategyKind::Astar),
            "d" | "dijkstra" => Ok(StrategyKind::Dijkstra),
            "g" | "greedy" => Ok(StrategyKind::Greedy),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_shortcuts() {
        assert_eq!("astar".parse::<StrategyKind>(), Ok(StrategyKind::Astar));
        assert_eq!("A*".parse::<StrategyKind>(), Ok(StrategyKind::Astar));
        assert_eq!("d".parse::<StrategyKind>(), Ok(StrategyKind::Dijkstra));
        assert_eq!(" Greedy ".parse::<StrategyKind>(), Ok(StrategyKind::Greedy));
        assert_eq!(
            "bfs".parse::<StrategyKind>(),
            Err(UnknownStrategy("bfs".to_owned()))
        );
    }

    #[test]
    fn kinds_delegate_to_strategies() {
        let start = Cell::new(1, 1);
        let end = Cell::new(13, 18);
        let next = Cell::new(2, 1);
        for kind in StrategyKind::ALL {
            let s = kind.strategy();
            assert_eq!(kind.name(), s.name());
            assert_eq!(kind.initial_priority(start, end), s.initial_priority(start, end));
            assert_eq!(kind.priority(next, end, 4), s.priority(next, end, 4));
        }
        assert_eq!(StrategyKind::Greedy.to_string(), "greedy");
    }
}
