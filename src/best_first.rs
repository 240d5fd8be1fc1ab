/// This module implements a generalized best-first search in the style of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
/// except that the frontier priority is supplied by the caller and the order in which nodes are
/// finalized is recorded, so that uniform-cost search, A* and greedy best-first search all run
/// through the same loop.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Marks the root of the parent chain.
const NO_PARENT: usize = usize::MAX;

struct SmallestPriorityHolder<K> {
    priority: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestPriorityHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestPriorityHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority)
            && self.cost.eq(&other.cost)
            && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestPriorityHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestPriorityHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest priority first. Ties favour the entry with the largest cost, which lets A*
        // run along the front of equally promising nodes, and then the oldest entry.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Outcome of [best_first]: the path to the first node satisfying the goal together with its
/// cost if one was found, and the nodes in the order they were finalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration<N, C> {
    pub path: Option<(Vec<N>, C)>,
    pub explored: Vec<N>,
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        parents
            .get_index(i)
            .map(|(_, &(parent, _))| parent)
            .filter(|&p| p != NO_PARENT)
    })
    .filter_map(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Runs a best-first search from `start`.
///
/// `successors` yields the neighbours of a node together with the cost of the edge towards
/// them, `priority` maps a discovered node and its best known cost to its frontier priority
/// (smallest first), and `success` recognizes the goal.
///
/// The frontier may hold several entries for the same node when a cheaper way to reach it is
/// found after it was first pushed. Only the first pop of a node is authoritative; later pops
/// are discarded. Expansion always uses the best recorded cost of the popped node rather than
/// the cost stored in its frontier entry.
pub fn best_first<N, C, FN, IN, FP, FS>(
    start: &N,
    initial_priority: C,
    mut successors: FN,
    mut priority: FP,
    mut success: FS,
) -> Exploration<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FP: FnMut(&N, C) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestPriorityHolder {
        priority: initial_priority,
        cost: Zero::zero(),
        sequence,
        index: 0,
    });
    // Folds cost_so_far and came_from into one map: node -> (parent index, best cost).
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut visited: FxHashSet<usize> = FxHashSet::default();
    let mut explored = Vec::new();

    while let Some(SmallestPriorityHolder { index, .. }) = to_see.pop() {
        if !visited.insert(index) {
            continue;
        }
        let (successors, cost) = {
            let Some((node, &(_, cost))) = parents.get_index(index) else {
                continue;
            };
            explored.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, index);
                return Exploration {
                    path: Some((path, cost)),
                    explored,
                };
            }
            (successors(node), cost)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let p; // priority(&successor, new_cost)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    p = priority(e.key(), new_cost);
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        p = priority(e.key(), new_cost);
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            sequence += 1;
            to_see.push(SmallestPriorityHolder {
                priority: p,
                cost: new_cost,
                sequence,
                index: n,
            });
        }
    }
    Exploration {
        path: None,
        explored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A weighted line graph 0 - 1 - 2 - 3 with a costly shortcut 0 - 3.
    fn line_successors(n: &u32) -> Vec<(u32, u32)> {
        match n {
            0 => vec![(1, 1), (3, 10)],
            1 => vec![(0, 1), (2, 1)],
            2 => vec![(1, 1), (3, 1)],
            3 => vec![(2, 1), (0, 10)],
            _ => vec![],
        }
    }

    #[test]
    fn uniform_cost_avoids_expensive_shortcut() {
        let result = best_first(&0, 0, line_successors, |_, g| g, |n| *n == 3);
        assert_eq!(result.path, Some((vec![0, 1, 2, 3], 3)));
        assert_eq!(result.explored, vec![0, 1, 2, 3]);
    }

    #[test]
    fn start_is_goal() {
        let result = best_first(&7, 0, line_successors, |_, g| g, |n| *n == 7);
        assert_eq!(result.path, Some((vec![7], 0)));
        assert_eq!(result.explored, vec![7]);
    }

    /// Node 3 is first pushed through the expensive shortcut at cost 10 and later improved to
    /// cost 3. The stale cost-10 entry is popped after node 3 was finalized and must be dropped
    /// instead of finalizing node 3 a second time.
    #[test]
    fn exhausts_without_goal_discarding_stale_entries() {
        let mut expanded = Vec::new();
        let result = best_first(
            &0,
            0,
            |n: &u32| {
                expanded.push(*n);
                line_successors(n)
            },
            |_, g| g,
            |n| *n == 42,
        );
        assert_eq!(result.path, None);
        assert_eq!(result.explored, vec![0, 1, 2, 3]);
        assert_eq!(expanded, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ties_prefer_larger_cost_then_insertion_order() {
        let mut heap = BinaryHeap::new();
        for (priority, cost, sequence) in [(5, 1, 0), (5, 3, 1), (4, 0, 2), (5, 3, 3)] {
            heap.push(SmallestPriorityHolder {
                priority,
                cost,
                sequence,
                index: sequence,
            });
        }
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect::<Vec<_>>();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }
}
