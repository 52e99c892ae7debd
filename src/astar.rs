//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which additionally reports how many nodes were expanded and can stop after a fixed number of
//! expansions.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::warn;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::iter;

use crate::node::NO_PARENT;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then prefers the deeper of two equally promising
        // nodes
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Result of an [astar] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstarOutcome<N, C> {
    /// The path from start to goal and its cost, if one was found.
    pub solution: Option<(Vec<N>, C)>,
    /// Number of heap entries that were expanded, stale entries excluded.
    pub expanded: usize,
    /// Set when the search stopped because it hit the expansion limit.
    pub budget_exceeded: bool,
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Best-first search ordered by `cost + heuristic`. With an admissible heuristic the returned path
/// is a cheapest one. `max_expansions` bounds the number of nodes expanded; [None] means no bound.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> AstarOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut expanded = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                continue;
            }
            if max_expansions.is_some_and(|max| expanded >= max) {
                warn!("A* stopped after {} expansions", expanded);
                return AstarOutcome {
                    solution: None,
                    expanded,
                    budget_exceeded: true,
                };
            }
            expanded += 1;
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return AstarOutcome {
                    solution: Some((path, cost)),
                    expanded,
                    budget_exceeded: false,
                };
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    AstarOutcome {
        solution: None,
        expanded,
        budget_exceeded: false,
    }
}
