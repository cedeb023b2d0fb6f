//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! whose frontier breaks ties between equal estimates in insertion order, which keeps the
//! returned path reproducible across runs and platforms.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index stored for the start node, which has no predecessor.
const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    sequence: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then first-in first-out among equal estimates
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Mutable state of a single search. `parents` doubles as the best-cost map and the came-from
/// map: every discovered node maps to the index of its predecessor and the lowest cost found
/// so far.
struct SearchState<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    parents: FxIndexMap<N, (usize, C)>,
    pushed: usize,
    expanded: usize,
}

impl<N, C> SearchState<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn new(start: N, estimated_cost: C) -> SearchState<N, C> {
        let mut state = SearchState {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
            pushed: 0,
            expanded: 0,
        };
        state.parents.insert(start, (NO_PARENT, Zero::zero()));
        state.push(0, Zero::zero(), estimated_cost);
        state
    }

    fn push(&mut self, index: usize, cost: C, estimated_cost: C) {
        self.to_see.push(SmallestCostHolder {
            estimated_cost,
            cost,
            index,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }

    fn reverse_path(&self, mut index: usize) -> Vec<N> {
        let mut path = Vec::new();
        while let Some((node, &(parent, _))) = self.parents.get_index(index) {
            path.push(node.clone());
            index = parent;
        }
        path.reverse();
        path
    }
}

/// Best-first search from `start` until a node satisfying `success` is popped from the
/// frontier. Returns the path, start included, together with its total cost, or [None] when
/// the frontier runs dry.
///
/// `heuristic` must never overestimate the remaining cost for the returned path to be optimal.
/// A node may be pushed several times when cheaper routes to it are found; superseded entries
/// are skipped when popped.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut state = SearchState::new(start.clone(), heuristic(start));
    while let Some(SmallestCostHolder { cost, index, .. }) = state.to_see.pop() {
        let successors = {
            let (node, &(_, best_cost)) = state.parents.get_index(index)?;
            // We may have inserted a node several times into the binary heap if we found
            // a better way to access it. Only the entry carrying the best cost is expanded.
            if cost > best_cost {
                continue;
            }
            if success(node) {
                let path = state.reverse_path(index);
                debug!(
                    "Path of {} nodes found after expanding {} of {} pushed nodes",
                    path.len(),
                    state.expanded,
                    state.pushed
                );
                return Some((path, cost));
            }
            state.expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match state.parents.entry(successor) {
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
            state.push(n, new_cost, new_cost + h);
        }
    }
    debug!(
        "Frontier exhausted after expanding {} of {} pushed nodes",
        state.expanded, state.pushed
    );
    None
}
