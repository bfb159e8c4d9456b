use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::trace;
use log::warn;

use super::heuristics::Heuristic;
use super::uncovered_conflicts;
use crate::basic_types::ComponentSet;
use crate::basic_types::DisplaySet;
use crate::create_statistics_struct;
use crate::diagnose_assert_moderate;
use crate::minimality::deduplicate;
use crate::minimality::retain_minimal;
use crate::termination::TerminationCondition;

create_statistics_struct!(
    /// Statistics of a single HS-tree search.
    SearchStatistics {
        /// The number of nodes visited, including solution and pruned nodes
        nodes_visited: u64,
        /// The number of nodes whose path hit every conflict set
        num_solution_nodes: u64,
        /// The number of nodes discarded because their path contained a recorded solution
        num_pruned_nodes: u64,
        /// The largest number of pending nodes on the search stack
        max_stack_size: u64,
        /// The time spent searching, in milliseconds
        time_spent_in_search: u64,
    }
);

/// The options of an [`HsTree`] search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// The heuristic selecting the conflict set to branch on.
    pub heuristic: Heuristic,
    /// The seed used by [`Heuristic::Random`]; if absent the generator is seeded from system
    /// entropy and repeated searches may visit different numbers of nodes.
    pub random_seed: Option<u64>,
}

/// Whether a search explored its complete tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every branch was explored; the minimal hitting sets are exactly the diagnoses.
    Complete,
    /// The termination condition stopped the search early; the result contains the solutions
    /// recorded until then.
    Partial,
}

/// The outcome of a hitting set search.
#[derive(Debug, Clone)]
pub struct HittingSetSearch {
    /// Every recorded hitting set, without duplicates but possibly non-minimal.
    pub hitting_sets: Vec<ComponentSet>,
    /// The minimal hitting sets, i.e. the diagnoses.
    pub minimal_hitting_sets: Vec<ComponentSet>,
    pub nodes_visited: u64,
    pub elapsed: Duration,
    pub status: SearchStatus,
    pub statistics: SearchStatistics,
}

impl HittingSetSearch {
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Complete
    }
}

/// A node of the HS-tree. The path is the tentative diagnosis built so far; children extend it
/// by one component.
#[derive(Debug)]
struct SearchNode {
    path: ComponentSet,
}

impl SearchNode {
    fn root() -> Self {
        SearchNode {
            path: ComponentSet::new(),
        }
    }
}

/// Computes all minimal hitting sets of a collection of conflict sets with a pruned tree search.
///
/// Every node branches on one conflict set which its path does not hit yet, with one child per
/// component of that conflict set. A node whose path hits every conflict set is a solution; a
/// node whose path contains an already recorded solution is pruned. Nodes are kept on an
/// explicit stack and explored depth-first, children in the order of their components.
///
/// # Example
/// ```rust
/// # use diagnose_core::component_set;
/// # use diagnose_core::hitting_sets::HsTree;
/// # use diagnose_core::hitting_sets::SearchOptions;
/// # use diagnose_core::termination::Indefinite;
/// let conflicts = vec![component_set(["A", "B"]), component_set(["A", "C"])];
///
/// let result = HsTree::new(SearchOptions::default()).search(&conflicts, &mut Indefinite);
///
/// assert!(result.is_complete());
/// assert_eq!(
///     result.minimal_hitting_sets,
///     vec![component_set(["A"]), component_set(["B", "C"])]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HsTree {
    options: SearchOptions,
}

impl HsTree {
    pub fn new(options: SearchOptions) -> Self {
        HsTree { options }
    }

    pub fn search(
        &self,
        conflicts: &[ComponentSet],
        termination: &mut impl TerminationCondition,
    ) -> HittingSetSearch {
        let started_at = Instant::now();

        if conflicts.is_empty() {
            debug!("No conflict sets were provided, no diagnosis is needed");
            return HittingSetSearch {
                hitting_sets: vec![ComponentSet::new()],
                minimal_hitting_sets: vec![ComponentSet::new()],
                nodes_visited: 0,
                elapsed: started_at.elapsed(),
                status: SearchStatus::Complete,
                statistics: SearchStatistics::default(),
            };
        }

        if conflicts.iter().any(ComponentSet::is_empty) {
            warn!("An empty conflict set cannot be hit, there are no diagnoses");
        }

        let mut selector = self
            .options
            .heuristic
            .create_selector(self.options.random_seed);
        let mut statistics = SearchStatistics::default();
        let mut status = SearchStatus::Complete;
        let mut solutions: Vec<ComponentSet> = Vec::new();
        let mut stack = vec![SearchNode::root()];

        while let Some(node) = stack.pop() {
            if termination.should_stop() {
                debug!(
                    "Search stopped with {} pending nodes",
                    stack.len() + 1
                );
                status = SearchStatus::Partial;
                break;
            }
            statistics.nodes_visited += 1;
            termination.node_has_been_visited();

            let uncovered = uncovered_conflicts(&node.path, conflicts);

            if uncovered.is_empty() {
                trace!("Recording solution {}", DisplaySet(&node.path));
                statistics.num_solution_nodes += 1;
                solutions.push(node.path);
                continue;
            }

            if solutions.iter().any(|solution| solution.is_subset(&node.path)) {
                trace!("Pruning {}", DisplaySet(&node.path));
                statistics.num_pruned_nodes += 1;
                continue;
            }

            let selected = uncovered[selector.select(&uncovered)];
            diagnose_assert_moderate!(selected.is_disjoint(&node.path));

            // Pushed in reverse so that the first component is explored first.
            for component in selected.iter().rev() {
                if node.path.contains(component) {
                    continue;
                }
                let mut path = node.path.clone();
                let _ = path.insert(component.clone());
                stack.push(SearchNode { path });
            }
            statistics.max_stack_size = statistics.max_stack_size.max(stack.len() as u64);
        }

        let elapsed = started_at.elapsed();
        statistics.time_spent_in_search = whole_millis(elapsed);

        let hitting_sets = deduplicate(solutions);
        let minimal_hitting_sets = retain_minimal(hitting_sets.iter().cloned());

        debug!(
            "Search with heuristic {} visited {} nodes and found {} minimal hitting sets",
            self.options.heuristic,
            statistics.nodes_visited,
            minimal_hitting_sets.len()
        );

        HittingSetSearch {
            hitting_sets,
            minimal_hitting_sets,
            nodes_visited: statistics.nodes_visited,
            elapsed,
            status,
            statistics,
        }
    }
}

/// The whole milliseconds of `duration`, saturating at `u64::MAX`.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
