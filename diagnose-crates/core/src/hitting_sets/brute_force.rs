use itertools::Itertools;
use log::debug;

use super::hits_all;
use crate::basic_types::ComponentId;
use crate::basic_types::ComponentSet;
use crate::minimality::retain_minimal;

/// The outcome of [`brute_force_hitting_sets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceResult {
    /// Every combination of components which hits all conflict sets.
    pub hitting_sets: Vec<ComponentSet>,
    /// The minimal hitting sets.
    pub minimal_hitting_sets: Vec<ComponentSet>,
    /// The number of combinations which were tested.
    pub combinations_tested: u64,
}

/// Computes the hitting sets of `conflict_sets` by testing every combination of the components
/// occurring in them, in increasing size.
///
/// The cost is exponential in the number of distinct components; this is intended as a reference
/// for the HS-tree search on small inputs.
///
/// ```rust
/// # use diagnose_core::brute_force_hitting_sets;
/// # use diagnose_core::component_set;
/// let conflicts = vec![component_set(["A", "B"]), component_set(["A", "C"])];
/// let result = brute_force_hitting_sets(&conflicts);
///
/// assert_eq!(
///     result.minimal_hitting_sets,
///     vec![component_set(["A"]), component_set(["B", "C"])]
/// );
/// ```
pub fn brute_force_hitting_sets(conflict_sets: &[ComponentSet]) -> BruteForceResult {
    if conflict_sets.is_empty() {
        return BruteForceResult {
            hitting_sets: vec![ComponentSet::new()],
            minimal_hitting_sets: vec![ComponentSet::new()],
            combinations_tested: 0,
        };
    }

    let universe = conflict_sets
        .iter()
        .flatten()
        .cloned()
        .collect::<ComponentSet>()
        .into_iter()
        .collect::<Vec<ComponentId>>();

    let mut combinations_tested = 0;
    let mut hitting_sets = Vec::new();
    for size in 1..=universe.len() {
        for combination in universe.iter().cloned().combinations(size) {
            combinations_tested += 1;
            let candidate = combination.into_iter().collect::<ComponentSet>();
            if hits_all(&candidate, conflict_sets) {
                hitting_sets.push(candidate);
            }
        }
    }

    debug!(
        "Tested {combinations_tested} combinations of {} components, {} hit every conflict set",
        universe.len(),
        hitting_sets.len()
    );

    let minimal_hitting_sets = retain_minimal(hitting_sets.iter().cloned());
    BruteForceResult {
        hitting_sets,
        minimal_hitting_sets,
        combinations_tested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::component_set;

    #[test]
    fn overlapping_conflicts() {
        let conflicts = vec![component_set(["A", "B"]), component_set(["A", "C"])];
        let result = brute_force_hitting_sets(&conflicts);

        assert_eq!(
            result.minimal_hitting_sets,
            vec![component_set(["A"]), component_set(["B", "C"])]
        );
        // {A}, {A, B}, {A, C}, {B, C}, {A, B, C}
        assert_eq!(result.hitting_sets.len(), 5);
        assert_eq!(result.combinations_tested, 7);
    }

    #[test]
    fn disjoint_singletons() {
        let conflicts = vec![component_set(["A"]), component_set(["B"])];
        let result = brute_force_hitting_sets(&conflicts);

        assert_eq!(result.minimal_hitting_sets, vec![component_set(["A", "B"])]);
    }

    #[test]
    fn full_adder_diagnoses() {
        let conflicts = vec![component_set(["X1", "X2"]), component_set(["A2", "O1", "X1"])];
        let result = brute_force_hitting_sets(&conflicts);

        assert_eq!(
            result.minimal_hitting_sets,
            vec![
                component_set(["X1"]),
                component_set(["A2", "X2"]),
                component_set(["O1", "X2"]),
            ]
        );
    }

    #[test]
    fn empty_collection_needs_no_diagnosis() {
        let result = brute_force_hitting_sets(&[]);

        assert_eq!(result.minimal_hitting_sets, vec![ComponentSet::new()]);
        assert_eq!(result.combinations_tested, 0);
    }

    #[test]
    fn empty_conflict_cannot_be_hit() {
        let conflicts = vec![component_set(["A"]), ComponentSet::new()];
        let result = brute_force_hitting_sets(&conflicts);

        assert!(result.hitting_sets.is_empty());
        assert!(result.minimal_hitting_sets.is_empty());
    }
}
