//! Computation of the minimal hitting sets (the diagnoses) of a collection of conflict sets.
//!
//! Two engines are provided: the pruned tree search of [`HsTree`], and the exhaustive
//! [`brute_force_hitting_sets`] which serves as a reference on small inputs. Both produce the
//! same minimal hitting sets on every input.
mod brute_force;
pub mod heuristics;
mod hs_tree;

pub use brute_force::brute_force_hitting_sets;
pub use brute_force::BruteForceResult;
pub use heuristics::Heuristic;
pub use hs_tree::HittingSetSearch;
pub use hs_tree::HsTree;
pub use hs_tree::SearchOptions;
pub use hs_tree::SearchStatistics;
pub use hs_tree::SearchStatus;

use crate::basic_types::intersects;
use crate::basic_types::ComponentSet;
use crate::basic_types::DiagnosisError;
use crate::termination::Indefinite;

/// Runs an unbounded HS-tree search with the heuristic called `heuristic_name`, which is one of
/// `smallest`, `most_frequent` or `random`.
///
/// An unknown heuristic name is reported before any search takes place.
///
/// ```rust
/// # use diagnose_core::component_set;
/// # use diagnose_core::search_hitting_sets;
/// # use diagnose_core::DiagnosisError;
/// let conflicts = vec![component_set(["X1", "X2"]), component_set(["A2", "O1", "X1"])];
///
/// let result = search_hitting_sets(&conflicts, "most_frequent")?;
/// assert_eq!(result.minimal_hitting_sets[0], component_set(["X1"]));
///
/// assert!(search_hitting_sets(&conflicts, "largest").is_err());
/// # Ok::<(), DiagnosisError>(())
/// ```
pub fn search_hitting_sets(
    conflict_sets: &[ComponentSet],
    heuristic_name: &str,
) -> Result<HittingSetSearch, DiagnosisError> {
    let heuristic = heuristic_name.parse::<Heuristic>()?;
    let options = SearchOptions {
        heuristic,
        random_seed: None,
    };
    Ok(HsTree::new(options).search(conflict_sets, &mut Indefinite))
}

/// Whether `candidate` shares a component with every set of `conflict_sets`.
pub fn hits_all(candidate: &ComponentSet, conflict_sets: &[ComponentSet]) -> bool {
    conflict_sets
        .iter()
        .all(|conflict| intersects(candidate, conflict))
}

/// The conflict sets which `path` does not hit, in the order in which they were given.
fn uncovered_conflicts<'a>(
    path: &ComponentSet,
    conflict_sets: &'a [ComponentSet],
) -> Vec<&'a ComponentSet> {
    conflict_sets
        .iter()
        .filter(|conflict| !intersects(path, conflict))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::*;
    use crate::basic_types::component_set;
    use crate::minimality::is_minimal;

    #[test]
    fn scenarios_for_every_heuristic() {
        let scenarios = [
            (
                vec![component_set(["A", "B"]), component_set(["A", "C"])],
                vec![component_set(["A"]), component_set(["B", "C"])],
            ),
            (vec![component_set(["X"])], vec![component_set(["X"])]),
            (
                vec![component_set(["A"]), component_set(["B"])],
                vec![component_set(["A", "B"])],
            ),
            (
                vec![
                    component_set(["A", "B"]),
                    component_set(["B", "C"]),
                    component_set(["C", "A"]),
                ],
                vec![
                    component_set(["A", "B"]),
                    component_set(["A", "C"]),
                    component_set(["B", "C"]),
                ],
            ),
            (vec![], vec![ComponentSet::new()]),
            (vec![component_set(["A"]), ComponentSet::new()], vec![]),
            (
                vec![component_set(["X1", "X2"]), component_set(["A2", "O1", "X1"])],
                vec![
                    component_set(["X1"]),
                    component_set(["A2", "X2"]),
                    component_set(["O1", "X2"]),
                ],
            ),
        ];

        for (conflicts, expected) in scenarios {
            assert_eq!(
                brute_force_hitting_sets(&conflicts).minimal_hitting_sets,
                expected,
                "brute force on {conflicts:?}"
            );
            for heuristic in Heuristic::ALL {
                let result = search_hitting_sets(&conflicts, heuristic.name()).unwrap();
                assert_eq!(
                    result.minimal_hitting_sets, expected,
                    "{heuristic} on {conflicts:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_heuristic_is_rejected() {
        let conflicts = vec![component_set(["A"])];
        let result = search_hitting_sets(&conflicts, "largest");

        assert!(matches!(
            result,
            Err(DiagnosisError::UnknownHeuristic(name)) if name == "largest"
        ));
    }

    #[test]
    fn hits_all_requires_every_conflict() {
        let conflicts = vec![component_set(["A", "B"]), component_set(["C"])];

        assert!(hits_all(&component_set(["B", "C"]), &conflicts));
        assert!(!hits_all(&component_set(["A", "B"]), &conflicts));
        assert!(hits_all(&ComponentSet::new(), &[]));
    }

    fn random_conflicts(rng: &mut SmallRng) -> Vec<ComponentSet> {
        let num_components = rng.gen_range(1..=7);
        let num_conflicts = rng.gen_range(1..=5);

        (0..num_conflicts)
            .map(|_| {
                let size = rng.gen_range(1..=num_components);
                (0..size)
                    .map(|_| format!("C{}", rng.gen_range(0..num_components)))
                    .collect::<Vec<_>>()
            })
            .map(component_set)
            .collect()
    }

    #[test]
    fn search_agrees_with_brute_force() {
        let mut rng = SmallRng::seed_from_u64(7);

        for round in 0..200 {
            let conflicts = random_conflicts(&mut rng);
            let expected = brute_force_hitting_sets(&conflicts).minimal_hitting_sets;

            for heuristic in Heuristic::ALL {
                let options = SearchOptions {
                    heuristic,
                    random_seed: Some(round),
                };
                let result = HsTree::new(options).search(&conflicts, &mut Indefinite);

                assert_eq!(
                    result.minimal_hitting_sets, expected,
                    "{heuristic} on {conflicts:?}"
                );
                assert!(is_minimal(&result.minimal_hitting_sets));
                for hitting_set in &result.minimal_hitting_sets {
                    assert!(hits_all(hitting_set, &conflicts));
                }
                for minimal in &result.minimal_hitting_sets {
                    assert!(result.hitting_sets.contains(minimal));
                }
            }
        }
    }
}
