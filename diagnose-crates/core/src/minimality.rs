//! Removal of non-minimal sets from a collection of sets.
//!
//! The filter is shared by the conflict set extractor and both hitting set engines; it is the
//! single place which establishes set-minimality of their results.
use std::collections::BTreeSet;

use crate::diagnose_assert_moderate;

/// Returns the sets of `sets` which are not a strict superset of any other set in `sets`, with
/// exact duplicates removed.
///
/// The output is ordered by size and then by content, so the result only depends on which sets
/// were provided and not on their order.
///
/// # Example
/// ```rust
/// # use diagnose_core::component_set;
/// # use diagnose_core::retain_minimal;
/// let sets = vec![
///     component_set(["A", "B"]),
///     component_set(["A"]),
///     component_set(["B", "C"]),
///     component_set(["A"]),
/// ];
///
/// assert_eq!(
///     retain_minimal(sets),
///     vec![component_set(["A"]), component_set(["B", "C"])]
/// );
/// ```
pub fn retain_minimal<Element: Ord>(
    sets: impl IntoIterator<Item = BTreeSet<Element>>,
) -> Vec<BTreeSet<Element>> {
    let unique = deduplicate(sets);

    // A strict subset is always shorter, so only sets earlier in the sorted order can make a set
    // non-minimal.
    let mut minimal: Vec<BTreeSet<Element>> = Vec::with_capacity(unique.len());
    for set in unique {
        if !minimal
            .iter()
            .any(|smaller| smaller.len() < set.len() && smaller.is_subset(&set))
        {
            minimal.push(set);
        }
    }

    diagnose_assert_moderate!(is_minimal(&minimal));
    minimal
}

/// Removes exact duplicates from `sets` and orders the remaining sets by size and then by
/// content.
pub fn deduplicate<Element: Ord>(
    sets: impl IntoIterator<Item = BTreeSet<Element>>,
) -> Vec<BTreeSet<Element>> {
    let mut unique = sets
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    unique.sort_by(|lhs, rhs| lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs)));
    unique
}

/// Whether no set of `sets` is a subset of another set of `sets`.
pub fn is_minimal<Element: Ord>(sets: &[BTreeSet<Element>]) -> bool {
    sets.iter().enumerate().all(|(index, set)| {
        sets.iter()
            .enumerate()
            .all(|(other_index, other)| index == other_index || !other.is_subset(set))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::component_set;
    use crate::basic_types::ComponentSet;

    #[test]
    fn supersets_are_removed() {
        let result = retain_minimal(vec![
            component_set(["A", "B", "C"]),
            component_set(["A", "B"]),
            component_set(["C"]),
            component_set(["B", "D"]),
        ]);

        assert_eq!(
            result,
            vec![
                component_set(["C"]),
                component_set(["A", "B"]),
                component_set(["B", "D"]),
            ]
        );
    }

    #[test]
    fn duplicates_are_removed() {
        let result = retain_minimal(vec![
            component_set(["A", "B"]),
            component_set(["B", "A"]),
            component_set(["A", "B"]),
        ]);
        assert_eq!(result, vec![component_set(["A", "B"])]);
    }

    #[test]
    fn empty_set_dominates_everything() {
        let result = retain_minimal(vec![
            component_set(["A"]),
            ComponentSet::new(),
            component_set(["B", "C"]),
        ]);
        assert_eq!(result, vec![ComponentSet::new()]);
    }

    #[test]
    fn empty_collection() {
        assert!(retain_minimal(Vec::<ComponentSet>::new()).is_empty());
    }

    #[test]
    fn result_does_not_depend_on_input_order() {
        let sets = vec![
            component_set(["B", "C"]),
            component_set(["A", "C", "D"]),
            component_set(["A", "D"]),
            component_set(["B", "C", "E"]),
        ];
        let mut reversed = sets.clone();
        reversed.reverse();

        assert_eq!(retain_minimal(sets), retain_minimal(reversed));
    }

    #[test]
    fn deduplicate_keeps_supersets() {
        let result = deduplicate(vec![
            component_set(["A", "B"]),
            component_set(["A"]),
            component_set(["A", "B"]),
        ]);
        assert_eq!(result, vec![component_set(["A"]), component_set(["A", "B"])]);
    }

    #[test]
    fn minimality_check() {
        assert!(is_minimal(&[component_set(["A"]), component_set(["B"])]));
        assert!(!is_minimal(&[component_set(["A"]), component_set(["A", "B"])]));
        assert!(!is_minimal(&[component_set(["A"]), component_set(["A"])]));
    }
}
