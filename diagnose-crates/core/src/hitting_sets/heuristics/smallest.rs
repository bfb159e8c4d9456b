use super::ConflictSelector;
use crate::basic_types::ComponentSet;

/// A [`ConflictSelector`] which selects the uncovered conflict with the fewest components,
/// minimising the branching factor. Ties are broken in favour of the earliest conflict.
#[derive(Debug, Clone, Copy, Default)]
pub struct Smallest;

impl ConflictSelector for Smallest {
    fn select(&mut self, uncovered: &[&ComponentSet]) -> usize {
        uncovered
            .iter()
            .enumerate()
            .min_by_key(|(_, conflict)| conflict.len())
            .map(|(index, _)| index)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::component_set;

    #[test]
    fn selects_the_smallest_conflict() {
        let conflicts = [
            component_set(["A", "B", "C"]),
            component_set(["D", "E"]),
            component_set(["F", "G", "H"]),
        ];
        let uncovered = conflicts.iter().collect::<Vec<_>>();

        assert_eq!(Smallest.select(&uncovered), 1);
    }

    #[test]
    fn ties_select_the_first_conflict() {
        let conflicts = [
            component_set(["A", "B", "C"]),
            component_set(["D", "E"]),
            component_set(["F", "G"]),
        ];
        let uncovered = conflicts.iter().collect::<Vec<_>>();

        assert_eq!(Smallest.select(&uncovered), 1);
    }
}
