use std::collections::BTreeMap;

use super::ConflictSelector;
use crate::basic_types::ComponentId;
use crate::basic_types::ComponentSet;

/// A [`ConflictSelector`] which counts how often every component occurs among the uncovered
/// conflicts, and selects the first uncovered conflict containing the most frequent component.
///
/// The selected conflict is not necessarily the smallest one. If several components are equally
/// frequent, the smallest identifier is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostFrequent;

impl ConflictSelector for MostFrequent {
    fn select(&mut self, uncovered: &[&ComponentSet]) -> usize {
        let mut frequencies = BTreeMap::<&ComponentId, usize>::new();
        for component in uncovered.iter().flat_map(|conflict| conflict.iter()) {
            *frequencies.entry(component).or_default() += 1;
        }

        let mut most_frequent: Option<(&ComponentId, usize)> = None;
        for (component, frequency) in frequencies {
            if most_frequent.map_or(true, |(_, best)| frequency > best) {
                most_frequent = Some((component, frequency));
            }
        }

        most_frequent
            .and_then(|(component, _)| {
                uncovered
                    .iter()
                    .position(|conflict| conflict.contains(component))
            })
            .unwrap_or(0)
    }
}
