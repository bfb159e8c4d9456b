//! An exhaustive reference oracle used to cross-check the SAT encoding in tests.
use std::collections::BTreeSet;

use fnv::FnvHashMap;

use super::FaultAssignment;
use super::OracleError;
use super::SatisfiabilityOracle;
use super::Verdict;
use crate::model::ConstraintModel;
use crate::model::Observation;
use crate::model::Signal;

/// Enumerates every assignment to the signals and free fault flags of the model. Only usable for
/// circuits with a handful of components.
#[derive(Debug, Default)]
pub(crate) struct TruthTableOracle {
    pub(crate) num_queries: usize,
}

impl SatisfiabilityOracle for TruthTableOracle {
    fn check(
        &mut self,
        model: &ConstraintModel,
        observations: &[Observation],
        faults: &FaultAssignment,
    ) -> Result<Verdict, OracleError> {
        self.num_queries += 1;

        let mut signals = BTreeSet::new();
        for component in model.components() {
            let _ = signals.insert(component.output());
            signals.extend(component.inputs().iter().cloned());
        }
        signals.extend(observations.iter().map(|observation| observation.signal.clone()));
        let signals = signals.into_iter().collect::<Vec<Signal>>();

        let free_components = model
            .components()
            .iter()
            .filter(|component| faults.is_faulty(component.id()).is_none())
            .collect::<Vec<_>>();

        let num_free = signals.len() + free_components.len();
        assert!(num_free < 24, "too many variables for a truth table");

        for assignment in 0..(1_u32 << num_free) {
            let bit = |index: usize| assignment & (1 << index) != 0;
            let values = signals
                .iter()
                .enumerate()
                .map(|(index, signal)| (signal, bit(index)))
                .collect::<FnvHashMap<_, _>>();
            let free_faults = free_components
                .iter()
                .enumerate()
                .map(|(index, component)| (component.id(), bit(signals.len() + index)))
                .collect::<FnvHashMap<_, _>>();

            let components_hold = model.components().iter().all(|component| {
                let faulty = faults
                    .is_faulty(component.id())
                    .unwrap_or_else(|| free_faults[component.id()]);
                let [a, b] = component.inputs();
                faulty
                    || values[&component.output()] == component.kind().evaluate(values[a], values[b])
            });
            let observations_hold = observations
                .iter()
                .all(|observation| values[&observation.signal] == observation.value);

            if components_hold && observations_hold {
                return Ok(Verdict::Satisfiable);
            }
        }

        Ok(Verdict::Unsatisfiable)
    }
}
