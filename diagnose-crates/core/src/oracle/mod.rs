//! The satisfiability oracle consulted by the conflict set extractor.
//!
//! An oracle decides whether the behavioural theory of a [`ConstraintModel`], together with a set
//! of [`Observation`]s and a (partial) [`FaultAssignment`], is satisfiable. Oracles must not carry
//! state from one query to the next: a verdict depends only on the arguments of that query.
mod fault_assignment;
#[cfg(test)]
pub(crate) mod truth_table;
mod varisat_oracle;

pub use fault_assignment::FaultAssignment;
use thiserror::Error;
pub use varisat_oracle::VarisatOracle;

use crate::basic_types::ComponentId;
use crate::model::ConstraintModel;
use crate::model::Observation;

/// The answer of a [`SatisfiabilityOracle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable,
    Unsatisfiable,
}

/// Errors which can occur while constructing or solving the constraints of a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// An input of a component refers to the output of a component which is not in the model.
    #[error("Component {component} reads the output of unknown component {unknown}")]
    UnknownInput {
        component: ComponentId,
        unknown: ComponentId,
    },
    /// An observation refers to the output of a component which is not in the model.
    #[error("An observation refers to the output of unknown component {0}")]
    UnknownObservedComponent(ComponentId),
    /// The fault assignment fixes the fault flag of a component which is not in the model.
    #[error("The fault flag of unknown component {0} was assigned")]
    UnknownFaultFlag(ComponentId),
    /// The underlying solver reported an error.
    #[error("The SAT solver failed, more details: {0}")]
    Solver(String),
}

/// Decides satisfiability of the fault-aware behavioural theory of a circuit.
pub trait SatisfiabilityOracle {
    /// Checks whether all component constraints of `model`, the `observations` and the fixed
    /// fault flags of `faults` can be satisfied simultaneously. Components without an entry in
    /// `faults` have an unconstrained fault flag.
    fn check(
        &mut self,
        model: &ConstraintModel,
        observations: &[Observation],
        faults: &FaultAssignment,
    ) -> Result<Verdict, OracleError>;
}

impl<Oracle: SatisfiabilityOracle + ?Sized> SatisfiabilityOracle for &mut Oracle {
    fn check(
        &mut self,
        model: &ConstraintModel,
        observations: &[Observation],
        faults: &FaultAssignment,
    ) -> Result<Verdict, OracleError> {
        (**self).check(model, observations, faults)
    }
}
