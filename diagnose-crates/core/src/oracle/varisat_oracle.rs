use fnv::FnvHashMap;
use log::trace;
use varisat::CnfFormula;
use varisat::ExtendFormula;
use varisat::Lit;
use varisat::Solver;
use varisat::Var;

use super::FaultAssignment;
use super::OracleError;
use super::SatisfiabilityOracle;
use super::Verdict;
use crate::basic_types::ComponentId;
use crate::model::Component;
use crate::model::ConstraintModel;
use crate::model::GateKind;
use crate::model::Observation;
use crate::model::Signal;

/// A [`SatisfiabilityOracle`] backed by the `varisat` CDCL solver.
///
/// Every query encodes the model into a new CNF formula and solves it with a freshly created
/// solver, so no learned clauses or assignments survive between queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct VarisatOracle;

impl SatisfiabilityOracle for VarisatOracle {
    fn check(
        &mut self,
        model: &ConstraintModel,
        observations: &[Observation],
        faults: &FaultAssignment,
    ) -> Result<Verdict, OracleError> {
        let mut encoder = CnfEncoder::new();

        for component in model.components() {
            encoder.encode_component(model, component)?;
        }

        for observation in observations {
            if let Signal::Output(component) = &observation.signal {
                if !model.contains(component) {
                    return Err(OracleError::UnknownObservedComponent(component.clone()));
                }
            }
            encoder.fix(
                BooleanVariable::Signal(observation.signal.clone()),
                observation.value,
            );
        }

        for (component, faulty) in faults.iter() {
            if !model.contains(component) {
                return Err(OracleError::UnknownFaultFlag(component.clone()));
            }
            encoder.fix(BooleanVariable::FaultFlag(component.clone()), faulty);
        }

        trace!(
            "Solving query with {} variables and {} clauses",
            encoder.variables.len(),
            encoder.num_clauses
        );

        let mut solver = Solver::new();
        solver.add_formula(&encoder.formula);
        match solver.solve() {
            Ok(true) => Ok(Verdict::Satisfiable),
            Ok(false) => Ok(Verdict::Unsatisfiable),
            Err(error) => Err(OracleError::Solver(error.to_string())),
        }
    }
}

/// The boolean variables of the encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum BooleanVariable {
    Signal(Signal),
    FaultFlag(ComponentId),
}

struct CnfEncoder {
    formula: CnfFormula,
    variables: FnvHashMap<BooleanVariable, Var>,
    num_clauses: usize,
}

impl CnfEncoder {
    fn new() -> Self {
        CnfEncoder {
            formula: CnfFormula::new(),
            variables: FnvHashMap::default(),
            num_clauses: 0,
        }
    }

    fn literal(&mut self, variable: BooleanVariable) -> Lit {
        let next_index = self.variables.len();
        let var = *self
            .variables
            .entry(variable)
            .or_insert_with(|| Var::from_index(next_index));
        Lit::positive(var)
    }

    fn add_clause(&mut self, clause: &[Lit]) {
        self.formula.add_clause(clause);
        self.num_clauses += 1;
    }

    /// Adds a unit clause fixing `variable` to `value`.
    fn fix(&mut self, variable: BooleanVariable, value: bool) {
        let literal = self.literal(variable);
        self.add_clause(&[if value { literal } else { !literal }]);
    }

    /// Encodes `fault | (output <-> kind(a, b))`; every clause of the gate definition is
    /// extended with the fault flag.
    fn encode_component(
        &mut self,
        model: &ConstraintModel,
        component: &Component,
    ) -> Result<(), OracleError> {
        for input in component.inputs() {
            if let Signal::Output(source) = input {
                if !model.contains(source) {
                    return Err(OracleError::UnknownInput {
                        component: component.id().clone(),
                        unknown: source.clone(),
                    });
                }
            }
        }

        let [input_a, input_b] = component.inputs();
        let fault = self.literal(BooleanVariable::FaultFlag(component.id().clone()));
        let output = self.literal(BooleanVariable::Signal(component.output()));
        let a = self.literal(BooleanVariable::Signal(input_a.clone()));
        let b = self.literal(BooleanVariable::Signal(input_b.clone()));

        let definition = match component.kind() {
            GateKind::And => vec![vec![!output, a], vec![!output, b], vec![output, !a, !b]],
            GateKind::Or => vec![vec![output, !a], vec![output, !b], vec![!output, a, b]],
            GateKind::Xor => vec![
                vec![!output, a, b],
                vec![!output, !a, !b],
                vec![output, !a, b],
                vec![output, a, !b],
            ],
        };

        for mut clause in definition {
            clause.push(fault);
            self.add_clause(&clause);
        }

        Ok(())
    }
}
