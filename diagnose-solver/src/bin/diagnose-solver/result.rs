use diagnose_solver::core::conflicts::ExtractionError;
use diagnose_solver::core::Heuristic;
use diagnose_solver::parsers::circuit::CircuitParseError;
use thiserror::Error;

pub(crate) type DiagnoseSolverResult<T> = Result<T, DiagnoseSolverError>;

#[derive(Error, Debug)]
pub(crate) enum DiagnoseSolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The circuit file was invalid, more details: {0}")]
    InvalidCircuit(#[from] CircuitParseError),
    #[error("Failed to extract the conflict sets, more details: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("The heuristics {first} and {second} found different minimal hitting sets")]
    HeuristicsDisagree { first: Heuristic, second: Heuristic },
}
