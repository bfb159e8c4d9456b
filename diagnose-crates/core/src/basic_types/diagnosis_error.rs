use thiserror::Error;

/// Errors raised by the hitting set engines before any search is performed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisError {
    /// The requested conflict selection heuristic does not exist.
    #[error("Unknown heuristic '{0}', expected one of 'smallest', 'most_frequent' or 'random'")]
    UnknownHeuristic(String),
}
