//! Extraction of minimal conflict sets.
//!
//! A conflict set is a set of components which cannot all be healthy given the observations. The
//! [`ConflictSetExtractor`] finds them by asking a [`SatisfiabilityOracle`] about every non-empty
//! candidate healthy-set, forcing all other components to be faulty. Forcing (rather than
//! freeing) the other components relies on conflicts being monotone: a faulty component never
//! introduces an inconsistency by itself.
mod extractor;

pub use extractor::ConflictSetExtractor;
pub use extractor::ExtractionStatistics;
use thiserror::Error;

use crate::basic_types::ComponentSet;
use crate::basic_types::DisplaySet;
use crate::model::ConstraintModel;
use crate::model::Observation;
use crate::oracle::OracleError;
#[cfg(doc)]
use crate::oracle::SatisfiabilityOracle;

/// Errors which can occur while extracting conflict sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The oracle failed to answer the query for the given candidate healthy-set.
    #[error("The oracle failed when assuming {} to be healthy, more details: {source}", DisplaySet(.candidate))]
    OracleFailure {
        candidate: ComponentSet,
        #[source]
        source: OracleError,
    },
}

/// Returns the minimal conflict sets of `model` under `observations`, using the default
/// (`varisat`-backed) oracle.
///
/// An empty result means that the observations are consistent with every component being
/// healthy.
pub fn extract_conflict_sets(
    model: &ConstraintModel,
    observations: &[Observation],
) -> Result<Vec<ComponentSet>, ExtractionError> {
    ConflictSetExtractor::new().extract(model, observations)
}
