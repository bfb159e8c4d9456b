use itertools::Itertools;
use log::debug;
use log::info;

use super::ExtractionError;
use crate::basic_types::ComponentSet;
use crate::basic_types::DisplaySet;
use crate::create_statistics_struct;
use crate::diagnose_assert_eq_simple;
use crate::minimality::retain_minimal;
use crate::model::ConstraintModel;
use crate::model::Observation;
use crate::oracle::FaultAssignment;
use crate::oracle::SatisfiabilityOracle;
use crate::oracle::VarisatOracle;
use crate::oracle::Verdict;

create_statistics_struct!(
    /// Statistics of the extraction of conflict sets.
    ExtractionStatistics {
        /// The number of oracle queries, one per candidate healthy-set
        num_queries: u64,
        /// The number of candidates which turned out to be conflicting, minimal or not
        num_conflicting_candidates: u64,
        /// The number of minimal conflict sets
        num_minimal_conflicts: u64,
    }
);

/// Finds the minimal conflict sets of a circuit by exhaustively querying an oracle.
///
/// Every non-empty subset of the components is tried as a candidate healthy-set, in increasing
/// size and following the order of the components in the model. This amounts to exactly
/// `2^n - 1` oracle queries for `n` components.
#[derive(Debug, Default)]
pub struct ConflictSetExtractor<Oracle> {
    oracle: Oracle,
    statistics: ExtractionStatistics,
}

impl<Oracle: SatisfiabilityOracle> ConflictSetExtractor<Oracle> {
    pub fn with_oracle(oracle: Oracle) -> Self {
        ConflictSetExtractor {
            oracle,
            statistics: ExtractionStatistics::default(),
        }
    }

    /// Returns the minimal conflict sets of `model` under `observations`.
    ///
    /// The first failing oracle query aborts the extraction; the error names the candidate
    /// healthy-set of that query.
    pub fn extract(
        &mut self,
        model: &ConstraintModel,
        observations: &[Observation],
    ) -> Result<Vec<ComponentSet>, ExtractionError> {
        let mut conflicting_candidates = Vec::new();
        let mut num_queries: u64 = 0;

        for size in 1..=model.len() {
            for candidate in model.component_ids().cloned().combinations(size) {
                let candidate = candidate.into_iter().collect::<ComponentSet>();
                let faults = FaultAssignment::healthy_subset(model, &candidate);

                self.statistics.num_queries += 1;
                num_queries += 1;
                let verdict = self
                    .oracle
                    .check(model, observations, &faults)
                    .map_err(|source| ExtractionError::OracleFailure {
                        candidate: candidate.clone(),
                        source,
                    })?;

                if verdict == Verdict::Unsatisfiable {
                    debug!(
                        "Assuming {} to be healthy is inconsistent",
                        DisplaySet(&candidate)
                    );
                    self.statistics.num_conflicting_candidates += 1;
                    conflicting_candidates.push(candidate);
                }
            }
        }

        if model.len() < 64 {
            diagnose_assert_eq_simple!(num_queries, (1_u64 << model.len()) - 1);
        }

        let conflicts = retain_minimal(conflicting_candidates);
        self.statistics.num_minimal_conflicts += conflicts.len() as u64;

        if conflicts.is_empty() {
            info!("The observations are consistent with all components being healthy");
        } else {
            info!(
                "Found {} minimal conflict sets after {} oracle queries",
                conflicts.len(),
                self.statistics.num_queries
            );
        }

        Ok(conflicts)
    }

    /// The statistics accumulated over all extractions performed by this extractor.
    pub fn statistics(&self) -> ExtractionStatistics {
        self.statistics
    }

    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }
}

impl ConflictSetExtractor<VarisatOracle> {
    pub fn new() -> Self {
        ConflictSetExtractor::with_oracle(VarisatOracle)
    }
}
