mod component_id;
mod diagnosis_error;
mod random;

pub use component_id::*;
pub use diagnosis_error::DiagnosisError;
pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests::TestRandom;
