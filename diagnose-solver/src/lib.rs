//! # Diagnose solver
//! Loads circuit descriptions from text files and diagnoses them with [`diagnose_core`].
//!
//! The command line interface lives in the `diagnose-solver` binary; this library exposes the
//! circuit loader so that it can be used (and tested) independently.
pub mod parsers;

pub use diagnose_core as core;
