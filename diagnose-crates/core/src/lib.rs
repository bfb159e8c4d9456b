//! # Diagnose
//! A library for consistency-based diagnosis of combinational circuits built from two-input
//! `AND`, `OR` and `XOR` gates.
//!
//! Given a [`model::ConstraintModel`] of a circuit and a set of [`model::Observation`]s of its
//! signals, a diagnosis answers which components must be assumed faulty for the observations to
//! be explained. The library computes this in two stages:
//! 1. The [`extract_conflict_sets`] stage asks a satisfiability oracle which sets of components
//!    cannot all be healthy together, and keeps the minimal such sets (the conflict sets).
//! 2. The [`hitting_sets`] stage computes the minimal hitting sets of those conflict sets, each
//!    of which is a minimal diagnosis. The tree search of [`hitting_sets::HsTree`] is the main
//!    engine; [`brute_force_hitting_sets`] is a reference used for cross-validation.
//!
//! # Example
//! ```rust
//! # use diagnose_core::component_set;
//! # use diagnose_core::extract_conflict_sets;
//! # use diagnose_core::search_hitting_sets;
//! # use diagnose_core::model::Component;
//! # use diagnose_core::model::ConstraintModel;
//! # use diagnose_core::model::GateKind;
//! # use diagnose_core::model::Observation;
//! # use diagnose_core::model::Signal;
//! // Two inverting stages feeding into an AND gate: out = (a XOR b) AND (a XOR c)
//! let model = ConstraintModel::new([
//!     Component::new("X1", GateKind::Xor, [Signal::input("a"), Signal::input("b")]),
//!     Component::new("X2", GateKind::Xor, [Signal::input("a"), Signal::input("c")]),
//!     Component::new("A1", GateKind::And, [Signal::output("X1"), Signal::output("X2")]),
//! ]);
//! // With a = 1 and b = c = 0 the output should be 1, but 0 is observed.
//! let observations = [
//!     Observation::new(Signal::input("a"), true),
//!     Observation::new(Signal::input("b"), false),
//!     Observation::new(Signal::input("c"), false),
//!     Observation::new(Signal::output("A1"), false),
//! ];
//!
//! let conflicts = extract_conflict_sets(&model, &observations).unwrap();
//! assert_eq!(conflicts, vec![component_set(["A1", "X1", "X2"])]);
//!
//! let diagnoses = search_hitting_sets(&conflicts, "smallest").unwrap();
//! assert_eq!(
//!     diagnoses.minimal_hitting_sets,
//!     vec![component_set(["A1"]), component_set(["X1"]), component_set(["X2"])]
//! );
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub mod conflicts;
pub mod hitting_sets;
pub mod minimality;
pub mod model;
pub mod oracle;
pub mod statistics;
pub mod termination;

pub use convert_case;
pub use rand;

pub use crate::basic_types::component_set;
pub use crate::basic_types::intersects;
pub use crate::basic_types::ComponentId;
pub use crate::basic_types::ComponentSet;
pub use crate::basic_types::DiagnosisError;
pub use crate::basic_types::DisplaySet;
pub use crate::basic_types::Random;
pub use crate::conflicts::extract_conflict_sets;
pub use crate::hitting_sets::brute_force_hitting_sets;
pub use crate::hitting_sets::search_hitting_sets;
pub use crate::hitting_sets::Heuristic;
pub use crate::minimality::retain_minimal;
