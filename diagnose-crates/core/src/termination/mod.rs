//! A [`TerminationCondition`] is polled by the hitting set search once for every visited node. It
//! indicates when the search should stop, even if not every branch has been explored; the result
//! of such a search is then marked as partial. The most common example would be
//! [`TimeBudget`], which gives the search a certain wall-clock budget to complete.

mod combinator;
mod indefinite;
mod node_budget;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use node_budget::NodeBudget;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition. A termination condition determines when
/// the search should give up exploring the remaining branches.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;
    /// Called after the search has visited a node.
    fn node_has_been_visited(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn node_has_been_visited(&mut self) {
        if let Some(t) = self {
            t.node_has_been_visited()
        }
    }
}
