use std::time::Duration;
use std::time::Instant;

use super::TerminationCondition;

/// Stops the search once a wall-clock budget has elapsed.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    started_at: Instant,
    budget: Duration,
}

impl TimeBudget {
    /// A budget of `budget`, measured from the moment of this call.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        let started_at = Instant::now();

        TimeBudget { started_at, budget }
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        self.started_at.elapsed() >= self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_stops_immediately() {
        let mut budget = TimeBudget::starting_now(Duration::ZERO);
        assert!(budget.should_stop());
    }

    #[test]
    fn large_budget_does_not_stop() {
        let mut budget = TimeBudget::starting_now(Duration::from_secs(3600));
        assert!(!budget.should_stop());
    }
}
