use std::fmt::Display;

use super::statistic_logging::log_statistic;

/// Names the statistics of one engine. Every field of a statistics struct is logged under the
/// engine's name joined with the field name, e.g. `extraction_num_queries`.
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    name: String,
}

impl StatisticLogger {
    pub fn new(engine: impl Display) -> Self {
        Self {
            name: engine.to_string(),
        }
    }

    /// A logger for the statistic called `field` of this engine.
    pub fn nested(&self, field: impl Display) -> Self {
        Self {
            name: format!("{}_{field}", self.name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Write for StatisticLogger {
    fn write_str(&mut self, value: &str) -> std::fmt::Result {
        log_statistic(&self.name, value);
        Ok(())
    }
}
