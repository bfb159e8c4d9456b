//! Statistics reported by the conflict set extractor and the hitting set engines.
//!
//! Each engine keeps its counters in a struct generated by [`create_statistics_struct!`]; the
//! caller decides whether and under which name to log them through a [`StatisticLogger`].
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;
use std::fmt::Write;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

/// A value, or a group of values, which can be written as statistics.
pub trait Statistic {
    /// Writes the value(s) under the name of `statistic_logger`.
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, mut statistic_logger: StatisticLogger) {
        // `StatisticLogger::write_str` is infallible.
        let _ = write!(statistic_logger, "{self}");
    }
}

/// Generates a struct of counters which implements [`Statistic`] by logging every field under
/// `{engine}_{field}`.
///
/// # Example
/// ```rust
/// # use diagnose_core::create_statistics_struct;
/// create_statistics_struct!(
///     /// Counters of a hypothetical engine.
///     EngineStatistics {
///         /// How often the oracle was asked
///         num_queries: u64,
///         num_conflicts: usize,
///     }
/// );
///
/// let mut statistics = EngineStatistics::default();
/// statistics.num_queries += 3;
///
/// assert_eq!(statistics.num_queries, 3);
/// assert_eq!(statistics.num_conflicts, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $name:ident { $($(#[$field_documentation:meta])* $field:ident : $type:ty),+ $(,)? }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name {
            $($(#[$field_documentation])* pub $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $($crate::statistics::Statistic::log(&self.$field, statistic_logger.nested(stringify!($field))));+
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;
    use std::sync::Mutex;

    use convert_case::Case;

    use super::*;

    create_statistics_struct!(CapturedStatistics {
        nodes_visited: u64,
        num_solutions: usize,
    });

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn statistics_are_written_to_the_configured_writer() {
        let buffer = SharedBuffer::default();
        configure_statistic_logging(
            "%%%diagnose-stat:",
            Some("%%%diagnose-stat-end"),
            Some(Case::Camel),
            Some(Box::new(buffer.clone())),
        );
        assert!(should_log_statistics());

        let statistics = CapturedStatistics {
            nodes_visited: 5,
            num_solutions: 3,
        };
        statistics.log(StatisticLogger::new("search_smallest"));
        log_statistic_postfix();

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines = written.lines().collect::<Vec<_>>();
        assert!(lines.contains(&"%%%diagnose-stat: searchSmallestNodesVisited=5"));
        assert!(lines.contains(&"%%%diagnose-stat: searchSmallestNumSolutions=3"));
        assert!(lines.contains(&"%%%diagnose-stat-end"));
    }
}
