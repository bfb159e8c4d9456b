//! Writing of statistics as `PREFIX name=value` lines, followed by an optional closing line.
//!
//! Nothing is written until [`configure_statistic_logging`] has been called, which allows the
//! engines to report their statistics unconditionally.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistics are printed.
#[derive(Debug, Clone, Copy)]
pub struct StatisticOptions {
    /// Printed in front of every statistic, as in `{prefix} {name}={value}`.
    pub prefix: &'static str,
    /// Printed on its own line by [`log_statistic_postfix`].
    pub postfix: Option<&'static str>,
    /// The casing applied to statistic names; names are kept as they are if absent.
    pub casing: Option<Case>,
}

impl StatisticOptions {
    fn format(&self, name: impl Display, value: impl Display) -> String {
        let name = match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        format!("{} {name}={value}", self.prefix)
    }
}

struct StatisticOutput {
    options: StatisticOptions,
    writer: Box<dyn Write + Send>,
}

impl StatisticOutput {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

static STATISTIC_OUTPUT: OnceLock<Mutex<StatisticOutput>> = OnceLock::new();

fn with_output(action: impl FnOnce(&mut StatisticOutput)) {
    if let Some(output) = STATISTIC_OUTPUT.get() {
        if let Ok(mut output) = output.lock() {
            action(&mut output);
        }
    }
}

/// Enables statistic logging. Statistics are written to `writer`, or to stdout if no writer is
/// given. Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_OUTPUT.get_or_init(|| {
        Mutex::new(StatisticOutput {
            options: StatisticOptions {
                prefix,
                postfix,
                casing,
            },
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Logs the statistic `name` with the given value, if statistic logging is enabled.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_output(|output| {
        let line = output.options.format(name, value);
        output.write_line(&line);
    });
}

/// Logs the closing line of the statistics, if statistic logging is enabled and a closing line
/// was configured.
pub fn log_statistic_postfix() {
    with_output(|output| {
        if let Some(postfix) = output.options.postfix {
            output.write_line(postfix);
        }
    });
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OUTPUT.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_cased() {
        let options = StatisticOptions {
            prefix: "%%%diagnose-stat:",
            postfix: None,
            casing: Some(Case::Camel),
        };

        assert_eq!(
            options.format("search_smallest_nodes_visited", 5),
            "%%%diagnose-stat: searchSmallestNodesVisited=5"
        );
    }

    #[test]
    fn names_are_kept_without_casing() {
        let options = StatisticOptions {
            prefix: "c",
            postfix: None,
            casing: None,
        };

        assert_eq!(
            options.format("extraction_num_queries", 31),
            "c extraction_num_queries=31"
        );
    }
}
