//! Parsed crontab model and canonical serialization

use crate::parser::{self, Record};
use crate::types::{CronJob, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Comment line emitted at the top of every formatted file
const FILE_HEADER: &str = "# File parsed and saved by cronfile.";

/// Column legend emitted above the job entries
const COLUMN_HEADER: &str = "#m\th\tdom\tmon\tdow\tuser\tcommand";

/// A parsed crontab: variable assignments plus scheduled jobs.
///
/// Assignments keep their stored order so re-serialization is deterministic;
/// a repeated key overwrites the value and keeps its first-seen position.
/// Jobs keep encounter order and may repeat.
///
/// # Examples
///
/// ```
/// use cronfile::CrontabConfig;
///
/// let config = CrontabConfig::parse("SHELL=/bin/sh\n17 * * * * root echo hi\n").unwrap();
/// assert_eq!(config.assignments["SHELL"], "/bin/sh");
/// assert_eq!(config.cronjobs.len(), 1);
///
/// // Canonical text round-trips.
/// let reparsed = CrontabConfig::parse(&config.format()).unwrap();
/// assert_eq!(reparsed, config);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrontabConfig {
    /// `KEY=VALUE` lines, in stored order
    pub assignments: IndexMap<String, String>,

    /// Job entries, in file order
    pub cronjobs: Vec<CronJob>,
}

impl CrontabConfig {
    /// Parse crontab text into a config.
    ///
    /// Comments and blank lines are discarded; every other line must be an
    /// assignment or a job entry, otherwise the whole parse fails with
    /// [`CronError::Parse`](crate::CronError::Parse). There is no
    /// skip-bad-lines mode.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config = Self::default();
        for record in parser::parse_records(text)? {
            match record {
                Record::Assignment { key, value } => {
                    config.assignments.insert(key, value);
                }
                Record::Job {
                    time,
                    user,
                    command,
                } => {
                    let [minute, hour, dom, month, dow] = time;
                    config.cronjobs.push(CronJob {
                        minute,
                        hour,
                        dom,
                        month,
                        dow,
                        user,
                        command,
                    });
                }
            }
        }
        Ok(config)
    }

    /// Render the canonical text form: header comment, assignments, a column
    /// legend, then one tab-separated line per job. Lines are `\n`-terminated;
    /// [`save_config`](crate::store::save_config) normalizes endings on write.
    pub fn format(&self) -> String {
        let mut output = String::new();
        output.push_str(FILE_HEADER);
        output.push_str("\n\n");
        for (key, value) in &self.assignments {
            output.push_str(key);
            output.push('=');
            output.push_str(value);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(COLUMN_HEADER);
        output.push('\n');
        for job in &self.cronjobs {
            output.push_str(&job.to_string());
            output.push('\n');
        }
        output
    }
}
