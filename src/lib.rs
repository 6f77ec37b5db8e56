//! Crontab-style configuration file parsing and re-serialization
//!
//! Handles the classic six-field crontab format: shell-style `KEY=VALUE`
//! assignments, full-line `#` comments, and job entries made of five time
//! fields, a user, and a command:
//!
//! ```text
//! SHELL=/bin/sh
//! # full-line comment
//! 17  *  *  *  *  root  cd / && run-parts --report /etc/cron.hourly
//! ```
//!
//! Parsing builds a [`CrontabConfig`] (order-preserving assignments map plus
//! ordered job list); [`CrontabConfig::format`] re-emits canonical text, and
//! [`CrontabFile`] ties a config to a path with reload and atomic save.
//! Time fields are grammar-checked (`[0-9*-]+`) but never range-validated,
//! and schedule evaluation is out of scope.
//!
//! ## Quick Start
//!
//! ```
//! use cronfile::{CronJob, CrontabConfig};
//!
//! let text = "\
//! SHELL=/bin/sh
//! ## hourly maintenance
//! 17 * * * * root cd / && run-parts --report /etc/cron.hourly
//! ";
//!
//! let mut config = CrontabConfig::parse(text)?;
//! assert_eq!(config.assignments["SHELL"], "/bin/sh");
//! assert_eq!(config.cronjobs[0].time_comment(), "hourly");
//!
//! // Add a job and write the canonical form back out.
//! config.cronjobs.push(CronJob::from_partial_time(
//!     "/usr/bin/backup",
//!     "root",
//!     ["10", "17"],
//! )?);
//! let output = config.format();
//! assert!(output.ends_with("10\t17\t*\t*\t*\troot\t/usr/bin/backup\n"));
//! # Ok::<(), cronfile::CronError>(())
//! ```
//!
//! ## Known limitation
//!
//! `{`, `}`, `#` and `,` are excluded from command and value text, so a
//! command needing a literal `#` or comma cannot be represented. Such a line
//! fails to parse instead of being silently truncated; changing this would
//! change the grammar contract.

mod config;
mod parser;
pub mod store;
mod types;

pub use config::CrontabConfig;
pub use store::{save_config, CrontabFile};
pub use types::{CronError, CronJob, Result};
