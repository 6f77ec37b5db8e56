//! Core types for the crontab library

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for crontab operations
pub type Result<T> = std::result::Result<T, CronError>;

/// Crontab library errors
#[derive(Debug, Error)]
pub enum CronError {
    /// A line matched neither record shape
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the offending content
        message: String,
    },

    /// A constructor was called outside its contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One scheduled-task line of a crontab file.
///
/// The five time fields are unvalidated grammar tokens (`[0-9*-]+`); a value
/// like `99` for the minute is accepted as-is. `Display` renders the
/// tab-separated crontab line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronJob {
    /// Minute field (`*` or a digit/hyphen expression)
    pub minute: String,

    /// Hour field
    pub hour: String,

    /// Day-of-month field
    pub dom: String,

    /// Month field
    pub month: String,

    /// Day-of-week field
    pub dow: String,

    /// User the command runs as (alphanumeric)
    pub user: String,

    /// Command text; may not contain `{`, `}`, `#`, `,` or newlines
    pub command: String,
}

impl CronJob {
    /// Create a new job running as `root`, with every time field except the
    /// minute set to `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cronfile::CronJob;
    ///
    /// let job = CronJob::new("/usr/bin/backup", "17").with_hour("3");
    /// assert_eq!(job.user, "root");
    /// assert_eq!(job.time(), ["17", "3", "*", "*", "*"]);
    /// ```
    pub fn new(command: impl Into<String>, minute: impl Into<String>) -> Self {
        Self {
            minute: minute.into(),
            hour: "*".to_string(),
            dom: "*".to_string(),
            month: "*".to_string(),
            dow: "*".to_string(),
            user: "root".to_string(),
            command: command.into(),
        }
    }

    /// Set the user
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the hour field
    pub fn with_hour(mut self, hour: impl Into<String>) -> Self {
        self.hour = hour.into();
        self
    }

    /// Set the day-of-month field
    pub fn with_dom(mut self, dom: impl Into<String>) -> Self {
        self.dom = dom.into();
        self
    }

    /// Set the month field
    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    /// Set the day-of-week field
    pub fn with_dow(mut self, dow: impl Into<String>) -> Self {
        self.dow = dow.into();
        self
    }

    /// Create a job from a partial time tuple.
    ///
    /// `time` holds up to five leading time fields, minute first; missing
    /// trailing fields default to `*`. More than five fields fails with
    /// [`CronError::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cronfile::CronJob;
    ///
    /// let job = CronJob::from_partial_time("/usr/bin/backup", "root", ["1", "10", "1"]).unwrap();
    /// assert_eq!(job.time(), ["1", "10", "1", "*", "*"]);
    ///
    /// assert!(CronJob::from_partial_time("cmd", "root", ["1"; 6]).is_err());
    /// ```
    pub fn from_partial_time<I, S>(
        command: impl Into<String>,
        user: impl Into<String>,
        time: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = time.into_iter().map(Into::into).collect();
        if fields.len() > 5 {
            return Err(CronError::InvalidArgument(format!(
                "Expected at most 5 time fields, got {}",
                fields.len()
            )));
        }
        let field = |index: usize| {
            fields
                .get(index)
                .cloned()
                .unwrap_or_else(|| "*".to_string())
        };
        Ok(Self {
            minute: field(0),
            hour: field(1),
            dom: field(2),
            month: field(3),
            dow: field(4),
            user: user.into(),
            command: command.into(),
        })
    }

    /// The five time fields in order: minute, hour, dom, month, dow.
    pub fn time(&self) -> [&str; 5] {
        [&self.minute, &self.hour, &self.dom, &self.month, &self.dow]
    }

    /// Coarse human label for the schedule, inferred from which time fields
    /// are non-wildcard.
    ///
    /// Later checks override earlier ones, so the most specific label wins:
    /// `hourly`, `daily`, `weekly`, `monthly`, `yearly`. Empty when all five
    /// fields are `*`.
    pub fn time_comment(&self) -> &'static str {
        let mut comment = "";
        if self.minute != "*" {
            comment = "hourly";
        }
        if self.hour != "*" {
            comment = "daily";
        }
        if self.dow != "*" {
            comment = "weekly";
        }
        if self.dom != "*" {
            comment = "monthly";
        }
        if self.month != "*" {
            comment = "yearly";
        }
        comment
    }

    /// Human-readable summary of the schedule, e.g.
    /// `monthly at time 10:01, day of month: 1, month: *, day of week: *`.
    ///
    /// The leading `<comment> at ` is omitted when no comment can be
    /// inferred. Hour and minute are zero-padded to two characters unless
    /// they are `*`.
    pub fn time_summary(&self) -> String {
        let comment = self.time_comment();
        let full_comment = if comment.is_empty() {
            String::new()
        } else {
            format!("{} at ", comment)
        };
        format!(
            "{}time {}:{}, day of month: {}, month: {}, day of week: {}",
            full_comment,
            zero_pad(&self.hour),
            zero_pad(&self.minute),
            self.dom,
            self.month,
            self.dow
        )
    }
}

impl fmt::Display for CronJob {
    /// Renders the job as a crontab line, ready to be written back to a file
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.minute, self.hour, self.dom, self.month, self.dow, self.user, self.command
        )
    }
}

/// Zero-pad a time field to two characters; wildcards pass through.
fn zero_pad(field: &str) -> String {
    if field == "*" {
        field.to_string()
    } else {
        format!("{:0>2}", field)
    }
}
