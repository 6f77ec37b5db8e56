//! Crontab grammar
//!
//! Decomposes crontab text into an ordered sequence of records:
//! ```text
//! KEY=VALUE                                    assignment
//! # anything                                   comment (discarded)
//! minute  hour  dom  month  dow  user  command job entry
//! ```
//! Tokens are separated by runs of spaces and/or tabs. Time fields match
//! `[0-9*-]+`, the user is alphanumeric, and the command is the remainder of
//! the line. `{`, `}`, `#` and `,` are excluded from command and value text,
//! so a trailing `#` does not open an inline comment; a line containing one
//! past the command start fails to parse.

use crate::types::{CronError, Result};

/// One classified line of a crontab file.
///
/// These two shapes are the only ones the grammar admits; a line matching
/// neither is a [`CronError::Parse`], never a third variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Record {
    /// A `KEY=VALUE` variable assignment
    Assignment { key: String, value: String },

    /// A scheduled job entry
    Job {
        /// minute, hour, dom, month, dow
        time: [String; 5],
        user: String,
        command: String,
    },
}

/// Parse full crontab text into records.
///
/// Line-oriented: blank lines and lines whose first non-blank character is
/// `#` are discarded, every other line must classify as a job entry or an
/// assignment. Stateless, so reparsing the same content yields the same
/// records.
pub(crate) fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim_matches([' ', '\t']);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(parse_line(line, index + 1)?);
    }
    Ok(records)
}

/// Classify a single non-comment line, trying the job shape first.
fn parse_line(line: &str, line_number: usize) -> Result<Record> {
    if let Some(job) = parse_job(line) {
        return Ok(job);
    }
    if let Some(assignment) = parse_assignment(line) {
        return Ok(assignment);
    }
    Err(CronError::Parse {
        line: line_number,
        message: format!(
            "'{}' is neither a KEY=VALUE assignment nor a cron job entry",
            line
        ),
    })
}

fn parse_job(line: &str) -> Option<Record> {
    let mut rest = line;
    let mut time = Vec::with_capacity(5);
    for _ in 0..5 {
        let (token, remainder) = next_token(rest)?;
        if !token.chars().all(is_time_char) {
            return None;
        }
        time.push(token.to_string());
        rest = remainder;
    }
    let (user, remainder) = next_token(rest)?;
    if !user.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let command = remainder.trim_matches([' ', '\t']);
    if command.is_empty() || command.chars().any(is_excluded) {
        return None;
    }
    let time: [String; 5] = time.try_into().ok()?;
    Some(Record::Job {
        time,
        user: user.to_string(),
        command: command.to_string(),
    })
}

fn parse_assignment(line: &str) -> Option<Record> {
    let (key, rest) = line.split_once('=')?;
    let key = key.trim_end_matches([' ', '\t']);
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    // A run of `=` counts as a single separator.
    let value = rest.trim_start_matches('=').trim_matches([' ', '\t']);
    if value.is_empty() || value.chars().any(is_excluded) {
        return None;
    }
    Some(Record::Assignment {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Split the next space/tab-delimited token off `input`.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start_matches([' ', '\t']);
    if input.is_empty() {
        return None;
    }
    match input.find([' ', '\t']) {
        Some(at) => Some((&input[..at], &input[at..])),
        None => Some((input, "")),
    }
}

/// Characters permitted in a time field
fn is_time_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '*'
}

/// Characters excluded from command and value text
fn is_excluded(c: char) -> bool {
    matches!(c, '{' | '}' | '#' | ',')
}
