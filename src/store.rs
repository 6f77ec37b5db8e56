//! Crontab file persistence
//!
//! `CrontabFile` is a path-backed handle over a parsed [`CrontabConfig`] with
//! synchronous open, reload, and save. Writes are atomic (temp file + rename)
//! and use the host line-ending convention.

use crate::config::CrontabConfig;
use crate::types::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// A crontab file on disk together with its parsed contents.
///
/// # Examples
///
/// ```no_run
/// use cronfile::{CronJob, CrontabFile};
///
/// let mut crontab = CrontabFile::open("/etc/crontab")?;
/// crontab
///     .config_mut()
///     .cronjobs
///     .push(CronJob::from_partial_time("/usr/bin/backup", "root", ["10", "17"])?);
/// crontab.save()?;
/// # Ok::<(), cronfile::CronError>(())
/// ```
#[derive(Debug)]
pub struct CrontabFile {
    /// Backing file path
    path: PathBuf,
    /// Parsed contents, replaced wholesale on reload
    config: CrontabConfig,
}

impl CrontabFile {
    /// Open and parse the crontab at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config = read_config(&path)?;
        tracing::debug!(
            "Opened {}: {} assignments, {} cron jobs",
            path.display(),
            config.assignments.len(),
            config.cronjobs.len()
        );
        Ok(Self { path, config })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed contents
    pub fn config(&self) -> &CrontabConfig {
        &self.config
    }

    /// Mutable access to the parsed contents, for edit-then-save flows
    pub fn config_mut(&mut self) -> &mut CrontabConfig {
        &mut self.config
    }

    /// Consume the handle, keeping the parsed contents
    pub fn into_config(self) -> CrontabConfig {
        self.config
    }

    /// Re-read and re-parse the backing file, replacing the in-memory
    /// contents entirely. Never a merge: assignments or jobs that vanished
    /// from the file vanish from the config.
    pub fn reload(&mut self) -> Result<&CrontabConfig> {
        self.config = read_config(&self.path)?;
        tracing::debug!(
            "Reloaded {}: {} assignments, {} cron jobs",
            self.path.display(),
            self.config.assignments.len(),
            self.config.cronjobs.len()
        );
        Ok(&self.config)
    }

    /// Write the canonical serialization over the backing file.
    pub fn save(&self) -> Result<()> {
        save_config(&self.config, &self.path)
    }

    /// Write the canonical serialization to `path` instead of the backing
    /// file.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_config(&self.config, path)
    }
}

fn read_config(path: &Path) -> Result<CrontabConfig> {
    let content = fs::read_to_string(path)?;
    CrontabConfig::parse(&content)
}

/// Write `config` to `path` as UTF-8, replacing any existing file.
///
/// Line endings follow the host convention. The content lands in a temp file
/// first and is renamed into place.
pub fn save_config<P: AsRef<Path>>(config: &CrontabConfig, path: P) -> Result<()> {
    let path = path.as_ref();

    let output = config.format();
    let mut text = String::with_capacity(output.len());
    for line in output.lines() {
        text.push_str(line);
        text.push_str(LINE_ENDING);
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)?;

    tracing::info!("Saved crontab to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CronError, CronJob};
    use std::fs::OpenOptions;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
SHELL=/bin/sh
17\t*\t*\t*\t*\troot\tcd / && run-parts --report /etc/cron.hourly
10\t17\t*\t*\t*\tprivacyidea\t/usr/bin/privacyidea-backup
";

    #[test]
    fn test_open_parses_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");
        fs::write(&path, SAMPLE).unwrap();

        let crontab = CrontabFile::open(&path).unwrap();
        assert_eq!(crontab.path(), path);
        assert_eq!(crontab.config().assignments.len(), 1);
        assert_eq!(crontab.config().cronjobs.len(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let result = CrontabFile::open(dir.path().join("missing"));
        assert!(matches!(result, Err(CronError::Io(_))));
    }

    #[test]
    fn test_save_and_reopen_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");
        fs::write(&path, SAMPLE).unwrap();

        let crontab = CrontabFile::open(&path).unwrap();
        let saved_path = dir.path().join("crontab.out");
        crontab.save_as(&saved_path).unwrap();

        let reopened = CrontabFile::open(&saved_path).unwrap();
        assert_eq!(reopened.config(), crontab.config());
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");
        fs::write(&path, SAMPLE).unwrap();

        let mut crontab = CrontabFile::open(&path).unwrap();
        crontab.config_mut().cronjobs.clear();
        crontab.config_mut().assignments.clear();
        crontab.save().unwrap();

        let reopened = CrontabFile::open(&path).unwrap();
        assert!(reopened.config().cronjobs.is_empty());
        assert!(reopened.config().assignments.is_empty());
    }

    #[test]
    fn test_reload_sees_appended_job() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");
        fs::write(&path, SAMPLE).unwrap();

        let mut crontab = CrontabFile::open(&path).unwrap();
        let before = crontab.config().cronjobs.len();

        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "1\t10\t1\t*\t*\tprivacyidea\t/usr/bin/privacyidea-backup").unwrap();
        drop(file);

        let config = crontab.reload().unwrap();
        assert_eq!(config.cronjobs.len(), before + 1);
        let appended = config.cronjobs.last().unwrap();
        assert_eq!(appended.time(), ["1", "10", "1", "*", "*"]);
        assert_eq!(appended.user, "privacyidea");
        assert_eq!(appended.command, "/usr/bin/privacyidea-backup");
    }

    #[test]
    fn test_reload_replaces_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");
        fs::write(&path, SAMPLE).unwrap();

        let mut crontab = CrontabFile::open(&path).unwrap();
        assert_eq!(crontab.config().cronjobs.len(), 2);

        fs::write(&path, "SHELL=/bin/bash\n").unwrap();
        let config = crontab.reload().unwrap();
        assert!(config.cronjobs.is_empty());
        assert_eq!(config.assignments["SHELL"], "/bin/bash");
    }

    #[test]
    fn test_multibyte_command_survives_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");

        let mut config = CrontabConfig::default();
        config
            .cronjobs
            .push(CronJob::new("echo bär > /tmp/übung", "5"));
        save_config(&config, &path).unwrap();

        let reopened = CrontabFile::open(&path).unwrap();
        assert_eq!(reopened.config().cronjobs[0].command, "echo bär > /tmp/übung");
    }

    #[test]
    fn test_save_uses_host_line_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");

        let config = CrontabConfig::parse("SHELL=/bin/sh\n").unwrap();
        save_config(&config, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let expected: String = config
            .format()
            .lines()
            .flat_map(|line| [line, LINE_ENDING])
            .collect();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crontab");

        save_config(&CrontabConfig::default(), &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
