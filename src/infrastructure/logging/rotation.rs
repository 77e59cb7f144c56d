//! Log file rotation and cleanup
//!
//! The active file is `<dir>/<stem>.log`. Rotation happens on size:
//! - Before a write that would push the active file past `max_size`, it is
//!   renamed to `<stem>-<UTC timestamp>.log` and a fresh file is opened
//! - After each rotation (and once at open) backups are pruned by age and
//!   by count
//!
//! Timestamps sort lexically, so the newest backup has the greatest name.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::config::log_file_path;
use super::error::LoggingError;

const BACKUP_TIMESTAMP: &str = "%Y-%m-%dT%H-%M-%S%.3f";

/// Thresholds driving rotation and pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Maximum size in bytes of the active file
    pub max_size: u64,
    /// Backups to keep; 0 keeps all
    pub max_backups: usize,
    /// Backups older than this many days are removed; 0 disables
    pub retention_days: u32,
}

/// Size-rotated log file with age and count based backup pruning
#[derive(Debug)]
pub struct RotatingFile {
    dir: PathBuf,
    stem: String,
    policy: RotationPolicy,
    file: File,
    size: u64,
}

impl RotatingFile {
    /// Open (or create) `<dir>/<stem>.log` in append mode
    pub fn open(
        dir: impl AsRef<Path>,
        stem: impl Into<String>,
        policy: RotationPolicy,
    ) -> Result<Self, LoggingError> {
        let dir = dir.as_ref().to_path_buf();
        let stem = stem.into();

        fs::create_dir_all(&dir).map_err(|source| LoggingError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = log_file_path(&dir, &stem);
        let file = open_append(&path).map_err(|source| LoggingError::OpenFile {
            path: path.clone(),
            source,
        })?;
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);

        let rotating = Self {
            dir,
            stem,
            policy,
            file,
            size,
        };

        if let Err(e) = rotating.prune_backups() {
            warn!(error = %e, dir = %rotating.dir.display(), "failed to prune old log files");
        }

        Ok(rotating)
    }

    /// Path of the active log file
    pub fn path(&self) -> PathBuf {
        log_file_path(&self.dir, &self.stem)
    }

    /// Bytes currently in the active file
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Whether writing `incoming` more bytes calls for a rotation first
    ///
    /// An empty file is never rotated, so a single oversized record still
    /// lands somewhere.
    pub const fn should_rotate(&self, incoming: u64) -> bool {
        self.size > 0 && self.size.saturating_add(incoming) > self.policy.max_size
    }

    /// Rename the active file to a timestamped backup and start a new one
    ///
    /// # Returns
    /// Path of the backup
    pub fn rotate(&mut self) -> io::Result<PathBuf> {
        self.rotate_with(open_append)
    }

    fn rotate_with(
        &mut self,
        open: impl FnOnce(&Path) -> io::Result<File>,
    ) -> io::Result<PathBuf> {
        self.file.flush()?;

        let active = self.path();
        let backup = self.next_backup_path();
        fs::rename(&active, &backup)?;

        // The old handle stays current until a fresh active file is open
        self.file = match open(&active) {
            Ok(file) => file,
            Err(e) => {
                if let Err(restore) = fs::rename(&backup, &active) {
                    warn!(
                        error = %restore,
                        path = %backup.display(),
                        "failed to restore active log file after rotation error"
                    );
                }
                return Err(e);
            }
        };
        self.size = 0;

        debug!(
            old_path = %active.display(),
            new_path = %backup.display(),
            "rotated log file"
        );

        if let Err(e) = self.prune_backups() {
            warn!(error = %e, dir = %self.dir.display(), "failed to prune old log files");
        }

        Ok(backup)
    }

    /// Backups of this log, newest first
    ///
    /// Only `<stem>-<timestamp>.log` names count, so another logger's
    /// `<stem>-<suffix>.log` in the same directory is never touched.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let mut backups: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| self.is_backup_name(name))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    /// Remove backups beyond the retention period, then beyond the count
    ///
    /// # Returns
    /// Number of files deleted
    pub fn prune_backups(&self) -> io::Result<usize> {
        let mut deleted = 0;
        let mut kept = Vec::new();

        let cutoff = (self.policy.retention_days > 0)
            .then(|| Utc::now() - Duration::days(i64::from(self.policy.retention_days)));

        for backup in self.backups()? {
            let expired = match cutoff {
                Some(cutoff) => {
                    let modified: DateTime<Utc> = fs::metadata(&backup)?.modified()?.into();
                    modified < cutoff
                }
                None => false,
            };

            if expired {
                fs::remove_file(&backup)?;
                deleted += 1;
            } else {
                kept.push(backup);
            }
        }

        if self.policy.max_backups > 0 {
            for backup in kept.iter().skip(self.policy.max_backups) {
                fs::remove_file(backup)?;
                deleted += 1;
            }
        }

        if deleted > 0 {
            info!(count = deleted, dir = %self.dir.display(), "cleaned up old log files");
        }

        Ok(deleted)
    }

    fn is_backup_name(&self, name: &str) -> bool {
        name.strip_prefix(self.stem.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|rest| rest.strip_suffix(".log"))
            .is_some_and(|stamp| NaiveDateTime::parse_from_str(stamp, BACKUP_TIMESTAMP).is_ok())
    }

    fn next_backup_path(&self) -> PathBuf {
        let now = Utc::now();

        // Two rotations inside the same millisecond: step the stamp forward
        // rather than suffixing it, so names keep sorting by age.
        let mut offset = 0;
        loop {
            let stamp = (now + Duration::milliseconds(offset)).format(BACKUP_TIMESTAMP);
            let candidate = self.dir.join(format!("{}-{stamp}.log", self.stem));
            if !candidate.exists() {
                return candidate;
            }
            offset += 1;
        }
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_rotate(buf.len() as u64) {
            self.rotate()?;
        }

        let written = self.file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
