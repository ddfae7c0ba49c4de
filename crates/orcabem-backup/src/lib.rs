//! JSON backup and restore for the full application state.
//!
//! A backup document carries the transaction sequence together with the
//! goals and settings that travel with it. Documents are exported to
//! user-named files, imported back with structural validation, and mirrored
//! into a single local snapshot slot.

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use orcabem_core::{CoreError, Ledger};
use orcabem_domain::{Goal, Settings, Transaction};

/// Format version written into every exported document.
pub const BACKUP_FORMAT_VERSION: &str = "1.0.0";

const BACKUP_EXTENSION: &str = "json";
const BACKUP_DATE_FORMAT: &str = "%Y-%m-%d";
const TMP_SUFFIX: &str = "tmp";
const SNAPSHOT_FILE: &str = "orcabem_backup.json";
const REQUIRED_SECTIONS: [&str; 3] = ["transactions", "goals", "settings"];

/// Complete application state as written to a backup file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub settings: Settings,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

impl BackupDocument {
    /// Snapshots the live state into a document stamped with `now`.
    pub fn capture(ledger: &Ledger, goals: &[Goal], settings: &Settings, now: DateTime<Utc>) -> Self {
        Self {
            transactions: ledger.transactions().to_vec(),
            goals: goals.to_vec(),
            settings: settings.clone(),
            export_date: now,
            version: BACKUP_FORMAT_VERSION.into(),
        }
    }

    /// Parses a document, requiring the `transactions`, `goals` and
    /// `settings` sections to be present before any typed decoding happens.
    pub fn from_json(data: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value =
            serde_json::from_str(data).map_err(|err| CoreError::Serde(err.to_string()))?;
        for section in REQUIRED_SECTIONS {
            if value.get(section).is_none() {
                warn!(section, "backup document rejected");
                return Err(CoreError::MissingSection(section.to_string()));
            }
        }
        serde_json::from_value(value).map_err(|err| CoreError::Serde(err.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|err| CoreError::Serde(err.to_string()))
    }

    /// Replaces the live state with the document's contents.
    pub fn apply(self, ledger: &mut Ledger, goals: &mut Vec<Goal>, settings: &mut Settings) {
        info!(
            transactions = self.transactions.len(),
            goals = self.goals.len(),
            "applying backup"
        );
        ledger.replace_transactions(self.transactions);
        *goals = self.goals;
        *settings = self.settings;
    }
}

/// Writes `document` under `dir` as `<name>_<date>.json` and returns the
/// path. Whitespace runs in `name` collapse to a single underscore.
pub fn export_to_path(
    document: &BackupDocument,
    dir: &Path,
    name: &str,
) -> Result<PathBuf, CoreError> {
    let stem = sanitize_backup_name(name)
        .ok_or_else(|| CoreError::Validation("backup name must not be empty".into()))?;
    fs::create_dir_all(dir)?;
    let date = document.export_date.format(BACKUP_DATE_FORMAT);
    let path = dir.join(format!("{}_{}.{}", stem, date, BACKUP_EXTENSION));
    let tmp = tmp_path(&path);
    write_atomic(&tmp, &document.to_json_pretty()?)?;
    fs::rename(&tmp, &path)?;
    info!(path = %path.display(), "backup exported");
    Ok(path)
}

/// Reads and validates a backup file. The caller decides whether to apply it.
pub fn import_from_path(path: &Path) -> Result<BackupDocument, CoreError> {
    let data = fs::read_to_string(path)?;
    let document = BackupDocument::from_json(&data)?;
    debug!(path = %path.display(), transactions = document.transactions.len(), "backup imported");
    Ok(document)
}

/// Single-entry persistent snapshot slot.
///
/// Holds at most one document, overwritten on every save. Failures here
/// never touch the in-memory ledger.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(SNAPSHOT_FILE),
        })
    }

    /// Opens the slot in the platform's data directory.
    pub fn in_default_dir() -> Result<Self, CoreError> {
        Self::new(default_snapshot_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, document: &BackupDocument) -> Result<(), CoreError> {
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &document.to_json_pretty()?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    pub fn load(&self) -> Result<BackupDocument, CoreError> {
        if !self.path.exists() {
            return Err(CoreError::Storage("no local snapshot available".into()));
        }
        let data = fs::read_to_string(&self.path)?;
        BackupDocument::from_json(&data)
    }

    pub fn clear(&self) -> Result<(), CoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!(path = %self.path.display(), "snapshot cleared");
        }
        Ok(())
    }

    /// When the slot last received a document, if it holds a readable one.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.load().ok().map(|document| document.export_date)
    }
}

/// Describes an exported backup file on disk.
#[derive(Debug, Clone)]
pub struct BackupMetadata {
    pub name: String,
    pub created_at: Option<NaiveDate>,
    pub size_bytes: u64,
    pub path: PathBuf,
}

/// Lists the backup files under `dir`, newest first.
pub fn list_backups(dir: &Path) -> Result<Vec<BackupMetadata>, CoreError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
            continue;
        }
        if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
            let size_bytes = fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
            entries.push(BackupMetadata {
                name: file_name.to_string(),
                created_at: parse_backup_date(file_name),
                size_bytes,
                path: path.clone(),
            });
        }
    }
    entries.sort_by_key(|meta| Reverse(meta.created_at));
    Ok(entries)
}

fn default_snapshot_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("OrcaBem")
}

fn sanitize_backup_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split_whitespace().collect::<Vec<_>>().join("_"))
}

fn parse_backup_date(file_name: &str) -> Option<NaiveDate> {
    let stem = file_name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let (_, raw) = stem.rsplit_once('_')?;
    NaiveDate::parse_from_str(raw, BACKUP_DATE_FORMAT).ok()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
