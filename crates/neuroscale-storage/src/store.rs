use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use neuroscale_core::models::record::AssessmentRecord;
use neuroscale_core::record_keys;
use neuroscale_core::scale::ScaleKind;

use crate::error::StoreError;
use crate::normalize::normalize;
use crate::stats::{self, Statistics, Summary};

/// A loaded record and the file it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub path: PathBuf,
    pub record: AssessmentRecord,
}

/// Assessment records on the local filesystem.
///
/// New records are written to `data_dir`. Reads scan `data_dir` first, then
/// `legacy_dir`, which only older builds wrote to.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
    legacy_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: impl Into<PathBuf>, legacy_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            legacy_dir: legacy_dir.into(),
        }
    }

    /// Store using the conventional directory names under `root`.
    pub fn at_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(
            root.join(record_keys::DATA_DIR),
            root.join(record_keys::LEGACY_DIR),
        )
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn legacy_dir(&self) -> &Path {
        &self.legacy_dir
    }

    /// Write one record and return its path.
    ///
    /// The file is written next to its final name and renamed into place, so
    /// a crash never leaves a half-written record. A record saved in the same
    /// second for the same patient and scale replaces the earlier file.
    pub fn save(&self, record: &AssessmentRecord) -> Result<PathBuf, StoreError> {
        let unavailable = |source: io::Error| StoreError::StorageUnavailable {
            path: self.data_dir.clone(),
            source,
        };

        fs::create_dir_all(&self.data_dir).map_err(unavailable)?;

        let file_name = record.file_name();
        let path = self.data_dir.join(&file_name);
        let tmp_path = self.data_dir.join(format!("{file_name}.tmp"));

        let body = record.to_json_pretty()?;
        fs::write(&tmp_path, &body).map_err(unavailable)?;
        if let Err(source) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(unavailable(source));
        }

        tracing::info!(
            path = %path.display(),
            scale = %record.scale_type,
            "record saved"
        );
        Ok(path)
    }

    /// Every readable record, newest first, with its file path.
    ///
    /// `scale` restricts the scan to files named for that scale. Files that
    /// fail to read or normalize are logged and skipped. Missing directories
    /// contribute nothing.
    pub fn entries(&self, scale: Option<&str>) -> Result<Vec<StoredRecord>, StoreError> {
        let prefix = scale.map(file_prefix);

        let mut entries = Vec::new();
        for dir in self.directories() {
            for path in record_files(dir, prefix.as_deref())? {
                match read_record(&path) {
                    Ok(record) => entries.push(StoredRecord { path, record }),
                    Err(error) => {
                        tracing::warn!(path = %path.display(), %error, "skipping record");
                    }
                }
            }
        }

        // Stable: equal times keep scan order (data before legacy).
        entries.sort_by(|a, b| b.record.assessment_time.cmp(&a.record.assessment_time));

        tracing::debug!(
            count = entries.len(),
            scale = scale.unwrap_or("*"),
            "records loaded"
        );
        Ok(entries)
    }

    /// Every readable record, newest first.
    pub fn load_all(&self, scale: Option<&str>) -> Result<Vec<AssessmentRecord>, StoreError> {
        Ok(self
            .entries(scale)?
            .into_iter()
            .map(|entry| entry.record)
            .collect())
    }

    /// Records whose patient name contains `query`, ignoring case.
    pub fn search(
        &self,
        query: &str,
        scale: Option<&str>,
    ) -> Result<Vec<AssessmentRecord>, StoreError> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .load_all(scale)?
            .into_iter()
            .filter(|r| r.patient_info.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Aggregate over all records, or over one patient's (exact name).
    pub fn summary(&self, patient_name: Option<&str>) -> Result<Summary, StoreError> {
        let records: Vec<_> = self
            .load_all(None)?
            .into_iter()
            .filter(|r| patient_name.is_none_or(|name| r.patient_info.name == name))
            .collect();
        if records.is_empty() {
            return Err(StoreError::NoRecords);
        }
        Ok(stats::summarize(&records))
    }

    /// Per-scale and per-patient statistics.
    pub fn statistics(&self, scale: Option<&str>) -> Result<Statistics, StoreError> {
        let records = self.load_all(scale)?;
        if records.is_empty() {
            return Err(StoreError::NoRecords);
        }
        Ok(stats::statistics(&records))
    }

    /// Remove one record file. Only record files directly inside the data or
    /// legacy directory may be removed.
    pub fn delete(&self, path: &Path) -> Result<(), StoreError> {
        let outside = || StoreError::OutsideStore(path.to_path_buf());

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(outside)?;
        if !record_keys::is_record_file(name) {
            return Err(outside());
        }
        let parent = path
            .parent()
            .and_then(|p| p.canonicalize().ok())
            .ok_or_else(outside)?;
        let inside = self
            .directories()
            .filter_map(|dir| dir.canonicalize().ok())
            .any(|dir| dir == parent);
        if !inside {
            return Err(outside());
        }

        fs::remove_file(path)?;
        tracing::info!(path = %path.display(), "record deleted");
        Ok(())
    }

    fn directories(&self) -> impl Iterator<Item = &Path> {
        let legacy = (self.legacy_dir != self.data_dir).then_some(self.legacy_dir.as_path());
        std::iter::once(self.data_dir.as_path()).chain(legacy)
    }
}

/// File-name prefix for a scale filter. Known scales use their canonical id,
/// which is what [`AssessmentRecord::file_name`] writes.
fn file_prefix(scale: &str) -> String {
    scale
        .parse::<ScaleKind>()
        .map(|kind| kind.id().to_string())
        .unwrap_or_else(|_| scale.trim().to_string())
}

/// Record files in `dir`, sorted by name.
fn record_files(dir: &Path, scale: Option<&str>) -> Result<Vec<PathBuf>, StoreError> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::StorageUnavailable {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                return false;
            };
            record_keys::is_record_file(name)
                && scale.is_none_or(|scale| record_keys::file_matches_scale(name, scale))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn read_record(path: &Path) -> Result<AssessmentRecord, StoreError> {
    let bytes = fs::read(path)?;
    let malformed = |reason: String| StoreError::MalformedRecord {
        path: path.to_path_buf(),
        reason,
    };
    let raw: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| malformed(e.to_string()))?;
    normalize(raw).map_err(malformed)
}
