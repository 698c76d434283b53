//! Append-only persistence of calibration record pairs.
//!
//! One JSON Lines file per session: one [`RecordPair`] per line, in
//! capture order, flushed to disk before the controller may advance.
//! Opening an existing store appends after its current contents, so
//! repeated runs against the same path accumulate pairs; callers keep
//! sessions apart by using distinct store names.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use calib_capture_core::{RecordPair, RecordSink, SinkError};

/// Append-only JSON Lines store of record pairs.
///
/// The store handle is exclusively owned by one session for its lifetime:
/// opened at session start, appended to once per target, closed on drop.
pub struct SampleStore {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl SampleStore {
    /// Open (or create) the store at `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every pair back, in append order.
    ///
    /// This is the entry point for the downstream mapping-derivation
    /// tooling: the returned sequence is exactly the sequence of appends.
    pub fn read_pairs(path: impl AsRef<Path>) -> Result<Vec<RecordPair>, SinkError> {
        let reader = BufReader::new(File::open(path)?);
        let mut pairs = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            pairs.push(serde_json::from_str(&line)?);
        }
        Ok(pairs)
    }
}

impl RecordSink for SampleStore {
    fn append_pair(&mut self, pair: &RecordPair) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, pair)?;
        self.writer.write_all(b"\n")?;
        // A pair only counts as captured once it is on disk.
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        log::debug!("appended record pair to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calib_capture_core::{CorrespondenceRecord, Orientation, Pose};
    use nalgebra::Point3;

    fn pair(seed: f64, x: i32, y: i32) -> RecordPair {
        let record = |offset: f64| CorrespondenceRecord {
            pose: Pose::new(
                Point3::new(seed + offset, seed * 2.0, seed * 3.0),
                Orientation {
                    yaw_deg: seed * 10.0,
                    pitch_deg: seed * 20.0,
                    roll_deg: seed * 30.0,
                },
            ),
            image_x: x,
            image_y: y,
        };
        RecordPair {
            arm1: record(0.0),
            arm2: record(0.5),
        }
    }

    #[test]
    fn appended_pairs_read_back_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.jsonl");

        let pairs = [pair(1.0, 100, 200), pair(2.0, 300, 400), pair(3.0, 5, 6)];
        {
            let mut store = SampleStore::open(&path).expect("open store");
            for p in &pairs {
                store.append_pair(p).expect("append");
            }
        }

        let restored = SampleStore::read_pairs(&path).expect("read pairs");
        assert_eq!(restored, pairs);
    }

    #[test]
    fn reopening_appends_after_existing_pairs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.jsonl");

        {
            let mut store = SampleStore::open(&path).expect("open");
            store.append_pair(&pair(1.0, 10, 20)).expect("append");
        }
        {
            let mut store = SampleStore::open(&path).expect("reopen");
            store.append_pair(&pair(2.0, 30, 40)).expect("append");
        }

        let restored = SampleStore::read_pairs(&path).expect("read pairs");
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].arm1.image_x, 10);
        assert_eq!(restored[1].arm1.image_x, 30);
    }

    #[test]
    fn reading_missing_store_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = SampleStore::read_pairs(dir.path().join("nope.jsonl")).unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
    }

    #[test]
    fn corrupt_line_is_a_json_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.jsonl");
        std::fs::write(&path, "not json\n").expect("write");

        let err = SampleStore::read_pairs(&path).unwrap_err();
        assert!(matches!(err, SinkError::Json(_)));
    }
}
