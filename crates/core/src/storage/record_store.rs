use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::reading::Reading;

/// Column order of the persisted CSV file.
pub const CSV_HEADER: [&str; 5] = ["id", "vehicle_id", "date", "meter_reading", "price_per_kwh"];

/// CSV-backed reading log.
///
/// Layout: one header row, one data row per reading, dates as ISO-8601
/// (`YYYY-MM-DD`). Append adds a row at the end; delete rewrites the
/// surviving rows in full via `compact`. Every mutation is flushed and
/// fsynced before the call returns.
///
/// An internal `Mutex` serializes load-modify-write sequences, so two
/// threads in the same process cannot lose each other's rows. Writers
/// in *other* processes are not guarded — single-process deployment is
/// assumed.
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the underlying CSV file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one reading, creating the file (with its header row) on
    /// first use. Existing rows are never touched.
    pub fn append(&self, reading: &Reading) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        // A zero-length file gets a header too: an external `touch` of
        // the data file must not turn the first reading into a header.
        let needs_header = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(CSV_HEADER)?;
        }
        writer.serialize(reading)?;
        writer.flush()?;
        Self::sync(writer)?;

        debug!(id = %reading.id, vehicle = %reading.vehicle_id, "appended reading");
        Ok(())
    }

    /// Load every stored reading, in file order.
    ///
    /// A missing or header-only file yields an empty vec. An unparsable
    /// row fails the whole load with `InvalidRecord`: a silently skipped
    /// row would corrupt the consumption derived for every later reading
    /// of that vehicle, so corruption is surfaced instead.
    pub fn load_all(&self) -> Result<Vec<Reading>, CoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut readings = Vec::new();
        for row in reader.deserialize() {
            let reading: Reading = row?;
            readings.push(reading);
        }
        Ok(readings)
    }

    /// Remove the reading with the given id, if present. Absent ids are
    /// a no-op. On a hit, the surviving rows are rewritten in full.
    pub fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut readings = self.load_all()?;
        let before = readings.len();
        readings.retain(|r| r.id != id);
        if readings.len() == before {
            debug!(%id, "delete: id not present, store unchanged");
            return Ok(());
        }

        self.rewrite(&readings)?;
        debug!(%id, remaining = readings.len(), "deleted reading");
        Ok(())
    }

    /// Rewrite the whole file (header plus rows) from the given set.
    pub fn compact(&self, readings: &[Reading]) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.rewrite(readings)
    }

    fn rewrite(&self, readings: &[Reading]) -> Result<(), CoreError> {
        let file = File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(CSV_HEADER)?;
        for reading in readings {
            writer.serialize(reading)?;
        }
        writer.flush()?;
        Self::sync(writer)
    }

    fn sync(writer: csv::Writer<File>) -> Result<(), CoreError> {
        let file = writer
            .into_inner()
            .map_err(|e| CoreError::FileIO(e.to_string()))?;
        file.sync_all()?;
        Ok(())
    }
}
