use crate::codec::{self, FieldReader};
use crate::config::CoreConfig;
use crate::records::Record;
use crate::{CareError, CareResult};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Loads and saves every record of one kind from a single flat file.
///
/// Each call reads or rewrites the whole file. Rows with fewer fields than the header are
/// rejected; extra trailing fields are ignored.
#[derive(Debug)]
pub struct FlatFileRepository<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for FlatFileRepository<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> FlatFileRepository<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Repository for `R` at its standard location under the configured data directory.
    pub fn for_config(cfg: &CoreConfig) -> Self {
        Self::new(cfg.record_path(R::KIND))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record in file order.
    ///
    /// # Errors
    ///
    /// - [`CareError::FileRead`] if the file is missing or unreadable.
    /// - [`CareError::MalformedRow`] if any data row is shorter than the header.
    pub fn load_all(&self) -> CareResult<Vec<R>> {
        let expected = R::HEADER.len();
        let rows = codec::read(&self.path)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            if row.fields.len() < expected {
                return Err(CareError::MalformedRow {
                    path: self.path.clone(),
                    line: row.line,
                    expected,
                    found: row.fields.len(),
                });
            }
            records.push(R::from_fields(&mut FieldReader::new(&row.fields)));
        }

        tracing::debug!(
            kind = %R::KIND,
            path = %self.path.display(),
            count = records.len(),
            "loaded records"
        );
        Ok(records)
    }

    /// Replaces the file with the header line followed by `records` in order.
    ///
    /// # Errors
    ///
    /// Returns [`CareError::FileWrite`] if the file cannot be written. The previous contents are
    /// left in place when that happens.
    pub fn save_all(&self, records: &[R]) -> CareResult<()> {
        codec::write(
            &self.path,
            &R::header_line(),
            records.iter().map(Record::to_line),
        )?;

        tracing::debug!(
            kind = %R::KIND,
            path = %self.path.display(),
            count = records.len(),
            "saved records"
        );
        Ok(())
    }

    /// Creates a header-only file if none exists yet.
    ///
    /// Returns `true` if a file was created. An existing file is never touched.
    pub fn initialise(&self) -> CareResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CareError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.save_all(&[])?;
        tracing::info!(kind = %R::KIND, path = %self.path.display(), "created record file");
        Ok(true)
    }
}
