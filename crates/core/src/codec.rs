//! Flat-file codec.
//!
//! Every entity kind is stored as a delimited text file: one header line naming the fields,
//! then one line per record. There is no quoting. Before writing, each field is sanitized by
//! replacing the delimiter and line-break characters with a single space, so a field can never
//! break the row structure.
//!
//! Sanitization is lossy: a clinical summary containing commas or newlines reads back with
//! spaces in their place. This is an accepted property of the format.
//!
//! Writes replace the target file atomically. The new content is written to a temporary file in
//! the same directory, synced, and renamed over the target, so an interrupted write leaves the
//! previous file intact. The replacement keeps the permissions of the file it replaces.

use crate::constants::FIELD_DELIMITER;
use crate::{CareError, CareResult};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// One data line of a record file, split into fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number within the file (the header is line 1).
    pub line: usize,
    pub fields: Vec<String>,
}

/// Reads every data row of the file at `path`.
///
/// The first line is discarded as the header. Each remaining line is split on the delimiter,
/// keeping empty fields, including trailing ones.
///
/// # Errors
///
/// Returns [`CareError::FileRead`] if the file cannot be opened or read.
pub fn read(path: &Path) -> CareResult<Vec<Row>> {
    let read_err = |source| CareError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut rows = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(read_err)?;
        if index == 0 {
            continue;
        }

        rows.push(Row {
            line: index + 1,
            fields: line.split(FIELD_DELIMITER).map(str::to_owned).collect(),
        });
    }

    Ok(rows)
}

/// Replaces the file at `path` with `header` followed by `lines`, one per line.
///
/// # Errors
///
/// Returns [`CareError::FileWrite`] if the temporary file cannot be created or written, or if
/// it cannot be renamed over `path`.
pub fn write<I, S>(path: &Path, header: &str, lines: I) -> CareResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let write_err = |source| CareError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(&mut tmp);
        writeln!(writer, "{header}").map_err(write_err)?;
        for line in lines {
            writeln!(writer, "{}", line.as_ref()).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
    }
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Normalizes one field value for writing.
///
/// `None` becomes an empty string. Every delimiter, `\n` and `\r` is replaced by a single space.
/// The input is borrowed unchanged when nothing needs replacing.
pub fn sanitize_field(value: Option<&str>) -> Cow<'_, str> {
    match value {
        None => Cow::Borrowed(""),
        Some(v) if v.contains([FIELD_DELIMITER, '\n', '\r']) => {
            Cow::Owned(v.replace([FIELD_DELIMITER, '\n', '\r'], " "))
        }
        Some(v) => Cow::Borrowed(v),
    }
}

/// Sanitizes and joins `fields` into one line.
pub fn join_fields<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(FIELD_DELIMITER);
        }
        line.push_str(&sanitize_field(field));
    }
    line
}

/// Sequential reader over the fields of a row whose width has already been checked.
///
/// Reads past the end yield empty values; callers validate the width first.
pub struct FieldReader<'a> {
    fields: std::slice::Iter<'a, String>,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: &'a [String]) -> Self {
        Self {
            fields: fields.iter(),
        }
    }

    /// Next field as text.
    pub fn text(&mut self) -> String {
        self.fields.next().cloned().unwrap_or_default()
    }

    /// Next field, with an empty value read as absent.
    pub fn optional(&mut self) -> Option<String> {
        Some(self.text()).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_skips_header_and_keeps_empty_fields() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "a,b,c\n1,,3\n,,\n4,5,\n").expect("should write fixture");

        let rows = read(&path).expect("read should succeed");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].fields, vec!["1", "", "3"]);
        assert_eq!(rows[1].fields, vec!["", "", ""]);
        assert_eq!(rows[2].fields, vec!["4", "5", ""]);
    }

    #[test]
    fn test_read_handles_crlf_line_endings() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "a,b\r\n1,2\r\n").expect("should write fixture");

        let rows = read(&path).expect("read should succeed");
        assert_eq!(rows[0].fields, vec!["1", "2"]);
    }

    #[test]
    fn test_read_of_empty_file_yields_no_rows() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("empty.csv");
        fs::write(&path, "").expect("should write fixture");

        assert!(read(&path).expect("read should succeed").is_empty());
    }

    #[test]
    fn test_read_missing_file_is_fatal() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.csv");

        let err = read(&path).expect_err("missing file should fail");
        assert!(matches!(err, CareError::FileRead { path: p, .. } if p == path));
    }

    #[test]
    fn test_write_replaces_file_contents() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.csv");
        fs::write(&path, "stale\nstale\nstale\n").expect("should write fixture");

        write(&path, "x,y", ["1,2", "3,4"]).expect("write should succeed");

        let contents = fs::read_to_string(&path).expect("should read output");
        assert_eq!(contents, "x,y\n1,2\n3,4\n");
    }

    #[test]
    fn test_write_leaves_no_temporary_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.csv");

        write(&path, "x", Vec::<String>::new()).expect("write should succeed");

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .expect("should list dir")
            .flatten()
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_existing_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.csv");
        fs::write(&path, "x\n").expect("should write fixture");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))
            .expect("should set permissions");

        write(&path, "x", ["1"]).expect("write should succeed");

        let mode = fs::metadata(&path).expect("should stat output").permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(fs::read_to_string(&path).expect("should read output"), "x\n1\n");
    }

    #[test]
    fn test_write_into_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nope").join("out.csv");

        let err = write(&path, "x", ["1"]).expect_err("write should fail");
        assert!(matches!(err, CareError::FileWrite { .. }));
    }

    #[test]
    fn test_sanitize_field_replaces_delimiters_and_line_breaks() {
        assert_eq!(sanitize_field(Some("a,b\nc\r\nd")), "a b c  d");
        assert_eq!(sanitize_field(None), "");
        assert!(matches!(sanitize_field(Some("plain")), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_join_fields_writes_absent_values_as_empty() {
        let line = join_fields([Some("P001"), None, Some("Lee, Ann")]);
        assert_eq!(line, "P001,,Lee  Ann");
    }

    #[test]
    fn test_field_reader_reads_in_order() {
        let fields = vec!["a".to_string(), String::new(), "c".to_string()];
        let mut reader = FieldReader::new(&fields);
        assert_eq!(reader.text(), "a");
        assert_eq!(reader.optional(), None);
        assert_eq!(reader.optional(), Some("c".to_string()));
        assert_eq!(reader.text(), "");
    }
}
