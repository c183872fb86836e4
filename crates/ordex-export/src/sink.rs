use std::fs;
use std::path::{Path, PathBuf};

use crate::csv::CsvExport;
use crate::error::ExportError;

/// Writes `export` into `dir` under its file name, creating `dir` if needed.
///
/// Returns the path of the written file. An existing file with the same name
/// is overwritten.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the directory cannot be created or the
/// file cannot be written.
pub fn write_csv(dir: &Path, export: &CsvExport) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(&export.filename);
    fs::write(&path, &export.csv_content).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = export.csv_content.len(), "wrote csv export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export() -> CsvExport {
        CsvExport {
            csv_content: "Order #,Order Date\n1,today".to_string(),
            filename: "amazon-orders-2025-01-01T00-00-00.csv".to_string(),
        }
    }

    #[test]
    fn writes_into_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("exports");

        let path = write_csv(&dir, &export()).unwrap();

        assert_eq!(path, dir.join("amazon-orders-2025-01-01T00-00-00.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Order #,Order Date\n1,today");
    }

    #[test]
    fn directory_blocked_by_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("exports");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_csv(&blocker, &export()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
