//! Static site export: writes the rendered page (and optionally the content
//! catalog) into an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::CATALOG;

/// Name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";
/// Name of the catalog dump inside the output directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// Errors that can occur while exporting the page.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        /// Directory that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The catalog could not be serialized.
    #[error("cannot serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What to export and where.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Output directory, created if missing
    pub out_dir: PathBuf,
    /// Also write `catalog.json`
    pub catalog_json: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            catalog_json: false,
        }
    }
}

/// One written file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    /// Full path of the file
    pub path: PathBuf,
    /// Size in bytes
    pub bytes: usize,
}

/// Result of a successful export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written, in write order
    pub files: Vec<WrittenFile>,
}

/// Renders the page and writes it to `options.out_dir`.
///
/// # Example
///
/// ```rust,no_run
/// use agro_page::export::{export_site, ExportOptions};
///
/// let summary = export_site(&ExportOptions::default()).unwrap();
/// assert!(summary.files[0].path.ends_with("index.html"));
/// ```
pub fn export_site(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    fs::create_dir_all(&options.out_dir).map_err(|source| ExportError::CreateDir {
        path: options.out_dir.clone(),
        source,
    })?;

    let mut summary = ExportSummary::default();

    let html = crate::render_page();
    summary
        .files
        .push(write_file(&options.out_dir.join(INDEX_FILE), &html)?);

    if options.catalog_json {
        let json = serde_json::to_string_pretty(&CATALOG)?;
        summary
            .files
            .push(write_file(&options.out_dir.join(CATALOG_FILE), &json)?);
    }

    tracing::info!(
        out_dir = %options.out_dir.display(),
        files = summary.files.len(),
        "page exported"
    );
    Ok(summary)
}

fn write_file(path: &Path, contents: &str) -> Result<WrittenFile, ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes: contents.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_index_only_by_default() {
        let tmp = TempDir::new().unwrap();
        let options = ExportOptions {
            out_dir: tmp.path().join("site"),
            ..Default::default()
        };

        let summary = export_site(&options).unwrap();

        assert_eq!(summary.files.len(), 1);
        let index = fs::read_to_string(tmp.path().join("site").join(INDEX_FILE)).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert_eq!(summary.files[0].bytes, index.len());
        assert!(!tmp.path().join("site").join(CATALOG_FILE).exists());
    }

    #[test]
    fn writes_catalog_on_request() {
        let tmp = TempDir::new().unwrap();
        let options = ExportOptions {
            out_dir: tmp.path().to_path_buf(),
            catalog_json: true,
        };

        let summary = export_site(&options).unwrap();

        assert_eq!(summary.files.len(), 2);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tmp.path().join(CATALOG_FILE)).unwrap())
                .unwrap();
        assert_eq!(json["features"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn reports_unwritable_output_dir() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("taken");
        fs::write(&blocker, "not a directory").unwrap();

        let err = export_site(&ExportOptions {
            out_dir: blocker.clone(),
            catalog_json: false,
        })
        .unwrap_err();

        match err {
            ExportError::CreateDir { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}
