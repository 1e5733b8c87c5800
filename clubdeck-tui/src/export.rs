//! Writing export payloads to disk
//!
//! The reducer builds CSV text; this is the only place it touches the
//! filesystem. The export directory is created on demand and the file is
//! stamped with the local date at write time.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use clubdeck_core::csv::export_filename;

use crate::error::{DeckError, Result};

pub fn write_csv(export_dir: &Path, prefix: &str, csv: &str, date: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(export_dir)?;
    let path = export_dir.join(export_filename(prefix, date));
    fs::write(&path, csv).map_err(|source| DeckError::Export {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = csv.len(), "export written");
    Ok(path)
}
