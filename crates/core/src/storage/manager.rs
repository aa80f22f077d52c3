use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

/// High-level storage operations: save/load the portfolio to/from JSON bytes or files.
///
/// The data file is a JSON array of holding objects, written whole on every save.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a portfolio to pretty-printed JSON bytes.
    pub fn save_to_bytes(portfolio: &Portfolio) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec_pretty(portfolio)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))
    }

    /// Parse a portfolio from JSON bytes. Tickers are canonicalized.
    pub fn load_from_bytes(data: &[u8]) -> Result<Portfolio, CoreError> {
        let mut portfolio: Portfolio = serde_json::from_slice(data)
            .map_err(|e| CoreError::InvalidFileFormat(format!("Failed to parse holdings: {e}")))?;
        portfolio.canonicalize();
        Ok(portfolio)
    }

    /// Save the portfolio to disk, replacing the previous file atomically.
    ///
    /// Writes to a temporary file next to `path`, flushes it, then renames it
    /// over the target. On failure the old file is left as it was.
    pub fn save_to_file(portfolio: &Portfolio, path: &Path) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(portfolio)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;

        debug!("Saved {} holdings to {}", portfolio.len(), path.display());
        Ok(())
    }

    /// Load the portfolio from disk.
    ///
    /// Returns `Ok(None)` when the file does not exist, so callers can start
    /// with an empty portfolio without treating it as a failure.
    pub fn load_from_file(path: &Path) -> Result<Option<Portfolio>, CoreError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let portfolio = Self::load_from_bytes(&bytes)?;
        info!("Successfully loaded {} holdings from {}", portfolio.len(), path.display());
        Ok(Some(portfolio))
    }
}
