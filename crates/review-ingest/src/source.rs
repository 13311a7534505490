//! Input resolution: an uploaded file or the bundled sample.

use std::path::{Path, PathBuf};

use sha2::Digest;
use tracing::{info, warn};

use crate::error::{InputError, Result};

/// Sample table read from the working directory when nothing is uploaded.
pub const DEFAULT_SAMPLE_FILE: &str = "customer_review.csv";

/// Where the review table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file supplied by the user.
    Upload(PathBuf),
    /// The bundled `customer_review.csv` fallback.
    DefaultSample(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &Path {
        match self {
            InputSource::Upload(path) | InputSource::DefaultSample(path) => path,
        }
    }

    pub fn is_default_sample(&self) -> bool {
        matches!(self, InputSource::DefaultSample(_))
    }
}

/// Picks the input table.
///
/// An uploaded path wins; otherwise `customer_review.csv` in `working_dir` is
/// used. Either way the file must exist, or `FileNotFound` halts the run.
pub fn resolve_input(upload: Option<&Path>, working_dir: &Path) -> Result<InputSource> {
    let source = match upload {
        Some(path) => InputSource::Upload(path.to_path_buf()),
        None => {
            let path = working_dir.join(DEFAULT_SAMPLE_FILE);
            warn!(path = %path.display(), "no file uploaded, using sample reviews");
            InputSource::DefaultSample(path)
        }
    };
    if !source.path().is_file() {
        return Err(InputError::FileNotFound {
            path: source.path().to_path_buf(),
        });
    }
    info!(path = %source.path().display(), "input resolved");
    Ok(source)
}

/// SHA-256 of the file contents, hex encoded.
pub fn fingerprint_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| InputError::from_io(path, e))?;
    Ok(hex::encode(sha2::Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let upload = dir.path().join("mine.csv");
        std::fs::write(&upload, "Review\nok\n").unwrap();
        std::fs::write(dir.path().join(DEFAULT_SAMPLE_FILE), "Review\nsample\n").unwrap();

        let source = resolve_input(Some(&upload), dir.path()).unwrap();
        assert_eq!(source, InputSource::Upload(upload));
        assert!(!source.is_default_sample());
    }

    #[test]
    fn falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_SAMPLE_FILE), "Review\nsample\n").unwrap();

        let source = resolve_input(None, dir.path()).unwrap();
        assert!(source.is_default_sample());
        assert_eq!(source.path(), dir.path().join(DEFAULT_SAMPLE_FILE));
    }

    #[test]
    fn missing_sample_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_input(None, dir.path()).unwrap_err();
        assert!(matches!(err, InputError::FileNotFound { .. }));
    }

    #[test]
    fn fingerprint_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.csv");
        std::fs::write(&path, "abc").unwrap();
        assert_eq!(
            fingerprint_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
