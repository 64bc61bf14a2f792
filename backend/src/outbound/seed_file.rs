//! Seed documents read from the local filesystem.
//!
//! Files are opened through `cap_std` relative to their parent directory so
//! the process never touches ambient paths beyond the one it was given.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::{DirectorySeed, DirectorySeedError};

/// Errors raised while loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedFileError {
    /// The file could not be opened or read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but is not a valid seed document.
    #[error("invalid seed file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DirectorySeedError,
    },
}

fn read_to_string(path: &Path) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "seed path must be a file"))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.read_to_string(Path::new(file_name))
}

/// Read, parse, and validate the seed document at `path`.
///
/// # Errors
///
/// Returns [`SeedFileError::Read`] for I/O failures and
/// [`SeedFileError::Invalid`] when the JSON is malformed or fails
/// validation.
pub fn read_seed_file(path: &Path) -> Result<DirectorySeed, SeedFileError> {
    let raw = read_to_string(path).map_err(|source| SeedFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    DirectorySeed::from_json(&raw).map_err(|source| SeedFileError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn write_seed(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("seed.json");
        let handle = Dir::open_ambient_dir(dir.path(), ambient_authority()).expect("open dir");
        handle.write("seed.json", contents).expect("write seed");
        (dir, path)
    }

    #[rstest]
    fn reads_bundled_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("directory-seed.json");

        let seed = read_seed_file(&path).expect("fixture parses");

        assert_eq!(seed.owners().len(), 2);
        assert_eq!(seed.pets().len(), 3);
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");

        let err = read_seed_file(&dir.path().join("absent.json")).expect_err("no file");

        assert!(matches!(err, SeedFileError::Read { .. }));
    }

    #[rstest]
    fn duplicate_ids_are_invalid() {
        let (_dir, path) = write_seed(
            r#"{"owners":[{"id":1,"name":"Jo"},{"id":1,"name":"Sam"}]}"#,
        );

        let err = read_seed_file(&path).expect_err("duplicate owner");

        assert!(matches!(
            err,
            SeedFileError::Invalid {
                source: DirectorySeedError::DuplicateOwnerId { id: 1 },
                ..
            }
        ));
    }
}
