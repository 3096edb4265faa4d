//! File-backed blob store.
//!
//! Each key maps to `<key>.json` inside a single directory opened through
//! `cap-std`, so the store can never reach outside that directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::board::ports::{BlobStore, BlobStoreError, BlobStoreResult};

const BLOB_EXTENSION: &str = "json";
const STAGING_SUFFIX: &str = "tmp";

/// Blob store persisting each key as a JSON file in one directory.
#[derive(Debug)]
pub struct FileBlobStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl FileBlobStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(root: &Utf8Path) -> BlobStoreResult<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(BlobStoreError::io)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(BlobStoreError::io)?;
        Ok(Self {
            dir,
            root: root.to_owned(),
        })
    }

    /// Returns the directory backing this store.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Maps a storage key onto a file name inside the store directory.
fn file_name(key: &str) -> BlobStoreResult<String> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_'));
    if !is_valid {
        return Err(BlobStoreError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{BLOB_EXTENSION}"))
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BlobStoreError::io(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> BlobStoreResult<()> {
        let name = file_name(key)?;
        let staging = format!("{name}.{STAGING_SUFFIX}");
        self.dir
            .write(&staging, value)
            .map_err(BlobStoreError::io)?;
        self.dir
            .rename(&staging, &self.dir, &name)
            .map_err(BlobStoreError::io)
    }
}
