//! Download target that saves exports into a directory.

use std::path::{Path, PathBuf};

use review_insight::{Download, ExportError};

pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl Download for DirectoryDownload {
    fn save(&self, filename: &str, _mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let path = self.path_for(filename);
        write_all(&self.dir, &path, bytes).map_err(|source| ExportError::Io { path, source })
    }
}

fn write_all(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(path, bytes)
}
