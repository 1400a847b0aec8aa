use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::Result;

pub struct DirectoryScanner {
    extension: &'static str,
}

impl DirectoryScanner {
    pub fn new(extension: &'static str) -> Self {
        DirectoryScanner { extension }
    }

    /// Lists the immediate entries of `directory` carrying the scanner's
    /// extension, in the order the filesystem yields them.
    pub fn scan(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(directory).map_err(|e| Self::map_read_dir_error(directory, e))?;
        let mut source_paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Self::map_read_dir_error(directory, e))?;
            let path = entry.path();
            if self.matches(&path) {
                source_paths.push(path);
            }
        }
        Ok(source_paths)
    }

    fn matches(&self, path: &Path) -> bool {
        // extension comparison is case sensitive
        path.is_file() && path.extension() == Some(OsStr::new(self.extension))
    }

    fn map_read_dir_error(directory: &Path, error: std::io::Error) -> Error {
        let directory = directory.to_str().unwrap().to_owned();
        match error.kind() {
            ErrorKind::NotFound => Error::InputDirectoryNotFound(directory),
            ErrorKind::PermissionDenied => Error::NoReadPermissionForInputDirectory(directory),
            _ => Error::UnableToReadInputDirectory(directory, error),
        }
    }
}
