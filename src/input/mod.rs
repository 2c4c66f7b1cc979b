use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("the file '{}' was not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("'{}' is not a valid text file (it might be binary)", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("could not read file: {0}")]
    Io(io::Error),
}

/// Read the whole file as UTF-8 text.
///
/// Single blocking read; the handle is opened and closed within this
/// call on all paths. Any byte that is not valid UTF-8 aborts the read
/// with [`LoadError::InvalidEncoding`]; there is no partial-read
/// recovery.
pub fn load_file(path: &str) -> Result<String, LoadError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) => match err.kind() {
            io::ErrorKind::NotFound => Err(LoadError::FileNotFound(PathBuf::from(path))),
            io::ErrorKind::InvalidData => Err(LoadError::InvalidEncoding(PathBuf::from(path))),
            _ => Err(LoadError::Io(err)),
        },
    }
}
