use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Reply file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid replies directory: {0}")]
    InvalidRepliesDir(String),
}

/// Read a saved reply file and return its text.
pub fn read_reply_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for saved reply files (`.md`) directly under the replies
/// directory, sorted by path. Subdirectories are not descended into;
/// replies are stored flat.
pub fn scan_reply_files(replies_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_replies_dir(replies_root)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(replies_root).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn validate_replies_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidRepliesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
