//! Member photo path inspection.
//!
//! # Responsibility
//! - Check that a stored photo path points at a supported image file.
//! - Report problems as values so callers can fall back to a placeholder.
//!
//! # Invariants
//! - Image bytes are never read here; only the path and file metadata.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Image container inferred from the file extension (`jpg`, `jpeg`, `png`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Jpeg,
    Png,
}

/// A photo path that passed inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoInfo {
    pub path: PathBuf,
    pub format: PhotoFormat,
    pub size_bytes: u64,
}

/// Why a photo path cannot be displayed.
#[derive(Debug)]
pub enum PhotoError {
    UnsupportedExtension(PathBuf),
    NotAFile(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for PhotoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedExtension(path) => write!(
                f,
                "unsupported photo type `{}`; expected jpg, jpeg or png",
                path.display()
            ),
            Self::NotAFile(path) => write!(f, "photo path is not a file: `{}`", path.display()),
            Self::Io { path, source } => {
                write!(f, "failed to load photo `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PhotoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Inspects a member photo path.
pub fn inspect_photo(path: impl AsRef<Path>) -> Result<PhotoInfo, PhotoError> {
    let path = path.as_ref();
    let format = photo_format(path)
        .ok_or_else(|| PhotoError::UnsupportedExtension(path.to_path_buf()))?;

    let metadata = std::fs::metadata(path).map_err(|source| PhotoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(PhotoError::NotAFile(path.to_path_buf()));
    }

    Ok(PhotoInfo {
        path: path.to_path_buf(),
        format,
        size_bytes: metadata.len(),
    })
}

fn photo_format(path: &Path) -> Option<PhotoFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some(PhotoFormat::Jpeg),
        "png" => Some(PhotoFormat::Png),
        _ => None,
    }
}
