//! Filesystem utilities.

use scot4_types::Result;
use std::fs;
use std::path::Path;

/// Read entire file as string (slurp).
pub fn slurp(path: impl AsRef<Path>) -> Result<String> {
    fs::read_to_string(path).map_err(Into::into)
}

/// Write `contents` to `path`, creating parent directories as needed.
///
/// An existing file is truncated.
pub fn write_file(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
