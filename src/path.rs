use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Resolves a user supplied input path against `base` and checks that it names a file.
///
/// Relative paths are joined onto `base`, `.` and `..` components are folded lexically.
/// Symlinks are not resolved.
///
/// # Errors
///
/// [`Error::PathNotFound`] carrying the resolved path if it is not an existing regular file.
pub fn resolve_input(raw: &Path, base: &Path) -> Result<PathBuf> {
    let joined = if raw.is_absolute() { raw.to_path_buf() } else { base.join(raw) };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            c => resolved.push(c.as_os_str()),
        }
    }

    if resolved.is_file() {
        Ok(resolved)
    } else {
        Err(Error::PathNotFound(resolved))
    }
}
