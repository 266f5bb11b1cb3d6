use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use tracing::trace;

/// Capability that durably persists rendered text at a path.
///
/// Callers hand over a finished text blob; implementations decide how and
/// where it lands. Errors are returned as-is so callers can inspect the
/// underlying [`io::ErrorKind`].
pub trait Storage {
    /// Persist `text` at `path`.
    fn persist(&self, text: &str, path: &Path) -> io::Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn persist(&self, text: &str, path: &Path) -> io::Result<()> {
        (**self).persist(text, path)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn persist(&self, text: &str, path: &Path) -> io::Result<()> {
        self.as_ref().persist(text, path)
    }
}

/// Storage backed by the local filesystem.
///
/// Missing parent directories are created and existing files are always
/// overwritten. Content is written to a temporary file next to the target
/// and renamed over it, so a failed write never leaves a partial file at
/// the target path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn persist(&self, text: &str, path: &Path) -> io::Result<()> {
        trace!(path = %path.display(), bytes = text.len(), "persisting file");
        write_file(path, text)
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    set_permissions(file.path(), path)?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Temporary files are created owner-only; give the result the target's
/// existing permissions, or the usual mode of a freshly created file.
fn set_permissions(tmp: &Path, target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) => fs::set_permissions(tmp, meta.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => set_default_permissions(tmp),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn set_default_permissions(tmp: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(tmp, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_tmp: &Path) -> io::Result<()> {
    Ok(())
}
