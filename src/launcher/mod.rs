pub mod script;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::error::LauncherError;

/// Writes the launcher script to `config.output` and marks it executable.
///
/// The script is staged in a temporary file beside the target and renamed
/// into place once it is complete, so a failure leaves any previous file
/// untouched. A symlinked target is written through to the file it points
/// at. Parent directories are not created.
pub fn write_launcher(config: &LauncherConfig) -> Result<PathBuf, LauncherError> {
    let path = std::path::absolute(&config.output).map_err(|source| LauncherError::Write {
        path: config.output.clone(),
        source,
    })?;
    let write_err = |source| LauncherError::Write {
        path: path.clone(),
        source,
    };

    let target = match std::fs::symlink_metadata(&path) {
        Ok(meta) if meta.file_type().is_symlink() => std::fs::canonicalize(&path).map_err(write_err)?,
        _ => path.clone(),
    };

    let dir = target.parent().ok_or_else(|| {
        write_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no parent directory",
        ))
    })?;

    let script = script::generate(&config.archive_name);

    let mut staged = tempfile::Builder::new()
        .prefix(".launcher-")
        .tempfile_in(dir)
        .map_err(write_err)?;
    staged.write_all(script.as_bytes()).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;

    set_executable(staged.path()).map_err(|source| LauncherError::Permission {
        path: path.clone(),
        source,
    })?;

    staged.persist(&target).map_err(|e| write_err(e.error))?;

    tracing::info!("launcher script created at {}", path.display());
    Ok(path)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

// The launcher is a POSIX shell script; there is no executable bit to set elsewhere.
#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
