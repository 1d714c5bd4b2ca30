use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the rendered Dockerfile to `path`, replacing any existing file.
///
/// Content goes to a temporary file in the same directory first and is then
/// renamed over the target, so a failed write never truncates a previous
/// Dockerfile. The result keeps the permissions of the file it replaces; a
/// new file gets the usual umask-derived mode.
pub fn write_dockerfile(path: &Path, content: &str) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".dockgen-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the process umask at creation, like a plain create.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(|e| WriteError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    match std::fs::metadata(path) {
        Ok(existing) => tmp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| WriteError::Permissions {
                path: path.to_path_buf(),
                source: e,
            })?,
        // arch-lint: allow(no-error-swallowing) reason="a new file has no permissions to carry over"
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(WriteError::Permissions {
                path: path.to_path_buf(),
                source: e,
            });
        }
    }

    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| WriteError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    tmp.persist(path).map_err(|e| WriteError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote dockerfile");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create a temporary file for {path}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to carry over permissions of {path}")]
    Permissions {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to replace {path}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}
