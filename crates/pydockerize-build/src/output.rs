use std::path::{Path, PathBuf};

/// Writes a rendered recipe to `dest_path/filename`.
///
/// Missing parent directories are created. An existing file is overwritten
/// unconditionally; concurrent runs against the same path leave whichever
/// write finished last. Returns the path written.
pub fn write_recipe(
    dest_path: &Path,
    filename: &str,
    content: &str,
) -> Result<PathBuf, WriteError> {
    std::fs::create_dir_all(dest_path).map_err(|e| WriteError::CreateDir {
        path: dest_path.to_path_buf(),
        source: e,
    })?;

    let recipe_path = dest_path.join(filename);
    if recipe_path.exists() {
        tracing::debug!(path = %recipe_path.display(), "overwriting existing recipe");
    }

    std::fs::write(&recipe_path, content).map_err(|e| WriteError::Write {
        path: recipe_path.clone(),
        source: e,
    })?;

    tracing::debug!(path = %recipe_path.display(), bytes = content.len(), "recipe written");
    Ok(recipe_path)
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create destination directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
