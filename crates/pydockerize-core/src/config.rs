use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the optional project-level config file.
pub const CONFIG_FILE_NAME: &str = "pydockerize.toml";

/// Install command prefix used when none is configured.
pub const DEFAULT_INSTALL_COMMAND: &str = "pip install";

/// pydockerize.toml configuration
///
/// Every field has a default except `entrypoint`, which must come from
/// either this file or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerizeConfig {
    /// Python module executed at container startup (without `.py`)
    #[serde(default)]
    pub entrypoint: Option<String>,
    /// Tag of the `python` base image
    #[serde(default = "default_version")]
    pub version: String,
    /// Name of the generated file
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Port declared with `EXPOSE`
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory the generated file is written into
    #[serde(default = "default_dest_path")]
    pub dest_path: PathBuf,
    /// Program run as `<program> freeze` to list installed packages
    #[serde(default = "default_freeze_program")]
    pub freeze_program: String,
    /// Command prefix of the generated install line
    #[serde(default = "default_install_command")]
    pub install_command: String,
}

impl Default for DockerizeConfig {
    fn default() -> Self {
        Self {
            entrypoint: None,
            version: default_version(),
            filename: default_filename(),
            port: default_port(),
            dest_path: default_dest_path(),
            freeze_program: default_freeze_program(),
            install_command: default_install_command(),
        }
    }
}

impl DockerizeConfig {
    /// Load from pydockerize.toml in the given directory, or return defaults if not found.
    ///
    /// A relative `dest_path` in the file is taken relative to `project_dir`.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            let mut config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                    path: config_path,
                    source: e,
                })?;
            config.dest_path = resolve_dest_path(project_dir, config.dest_path);
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured entrypoint.
    ///
    /// # Errors
    ///
    /// [`Error::MissingEntrypoint`](crate::Error::MissingEntrypoint) if none was set.
    pub fn require_entrypoint(&self) -> crate::Result<&str> {
        self.entrypoint
            .as_deref()
            .ok_or(crate::Error::MissingEntrypoint)
    }
}

fn resolve_dest_path(project_dir: &Path, dest_path: PathBuf) -> PathBuf {
    if dest_path.is_absolute() {
        dest_path
    } else if dest_path == Path::new(".") {
        project_dir.to_path_buf()
    } else {
        project_dir.join(dest_path)
    }
}

fn default_version() -> String {
    "latest".to_owned()
}

fn default_filename() -> String {
    "Dockerfile".to_owned()
}

fn default_port() -> u16 {
    80
}

fn default_dest_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_freeze_program() -> String {
    "pip".to_owned()
}

fn default_install_command() -> String {
    DEFAULT_INSTALL_COMMAND.to_owned()
}
