use std::path::{Path, PathBuf};

use pydockerize_build::{DockerfileGenerator, write_recipe};
use pydockerize_core::{DockerizeConfig, RenderContext};
use pydockerize_deps::DependencyCollector;

/// Command-line values that take precedence over pydockerize.toml.
#[derive(Debug, Default)]
pub struct Overrides {
    pub entrypoint: Option<String>,
    pub version: Option<String>,
    pub filename: Option<String>,
    pub port: Option<u16>,
    pub dest_path: Option<PathBuf>,
    pub freeze_program: Option<String>,
    pub install_command: Option<String>,
}

impl Overrides {
    fn apply(self, config: &mut DockerizeConfig) {
        if let Some(entrypoint) = self.entrypoint {
            config.entrypoint = Some(entrypoint);
        }
        if let Some(version) = self.version {
            config.version = version;
        }
        if let Some(filename) = self.filename {
            config.filename = filename;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dest_path) = self.dest_path {
            config.dest_path = dest_path;
        }
        if let Some(program) = self.freeze_program {
            config.freeze_program = program;
        }
        if let Some(command) = self.install_command {
            config.install_command = command;
        }
    }
}

pub fn generate(project_dir: &Path, overrides: Overrides, dry_run: bool) -> anyhow::Result<()> {
    let mut config = DockerizeConfig::load(project_dir)?;
    overrides.apply(&mut config);

    // Reject before spending time on `pip freeze`
    config.require_entrypoint()?;

    let collector = DependencyCollector::new(config.freeze_program.clone());
    let dependencies = collector.collect()?;
    tracing::info!(
        program = %config.freeze_program,
        count = dependencies.len(),
        "collected dependencies"
    );

    let context = RenderContext::from_config(&config, dependencies)?;
    let dockerfile = DockerfileGenerator::new(&context)
        .with_install_command(&config.install_command)
        .render();

    if dry_run {
        println!("{dockerfile}");
        return Ok(());
    }

    let path = write_recipe(&config.dest_path, &config.filename, &dockerfile)?;
    tracing::info!(path = %path.display(), "created Dockerfile");
    tracing::debug!("{dockerfile}");

    println!("Created {}", path.display());
    Ok(())
}
