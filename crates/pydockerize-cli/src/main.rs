mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pydockerize",
    about = "Generate a Dockerfile for a Python app from its installed dependencies"
)]
#[command(version)]
struct Cli {
    /// Module run at container startup, without `.py` (e.g. `main`)
    #[arg(long, short = 'e')]
    entrypoint: Option<String>,
    /// Python base image tag (default: latest)
    #[arg(long = "python-version", short = 'p', value_name = "TAG")]
    python_version: Option<String>,
    /// Name of the generated file (default: Dockerfile)
    #[arg(long, short = 'f')]
    filename: Option<String>,
    /// Port to EXPOSE (default: 80)
    #[arg(long)]
    port: Option<u16>,
    /// Directory to write the generated file into (default: .)
    #[arg(long, visible_alias = "dest_path", value_name = "DIR")]
    dest_path: Option<PathBuf>,
    /// Program run as `<program> freeze` to list dependencies (default: pip)
    #[arg(long, value_name = "PROGRAM")]
    freeze_program: Option<String>,
    /// Command prefix for the install line (default: "pip install")
    #[arg(long, value_name = "COMMAND")]
    install_command: Option<String>,
    /// Directory containing pydockerize.toml
    #[arg(long, default_value = ".", value_name = "DIR")]
    project_dir: PathBuf,
    /// Print the Dockerfile instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="unset or invalid RUST_LOG falls back to info"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = commands::Overrides {
        entrypoint: cli.entrypoint,
        version: cli.python_version,
        filename: cli.filename,
        port: cli.port,
        dest_path: cli.dest_path,
        freeze_program: cli.freeze_program,
        install_command: cli.install_command,
    };

    commands::generate(&cli.project_dir, overrides, cli.dry_run)?;

    Ok(())
}
