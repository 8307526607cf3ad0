use std::path::PathBuf;

use pydockerize_core::{DockerizeConfig, Error};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = DockerizeConfig::load(tmp.path()).unwrap();

    assert!(config.entrypoint.is_none());
    assert_eq!(config.version, "latest");
    assert_eq!(config.filename, "Dockerfile");
    assert_eq!(config.port, 80);
    assert_eq!(config.dest_path, PathBuf::from("."));
    assert_eq!(config.freeze_program, "pip");
    assert_eq!(config.install_command, "pip install");
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
entrypoint = "server"
version = "3.11-slim"
filename = "Dockerfile.prod"
port = 8000
dest_path = "deploy"
freeze_program = "pip3"
install_command = "pip install --no-cache-dir"
"#;
    std::fs::write(tmp.path().join("pydockerize.toml"), toml).unwrap();

    let config = DockerizeConfig::load(tmp.path()).unwrap();

    assert_eq!(config.entrypoint.as_deref(), Some("server"));
    assert_eq!(config.version, "3.11-slim");
    assert_eq!(config.filename, "Dockerfile.prod");
    assert_eq!(config.port, 8000);
    assert_eq!(config.dest_path, tmp.path().join("deploy"));
    assert_eq!(config.freeze_program, "pip3");
    assert_eq!(config.install_command, "pip install --no-cache-dir");
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("pydockerize.toml"), "port = 5000\n").unwrap();

    let config = DockerizeConfig::load(tmp.path()).unwrap();

    assert_eq!(config.port, 5000);
    // Defaults preserved
    assert!(config.entrypoint.is_none());
    assert_eq!(config.version, "latest");
    assert_eq!(config.filename, "Dockerfile");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("pydockerize.toml"),
        "not valid {{{{ toml",
    )
    .unwrap();

    let result = DockerizeConfig::load(tmp.path());
    assert!(matches!(result, Err(Error::ConfigParse { .. })));

    let err = result.unwrap_err().to_string();
    assert!(err.contains("parse"));
}

#[test]
fn load_rejects_port_out_of_range() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("pydockerize.toml"), "port = 70000\n").unwrap();

    let result = DockerizeConfig::load(tmp.path());
    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn load_empty_config_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("pydockerize.toml"), "").unwrap();

    let config = DockerizeConfig::load(tmp.path()).unwrap();
    assert_eq!(
        config,
        DockerizeConfig {
            dest_path: tmp.path().to_path_buf(),
            ..Default::default()
        }
    );
}

#[test]
fn load_resolves_relative_dest_path_against_project_dir() {
    let tmp = TempDir::new().unwrap();
    let project_dir = tmp.path().join("service");
    std::fs::create_dir(&project_dir).unwrap();
    std::fs::write(
        project_dir.join("pydockerize.toml"),
        "dest_path = \"docker/out\"\n",
    )
    .unwrap();

    let config = DockerizeConfig::load(&project_dir).unwrap();

    assert_eq!(config.dest_path, project_dir.join("docker/out"));
}

#[test]
fn load_keeps_absolute_dest_path() {
    let tmp = TempDir::new().unwrap();
    let absolute = tmp.path().join("elsewhere");
    let toml = format!("dest_path = {:?}\n", absolute.to_string_lossy());
    std::fs::write(tmp.path().join("pydockerize.toml"), toml).unwrap();

    let config = DockerizeConfig::load(tmp.path()).unwrap();

    assert_eq!(config.dest_path, absolute);
}

#[test]
fn load_without_config_file_keeps_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config = DockerizeConfig::load(tmp.path()).unwrap();

    assert_eq!(config.dest_path, PathBuf::from("."));
}

#[test]
fn load_config_directory_returns_load_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("pydockerize.toml")).unwrap();

    let result = DockerizeConfig::load(tmp.path());
    assert!(matches!(result, Err(Error::ConfigLoad { .. })));
}
