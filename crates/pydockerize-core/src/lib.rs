//! Core types and configuration for pydockerize.
//!
//! This crate defines the `pydockerize.toml` schema ([`DockerizeConfig`]),
//! the values a recipe is rendered from ([`RenderContext`],
//! [`DependencyList`]), and shared error types.

pub mod config;
pub mod context;
pub mod error;

pub use config::{CONFIG_FILE_NAME, DEFAULT_INSTALL_COMMAND, DockerizeConfig};
pub use context::{DependencyList, RenderContext};
pub use error::{Error, Result};
