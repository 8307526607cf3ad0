//! Collects the installed Python dependencies that go into a recipe.
//!
//! ```text
//! pip freeze ── PipExecutor::exec() ── stdout ── parse_freeze_output() ── DependencyList
//! ```

pub mod collector;
pub mod error;
pub mod executor;

pub use collector::{DependencyCollector, collect_dependencies, parse_freeze_output};
pub use error::CollectionError;
pub use executor::{PipExecutor, RealExecutor};
