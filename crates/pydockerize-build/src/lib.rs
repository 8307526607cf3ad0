//! Dockerfile generation and output for pydockerize.
//!
//! # Pipeline
//!
//! ```text
//! pydockerize
//!   1. Config      ── pydockerize.toml + flags, entrypoint required
//!   2. Collect     ── pip freeze → DependencyList
//!   3. Dockerfile  ── DockerfileGenerator::render()
//!   4. Write       ── output::write_recipe() → <dest_path>/<filename>
//! ```
//!
//! # Recipe shape
//!
//! ```text
//! FROM python:{version}
//! WORKDIR /app
//! COPY . /app
//! RUN pip install {dependencies}     (only when dependencies are non-empty)
//! EXPOSE {port}
//! CMD [ "python", "{entrypoint}.py" ]
//! ```

pub mod dockerfile;
pub mod output;
pub mod recipe;

pub use dockerfile::DockerfileGenerator;
pub use output::{WriteError, write_recipe};
pub use recipe::RecipeSummary;
