use pydockerize_core::DependencyList;

use crate::error::CollectionError;
use crate::executor::{PipExecutor, RealExecutor};

/// Lists installed packages, parameterized over the executor for testability.
pub struct DependencyCollector<E: PipExecutor = RealExecutor> {
    executor: E,
}

impl DependencyCollector<RealExecutor> {
    /// Collector that runs `<program> freeze`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            executor: RealExecutor::new(program),
        }
    }
}

impl<E: PipExecutor> DependencyCollector<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Run the freeze command once and parse its output.
    ///
    /// No retries: the first failure is returned to the caller.
    pub fn collect(&self) -> Result<DependencyList, CollectionError> {
        collect_dependencies(&self.executor)
    }
}

/// Run `<program> freeze` through `executor` and return one entry per output line.
///
/// # Errors
///
/// Any [`CollectionError`] from the executor: the program could not be
/// launched, exited non-zero, or printed non-UTF-8 output.
pub fn collect_dependencies(
    executor: &impl PipExecutor,
) -> Result<DependencyList, CollectionError> {
    let stdout = executor.exec(&["freeze".to_owned()])?;
    let dependencies = parse_freeze_output(&stdout);

    tracing::debug!(count = dependencies.len(), "collected installed dependencies");

    Ok(dependencies)
}

/// Split freeze output into specifiers.
///
/// Lines end at `\n` or `\r\n`; a final line terminator does not produce an
/// extra empty entry. Blank lines in the middle are kept so the list mirrors
/// the tool's raw output.
pub fn parse_freeze_output(stdout: &str) -> DependencyList {
    stdout.lines().map(str::to_owned).collect()
}
