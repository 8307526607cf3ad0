use std::process::{Command, Stdio};

use crate::error::CollectionError;

/// Abstraction over package-manager execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
pub trait PipExecutor: Send + Sync {
    /// Run the program with `args` and capture stdout.
    ///
    /// A non-zero exit is reported as [`CollectionError::CommandFailed`]
    /// carrying the captured stderr.
    fn exec(&self, args: &[String]) -> Result<String, CollectionError>;
}

/// Runs the package manager as a child process and waits for it.
#[derive(Debug, Clone)]
pub struct RealExecutor {
    program: String,
}

impl RealExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PipExecutor for RealExecutor {
    fn exec(&self, args: &[String]) -> Result<String, CollectionError> {
        tracing::debug!(program = %self.program, ?args, "running package manager");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| CollectionError::Launch {
                program: self.program.clone(),
                source: e,
            })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| CollectionError::InvalidUtf8 {
                program: self.program.clone(),
                source: e,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr)
                .trim_end()
                .to_owned();
            tracing::debug!(
                program = %self.program,
                status = %output.status,
                "package manager exited with failure"
            );
            Err(CollectionError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            })
        }
    }
}
