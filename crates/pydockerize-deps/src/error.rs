/// Failure to obtain the installed dependency list.
///
/// Launch failures and non-zero exits share this one type so callers only
/// handle a single error kind.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("failed to run `{program}`; is it installed and on PATH?")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("`{program} freeze` failed ({status}):\n{stderr}")]
    CommandFailed {
        program: String,
        /// Exit status as reported by the OS, e.g. `exit status: 1`
        status: String,
        /// Captured stderr with trailing whitespace removed; may be empty
        stderr: String,
    },

    #[error("`{program} freeze` output was not valid UTF-8")]
    InvalidUtf8 {
        program: String,
        source: std::string::FromUtf8Error,
    },
}

impl CollectionError {
    /// Diagnostic text captured from the failed command, if it ran at all.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
