//! Reading values back out of a generated recipe.

use pydockerize_core::DEFAULT_INSTALL_COMMAND;

/// The substituted values of a recipe produced by
/// [`DockerfileGenerator`](crate::DockerfileGenerator).
///
/// # Examples
///
/// ```
/// use pydockerize_build::RecipeSummary;
///
/// let text = "FROM python:3.11\nWORKDIR /app\nCOPY . /app\n\
///             RUN pip install flask==3.0.0\nEXPOSE 80\nCMD [ \"python\", \"main.py\" ]";
/// let summary = RecipeSummary::parse(text).unwrap();
/// assert_eq!(summary.version, "3.11");
/// assert_eq!(summary.port, 80);
/// assert_eq!(summary.entrypoint, "main");
/// assert_eq!(summary.dependencies, ["flask==3.0.0"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub version: String,
    pub port: u16,
    pub entrypoint: String,
    /// Specifiers on the install line, split on single spaces; empty when
    /// the recipe has no install line
    pub dependencies: Vec<String>,
}

impl RecipeSummary {
    /// Parse a recipe whose install line uses the default `pip install`.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_with_install_command(text, DEFAULT_INSTALL_COMMAND)
    }

    /// Parse a recipe with the fixed generated layout.
    ///
    /// Returns `None` if any line is missing, out of order, or not in the
    /// generated form, including an install line that does not start with
    /// `install_command`. Hand-edited Dockerfiles are not supported.
    pub fn parse_with_install_command(text: &str, install_command: &str) -> Option<Self> {
        let mut lines = text.lines();

        let version = lines.next()?.strip_prefix("FROM python:")?.to_owned();
        if lines.next()? != "WORKDIR /app" || lines.next()? != "COPY . /app" {
            return None;
        }

        let mut line = lines.next()?;
        let dependencies = match line.strip_prefix("RUN ") {
            Some(command) => {
                let specifiers = command
                    .strip_prefix(install_command)?
                    .strip_prefix(' ')?
                    .split(' ')
                    .map(str::to_owned)
                    .collect();
                line = lines.next()?;
                specifiers
            }
            None => Vec::new(),
        };

        let port = line
            .strip_prefix("EXPOSE ")?
            .parse()
            // arch-lint: allow(no-silent-result-drop) reason="a non-numeric port means the text is not a generated recipe"
            .ok()?;
        let entrypoint = lines
            .next()?
            .strip_prefix(r#"CMD [ "python", ""#)?
            .strip_suffix(r#".py" ]"#)?
            .to_owned();

        if lines.next().is_some() {
            return None;
        }

        Some(Self {
            version,
            port,
            entrypoint,
            dependencies,
        })
    }
}
