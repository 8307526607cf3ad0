use pydockerize_core::{DEFAULT_INSTALL_COMMAND, RenderContext};

/// Generates a single-stage Dockerfile for a Python application.
pub struct DockerfileGenerator<'a> {
    context: &'a RenderContext,
    install_command: &'a str,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(context: &'a RenderContext) -> Self {
        Self {
            context,
            install_command: DEFAULT_INSTALL_COMMAND,
        }
    }

    /// Replace the `pip install` prefix of the install line.
    pub fn with_install_command(mut self, install_command: &'a str) -> Self {
        self.install_command = install_command;
        self
    }

    /// Render the recipe. Never fails; the entrypoint is substituted as-is.
    ///
    /// The output has no trailing newline.
    pub fn render(&self) -> String {
        let dependencies = &self.context.dependencies;
        let install = if dependencies.is_empty() {
            String::new()
        } else {
            format!(
                "RUN {} {}\n",
                self.install_command,
                dependencies.as_slice().join(" ")
            )
        };

        format!(
            r#"FROM python:{version}
WORKDIR /app
COPY . /app
{install}EXPOSE {port}
CMD [ "python", "{entrypoint}.py" ]"#,
            version = self.context.version,
            port = self.context.port,
            entrypoint = self.context.entrypoint,
            install = install,
        )
    }
}
