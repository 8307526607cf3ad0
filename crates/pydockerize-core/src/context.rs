//! Values a recipe is rendered from.

use crate::config::DockerizeConfig;

/// Installed package specifiers in the order the package manager listed them.
///
/// Entries are kept verbatim (`requests==2.31.0`, `-e git+https://...`, or
/// even an empty line), since the list mirrors the listing tool's raw output.
///
/// # Examples
///
/// ```
/// use pydockerize_core::DependencyList;
///
/// let deps = DependencyList::from(vec!["flask==3.0.0".to_owned()]);
/// assert_eq!(deps.len(), 1);
/// assert_eq!(deps.as_slice(), ["flask==3.0.0"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList(Vec<String>);

impl DependencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for DependencyList {
    fn from(specifiers: Vec<String>) -> Self {
        Self(specifiers)
    }
}

impl FromIterator<String> for DependencyList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DependencyList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything the Dockerfile template substitutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Tag of the `python` base image
    pub version: String,
    /// Module run by `CMD`, without the `.py` suffix
    pub entrypoint: String,
    pub port: u16,
    pub dependencies: DependencyList,
}

impl RenderContext {
    /// Build a context from resolved config and collected dependencies.
    ///
    /// # Errors
    ///
    /// [`Error::MissingEntrypoint`](crate::Error::MissingEntrypoint) if the
    /// config carries no entrypoint.
    pub fn from_config(
        config: &DockerizeConfig,
        dependencies: DependencyList,
    ) -> crate::Result<Self> {
        let entrypoint = config.require_entrypoint()?;
        Ok(Self {
            version: config.version.clone(),
            entrypoint: entrypoint.to_owned(),
            port: config.port,
            dependencies,
        })
    }
}
