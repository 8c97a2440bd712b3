//! Bazel labels and query expressions for resolved build targets.
//!
//! Many targets are combined into one expression rather than passed as
//! separate arguments, since Bazel caps the argument count of a query
//! invocation.

use crate::error::{Error, Result};

/// Pattern selecting every target in the workspace.
pub const ALL_TARGETS: &str = "//...";

/// Turn a workspace-relative build target such as `a/b/...` into an absolute
/// Bazel label pattern, `//a/b/...`.
#[must_use]
pub fn target_label(target: &str) -> String {
    if target.starts_with("//") || target.starts_with('@') {
        return target.to_string();
    }
    format!("//{target}")
}

/// Which part of the build graph around the targets to select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryDirection {
    /// Only the targets themselves.
    #[default]
    Targets,
    /// The targets and their transitive dependencies.
    Deps,
    /// Targets in `universe` that depend on the given targets.
    /// `None` means the whole workspace.
    Rdeps {
        /// Universe to search for reverse dependencies.
        universe: Option<String>,
    },
}

/// Builder for a Bazel query expression over a set of targets.
#[derive(Debug, Clone, Default)]
pub struct TargetQuery {
    targets: Vec<String>,
    direction: QueryDirection,
    depth: Option<u32>,
    tags: Vec<String>,
    kinds: Vec<String>,
    filter: Option<String>,
}

impl TargetQuery {
    /// Query the given target patterns.
    #[must_use]
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Select the graph around the targets.
    #[must_use]
    pub fn direction(mut self, direction: QueryDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Bound the `deps`/`rdeps` traversal. Ignored for [`QueryDirection::Targets`].
    #[must_use]
    pub const fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Keep only targets carrying one of these tags.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Keep only targets of these rule kinds.
    #[must_use]
    pub fn kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kinds = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Keep only targets whose label contains `filter`. An empty filter
    /// keeps everything.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    /// Render the query expression.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuery` if there are no targets or any input
    /// contains a double quote.
    pub fn expression(&self) -> Result<String> {
        if self.targets.is_empty() {
            return Err(Error::InvalidQuery("no targets to query".to_string()));
        }

        let inputs = self
            .targets
            .iter()
            .chain(&self.tags)
            .chain(&self.kinds)
            .chain(self.filter.iter());
        let universe = match &self.direction {
            QueryDirection::Rdeps { universe } => universe.as_ref(),
            _ => None,
        };
        if let Some(bad) = inputs.chain(universe).find(|s| s.contains('"')) {
            return Err(Error::InvalidQuery(format!(
                "query input must not contain quotes: {bad}"
            )));
        }

        let mut expr = self
            .targets
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(" + ");

        let function = match &self.direction {
            QueryDirection::Targets => None,
            QueryDirection::Deps => Some("deps"),
            QueryDirection::Rdeps { universe } => {
                let universe = universe.as_deref().unwrap_or(ALL_TARGETS);
                expr = format!("\"{universe}\", {expr}");
                Some("rdeps")
            }
        };
        if let Some(function) = function {
            expr = match self.depth {
                Some(depth) => format!("{function}({expr}, {depth})"),
                None => format!("{function}({expr})"),
            };
        }

        if !self.tags.is_empty() {
            let pattern = self
                .tags
                .iter()
                .map(|tag| format!("\\b{tag}\\b"))
                .collect::<Vec<_>>()
                .join("|");
            expr = format!("attr(tags, \"{pattern}\", {expr})");
        }

        if !self.kinds.is_empty() {
            expr = format!("kind(\"{}\", {expr})", self.kinds.join("|"));
        }

        if let Some(filter) = &self.filter {
            expr = format!("filter(\".*{filter}.*\", {expr})");
        }

        Ok(expr)
    }
}
