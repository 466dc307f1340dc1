use crate::schema::AttributePath;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A message for the user about a problem with an operation or a configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// The attribute the diagnostic applies to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<AttributePath>,
}

impl Diagnostic {
    pub fn error<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    pub fn warning<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            severity: Severity::Warning,
            ..Self::error(summary, detail)
        }
    }

    pub fn with_path(mut self, path: AttributePath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(f, "{}: {}", severity, self.summary)?;
        if let Some(path) = self.path.as_ref().filter(|path| !path.is_root()) {
            write!(f, "\n\n  with {}", path)?;
        }
        if !self.detail.is_empty() {
            write!(f, "\n\n{}", self.detail)?;
        }
        Ok(())
    }
}

/// The diagnostics collected by an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic)
    }

    pub fn add_error<S1, S2>(&mut self, summary: S1, detail: S2)
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.push(Diagnostic::error(summary, detail))
    }

    pub fn add_warning<S1, S2>(&mut self, summary: S1, detail: S2)
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.push(Diagnostic::warning(summary, detail))
    }

    pub fn add_attribute_error<S1, S2>(&mut self, path: AttributePath, summary: S1, detail: S2)
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.push(Diagnostic::error(summary, detail).with_path(path))
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0)
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn warnings_are_not_errors() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_warning("Resource not found", "removing it from state");
        assert!(!diagnostics.has_error());
        diagnostics.add_error("Unable to GET resource", "boom");
        assert!(diagnostics.has_error());
        assert_eq!(diagnostics.errors().count(), 1);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn display() {
        let diagnostic = Diagnostic::error("Missing required argument", "The argument is required.")
            .with_path(AttributePath::root().attribute("spec").attribute("rec_name"));
        assert_eq!(
            diagnostic.to_string(),
            "Error: Missing required argument\n\n  with spec.rec_name\n\nThe argument is required."
        );
    }
}
