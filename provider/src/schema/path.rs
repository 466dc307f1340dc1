use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// One step into an attribute tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Attribute(String),
    Index(usize),
    Key(String),
}

/// Where in a configuration a diagnostic applies, rendered the way Terraform renders it, e.g.
/// `spec.modules_list[0].name` or `metadata.labels["app"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn attribute<S: Into<String>>(&self, name: S) -> Self {
        self.with(PathStep::Attribute(name.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with(PathStep::Index(index))
    }

    pub fn key<S: Into<String>>(&self, key: S) -> Self {
        self.with(PathStep::Key(key.into()))
    }

    fn with(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{}", name)?,
                PathStep::Attribute(name) => write!(f, ".{}", name)?,
                PathStep::Index(index) => write!(f, "[{}]", index)?,
                PathStep::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

impl Serialize for AttributePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[test]
fn display_paths() {
    let spec = AttributePath::root().attribute("spec");
    assert_eq!(
        spec.attribute("modules_list")
            .index(0)
            .attribute("name")
            .to_string(),
        "spec.modules_list[0].name"
    );
    assert_eq!(
        AttributePath::root()
            .attribute("metadata")
            .attribute("labels")
            .key("app")
            .to_string(),
        r#"metadata.labels["app"]"#
    );
    assert!(AttributePath::root().is_root());
}
