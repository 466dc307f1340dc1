use super::AttributePath;
use crate::diagnostics::Diagnostics;
use log::debug;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// A constraint on the value of an attribute, checked when a configuration is validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "validator")]
pub enum Validator {
    /// The string value must be one of `values`.
    OneOf { values: Vec<String> },
    /// The string value must match `pattern`.
    Regex { pattern: String },
    /// The numeric value must lie within the (inclusive) bounds.
    Between { min: Option<f64>, max: Option<f64> },
}

impl Validator {
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validator::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn regex<S: Into<String>>(pattern: S) -> Self {
        Validator::Regex {
            pattern: pattern.into(),
        }
    }

    /// Check `value` found at `path`, adding an attribute error to `diagnostics` when it does not
    /// satisfy the validator. Values of a type the validator does not apply to are ignored.
    pub fn validate(&self, value: &Value, path: &AttributePath, diagnostics: &mut Diagnostics) {
        match (self, value) {
            (Validator::OneOf { values }, Value::String(s)) => {
                if !values.iter().any(|v| v == s) {
                    let allowed: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
                    diagnostics.add_attribute_error(
                        path.clone(),
                        "Invalid Attribute Value Match",
                        format!(
                            "Attribute {} value must be one of: [{}], got: {:?}",
                            path,
                            allowed.join(" "),
                            s
                        ),
                    );
                }
            }
            (Validator::Regex { pattern }, Value::String(s)) => match Regex::new(pattern) {
                Ok(regex) => {
                    if !regex.is_match(s) {
                        diagnostics.add_attribute_error(
                            path.clone(),
                            "Invalid Attribute Value Match",
                            format!(
                                "Attribute {} value must match the pattern {:?}, got: {:?}",
                                path, pattern, s
                            ),
                        );
                    }
                }
                Err(e) => debug!("ignoring pattern {:?} of '{}': {}", pattern, path, e),
            },
            (Validator::Between { min, max }, Value::Number(n)) => {
                let n = match n.as_f64() {
                    Some(n) => n,
                    None => return,
                };
                let too_small = min.map_or(false, |min| n < min);
                let too_large = max.map_or(false, |max| n > max);
                if too_small || too_large {
                    let expectation = match (min, max) {
                        (Some(min), Some(max)) => format!("between {} and {}", min, max),
                        (Some(min), None) => format!("at least {}", min),
                        (None, Some(max)) => format!("at most {}", max),
                        (None, None) => return,
                    };
                    diagnostics.add_attribute_error(
                        path.clone(),
                        "Invalid Attribute Value",
                        format!("Attribute {} value must be {}, got: {}", path, expectation, n),
                    );
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn path() -> AttributePath {
        AttributePath::root().attribute("spec").attribute("tls_mode")
    }

    #[test]
    fn one_of() {
        let validator = Validator::one_of(["disabled", "enabled", "replica_only"]);
        let mut diagnostics = Diagnostics::default();
        validator.validate(&json!("enabled"), &path(), &mut diagnostics);
        assert!(!diagnostics.has_error());
        validator.validate(&json!("sometimes"), &path(), &mut diagnostics);
        assert!(diagnostics.has_error());
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Invalid Attribute Value Match");
        assert_eq!(
            diagnostic.detail,
            r#"Attribute spec.tls_mode value must be one of: ["disabled" "enabled" "replica_only"], got: "sometimes""#
        );
    }

    #[test]
    fn regex() {
        let validator = Validator::regex(r"^\d+(MB|GB)$");
        let mut diagnostics = Diagnostics::default();
        validator.validate(&json!("100MB"), &path(), &mut diagnostics);
        assert!(!diagnostics.has_error());
        validator.validate(&json!("a lot"), &path(), &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn between() {
        let validator = Validator::Between {
            min: Some(1.0),
            max: Some(65535.0),
        };
        let mut diagnostics = Diagnostics::default();
        validator.validate(&json!(443), &path(), &mut diagnostics);
        validator.validate(&json!("not a number"), &path(), &mut diagnostics);
        assert!(!diagnostics.has_error());
        validator.validate(&json!(0), &path(), &mut diagnostics);
        assert!(diagnostics
            .iter()
            .any(|d| d.detail.ends_with("must be between 1 and 65535, got: 0")));
    }
}
