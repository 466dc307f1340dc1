use super::{Attribute, AttributePath, AttributeType, Schema};
use crate::diagnostics::Diagnostics;
use serde_json::Value;

impl Schema {
    /// Checks a configuration against the schema: unknown arguments, missing required
    /// arguments, values for read-only attributes, value types and validators.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        validate_object(
            &self.attributes,
            config,
            &AttributePath::root(),
            &mut diagnostics,
        );
        diagnostics
    }
}

fn validate_object(
    attributes: &[Attribute],
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let map = match value {
        Value::Object(map) => map,
        _ => {
            diagnostics.add_attribute_error(
                path.clone(),
                "Incorrect attribute value type",
                format!("Inappropriate value for \"{}\": object required.", path),
            );
            return;
        }
    };

    for key in map.keys() {
        if !attributes.iter().any(|a| &a.name == key) {
            diagnostics.add_attribute_error(
                path.attribute(key.as_str()),
                "Unsupported argument",
                format!("An argument named \"{}\" is not expected here.", key),
            );
        }
    }

    for attribute in attributes {
        let attribute_path = path.attribute(attribute.name.as_str());
        match map.get(&attribute.name) {
            None | Some(Value::Null) => {
                if attribute.required {
                    diagnostics.add_attribute_error(
                        attribute_path,
                        "Missing required argument",
                        format!(
                            "The argument \"{}\" is required, but no definition was found.",
                            attribute.name
                        ),
                    );
                }
            }
            Some(_) if attribute.is_read_only() => {
                diagnostics.add_attribute_error(
                    attribute_path.clone(),
                    "Invalid Configuration for Read-Only Attribute",
                    format!(
                        "Cannot set value for attribute {} as it is computed by the provider.",
                        attribute_path
                    ),
                );
            }
            Some(value) => {
                validate_value(
                    &attribute.attribute_type,
                    value,
                    &attribute_path,
                    diagnostics,
                );
                for validator in &attribute.validators {
                    validator.validate(value, &attribute_path, diagnostics);
                }
            }
        }
    }
}

fn validate_value(
    attribute_type: &AttributeType,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    match (attribute_type, value) {
        (_, Value::Null)
        | (AttributeType::Dynamic, _)
        | (AttributeType::String, Value::String(_))
        | (AttributeType::Bool, Value::Bool(_))
        | (AttributeType::Float64, Value::Number(_)) => {}
        (AttributeType::Int64, Value::Number(n)) if n.is_i64() || n.is_u64() => {}
        (AttributeType::List(element), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                validate_value(element, item, &path.index(i), diagnostics);
            }
        }
        (AttributeType::Map(element), Value::Object(map)) => {
            for (key, item) in map {
                validate_value(element, item, &path.key(key.as_str()), diagnostics);
            }
        }
        (AttributeType::SingleNested(attributes), Value::Object(_)) => {
            validate_object(attributes, value, path, diagnostics)
        }
        (AttributeType::ListNested(attributes), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                validate_object(attributes, item, &path.index(i), diagnostics);
            }
        }
        _ => diagnostics.add_attribute_error(
            path.clone(),
            "Incorrect attribute value type",
            format!(
                "Inappropriate value for \"{}\": {} required.",
                path,
                attribute_type.friendly_name()
            ),
        ),
    }
}
