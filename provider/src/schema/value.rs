use super::{Attribute, AttributePath, AttributeType, Schema};
use serde_json::{Map, Value};

impl Schema {
    /// Renames the attributes of `value` to the JSON names of the Kubernetes object, dropping
    /// `null`s and provider-only attributes.
    pub fn to_k8s(&self, value: &Value) -> Value {
        object_to_k8s(&self.attributes, value)
    }

    /// Renames the fields of the Kubernetes object `object` to attribute names. Every attribute
    /// that is missing from `object` (including the provider-only ones) is set to `null`, and
    /// fields the schema does not know, such as `status`, are dropped.
    pub fn from_k8s(&self, object: &Value) -> Value {
        object_from_k8s(&self.attributes, Some(object))
    }

    /// Sets unset top-level attributes that have a default to that default.
    pub fn fill_defaults(&self, value: &mut Value) {
        if let Value::Object(map) = value {
            for attribute in &self.attributes {
                if let Some(default) = &attribute.default {
                    let slot = map.entry(attribute.name.clone()).or_insert(Value::Null);
                    if slot.is_null() {
                        *slot = default.clone();
                    }
                }
            }
        }
    }

    /// Copies the provider-only attributes other than `skip` from `from` into `to`.
    pub fn copy_provider_attributes(&self, from: &Value, to: &mut Value, skip: &[&str]) {
        if let Value::Object(to) = to {
            for attribute in &self.attributes {
                if attribute.json_name.is_some() || skip.contains(&attribute.name.as_str()) {
                    continue;
                }
                let value = from.get(&attribute.name).cloned().unwrap_or(Value::Null);
                to.insert(attribute.name.clone(), value);
            }
        }
    }

    /// The paths of attributes marked `requires_replace` whose values differ between `planned`
    /// and `prior`.
    pub fn replacement_paths(&self, planned: &Value, prior: &Value) -> Vec<AttributePath> {
        let mut paths = Vec::new();
        collect_replacements(
            &self.attributes,
            planned,
            prior,
            &AttributePath::root(),
            &mut paths,
        );
        paths
    }
}

fn object_to_k8s(attributes: &[Attribute], value: &Value) -> Value {
    let mut object = Map::new();
    if let Value::Object(map) = value {
        for attribute in attributes {
            let json_name = match &attribute.json_name {
                Some(json_name) => json_name,
                None => continue,
            };
            match map.get(&attribute.name) {
                None | Some(Value::Null) => {}
                Some(v) => {
                    object.insert(json_name.clone(), value_to_k8s(&attribute.attribute_type, v));
                }
            }
        }
    }
    Value::Object(object)
}

fn value_to_k8s(attribute_type: &AttributeType, value: &Value) -> Value {
    match (attribute_type, value) {
        (AttributeType::SingleNested(attributes), Value::Object(_)) => {
            object_to_k8s(attributes, value)
        }
        (AttributeType::ListNested(attributes), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| object_to_k8s(attributes, item))
                .collect(),
        ),
        (AttributeType::List(element), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| value_to_k8s(element, item))
                .collect(),
        ),
        (AttributeType::Map(element), Value::Object(map)) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_k8s(element, v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

fn object_from_k8s(attributes: &[Attribute], object: Option<&Value>) -> Value {
    let map = object.and_then(Value::as_object);
    Value::Object(
        attributes
            .iter()
            .map(|attribute| {
                let value = attribute
                    .json_name
                    .as_ref()
                    .and_then(|json_name| map.and_then(|map| map.get(json_name)))
                    .filter(|value| !value.is_null())
                    .map(|value| value_from_k8s(&attribute.attribute_type, value))
                    .unwrap_or(Value::Null);
                (attribute.name.clone(), value)
            })
            .collect(),
    )
}

fn value_from_k8s(attribute_type: &AttributeType, value: &Value) -> Value {
    match (attribute_type, value) {
        (AttributeType::SingleNested(attributes), Value::Object(_)) => {
            object_from_k8s(attributes, Some(value))
        }
        (AttributeType::ListNested(attributes), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| object_from_k8s(attributes, Some(item)))
                .collect(),
        ),
        (AttributeType::List(element), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| value_from_k8s(element, item))
                .collect(),
        ),
        (AttributeType::Map(element), Value::Object(map)) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_from_k8s(element, v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

fn collect_replacements(
    attributes: &[Attribute],
    planned: &Value,
    prior: &Value,
    path: &AttributePath,
    paths: &mut Vec<AttributePath>,
) {
    for attribute in attributes {
        let planned = planned.get(&attribute.name).unwrap_or(&Value::Null);
        let prior = prior.get(&attribute.name).unwrap_or(&Value::Null);
        let path = path.attribute(attribute.name.as_str());
        if attribute.requires_replace && planned != prior {
            paths.push(path);
        } else if let AttributeType::SingleNested(nested) = &attribute.attribute_type {
            collect_replacements(nested, planned, prior, &path, paths);
        }
    }
}
