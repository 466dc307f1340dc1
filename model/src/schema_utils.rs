use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde_json::Value;

/// In OpenAPI, a [nullable enum] must have the enum value "null" in it's list of allowed strings.
/// This function takes the `Schema` from an enum type, marks it as `nullable` and adds the string
/// `null` to the list of allowed strings.
///
/// [nullable enum]: https://swagger.io/docs/specification/data-models/enums
pub(crate) fn nullable_enum<T>(g: &mut SchemaGenerator) -> Schema
where
    T: JsonSchema,
{
    let mut schema = match T::json_schema(g) {
        // This shouldn't happen
        Schema::Bool(x) => return Schema::Bool(x),
        Schema::Object(schema_object) => schema_object,
    };
    if let Some(enum_values) = &mut schema.enum_values {
        enum_values.push(Value::String("null".to_owned()))
    }
    schema
        .extensions
        .insert("nullable".to_owned(), Value::Bool(true));

    schema.into()
}

/// Removes every `null` member from the objects in `value`, recursively. A server-side apply patch
/// must only contain the fields the field manager wants to own, and a `null` would instead claim
/// (and clear) the field.
pub fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, prune_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_nulls).collect()),
        other => other,
    }
}
