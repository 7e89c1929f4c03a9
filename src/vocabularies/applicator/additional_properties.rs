use crate::{
    compilation::Validator,
    error::ValidationError,
    vocabularies::applicator::Subschema,
};
use serde_json::Value;

/// As the head of the object chain (no other object keyword present) the
/// sub-schema applies to every property value.
pub(crate) fn validate<'i>(
    subschema: &Subschema,
    schema: &Validator,
    instance: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if let Value::Object(item) = instance {
        for (key, value) in item {
            validate_key(subschema, schema, key, value, depth)?;
        }
    }
    Ok(())
}

/// As a fallback for keys no earlier chain keyword owned.
pub(crate) fn validate_key<'i>(
    subschema: &Subschema,
    schema: &Validator,
    key: &str,
    value: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if !subschema.allowed {
        return Err(ValidationError::additional_properties(value, key));
    }
    subschema.validate_child(schema, value, depth)
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"additionalProperties": false}), &json!({}))]
    #[test_case(&json!({"additionalProperties": {"type": "string"}}), &json!({"a": "ok"}))]
    #[test_case(&json!({"additionalProperties": false, "properties": {"foo": {}}}), &json!({"foo": 1}))]
    #[test_case(&json!({"additionalProperties": {"type": "string"}, "properties": {"foo": {}}}), &json!({"foo": 1, "bar": "ok"}))]
    #[test_case(&json!({"additionalProperties": {"type": "string"}, "patternProperties": {"f.*o": {"type": "integer"}}}), &json!({"foo": 1, "bar": "ok"}))]
    #[test_case(&json!({"additionalProperties": false}), &json!(null))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"additionalProperties": false}), &json!({"a": 1}))]
    #[test_case(&json!({"additionalProperties": {"type": "string"}}), &json!({"a": 1}))]
    #[test_case(&json!({"additionalProperties": false, "properties": {"foo": {}}}), &json!({"foo": 1, "bar": 2}))]
    #[test_case(&json!({"additionalProperties": false, "properties": {"foo": {}}, "patternProperties": {"^v": {}}}), &json!({"foo": 1, "vroom": 2, "quux": 3}))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"additionalProperties": 1}), "additionalProperties")
    }
}
