use crate::{
    compilation::Validator,
    error::ValidationError,
    vocabularies::applicator::Subschema,
};
use serde_json::Value;

/// As the head of the object chain (the only object keyword present) the
/// sub-schema applies to every property: nothing else evaluated any of
/// them.
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

/// As the terminal fallback of the object chain, or via an enclosing
/// logical applicator's scope.
pub(crate) fn validate_key<'i>(
    subschema: &Subschema,
    schema: &Validator,
    key: &str,
    value: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if !subschema.allowed {
        return Err(ValidationError::unevaluated_properties(value, key));
    }
    subschema.validate_child(schema, value, depth)
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"unevaluatedProperties": false}), &json!({}))]
    #[test_case(&json!({"unevaluatedProperties": {"type": "string"}}), &json!({"a": "ok"}))]
    #[test_case(&json!({"properties": {"a": {}}, "unevaluatedProperties": false}), &json!({"a": 1}))]
    #[test_case(&json!({"allOf": [{"properties": {"a": {}}}], "unevaluatedProperties": false}), &json!({"a": 1}); "evaluated through a logical applicator")]
    #[test_case(&json!({"unevaluatedProperties": false}), &json!(17))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"unevaluatedProperties": false}), &json!({"a": 1}))]
    #[test_case(&json!({"properties": {"a": {}}, "unevaluatedProperties": false}), &json!({"a": 1, "b": 2}))]
    #[test_case(&json!({"unevaluatedProperties": {"type": "string"}}), &json!({"a": 1}))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(
            &json!({"unevaluatedProperties": []}),
            "unevaluatedProperties",
        )
    }
}
