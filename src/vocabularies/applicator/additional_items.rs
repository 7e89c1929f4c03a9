use crate::{
    compilation::Validator,
    error::ValidationError,
    vocabularies::applicator::Subschema,
};
use serde_json::Value;

/// Heads of the array chain hand array positions beyond their own reach to
/// this keyword; it never drives a whole array by itself (without
/// `prefixItems`/`items` in front it is dropped during wiring).
pub(crate) fn validate<'i>(
    subschema: &Subschema,
    schema: &Validator,
    instance: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if let Value::Array(items) = instance {
        for (index, item) in items.iter().enumerate() {
            validate_item(subschema, schema, index, item, depth)?;
        }
    }
    Ok(())
}

pub(crate) fn validate_item<'i>(
    subschema: &Subschema,
    schema: &Validator,
    index: usize,
    item: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    if !subschema.allowed {
        return Err(ValidationError::additional_items(item, index));
    }
    subschema.validate_child(schema, item, depth)
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"items": [{}], "additionalItems": {"type": "integer"}}), &json!([null, 2, 3]))]
    #[test_case(&json!({"items": [{}, {}, {}], "additionalItems": false}), &json!([1, 2, 3]))]
    #[test_case(&json!({"additionalItems": false}), &json!([1, 2, 3]); "inert without items")]
    #[test_case(&json!({"items": [{}], "additionalItems": false}), &json!("no array"))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"items": [{}], "additionalItems": {"type": "integer"}}), &json!([null, 2, 3, "foo"]))]
    #[test_case(&json!({"items": [{}, {}, {}], "additionalItems": false}), &json!([1, 2, 3, 4]))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"additionalItems": "x"}), "additionalItems")
    }
}
