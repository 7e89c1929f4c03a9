use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct MaxLength {
    limit: u64,
}

impl MaxLength {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        let limit = helpers::non_negative_integer(schema, "maxLength")?;
        Ok(Keyword::MaxLength(MaxLength { limit }))
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::String(item) = instance {
            // Length is measured in Unicode code points, not bytes.
            if (bytecount::num_chars(item.as_bytes()) as u64) > self.limit {
                return Err(ValidationError::max_length(instance, self.limit));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maxLength": 2}), &json!("ab"))]
    #[test_case(&json!({"maxLength": 2}), &json!("\u{00e9}\u{00e9}"); "code points not bytes")]
    #[test_case(&json!({"maxLength": 0}), &json!(""))]
    #[test_case(&json!({"maxLength": 1}), &json!(100))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"maxLength": 2}), &json!("foo"))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test_case(&json!({"maxLength": -1}))]
    #[test_case(&json!({"maxLength": 1.5}))]
    #[test_case(&json!({"maxLength": "2"}))]
    fn invalid_parameter(schema: &Value) {
        tests_util::fails_to_compile(schema, "maxLength")
    }
}
