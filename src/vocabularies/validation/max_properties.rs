use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct MaxProperties {
    limit: u64,
}

impl MaxProperties {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        let limit = helpers::non_negative_integer(schema, "maxProperties")?;
        Ok(Keyword::MaxProperties(MaxProperties { limit }))
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Object(item) = instance {
            if (item.len() as u64) > self.limit {
                return Err(ValidationError::max_properties(instance, self.limit));
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

    #[test_case(&json!({"maxProperties": 2}), &json!({"a": 1}))]
    #[test_case(&json!({"maxProperties": 0}), &json!([1, 2, 3]))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test]
    fn invalid() {
        tests_util::is_not_valid(
            &json!({"maxProperties": 2}),
            &json!({"foo": 1, "bar": 2, "baz": 3}),
        )
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"maxProperties": 1.5}), "maxProperties")
    }
}
