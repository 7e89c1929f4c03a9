use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct MinItems {
    limit: u64,
}

impl MinItems {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        let limit = helpers::non_negative_integer(schema, "minItems")?;
        Ok(Keyword::MinItems(MinItems { limit }))
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Array(items) = instance {
            if (items.len() as u64) < self.limit {
                return Err(ValidationError::min_items(instance, self.limit));
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

    #[test_case(&json!({"minItems": 1}), &json!([1]))]
    #[test_case(&json!({"minItems": 1}), &json!({}))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test]
    fn invalid() {
        tests_util::is_not_valid(&json!({"minItems": 1}), &json!([]))
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"minItems": "1"}), "minItems")
    }
}
