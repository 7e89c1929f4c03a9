use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct MaxItems {
    limit: u64,
}

impl MaxItems {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        let limit = helpers::non_negative_integer(schema, "maxItems")?;
        Ok(Keyword::MaxItems(MaxItems { limit }))
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Array(items) = instance {
            if (items.len() as u64) > self.limit {
                return Err(ValidationError::max_items(instance, self.limit));
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

    #[test_case(&json!({"maxItems": 2}), &json!([1, 2]))]
    #[test_case(&json!({"maxItems": 0}), &json!([]))]
    #[test_case(&json!({"maxItems": 2}), &json!("123"))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test]
    fn invalid() {
        tests_util::is_not_valid(&json!({"maxItems": 2}), &json!([1, 2, 3]))
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"maxItems": -1}), "maxItems")
    }
}
