use crate::{
    error::ValidationError,
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct Const {
    expected: Value,
}

impl Const {
    pub(crate) fn compile(schema: &Value) -> Keyword {
        Keyword::Const(Const {
            expected: schema.clone(),
        })
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if helpers::equal(&self.expected, instance) {
            Ok(())
        } else {
            Err(ValidationError::constant(instance, &self.expected))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"const": 0.0}), &json!(0))]
    #[test_case(&json!({"const": [1.0]}), &json!([1]))]
    #[test_case(&json!({"const": {"a": 1.0}}), &json!({"a": 1}))]
    #[test_case(&json!({"const": [{"b": 1.0}]}), &json!([{"b": 1}]))]
    #[test_case(&json!({"const": {"c": [1.0]}}), &json!({"c": [1]}))]
    #[test_case(&json!({"const": null}), &json!(null))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"const": 2}), &json!(5))]
    #[test_case(&json!({"const": "a"}), &json!("b"))]
    #[test_case(&json!({"const": 1}), &json!("1"))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }
}
