use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::{Number, Value};

#[derive(Debug)]
pub(crate) struct ExclusiveMaximum {
    limit: Number,
}

impl ExclusiveMaximum {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Number(limit) = schema {
            Ok(Keyword::ExclusiveMaximum(ExclusiveMaximum {
                limit: limit.clone(),
            }))
        } else {
            Err(CompileError::invalid_value("exclusiveMaximum"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Number(item) = instance {
            if helpers::num_ge(item, &self.limit) {
                return Err(ValidationError::exclusive_maximum(instance, &self.limit));
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

    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(2))]
    #[test_case(&json!({"exclusiveMaximum": 3}), &json!("three"))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"exclusiveMaximum": 3.0}), &json!(3.0))]
    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(4))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"exclusiveMaximum": true}), "exclusiveMaximum")
    }
}
