use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers, Keyword},
};
use serde_json::{Number, Value};

#[derive(Debug)]
pub(crate) struct Maximum {
    limit: Number,
}

impl Maximum {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Number(limit) = schema {
            Ok(Keyword::Maximum(Maximum {
                limit: limit.clone(),
            }))
        } else {
            Err(CompileError::invalid_value("maximum"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Number(item) = instance {
            if helpers::num_gt(item, &self.limit) {
                return Err(ValidationError::maximum(instance, &self.limit));
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

    #[test_case(&json!({"maximum": 3}), &json!(3))]
    #[test_case(&json!({"maximum": 3.0}), &json!(2.9))]
    #[test_case(&json!({"maximum": 3}), &json!("not a number"))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"maximum": 3.0}), &json!(3.5))]
    #[test_case(&json!({"maximum": 1_u64 << 54}), &json!((1_u64 << 54) + 1))]
    #[test_case(&json!({"maximum": -1}), &json!(0))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"maximum": "5"}), "maximum")
    }
}
