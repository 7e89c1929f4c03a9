use crate::{
    error::{CompileError, ValidationError},
    vocabularies::Keyword,
};
use fraction::{BigFraction, BigUint};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct MultipleOf {
    multiple_of: f64,
}

impl MultipleOf {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Number(multiple_of) = schema {
            let multiple_of = multiple_of.as_f64().expect("Always valid");
            // Zero divides nothing and negatives are excluded outright.
            if multiple_of <= 0. {
                return Err(CompileError::invalid_value("multipleOf"));
            }
            Ok(Keyword::MultipleOf(MultipleOf { multiple_of }))
        } else {
            Err(CompileError::invalid_value("multipleOf"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Number(item) = instance {
            let item = item.as_f64().expect("Always valid");
            let is_multiple = if item.fract() == 0. && self.multiple_of.fract() == 0. {
                (item % self.multiple_of) == 0.
            } else {
                let remainder = (item / self.multiple_of) % 1.;
                if remainder.is_nan() {
                    // Fall back to exact arithmetic when floating division
                    // degenerates. Involves heap allocations via `BigUint`.
                    let fraction =
                        BigFraction::from(item) / BigFraction::from(self.multiple_of);
                    fraction
                        .denom()
                        .map_or(false, |denom| denom == &BigUint::from(1_u8))
                } else {
                    remainder < f64::EPSILON
                }
            };
            if !is_multiple {
                return Err(ValidationError::multiple_of(instance, self.multiple_of));
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

    #[test_case(&json!({"multipleOf": 2}), &json!(4))]
    #[test_case(&json!({"multipleOf": 2}), &json!(0))]
    #[test_case(&json!({"multipleOf": 1.5}), &json!(4.5))]
    #[test_case(&json!({"multipleOf": 0.0001}), &json!(0.0075))]
    #[test_case(&json!({"multipleOf": 2}), &json!("not a number"))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"multipleOf": 2}), &json!(7))]
    #[test_case(&json!({"multipleOf": 1.5}), &json!(5))]
    #[test_case(&json!({"multipleOf": 0.3}), &json!(1.0))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test_case(&json!({"multipleOf": 0}))]
    #[test_case(&json!({"multipleOf": -2}); "negative")]
    #[test_case(&json!({"multipleOf": "2"}); "wrong type")]
    fn invalid_parameter(schema: &Value) {
        tests_util::fails_to_compile(schema, "multipleOf")
    }
}
