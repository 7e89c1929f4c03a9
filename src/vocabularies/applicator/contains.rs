use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{validate_plan, Scope},
    vocabularies::{Keyword, Plan},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct Contains {
    plan: Plan,
    /// Bound from the `minContains` sibling during wiring; 1 by default.
    min_contains: u64,
    /// Bound from the `maxContains` sibling during wiring; unbounded by
    /// default.
    max_contains: Option<u64>,
}

impl Contains {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        depth: usize,
    ) -> Result<Keyword, CompileError> {
        match schema {
            Value::Object(_) | Value::Bool(_) => Ok(Keyword::Contains(Contains {
                plan: compiler.compile_subschema(schema, "contains", depth)?,
                min_contains: 1,
                max_contains: None,
            })),
            _ => Err(CompileError::invalid_value("contains")),
        }
    }

    pub(crate) fn set_bounds(&mut self, min_contains: Option<u64>, max_contains: Option<u64>) {
        if let Some(min) = min_contains {
            self.min_contains = min;
        }
        self.max_contains = max_contains;
    }

    pub(crate) fn validate<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        if let Value::Array(items) = instance {
            let mut matched = 0_u64;
            for item in items {
                match validate_plan(schema, &self.plan, item, Scope::default(), depth) {
                    Ok(()) => matched += 1,
                    Err(error) if error.is_fatal() => return Err(error),
                    Err(_) => {}
                }
            }
            if matched < self.min_contains
                || self.max_contains.map_or(false, |max| matched > max)
            {
                return Err(ValidationError::contains(instance));
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

    #[test_case(&json!({"contains": {"minimum": 5}}), &json!([2, 3, 6]))]
    #[test_case(&json!({"contains": {"const": 7}, "minContains": 2}), &json!([1, 7, 2, 7]))]
    #[test_case(&json!({"contains": {"const": 7}, "maxContains": 1}), &json!([7, 1]))]
    #[test_case(&json!({"contains": {"const": 7}, "minContains": 0}), &json!([]); "zero minimum accepts empty arrays")]
    #[test_case(&json!({"contains": {"minimum": 5}}), &json!("not an array"))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"contains": {"minimum": 5}}), &json!([2, 3, 4]))]
    #[test_case(&json!({"contains": {"minimum": 5}}), &json!([]))]
    #[test_case(&json!({"contains": {"const": 7}, "minContains": 2}), &json!([1, 7, 2]))]
    #[test_case(&json!({"contains": {"const": 7}, "maxContains": 1}), &json!([7, 7]))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test_case(&json!({"contains": 1}), "contains")]
    #[test_case(&json!({"contains": {}, "minContains": -1}), "minContains")]
    #[test_case(&json!({"contains": {}, "maxContains": "2"}), "maxContains")]
    fn invalid_parameter(schema: &Value, keyword: &str) {
        tests_util::fails_to_compile(schema, keyword)
    }

    #[test]
    fn bounds_are_inert_without_contains() {
        tests_util::is_valid(&json!({"minContains": 2}), &json!([1]));
        tests_util::is_valid(&json!({"maxContains": 0}), &json!([1]));
    }
}
