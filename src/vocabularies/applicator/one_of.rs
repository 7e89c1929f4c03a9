use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    vocabularies::{applicator::Logic, Keyword},
};
use serde_json::Value;

pub(crate) fn compile(
    compiler: &mut Compiler,
    schema: &Value,
    depth: usize,
) -> Result<Keyword, CompileError> {
    Ok(Keyword::OneOf(Logic::compile(
        compiler, schema, "oneOf", depth,
    )?))
}

pub(crate) fn validate<'i>(
    logic: &Logic,
    schema: &Validator,
    instance: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    let (count, _) = logic.count_valid(schema, instance, depth)?;
    match count {
        1 => Ok(()),
        0 => Err(ValidationError::one_of_not_valid(instance)),
        _ => Err(ValidationError::one_of_multiple_valid(instance)),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1))]
    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(2.5))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1.1))]
    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(3); "valid under both")]
    #[test_case(&json!({"oneOf": []}), &json!(1); "empty list is never satisfied")]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"oneOf": {"type": "integer"}}), "oneOf")
    }
}
