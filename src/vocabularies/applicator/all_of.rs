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
    Ok(Keyword::AllOf(Logic::compile(
        compiler, schema, "allOf", depth,
    )?))
}

pub(crate) fn validate<'i>(
    logic: &Logic,
    schema: &Validator,
    instance: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    let (count, total) = logic.count_valid(schema, instance, depth)?;
    if count == total {
        Ok(())
    } else {
        Err(ValidationError::all_of(instance))
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"allOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(3))]
    #[test_case(&json!({"allOf": []}), &json!(1); "empty list is satisfied")]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"allOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1))]
    #[test_case(&json!({"allOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(2.5))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"allOf": {}}), "allOf")
    }
}
