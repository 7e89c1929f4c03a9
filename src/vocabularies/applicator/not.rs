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
    match schema {
        Value::Object(_) | Value::Bool(_) => Ok(Keyword::Not(Logic {
            plans: vec![compiler.compile_subschema(schema, "not", depth)?],
            unevaluated_items: None,
            unevaluated_properties: None,
        })),
        _ => Err(CompileError::invalid_value("not")),
    }
}

pub(crate) fn validate<'i>(
    logic: &Logic,
    schema: &Validator,
    instance: &'i Value,
    depth: usize,
) -> Result<(), ValidationError<'i>> {
    let (count, _) = logic.count_valid(schema, instance, depth)?;
    if count == 0 {
        Ok(())
    } else {
        Err(ValidationError::not(instance))
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"not": {"type": "integer"}}), &json!("a"))]
    #[test_case(&json!({"not": false}), &json!(null))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"not": {"type": "integer"}}), &json!(1))]
    #[test_case(&json!({"not": {}}), &json!(1); "empty subschema always passes, so not fails")]
    #[test_case(&json!({"not": true}), &json!(1))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"not": [1]}), "not")
    }
}
