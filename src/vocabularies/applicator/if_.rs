use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{validate_plan, Scope},
    vocabularies::{Keyword, Plan},
};
use serde_json::Value;

/// Compiled `if` with its `then`/`else` branches bound in. Missing
/// branches are trivially satisfied.
#[derive(Debug)]
pub(crate) struct Conditional {
    if_plan: Plan,
    then_plan: Option<Plan>,
    else_plan: Option<Plan>,
}

impl Conditional {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        if_schema: &Value,
        then_schema: Option<&Value>,
        else_schema: Option<&Value>,
        depth: usize,
    ) -> Result<Keyword, CompileError> {
        let if_plan = compiler.compile_subschema(if_schema, "if", depth)?;
        let then_plan = match then_schema {
            Some(schema) => Some(compiler.compile_subschema(schema, "then", depth)?),
            None => None,
        };
        let else_plan = match else_schema {
            Some(schema) => Some(compiler.compile_subschema(schema, "else", depth)?),
            None => None,
        };
        Ok(Keyword::IfThenElse(Conditional {
            if_plan,
            then_plan,
            else_plan,
        }))
    }

    pub(crate) fn validate<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        let branch = match validate_plan(schema, &self.if_plan, instance, Scope::default(), depth)
        {
            Ok(()) => &self.then_plan,
            Err(error) if error.is_fatal() => return Err(error),
            Err(_) => &self.else_plan,
        };
        match branch {
            Some(plan) => validate_plan(schema, plan, instance, Scope::default(), depth),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"if": {"type": "string"}, "then": {"minLength": 3}, "else": {"type": "number"}}), &json!("abc"))]
    #[test_case(&json!({"if": {"type": "string"}, "then": {"minLength": 3}, "else": {"type": "number"}}), &json!(42))]
    #[test_case(&json!({"if": {"exclusiveMaximum": 0}, "then": {"minimum": -10}}), &json!(-1))]
    #[test_case(&json!({"if": {"exclusiveMaximum": 0}, "then": {"minimum": -10}}), &json!(3); "missing else is trivially satisfied")]
    #[test_case(&json!({"if": {"exclusiveMaximum": 0}, "else": {"multipleOf": 2}}), &json!(-1); "missing then is trivially satisfied")]
    #[test_case(&json!({"if": {"exclusiveMaximum": 0}, "else": {"multipleOf": 2}}), &json!(4))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"if": {"type": "string"}, "then": {"minLength": 3}, "else": {"type": "number"}}), &json!("ab"))]
    #[test_case(&json!({"if": {"type": "string"}, "then": {"minLength": 3}, "else": {"type": "number"}}), &json!(true))]
    #[test_case(&json!({"if": {"exclusiveMaximum": 0}, "then": {"minimum": -10}}), &json!(-100))]
    #[test_case(&json!({"if": {"exclusiveMaximum": 0}, "else": {"multipleOf": 2}}), &json!(3); "else branch is exercised")]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    // A branch without `if`, and `if` without a branch, are structural
    // errors reported for `if`.
    #[test_case(&json!({"then": {"minimum": 0}}))]
    #[test_case(&json!({"else": {"minimum": 0}}))]
    #[test_case(&json!({"then": {"minimum": 0}, "else": {"maximum": 10}}))]
    #[test_case(&json!({"if": {"type": "string"}}))]
    fn structural_errors(schema: &Value) {
        tests_util::fails_to_compile(schema, "if")
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(
            &json!({"if": 1, "then": {"minimum": 0}}),
            "if",
        )
    }
}
