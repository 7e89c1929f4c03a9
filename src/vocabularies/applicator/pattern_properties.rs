use crate::{
    compilation::{Compiler, Validator},
    error::{CompileError, ValidationError},
    validator::{fall_back_key, validate_plan, Scope},
    vocabularies::{validation::pattern::translate, Keyword, KeywordId, Plan},
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct PatternProperties {
    patterns: Vec<(fancy_regex::Regex, Plan)>,
    /// Next link of the object fallback chain; consulted for keys that
    /// match none of the patterns.
    pub(crate) alternate: Option<KeywordId>,
}

impl PatternProperties {
    pub(crate) fn compile(
        compiler: &mut Compiler,
        schema: &Value,
        depth: usize,
    ) -> Result<Keyword, CompileError> {
        if let Value::Object(map) = schema {
            let mut patterns = Vec::with_capacity(map.len());
            for (pattern, subschema) in map {
                // Patterns are compiled once here; validation reuses the
                // compiled handles.
                let regex = translate(pattern)
                    .map_err(|_| CompileError::invalid_value("patternProperties"))?;
                let plan = compiler.compile_subschema(subschema, "patternProperties", depth)?;
                patterns.push((regex, plan));
            }
            Ok(Keyword::PatternProperties(PatternProperties {
                patterns,
                alternate: None,
            }))
        } else {
            Err(CompileError::invalid_value("patternProperties"))
        }
    }

    pub(crate) fn validate<'i>(
        &self,
        schema: &Validator,
        instance: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        if let Value::Object(item) = instance {
            for (key, value) in item {
                self.validate_key(schema, key, value, scope, depth)?;
            }
        }
        Ok(())
    }

    /// Every matching pattern imposes its sub-schema on the value; a key
    /// that matches nothing is handed to the next chain link.
    pub(crate) fn validate_key<'i>(
        &self,
        schema: &Validator,
        key: &str,
        value: &'i Value,
        scope: Scope,
        depth: usize,
    ) -> Result<(), ValidationError<'i>> {
        let mut match_found = false;
        for (regex, plan) in &self.patterns {
            match regex.is_match(key) {
                Ok(true) => {
                    match_found = true;
                    validate_plan(schema, plan, value, Scope::default(), depth)?;
                }
                Ok(false) => {}
                Err(error) => return Err(ValidationError::backtrack_limit(value, error)),
            }
        }
        if match_found {
            Ok(())
        } else {
            fall_back_key(schema, self.alternate, scope, key, value, depth)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"patternProperties": {"^x": {"type": "string"}}}), &json!({"x1": "ok"}))]
    #[test_case(&json!({"patternProperties": {"^x": {"type": "string"}}}), &json!({"y": 1}))]
    #[test_case(&json!({"patternProperties": {"^x": {"type": "string"}}}), &json!([1]))]
    #[test_case(&json!({"patternProperties": {"^a": {"minimum": 0}, "z$": {"maximum": 10}}}), &json!({"az": 5}); "all matching patterns apply")]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"patternProperties": {"^x": {"type": "string"}}}), &json!({"x1": 1}))]
    #[test_case(&json!({"patternProperties": {"^a": {"minimum": 0}, "z$": {"maximum": 10}}}), &json!({"az": 11}))]
    #[test_case(&json!({"patternProperties": {"^a": false}}), &json!({"a": 1}))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test_case(&json!({"patternProperties": {"\\u": {}}}))]
    #[test_case(&json!({"patternProperties": 1}))]
    fn invalid_parameter(schema: &Value) {
        tests_util::fails_to_compile(schema, "patternProperties")
    }
}
