use crate::{error::CompileError, vocabularies::Keyword};
use serde_json::Value;

/// Purely annotative keywords. Compilation only checks the parameter type;
/// validation is a no-op.
#[derive(Debug)]
pub(crate) struct Annotation {
    #[allow(dead_code)]
    name: &'static str,
}

pub(crate) fn compile(name: &'static str, schema: &Value) -> Result<Keyword, CompileError> {
    let type_ok = match name {
        "title" | "description" | "$comment" | "$schema" => schema.is_string(),
        "deprecated" | "readOnly" | "writeOnly" => schema.is_boolean(),
        "examples" => schema.is_array(),
        // `default` and `example` accept any JSON value.
        _ => true,
    };
    if type_ok {
        Ok(Keyword::Annotation(Annotation { name }))
    } else {
        Err(CompileError::invalid_value(name))
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"title": "Example", "deprecated": true}), &json!(null))]
    #[test_case(&json!({"description": "text", "examples": [1, 2]}), &json!("anything"))]
    #[test_case(&json!({"default": {"a": 1}}), &json!(42))]
    #[test_case(&json!({"$comment": "note", "readOnly": false, "writeOnly": true}), &json!([]))]
    fn always_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"title": 1}), "title")]
    #[test_case(&json!({"deprecated": "yes"}), "deprecated")]
    #[test_case(&json!({"examples": {}}), "examples")]
    fn invalid_parameter(schema: &Value, keyword: &str) {
        tests_util::fails_to_compile(schema, keyword)
    }
}
