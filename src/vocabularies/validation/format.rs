use crate::{error::CompileError, vocabularies::Keyword};
use serde_json::Value;

/// `format` is an annotation here - the name is kept for diagnostics, but
/// no semantic check is performed.
#[derive(Debug)]
pub(crate) struct Format {
    #[allow(dead_code)]
    format: String,
}

impl Format {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        match schema {
            Value::String(format) => Ok(Keyword::Format(Format {
                format: format.clone(),
            })),
            _ => Err(CompileError::invalid_value("format")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"format": "ipv4"}), &json!("not an ip"))]
    #[test_case(&json!({"format": "date-time"}), &json!(42))]
    fn always_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"format": 1}), "format")
    }
}
