use crate::{
    error::{CompileError, ValidationError},
    primitive_type::{PrimitiveType, PrimitiveTypesBitMap},
    vocabularies::Keyword,
};
use serde_json::{Number, Value};
use std::convert::TryFrom;

#[derive(Debug)]
pub(crate) enum Type {
    Single(PrimitiveType),
    Multiple(PrimitiveTypesBitMap),
}

impl Type {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        match schema {
            Value::String(item) => Ok(Keyword::Type(Type::Single(parse_type(item)?))),
            Value::Array(items) => {
                if let [Value::String(item)] = items.as_slice() {
                    return Ok(Keyword::Type(Type::Single(parse_type(item)?)));
                }
                let mut types = PrimitiveTypesBitMap::new();
                for item in items {
                    match item {
                        Value::String(string) => types |= parse_type(string)?,
                        _ => return Err(CompileError::invalid_value("type")),
                    }
                }
                Ok(Keyword::Type(Type::Multiple(types)))
            }
            _ => Err(CompileError::invalid_value("type")),
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        match self {
            Type::Single(type_) => {
                if contains_type(*type_, instance) {
                    Ok(())
                } else {
                    Err(ValidationError::single_type_error(instance, *type_))
                }
            }
            Type::Multiple(types) => {
                let matched = match instance {
                    Value::Array(_) => types.contains_type(PrimitiveType::Array),
                    Value::Bool(_) => types.contains_type(PrimitiveType::Boolean),
                    Value::Null => types.contains_type(PrimitiveType::Null),
                    Value::Number(num) => {
                        types.contains_type(PrimitiveType::Number)
                            || (types.contains_type(PrimitiveType::Integer) && is_integer(num))
                    }
                    Value::Object(_) => types.contains_type(PrimitiveType::Object),
                    Value::String(_) => types.contains_type(PrimitiveType::String),
                };
                if matched {
                    Ok(())
                } else {
                    Err(ValidationError::multiple_type_error(instance, *types))
                }
            }
        }
    }
}

fn parse_type(item: &str) -> Result<PrimitiveType, CompileError> {
    PrimitiveType::try_from(item).map_err(|()| CompileError::invalid_value("type"))
}

fn contains_type(type_: PrimitiveType, instance: &Value) -> bool {
    match type_ {
        PrimitiveType::Array => instance.is_array(),
        PrimitiveType::Boolean => instance.is_boolean(),
        PrimitiveType::Integer => {
            if let Value::Number(num) = instance {
                is_integer(num)
            } else {
                false
            }
        }
        PrimitiveType::Null => instance.is_null(),
        PrimitiveType::Number => instance.is_number(),
        PrimitiveType::Object => instance.is_object(),
        PrimitiveType::String => instance.is_string(),
    }
}

fn is_integer(num: &Number) -> bool {
    num.is_u64() || num.is_i64() || num.as_f64().expect("Always valid").fract() == 0.
}
