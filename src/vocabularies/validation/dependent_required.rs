use crate::{
    error::{CompileError, ValidationError},
    vocabularies::Keyword,
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct DependentRequired {
    dependents: Vec<(String, Vec<String>)>,
}

impl DependentRequired {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        if let Value::Object(map) = schema {
            let mut dependents = Vec::with_capacity(map.len());
            for (property, value) in map {
                let items = match value {
                    Value::Array(items) => items,
                    _ => return Err(CompileError::invalid_value("dependentRequired")),
                };
                let mut dependencies = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(string) => dependencies.push(string.clone()),
                        _ => return Err(CompileError::invalid_value("dependentRequired")),
                    }
                }
                dependents.push((property.clone(), dependencies));
            }
            Ok(Keyword::DependentRequired(DependentRequired { dependents }))
        } else {
            Err(CompileError::invalid_value("dependentRequired"))
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::Object(item) = instance {
            for (property, dependencies) in &self.dependents {
                if item.contains_key(property) {
                    for dependency in dependencies {
                        if !item.contains_key(dependency) {
                            return Err(ValidationError::dependent_required(
                                instance, property, dependency,
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
