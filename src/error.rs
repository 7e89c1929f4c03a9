//! Error types for schema compilation and instance validation.
use crate::primitive_type::{PrimitiveType, PrimitiveTypesBitMap};
use serde_json::{Number, Value};
use std::{borrow::Cow, error, fmt};

/// An error that aborts schema compilation.
///
/// Carries the name of the offending keyword so that callers can point at
/// the right spot in the schema document.
#[derive(Debug)]
pub struct CompileError {
    kind: CompileErrorKind,
    keyword: Box<str>,
}

/// Kinds of errors that may happen during schema compilation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CompileErrorKind {
    /// The JSON value under a keyword does not fit that keyword's parameter
    /// shape - wrong type, a negative value where a non-negative one is
    /// required, a malformed pattern, or a missing `if`/`then`/`else`
    /// companion.
    InvalidValue,
    /// The schema document nests deeper than the recursion budget allows.
    RecursionLimit,
}

impl CompileError {
    pub(crate) fn invalid_value(keyword: &str) -> CompileError {
        CompileError {
            kind: CompileErrorKind::InvalidValue,
            keyword: keyword.into(),
        }
    }
    pub(crate) fn recursion_limit(keyword: &str) -> CompileError {
        CompileError {
            kind: CompileErrorKind::RecursionLimit,
            keyword: keyword.into(),
        }
    }
    /// Which kind of compilation failure happened.
    #[must_use]
    pub fn kind(&self) -> CompileErrorKind {
        self.kind
    }
    /// The keyword that triggered the failure.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl error::Error for CompileError {}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CompileErrorKind::InvalidValue => {
                write!(f, "invalid value for keyword \"{}\"", self.keyword)
            }
            CompileErrorKind::RecursionLimit => {
                write!(
                    f,
                    "recursion limit exceeded while compiling keyword \"{}\"",
                    self.keyword
                )
            }
        }
    }
}

/// An error that can occur during validation.
#[derive(Debug)]
pub struct ValidationError<'a> {
    /// Value of the part of the instance that failed validation.
    pub instance: Cow<'a, Value>,
    /// Type of validation error.
    pub kind: ValidationErrorKind,
}

/// Kinds of errors that may happen during validation.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum ValidationErrorKind {
    /// The input array contains an item not allowed past the evaluated prefix.
    AdditionalItems { index: usize },
    /// The input object contains a property not allowed by the object keywords.
    AdditionalProperties { property: String },
    /// The input value is not valid under all of the given schemas.
    AllOf,
    /// The input value is not valid under any of the given schemas.
    AnyOf,
    /// The input value doesn't match the expected constant.
    Constant { expected: Value },
    /// The number of matching array items is outside the `contains` bounds.
    Contains,
    /// A property is present without its required companions.
    DependentRequired { property: String, dependency: String },
    /// The input value doesn't match any of the specified options.
    Enum { options: Value },
    /// Value is too large.
    ExclusiveMaximum { limit: Number },
    /// Value is too small.
    ExclusiveMinimum { limit: Number },
    /// Everything is invalid for the `false` schema.
    FalseSchema,
    /// Too many items in an array.
    MaxItems { limit: u64 },
    /// Value is too large.
    Maximum { limit: Number },
    /// String is too long.
    MaxLength { limit: u64 },
    /// Too many properties in an object.
    MaxProperties { limit: u64 },
    /// Too few items in an array.
    MinItems { limit: u64 },
    /// Value is too small.
    Minimum { limit: Number },
    /// String is too short.
    MinLength { limit: u64 },
    /// Not enough properties in an object.
    MinProperties { limit: u64 },
    /// The number is not a multiple of the given value.
    MultipleOf { multiple_of: f64 },
    /// The negated schema validated successfully.
    Not,
    /// The value is valid under more than one of the given schemas.
    OneOfMultipleValid,
    /// The value is not valid under any of the given schemas.
    OneOfNotValid,
    /// The string doesn't match the pattern.
    Pattern { pattern: String },
    /// A required property is missing.
    Required { property: String },
    /// The value doesn't match the required type(s).
    Type { kind: TypeKind },
    /// The input array has non-unique elements.
    UniqueItems,
    /// An array item was evaluated by no sibling keyword and is not allowed.
    UnevaluatedItems { index: usize },
    /// An object property was evaluated by no sibling keyword and is not allowed.
    UnevaluatedProperties { property: String },
    /// The regex engine gave up; treated as a failed validation, fatally.
    BacktrackLimit { error: fancy_regex::Error },
    /// The combined schema/instance nesting exceeded the recursion budget.
    RecursionLimit,
}

/// Either a single expected type or a set of them.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum TypeKind {
    Single(PrimitiveType),
    Multiple(PrimitiveTypesBitMap),
}

/// Shortcuts for creation of specific error kinds.
impl<'a> ValidationError<'a> {
    pub(crate) fn into_owned(self) -> ValidationError<'static> {
        ValidationError {
            instance: Cow::Owned(self.instance.into_owned()),
            kind: self.kind,
        }
    }

    pub(crate) fn additional_items(instance: &'a Value, index: usize) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AdditionalItems { index },
        }
    }
    pub(crate) fn additional_properties(
        instance: &'a Value,
        property: &str,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AdditionalProperties {
                property: property.to_string(),
            },
        }
    }
    pub(crate) fn all_of(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AllOf,
        }
    }
    pub(crate) fn any_of(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::AnyOf,
        }
    }
    pub(crate) fn backtrack_limit(
        instance: &'a Value,
        error: fancy_regex::Error,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::BacktrackLimit { error },
        }
    }
    pub(crate) fn constant(instance: &'a Value, expected: &Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Constant {
                expected: expected.clone(),
            },
        }
    }
    pub(crate) fn contains(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Contains,
        }
    }
    pub(crate) fn dependent_required(
        instance: &'a Value,
        property: &str,
        dependency: &str,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::DependentRequired {
                property: property.to_string(),
                dependency: dependency.to_string(),
            },
        }
    }
    pub(crate) fn enumeration(instance: &'a Value, options: &Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Enum {
                options: options.clone(),
            },
        }
    }
    pub(crate) fn exclusive_maximum(instance: &'a Value, limit: &Number) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ExclusiveMaximum {
                limit: limit.clone(),
            },
        }
    }
    pub(crate) fn exclusive_minimum(instance: &'a Value, limit: &Number) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::ExclusiveMinimum {
                limit: limit.clone(),
            },
        }
    }
    pub(crate) fn false_schema(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::FalseSchema,
        }
    }
    pub(crate) fn max_items(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MaxItems { limit },
        }
    }
    pub(crate) fn maximum(instance: &'a Value, limit: &Number) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Maximum {
                limit: limit.clone(),
            },
        }
    }
    pub(crate) fn max_length(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MaxLength { limit },
        }
    }
    pub(crate) fn max_properties(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MaxProperties { limit },
        }
    }
    pub(crate) fn min_items(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MinItems { limit },
        }
    }
    pub(crate) fn minimum(instance: &'a Value, limit: &Number) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Minimum {
                limit: limit.clone(),
            },
        }
    }
    pub(crate) fn min_length(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MinLength { limit },
        }
    }
    pub(crate) fn min_properties(instance: &'a Value, limit: u64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MinProperties { limit },
        }
    }
    pub(crate) fn multiple_of(instance: &'a Value, multiple_of: f64) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::MultipleOf { multiple_of },
        }
    }
    pub(crate) fn not(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Not,
        }
    }
    pub(crate) fn one_of_multiple_valid(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::OneOfMultipleValid,
        }
    }
    pub(crate) fn one_of_not_valid(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::OneOfNotValid,
        }
    }
    pub(crate) fn pattern(instance: &'a Value, pattern: &str) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Pattern {
                pattern: pattern.to_string(),
            },
        }
    }
    pub(crate) fn recursion_limit(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::RecursionLimit,
        }
    }
    pub(crate) fn required(instance: &'a Value, property: &str) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Required {
                property: property.to_string(),
            },
        }
    }
    pub(crate) fn single_type_error(
        instance: &'a Value,
        type_: PrimitiveType,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Type {
                kind: TypeKind::Single(type_),
            },
        }
    }
    pub(crate) fn multiple_type_error(
        instance: &'a Value,
        types: PrimitiveTypesBitMap,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::Type {
                kind: TypeKind::Multiple(types),
            },
        }
    }
    pub(crate) fn unevaluated_items(instance: &'a Value, index: usize) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::UnevaluatedItems { index },
        }
    }
    pub(crate) fn unevaluated_properties(
        instance: &'a Value,
        property: &str,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::UnevaluatedProperties {
                property: property.to_string(),
            },
        }
    }
    pub(crate) fn unique_items(instance: &'a Value) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind: ValidationErrorKind::UniqueItems,
        }
    }

    /// The name of the keyword that failed. Diagnostic only, not part of
    /// the validation contract.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match &self.kind {
            ValidationErrorKind::AdditionalItems { .. } => "additionalItems",
            ValidationErrorKind::AdditionalProperties { .. } => "additionalProperties",
            ValidationErrorKind::AllOf => "allOf",
            ValidationErrorKind::AnyOf => "anyOf",
            ValidationErrorKind::BacktrackLimit { .. } | ValidationErrorKind::Pattern { .. } => {
                "pattern"
            }
            ValidationErrorKind::Constant { .. } => "const",
            ValidationErrorKind::Contains => "contains",
            ValidationErrorKind::DependentRequired { .. } => "dependentRequired",
            ValidationErrorKind::Enum { .. } => "enum",
            ValidationErrorKind::ExclusiveMaximum { .. } => "exclusiveMaximum",
            ValidationErrorKind::ExclusiveMinimum { .. } => "exclusiveMinimum",
            ValidationErrorKind::FalseSchema => "false",
            ValidationErrorKind::MaxItems { .. } => "maxItems",
            ValidationErrorKind::Maximum { .. } => "maximum",
            ValidationErrorKind::MaxLength { .. } => "maxLength",
            ValidationErrorKind::MaxProperties { .. } => "maxProperties",
            ValidationErrorKind::MinItems { .. } => "minItems",
            ValidationErrorKind::Minimum { .. } => "minimum",
            ValidationErrorKind::MinLength { .. } => "minLength",
            ValidationErrorKind::MinProperties { .. } => "minProperties",
            ValidationErrorKind::MultipleOf { .. } => "multipleOf",
            ValidationErrorKind::Not => "not",
            ValidationErrorKind::OneOfMultipleValid | ValidationErrorKind::OneOfNotValid => "oneOf",
            ValidationErrorKind::RecursionLimit => "$recursion",
            ValidationErrorKind::Required { .. } => "required",
            ValidationErrorKind::Type { .. } => "type",
            ValidationErrorKind::UnevaluatedItems { .. } => "unevaluatedItems",
            ValidationErrorKind::UnevaluatedProperties { .. } => "unevaluatedProperties",
            ValidationErrorKind::UniqueItems => "uniqueItems",
        }
    }

    /// Fatal errors terminate validation regardless of enclosing
    /// `anyOf`/`oneOf`/`not`/`if` counting.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ValidationErrorKind::BacktrackLimit { .. } | ValidationErrorKind::RecursionLimit
        )
    }
}

impl error::Error for ValidationError<'_> {}

impl fmt::Display for ValidationError<'_> {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::AdditionalItems { index } => write!(
                f,
                "Additional items are not allowed ({} at index {} was unexpected)",
                self.instance, index
            ),
            ValidationErrorKind::AdditionalProperties { property } => write!(
                f,
                "Additional properties are not allowed ('{}' was unexpected)",
                property
            ),
            ValidationErrorKind::AllOf => write!(
                f,
                "{} is not valid under all of the given schemas",
                self.instance
            ),
            ValidationErrorKind::AnyOf | ValidationErrorKind::OneOfNotValid => write!(
                f,
                "{} is not valid under any of the given schemas",
                self.instance
            ),
            ValidationErrorKind::BacktrackLimit { error } => error.fmt(f),
            ValidationErrorKind::Constant { expected } => {
                write!(f, "{} was expected", expected)
            }
            ValidationErrorKind::Contains => write!(
                f,
                "{} does not contain the expected number of matching items",
                self.instance
            ),
            ValidationErrorKind::DependentRequired {
                property,
                dependency,
            } => write!(
                f,
                "\"{}\" is a required property when \"{}\" is present",
                dependency, property
            ),
            ValidationErrorKind::Enum { options } => {
                write!(f, "{} is not one of {}", self.instance, options)
            }
            ValidationErrorKind::ExclusiveMaximum { limit } => write!(
                f,
                "{} is greater than or equal to the maximum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::ExclusiveMinimum { limit } => write!(
                f,
                "{} is less than or equal to the minimum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::FalseSchema => {
                write!(f, "False schema does not allow {}", self.instance)
            }
            ValidationErrorKind::MaxItems { limit } => {
                write!(f, "{} has more than {} items", self.instance, limit)
            }
            ValidationErrorKind::Maximum { limit } => write!(
                f,
                "{} is greater than the maximum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::MaxLength { limit } => {
                write!(f, "{} is longer than {} characters", self.instance, limit)
            }
            ValidationErrorKind::MaxProperties { limit } => {
                write!(f, "{} has more than {} properties", self.instance, limit)
            }
            ValidationErrorKind::MinItems { limit } => {
                write!(f, "{} has less than {} items", self.instance, limit)
            }
            ValidationErrorKind::Minimum { limit } => {
                write!(f, "{} is less than the minimum of {}", self.instance, limit)
            }
            ValidationErrorKind::MinLength { limit } => {
                write!(f, "{} is shorter than {} characters", self.instance, limit)
            }
            ValidationErrorKind::MinProperties { limit } => {
                write!(f, "{} has less than {} properties", self.instance, limit)
            }
            ValidationErrorKind::MultipleOf { multiple_of } => {
                write!(f, "{} is not a multiple of {}", self.instance, multiple_of)
            }
            ValidationErrorKind::Not => {
                write!(f, "negated schema is not allowed for {}", self.instance)
            }
            ValidationErrorKind::OneOfMultipleValid => write!(
                f,
                "{} is valid under more than one of the given schemas",
                self.instance
            ),
            ValidationErrorKind::Pattern { pattern } => {
                write!(f, "{} does not match \"{}\"", self.instance, pattern)
            }
            ValidationErrorKind::RecursionLimit => {
                write!(f, "recursion limit exceeded during validation")
            }
            ValidationErrorKind::Required { property } => {
                write!(f, "\"{}\" is a required property", property)
            }
            ValidationErrorKind::Type { kind } => match kind {
                TypeKind::Single(type_) => {
                    write!(f, "{} is not of type \"{}\"", self.instance, type_)
                }
                TypeKind::Multiple(types) => {
                    write!(f, "{} is not of types ", self.instance)?;
                    let mut iter = types.into_iter();
                    if let Some(first) = iter.next() {
                        write!(f, "\"{}\"", first)?;
                    }
                    for type_ in iter {
                        write!(f, ", \"{}\"", type_)?;
                    }
                    Ok(())
                }
            },
            ValidationErrorKind::UnevaluatedItems { index } => write!(
                f,
                "Unevaluated items are not allowed ({} at index {} was unexpected)",
                self.instance, index
            ),
            ValidationErrorKind::UnevaluatedProperties { property } => write!(
                f,
                "Unevaluated properties are not allowed ('{}' was unexpected)",
                property
            ),
            ValidationErrorKind::UniqueItems => {
                write!(f, "{} has non-unique elements", self.instance)
            }
        }
    }
}
