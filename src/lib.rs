//! # jsonschema-lite
//!
//! A self-contained JSON Schema compiler and validator for the draft
//! 2020-12 keyword set, without `$ref`/`$id`/remote schema resolution.
//! A schema is compiled once into a flat evaluation plan; validation is a
//! read-only traversal of that plan with first-failure semantics.
//!
//! The interesting part is the wiring between interdependent siblings:
//! `properties`/`patternProperties`/`additionalProperties`/
//! `unevaluatedProperties` (and the array-shape family) form fallback
//! chains, `minContains`/`maxContains` bind into `contains`, `then`/`else`
//! bind into `if`, and the logical applicators forward the `unevaluated*`
//! siblings into their children.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"type": "integer", "minimum": 0});
//! let compiled = jsonschema_lite::Validator::new(&schema).expect("A valid schema");
//! assert!(compiled.is_valid(&json!(1)));
//!
//! let instance = json!(-1);
//! let error = compiled.validate(&instance).expect_err("Below the minimum");
//! assert_eq!(error.keyword(), "minimum");
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::needless_pass_by_value,
    clippy::print_stdout,
    clippy::redundant_closure,
    clippy::trivially_copy_pass_by_ref,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unreachable_pub
)]
#![allow(clippy::upper_case_acronyms)]
mod compilation;
pub mod error;
pub mod primitive_type;
mod validator;
mod vocabularies;

pub use compilation::Validator;
pub use error::{CompileError, CompileErrorKind, ValidationError};

use serde_json::Value;

/// A shortcut for validating `instance` against `schema`.
/// ```rust
/// use jsonschema_lite::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let compiled = Validator::new(schema).expect("Invalid schema");
    compiled.is_valid(instance)
}


#[cfg(test)]
mod tests {
    use super::is_valid;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        assert!(is_valid(&schema, &json!("foobar")));
        assert!(!is_valid(&schema, &json!("foo")));
    }
}
