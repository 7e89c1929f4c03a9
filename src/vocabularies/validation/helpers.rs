use crate::error::CompileError;
use num_cmp::NumCmp;
use serde_json::{Map, Number, Value};

macro_rules! num_cmp {
    ($left:expr, $right:expr, $op:ident) => {
        if let Some(b) = $right.as_u64() {
            NumCmp::$op($left, b)
        } else if let Some(b) = $right.as_i64() {
            NumCmp::$op($left, b)
        } else {
            NumCmp::$op($left, $right.as_f64().expect("Always valid"))
        }
    };
}

macro_rules! define_number_cmp {
    ($name:ident, $op:ident) => {
        #[inline]
        pub(crate) fn $name(left: &Number, right: &Number) -> bool {
            if let Some(a) = left.as_u64() {
                num_cmp!(a, right, $op)
            } else if let Some(a) = left.as_i64() {
                num_cmp!(a, right, $op)
            } else {
                let a = left.as_f64().expect("Always valid");
                num_cmp!(a, right, $op)
            }
        }
    };
}

define_number_cmp!(num_eq, num_eq);
define_number_cmp!(num_lt, num_lt);
define_number_cmp!(num_le, num_le);
define_number_cmp!(num_gt, num_gt);
define_number_cmp!(num_ge, num_ge);

/// Deep equality with numbers compared by value across `u64`/`i64`/`f64`
/// representations and objects compared independently of key order.
#[inline]
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::Null, Value::Null) => true,
        (Value::Number(left), Value::Number(right)) => num_eq(left, right),
        (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
        (_, _) => false,
    }
}

#[inline]
pub(crate) fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| equal(a, b))
}

#[inline]
pub(crate) fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right
                .get(key)
                .map_or(false, |other_value| equal(value, other_value))
        })
}

/// Parse a non-negative integer parameter, the shape shared by all
/// cardinality keywords. An integer-valued float counts as an integer,
/// the same reading the `type` keyword uses.
#[inline]
pub(crate) fn non_negative_integer(schema: &Value, keyword: &str) -> Result<u64, CompileError> {
    if let Value::Number(number) = schema {
        if let Some(limit) = number.as_u64() {
            return Ok(limit);
        }
        let limit = number.as_f64().expect("Always valid");
        if limit >= 0. && limit.fract() == 0. && limit <= u64::MAX as f64 {
            return Ok(limit as u64);
        }
    }
    Err(CompileError::invalid_value(keyword))
}

#[cfg(test)]
mod tests {
    use super::{equal, non_negative_integer};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!(2), Some(2))]
    #[test_case(&json!(0), Some(0))]
    #[test_case(&json!(2.0), Some(2); "integer valued float")]
    #[test_case(&json!(-1), None)]
    #[test_case(&json!(-2.0), None)]
    #[test_case(&json!(1.5), None)]
    #[test_case(&json!("2"), None)]
    fn non_negative_integers(value: &Value, expected: Option<u64>) {
        assert_eq!(non_negative_integer(value, "maxItems").ok(), expected);
    }

    #[test_case(&json!(1), &json!(1.0))]
    #[test_case(&json!(-3), &json!(-3.0))]
    #[test_case(&json!([2]), &json!([2.0]))]
    #[test_case(&json!({"a": 1}), &json!({"a": 1.0}))]
    #[test_case(&json!({"a": 1, "b": 2}), &json!({"b": 2.0, "a": 1}))]
    fn are_equal(left: &Value, right: &Value) {
        assert!(equal(left, right))
    }

    #[test_case(&json!(1), &json!(2.0))]
    #[test_case(&json!(1), &json!("1"))]
    #[test_case(&json!([]), &json!(["foo"]))]
    #[test_case(&json!([-3]), &json!([-4.0]))]
    #[test_case(&json!({"a": 1}), &json!({"a": 1.0, "b": 2}))]
    fn are_not_equal(left: &Value, right: &Value) {
        assert!(!equal(left, right))
    }
}
