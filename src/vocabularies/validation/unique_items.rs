use crate::{
    error::{CompileError, ValidationError},
    vocabularies::{validation::helpers::equal, Keyword},
};
use ahash::{AHashSet, AHasher};
use serde_json::{Number, Value};
use std::hash::{Hash, Hasher};

// Based on the implementation proposed by Sven Marnach:
// https://stackoverflow.com/questions/60882381/what-is-the-fastest-correct-way-to-detect-that-there-are-no-duplicates-in-a-json
pub(crate) struct HashedValue<'a>(&'a Value);

// Equality must be the cross-representation one, not `Value`'s: the set
// has to treat `1` and `1.0` as the same element.
impl PartialEq for HashedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        equal(self.0, other.0)
    }
}

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u32(3_221_225_473), // chosen randomly
            Value::Bool(ref item) => item.hash(state),
            Value::Number(ref item) => hash_number(item, state),
            Value::String(ref item) => item.hash(state),
            Value::Array(ref items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(ref items) => {
                let mut hash = 0;
                for (key, value) in items {
                    // We have no way of building a new hasher of type `H`, so we
                    // hardcode using the default hasher of a hash map.
                    let mut item_hasher = AHasher::default();
                    key.hash(&mut item_hasher);
                    HashedValue(value).hash(&mut item_hasher);
                    hash ^= item_hasher.finish();
                }
                state.write_u64(hash);
            }
        }
    }
}

// Hashing must agree with `equal`: an integral float hashes exactly like
// the equal integer, otherwise the hashed path would miss duplicates that
// the pairwise path finds.
fn hash_number<H: Hasher>(item: &Number, state: &mut H) {
    if let Some(number) = item.as_u64() {
        number.hash(state);
    } else if let Some(number) = item.as_i64() {
        number.hash(state);
    } else {
        let number = item.as_f64().expect("Always valid");
        if number.fract() == 0. && number >= 0. && number <= u64::MAX as f64 {
            (number as u64).hash(state);
        } else if number.fract() == 0. && number >= i64::MIN as f64 && number < 0. {
            (number as i64).hash(state);
        } else {
            number.to_bits().hash(state);
        }
    }
}

// Empirically calculated threshold after which the validator resorts to hashing.
// Calculated for an array of mixed types, large homogenous arrays of primitive values might be
// processed faster with different thresholds, but this one gives a good baseline for the common
// case.
const ITEMS_SIZE_THRESHOLD: usize = 11;

#[inline]
pub(crate) fn is_unique(items: &[Value]) -> bool {
    let size = items.len();
    if size <= 1 {
        // Empty arrays and one-element arrays always contain unique elements
        true
    } else if size <= ITEMS_SIZE_THRESHOLD {
        // If the array size is small enough we can compare all elements pairwise, which will
        // be faster than calculating hashes for each element, even if the algorithm is O(N^2)
        for (idx, item) in items.iter().enumerate() {
            for other_item in items.iter().skip(idx + 1) {
                if equal(item, other_item) {
                    return false;
                }
            }
        }
        true
    } else {
        let mut seen = AHashSet::with_capacity(size);
        items.iter().map(HashedValue).all(move |x| seen.insert(x))
    }
}

pub(crate) fn compile(schema: &Value) -> Result<Option<Keyword>, CompileError> {
    match schema {
        Value::Bool(true) => Ok(Some(Keyword::UniqueItems)),
        Value::Bool(false) => Ok(None),
        _ => Err(CompileError::invalid_value("uniqueItems")),
    }
}

pub(crate) fn validate(instance: &Value) -> Result<(), ValidationError<'_>> {
    if let Value::Array(items) = instance {
        if !is_unique(items) {
            return Err(ValidationError::unique_items(instance));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"uniqueItems": true}), &json!([]))]
    #[test_case(&json!({"uniqueItems": true}), &json!([1, "1"]))]
    #[test_case(&json!({"uniqueItems": true}), &json!([1, 2, 3]))]
    #[test_case(&json!({"uniqueItems": false}), &json!([1, 1]))]
    #[test_case(&json!({"uniqueItems": true}), &json!("not an array"))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"uniqueItems": true}), &json!([1, 1]))]
    #[test_case(&json!({"uniqueItems": true}), &json!([1, 1.0]))]
    #[test_case(&json!({"uniqueItems": true}), &json!([{"a": 1, "b": 2}, {"b": 2, "a": 1}]))]
    #[test_case(&json!({"uniqueItems": true}), &json!([[1.0], [1]]))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn hashed_path_agrees_with_pairwise() {
        // Past the pairwise threshold the hashed set must find the same
        // duplicates, including numerically equal mixed representations.
        let mut items: Vec<Value> = (0..20).map(|i| json!(i)).collect();
        items.push(json!(5.0));
        tests_util::is_not_valid(&json!({"uniqueItems": true}), &Value::Array(items));
    }

    #[test]
    fn invalid_parameter() {
        tests_util::fails_to_compile(&json!({"uniqueItems": "yes"}), "uniqueItems")
    }
}
