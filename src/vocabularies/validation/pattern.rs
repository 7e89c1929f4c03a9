use crate::{
    error::{CompileError, ValidationError},
    vocabularies::Keyword,
};
use serde_json::Value;

// Schema patterns use ECMA-262 syntax. The engine handles most of it
// natively; what differs is rewritten in a single pass before compilation:
// the shorthand classes (ASCII in ECMA-262, Unicode-aware in the engine)
// are spliced in as explicit ranges, and `\cX` control escapes (unknown to
// the engine) become hex escapes.
const DIGIT_CLASS: &str = "0-9";
const WORD_CLASS: &str = "0-9A-Za-z_";
// The ECMA-262 WhiteSpace and LineTerminator productions.
const SPACE_CLASS: &str = "\\t\\n\\x{b}\\x{c}\\r \\x{a0}\\x{1680}\\x{2000}-\\x{200a}\\x{2028}\\x{2029}\\x{202f}\\x{205f}\\x{3000}\\x{feff}";

#[derive(Debug)]
pub(crate) struct Pattern {
    original: String,
    pattern: fancy_regex::Regex,
}

impl Pattern {
    pub(crate) fn compile(schema: &Value) -> Result<Keyword, CompileError> {
        match schema {
            Value::String(item) => {
                // Compiled exactly once; validation never recompiles.
                let pattern =
                    translate(item).map_err(|_| CompileError::invalid_value("pattern"))?;
                Ok(Keyword::Pattern(Pattern {
                    original: item.clone(),
                    pattern,
                }))
            }
            _ => Err(CompileError::invalid_value("pattern")),
        }
    }

    pub(crate) fn validate<'i>(&self, instance: &'i Value) -> Result<(), ValidationError<'i>> {
        if let Value::String(item) = instance {
            match self.pattern.is_match(item) {
                Ok(true) => {}
                Ok(false) => {
                    return Err(ValidationError::pattern(instance, &self.original));
                }
                Err(error) => return Err(ValidationError::backtrack_limit(instance, error)),
            }
        }
        Ok(())
    }
}

/// Rewrite an ECMA-262 pattern into the engine's dialect and compile it.
pub(crate) fn translate(pattern: &str) -> Result<fancy_regex::Regex, fancy_regex::Error> {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();
    // How a shorthand is spliced depends on whether it sits inside a
    // bracket class already.
    let mut in_class = false;
    while let Some(current) = chars.next() {
        if current != '\\' {
            match current {
                '[' => in_class = true,
                ']' => in_class = false,
                _ => {}
            }
            out.push(current);
            continue;
        }
        match chars.next() {
            Some(shorthand @ ('d' | 'D' | 'w' | 'W' | 's' | 'S')) => {
                expand_shorthand(&mut out, shorthand, in_class);
            }
            Some('c') if chars.peek().map_or(false, |c| c.is_ascii_alphabetic()) => {
                let letter = chars.next().expect("Peeked above");
                // A control escape denotes the letter's code modulo 32.
                out.push_str(&format!("\\x{:02x}", letter as u8 % 32));
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            // A dangling escape; the engine rejects it below.
            None => out.push('\\'),
        }
    }
    fancy_regex::Regex::new(&out)
}

fn expand_shorthand(out: &mut String, shorthand: char, in_class: bool) {
    let set = match shorthand.to_ascii_lowercase() {
        'd' => DIGIT_CLASS,
        'w' => WORD_CLASS,
        _ => SPACE_CLASS,
    };
    if shorthand.is_ascii_uppercase() {
        if in_class {
            // A complement cannot be spliced into an enclosing class; the
            // engine's own form is the closest reading.
            out.push('\\');
            out.push(shorthand);
        } else {
            out.push_str("[^");
            out.push_str(set);
            out.push(']');
        }
    } else if in_class {
        out.push_str(set);
    } else {
        out.push('[');
        out.push_str(set);
        out.push(']');
    }
}

#[cfg(test)]
mod tests {
    use super::translate;
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(r"^\d+$", "042", true)]
    #[test_case(r"^\d+$", "4a2", false)]
    #[test_case(r"^\w+$", "snake_case", true)]
    #[test_case(r"^\w+$", "na\u{ef}ve", false; "word class is ascii only")]
    #[test_case(r"\s", "\u{a0}", true; "whitespace covers nbsp")]
    #[test_case(r"^\S+$", "data", true)]
    #[test_case(r"^[\d]+$", "123", true; "shorthand inside a class")]
    #[test_case(r"^[\w.]+$", "a.b", true)]
    #[test_case(r"\cJ", "\n", true; "control escape")]
    #[test_case(r"a\.b", "a.b", true)]
    #[test_case(r"a\.b", "axb", false)]
    fn translated_matches(pattern: &str, text: &str, is_matching: bool) {
        let compiled = translate(pattern).expect("A valid pattern");
        assert_eq!(
            compiled.is_match(text).expect("Match succeeds"),
            is_matching
        );
    }

    #[test_case(r"\")]
    #[test_case(r"\u")]
    #[test_case(r"(unclosed")]
    fn untranslatable(pattern: &str) {
        assert!(translate(pattern).is_err());
    }

    #[test_case(&json!({"pattern": "^a*$"}), &json!("aaa"))]
    #[test_case(&json!({"pattern": "a+"}), &json!("xaay"); "matches anywhere")]
    #[test_case(&json!({"pattern": "^(?!internal:)"}), &json!("public:id"); "negative lookahead")]
    #[test_case(&json!({"pattern": "^a*$"}), &json!(5))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"pattern": "^a*$"}), &json!("abc"))]
    #[test_case(&json!({"pattern": "^(?!internal:)"}), &json!("internal:id"))]
    fn invalid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test_case(&json!({"pattern": "\\u"}))]
    #[test_case(&json!({"pattern": 1}))]
    fn invalid_parameter(schema: &Value) {
        tests_util::fails_to_compile(schema, "pattern")
    }
}
