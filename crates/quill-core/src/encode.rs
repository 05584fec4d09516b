//! Scalar encoding.
//!
//! Both encoders are total over [`Scalar`]: every terminal value, including
//! non-finite numbers, has a literal form.
//!
//! | scalar          | text mode              | JSON mode                |
//! |-----------------|------------------------|--------------------------|
//! | undefined, null | `null`                 | `null`                   |
//! | bool            | `true` / `false`       | `true` / `false`         |
//! | finite number   | `1.5`                  | `1.5`                    |
//! | non-finite      | `"Infinity"`           | `"Infinity"`             |
//! | text            | raw                    | quoted, escaped          |
//! | symbol          | `"Symbol(desc)"`       | `"Symbol(desc)"`         |
//! | big integer     | `"123"`                | `"123"`                  |
//! | callable        | `<Function name>`      | `"<Function name>"`      |

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::value::Scalar;

/// Encode a scalar for a text line.
#[must_use]
pub fn encode_text(scalar: &Scalar) -> Cow<'_, str> {
    match scalar {
        Scalar::Undefined | Scalar::Null => Cow::Borrowed("null"),
        Scalar::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Scalar::Number(n) if n.is_finite() => Cow::Owned(format_number(*n)),
        Scalar::Number(n) => Cow::Owned(format!("\"{}\"", format_number(*n))),
        Scalar::Text(text) => Cow::Borrowed(text),
        Scalar::Symbol(description) => Cow::Owned(format!("\"{}\"", Scalar::symbol_text(description))),
        Scalar::BigInt(n) => Cow::Owned(format!("\"{n}\"")),
        Scalar::Callable(callable) => Cow::Owned(callable.describe()),
    }
}

/// Encode a scalar as a JSON literal.
#[must_use]
pub fn encode_json(scalar: &Scalar) -> String {
    let mut out = String::new();
    write_json(&mut out, scalar);
    out
}

/// Append the JSON literal for `scalar` to `out`.
pub(crate) fn write_json(out: &mut String, scalar: &Scalar) {
    match scalar {
        Scalar::Undefined | Scalar::Null => out.push_str("null"),
        Scalar::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Scalar::Number(n) if n.is_finite() => out.push_str(&format_number(*n)),
        Scalar::Number(n) => write_quoted(out, &format_number(*n)),
        Scalar::Text(text) => write_quoted(out, text),
        Scalar::Symbol(description) => write_quoted(out, &Scalar::symbol_text(description)),
        Scalar::BigInt(n) => write_quoted(out, &n.to_string()),
        Scalar::Callable(callable) => write_quoted(out, &callable.describe()),
    }
}

/// Text representation of a number.
///
/// Integral values print without a fraction, negative zero prints as `0`,
/// and non-finite values print as `Infinity`, `-Infinity` or `NaN`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        n.to_string()
    }
}

/// Quote and escape `text` as a JSON string literal.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len().saturating_add(2));
    write_quoted(&mut out, text);
    out
}

/// Append `text` to `out` as a quoted JSON string.
///
/// Backslash and double quote are escaped, and so is every control
/// character, so the literal is valid JSON whatever the input.
pub(crate) fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if u32::from(c) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            },
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Callable;

    #[test]
    fn test_absent_and_null() {
        assert_eq!(encode_json(&Scalar::Undefined), "null");
        assert_eq!(encode_json(&Scalar::Null), "null");
        assert_eq!(encode_text(&Scalar::Undefined), "null");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(encode_json(&Scalar::Number(1.0)), "1");
        assert_eq!(encode_json(&Scalar::Number(-2.5)), "-2.5");
        assert_eq!(encode_json(&Scalar::Number(-0.0)), "0");
        assert_eq!(encode_text(&Scalar::Number(42.0)), "42");
    }

    #[test]
    fn test_non_finite_numbers_are_quoted() {
        assert_eq!(encode_json(&Scalar::Number(f64::INFINITY)), "\"Infinity\"");
        assert_eq!(encode_json(&Scalar::Number(f64::NEG_INFINITY)), "\"-Infinity\"");
        assert_eq!(encode_json(&Scalar::Number(f64::NAN)), "\"NaN\"");
        assert_eq!(encode_text(&Scalar::Number(f64::INFINITY)), "\"Infinity\"");
    }

    #[test]
    fn test_text_modes() {
        let text = Scalar::Text("say \"hi\" \\ bye".to_owned());
        assert_eq!(encode_text(&text), "say \"hi\" \\ bye");
        assert_eq!(encode_json(&text), r#""say \"hi\" \\ bye""#);
    }

    #[test]
    fn test_control_characters_escaped() {
        let text = Scalar::Text("a\nb\tc\u{1}".to_owned());
        assert_eq!(encode_json(&text), r#""a\nb\tc\u0001""#);
    }

    #[test]
    fn test_symbol_and_bigint() {
        assert_eq!(encode_text(&Scalar::Symbol("id".to_owned())), "\"Symbol(id)\"");
        assert_eq!(encode_json(&Scalar::Symbol("id".to_owned())), "\"Symbol(id)\"");
        let big = Scalar::BigInt(12_345_678_901_234_567_890);
        assert_eq!(encode_text(&big), "\"12345678901234567890\"");
        assert_eq!(encode_json(&big), "\"12345678901234567890\"");
    }

    #[test]
    fn test_callables() {
        let f = Scalar::Callable(Callable::function("tick"));
        assert_eq!(encode_text(&f), "<Function tick>");
        assert_eq!(encode_json(&f), "\"<Function tick>\"");
        let c = Scalar::Callable(Callable::class("Queue"));
        assert_eq!(encode_json(&c), "\"<Class Queue>\"");
    }

    #[test]
    fn test_json_literals_parse_back() {
        let cases = [
            (Scalar::Number(3.25), serde_json::json!(3.25)),
            (Scalar::Bool(false), serde_json::json!(false)),
            (Scalar::Text("q\"\\\n".to_owned()), serde_json::json!("q\"\\\n")),
            (Scalar::Null, serde_json::Value::Null),
        ];
        for (scalar, expected) in cases {
            let parsed: serde_json::Value = serde_json::from_str(&encode_json(&scalar)).unwrap();
            assert_eq!(parsed, expected);
        }
    }
}
