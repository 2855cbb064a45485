//! Primitive-discriminated values.

use std::fmt;

use chai_interchange::json_kind;
use serde_json::Value;

use crate::ClassifyError;

/// A JSON scalar classified by its primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Primitive {
    /// Returns a human-readable kind name for messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Text(_) => "text",
            Primitive::Number(_) => "number",
            Primitive::Bool(_) => "boolean",
        }
    }

    /// Classify a JSON scalar. Arrays, objects and null are not primitives.
    pub fn from_json(v: &Value) -> Result<Primitive, ClassifyError> {
        match v {
            Value::String(s) => Ok(Primitive::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(Primitive::Number).ok_or(
                ClassifyError::UnexpectedKind {
                    expected: "finite number",
                    got: "number",
                },
            ),
            Value::Bool(b) => Ok(Primitive::Bool(*b)),
            other => Err(ClassifyError::UnexpectedKind {
                expected: "text, number or boolean",
                got: json_kind(other),
            }),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Text(s) => f.write_str(s),
            Primitive::Number(n) => write!(f, "{}", n),
            Primitive::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// The two-variant text-or-number union.
#[derive(Debug, Clone, PartialEq)]
pub enum TextOrNumber {
    Text(String),
    Number(f64),
}

impl TryFrom<&Value> for TextOrNumber {
    type Error = ClassifyError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::String(s) => Ok(TextOrNumber::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(TextOrNumber::Number).ok_or(
                ClassifyError::UnexpectedKind {
                    expected: "finite number",
                    got: "number",
                },
            ),
            other => Err(ClassifyError::UnexpectedKind {
                expected: "text or number",
                got: json_kind(other),
            }),
        }
    }
}

impl From<&str> for TextOrNumber {
    fn from(s: &str) -> Self {
        TextOrNumber::Text(s.to_string())
    }
}

impl From<f64> for TextOrNumber {
    fn from(n: f64) -> Self {
        TextOrNumber::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_kinds() {
        assert_eq!(
            Primitive::from_json(&json!("")).unwrap(),
            Primitive::Text(String::new())
        );
        assert_eq!(
            Primitive::from_json(&json!(2.5)).unwrap(),
            Primitive::Number(2.5)
        );
        assert_eq!(
            Primitive::from_json(&json!(false)).unwrap().kind_name(),
            "boolean"
        );
    }

    #[test]
    fn test_non_scalars_rejected() {
        for v in [json!(null), json!([1]), json!({"a": 1})] {
            assert!(matches!(
                Primitive::from_json(&v),
                Err(ClassifyError::UnexpectedKind { .. })
            ));
        }
    }

    #[test]
    fn test_text_or_number_rejects_bool() {
        let err = TextOrNumber::try_from(&json!(true)).unwrap_err();
        assert_eq!(err.to_string(), "expected text or number, got boolean");
    }

    #[test]
    fn test_text_or_number_names_its_own_union() {
        for (v, got) in [(json!(null), "null"), (json!([1]), "array"), (json!({}), "object")] {
            let err = TextOrNumber::try_from(&v).unwrap_err();
            assert_eq!(err.to_string(), format!("expected text or number, got {}", got));
        }
        assert_eq!(
            TextOrNumber::try_from(&json!("")).unwrap(),
            TextOrNumber::Text(String::new())
        );
        assert_eq!(
            TextOrNumber::try_from(&json!(7)).unwrap(),
            TextOrNumber::Number(7.0)
        );
    }

    #[test]
    fn test_display_uses_decimal_repr() {
        assert_eq!(Primitive::Number(42.0).to_string(), "42");
        assert_eq!(Primitive::Number(0.25).to_string(), "0.25");
        assert_eq!(Primitive::Text("chai".into()).to_string(), "chai");
    }
}
