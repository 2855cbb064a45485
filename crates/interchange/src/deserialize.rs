//! Validated ingestion from open JSON into typed records.
//!
//! Every entry point takes a `&serde_json::Value` of unknown shape and
//! either returns the typed record or an [`InterchangeError`] naming the
//! first field that did not check out. Nothing downstream re-validates.

use serde_json::Value;

use crate::types::*;

/// Errors during ingestion of a JSON document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterchangeError {
    /// The document (or element) is the wrong JSON kind altogether.
    #[error("expected {expected}, got {got}")]
    UnexpectedKind {
        expected: &'static str,
        got: &'static str,
    },

    /// A required field is absent.
    #[error("missing required field: '{field}'")]
    MissingField { field: String },

    /// None of the fields that select a variant is present.
    #[error("no variant field present, expected one of: {}", expected.join(", "))]
    NoVariantField { expected: &'static [&'static str] },

    /// A field is present but holds the wrong primitive type.
    #[error("field '{field}': expected {expected}, got {got}")]
    WrongType {
        field: String,
        expected: &'static str,
        got: &'static str,
    },

    /// A literal tag outside the closed set.
    #[error("unknown literal '{tag}', expected one of: {}", expected.join(", "))]
    UnknownTag {
        tag: String,
        expected: Vec<&'static str>,
    },

    /// An array element failed validation.
    #[error("element {index}: {source}")]
    InvalidElement {
        index: usize,
        source: Box<InterchangeError>,
    },
}

/// Human-readable JSON kind, used in error messages.
pub fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Field helpers ───────────────────────────────────────────────────

fn expect_object(v: &Value) -> Result<&serde_json::Map<String, Value>, InterchangeError> {
    v.as_object().ok_or(InterchangeError::UnexpectedKind {
        expected: "object",
        got: json_kind(v),
    })
}

fn field<'a>(obj: &'a serde_json::Map<String, Value>, name: &str) -> Result<&'a Value, InterchangeError> {
    obj.get(name).ok_or_else(|| InterchangeError::MissingField {
        field: name.to_string(),
    })
}

fn required_str(obj: &serde_json::Map<String, Value>, name: &str) -> Result<String, InterchangeError> {
    let v = field(obj, name)?;
    v.as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| InterchangeError::WrongType {
            field: name.to_string(),
            expected: "string",
            got: json_kind(v),
        })
}

fn required_f64(obj: &serde_json::Map<String, Value>, name: &str) -> Result<f64, InterchangeError> {
    let v = field(obj, name)?;
    v.as_f64().ok_or_else(|| InterchangeError::WrongType {
        field: name.to_string(),
        expected: "number",
        got: json_kind(v),
    })
}

fn required_u32(obj: &serde_json::Map<String, Value>, name: &str) -> Result<u32, InterchangeError> {
    let v = field(obj, name)?;
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| InterchangeError::WrongType {
            field: name.to_string(),
            expected: "unsigned integer",
            got: json_kind(v),
        })
}

fn each_element<T>(
    v: &Value,
    parse: impl Fn(&Value) -> Result<T, InterchangeError>,
) -> Result<Vec<T>, InterchangeError> {
    let arr = v.as_array().ok_or(InterchangeError::UnexpectedKind {
        expected: "array",
        got: json_kind(v),
    })?;
    arr.iter()
        .enumerate()
        .map(|(index, item)| {
            parse(item).map_err(|e| InterchangeError::InvalidElement {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

// ── Tagged chai ─────────────────────────────────────────────────────

/// Parse a tag-discriminated chai. The tag is checked before any payload
/// field, and only the payload field of the selected variant is read.
pub fn parse_chai(v: &Value) -> Result<Chai, InterchangeError> {
    let obj = expect_object(v)?;
    let tag = required_str(obj, "type")?;

    let chai = match tag.as_str() {
        "masala" => Chai::Masala(MasalaChai {
            spice_level: required_f64(obj, "spiceLevel")?,
        }),
        "ginger" => Chai::Ginger(GingerChai {
            amount: required_f64(obj, "amount")?,
        }),
        "elaichi" => Chai::Elaichi(ElaichiChai {
            aroma: required_f64(obj, "aroma")?,
        }),
        _ => {
            return Err(InterchangeError::UnknownTag {
                tag,
                expected: Chai::TAGS.to_vec(),
            })
        }
    };
    log::debug!("ingested {} chai", chai.tag());
    Ok(chai)
}

/// Parse a document holding either one tagged chai or an array of them.
///
/// The first invalid element aborts the whole document.
pub fn from_document(doc: &Value) -> Result<Vec<Chai>, InterchangeError> {
    match doc {
        Value::Array(_) => each_element(doc, parse_chai),
        _ => parse_chai(doc).map(|c| vec![c]),
    }
}

/// Fields whose presence selects a [`BrewOrder`] variant, in check order.
pub const BREW_VARIANT_FIELDS: &[&str] = &["spiceLevel", "amount"];

/// Narrow the masala/ginger pair by field presence.
///
/// `spiceLevel` selects masala, otherwise `amount` selects ginger. A present
/// field of the wrong type is an error rather than a fall-through.
pub fn parse_brew_order(v: &Value) -> Result<BrewOrder, InterchangeError> {
    let obj = expect_object(v)?;
    if obj.contains_key("spiceLevel") {
        return Ok(BrewOrder::Masala(MasalaChai {
            spice_level: required_f64(obj, "spiceLevel")?,
        }));
    }
    if obj.contains_key("amount") {
        return Ok(BrewOrder::Ginger(GingerChai {
            amount: required_f64(obj, "amount")?,
        }));
    }
    Err(InterchangeError::NoVariantField {
        expected: BREW_VARIANT_FIELDS,
    })
}

// ── Structural orders ───────────────────────────────────────────────

/// Parse a [`ChaiOrder`]: an object with a text `type` and numeric `sugar`.
/// Extra fields are ignored.
pub fn parse_chai_order(v: &Value) -> Result<ChaiOrder, InterchangeError> {
    let obj = expect_object(v)?;
    Ok(ChaiOrder {
        kind: required_str(obj, "type")?,
        sugar: required_f64(obj, "sugar")?,
    })
}

/// Parse an order request: a [`ChaiOrder`]-shaped object or plain text.
///
/// Objects must satisfy the full structural check; a partially matching
/// object is an error, not a custom request.
pub fn parse_order_request(v: &Value) -> Result<OrderRequest, InterchangeError> {
    match v {
        Value::String(s) => Ok(OrderRequest::Custom(s.clone())),
        Value::Object(_) => parse_chai_order(v).map(OrderRequest::Order),
        other => Err(InterchangeError::UnexpectedKind {
            expected: "object or string",
            got: json_kind(other),
        }),
    }
}

/// Parse a cup size: one of the three literals, or a number of cups.
pub fn parse_cup_size(v: &Value) -> Result<CupSize, InterchangeError> {
    match v {
        Value::String(s) => match s.as_str() {
            "small" => Ok(CupSize::Small),
            "medium" => Ok(CupSize::Medium),
            "large" => Ok(CupSize::Large),
            _ => Err(InterchangeError::UnknownTag {
                tag: s.clone(),
                expected: CupSize::LITERALS.to_vec(),
            }),
        },
        Value::Number(n) => n.as_f64().map(CupSize::Cups).ok_or(InterchangeError::UnexpectedKind {
            expected: "finite number",
            got: "number",
        }),
        other => Err(InterchangeError::UnexpectedKind {
            expected: "size literal or number",
            got: json_kind(other),
        }),
    }
}

/// Parse an array whose every element is a string.
pub fn parse_string_array(v: &Value) -> Result<Vec<String>, InterchangeError> {
    each_element(v, |item| {
        item.as_str()
            .map(|s| s.to_string())
            .ok_or(InterchangeError::UnexpectedKind {
                expected: "string",
                got: json_kind(item),
            })
    })
}

// ── Menu ────────────────────────────────────────────────────────────

fn parse_menu_item(v: &Value) -> Result<MenuItem, InterchangeError> {
    let obj = expect_object(v)?;
    Ok(MenuItem {
        id: required_u32(obj, "id")?,
        name: required_str(obj, "name")?,
        price: required_f64(obj, "price")?,
    })
}

/// Parse a menu: either a bare array of items or `{"items": [...]}`.
pub fn parse_menu(v: &Value) -> Result<Menu, InterchangeError> {
    let items_value = match v {
        Value::Object(obj) => field(obj, "items")?,
        other => other,
    };
    let items = each_element(items_value, parse_menu_item)?;
    log::debug!("ingested menu with {} items", items.len());
    Ok(Menu { items })
}

/// Parse a submitted order form (`name` text, `cups` non-negative integer).
pub fn parse_placed_order(v: &Value) -> Result<PlacedOrder, InterchangeError> {
    let obj = expect_object(v)?;
    Ok(PlacedOrder {
        name: required_str(obj, "name")?,
        cups: required_u32(obj, "cups")?,
    })
}

/// Parse a flavour-to-rating map. Every value must be numeric.
pub fn parse_ratings(v: &Value) -> Result<ChaiRatings, InterchangeError> {
    let obj = expect_object(v)?;
    obj.keys()
        .map(|flavour| Ok((flavour.clone(), required_f64(obj, flavour)?)))
        .collect()
}
