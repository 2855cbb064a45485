//! Structural guards over open JSON.
//!
//! Each guard comes in two forms: `narrow_*` returns the typed record when
//! the shape checks out, and `is_*` is the boolean view of the same check.
//! Neither form ever errors; malformed input is simply `None`/`false`.
//! Callers that need the fields use `narrow_*`, which hands back a value
//! whose fields are already known to be present and well typed.

use chai_interchange::{
    parse_brew_order, parse_chai_order, parse_string_array, BrewOrder, ChaiOrder, OrderRequest,
};
use serde_json::Value;

/// Narrow to a [`ChaiOrder`]: an object with a text `type` and numeric `sugar`.
pub fn narrow_chai_order(value: &Value) -> Option<ChaiOrder> {
    match parse_chai_order(value) {
        Ok(order) => Some(order),
        Err(e) => {
            log::debug!("not a chai order: {}", e);
            None
        }
    }
}

pub fn is_chai_order(value: &Value) -> bool {
    narrow_chai_order(value).is_some()
}

/// Narrow to a list of strings. The empty array qualifies.
pub fn narrow_string_array(value: &Value) -> Option<Vec<String>> {
    parse_string_array(value).ok()
}

pub fn is_string_array(value: &Value) -> bool {
    narrow_string_array(value).is_some()
}

/// Narrow to the masala/ginger pair by field presence.
pub fn narrow_brew_order(value: &Value) -> Option<BrewOrder> {
    parse_brew_order(value).ok()
}

/// True for an object whose `spiceLevel` is present and numeric.
pub fn has_spice_level(value: &Value) -> bool {
    value
        .get("spiceLevel")
        .map(|level| level.is_number())
        .unwrap_or(false)
}

/// Serve a structured order or a custom text request.
pub fn serve_order(request: &OrderRequest) -> String {
    match request {
        OrderRequest::Order(order) => {
            format!("Serving {} Chai with {} Sugar", order.kind, order.sugar)
        }
        OrderRequest::Custom(text) => format!("Serving Custom Chai: {}", text),
    }
}
