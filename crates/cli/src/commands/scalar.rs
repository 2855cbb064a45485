use chai_classify::{
    classify_by_primitive, order_size, serve_chai, serve_vessel, CupSize, TextOrNumber, Vessel,
};
use serde_json::json;

use crate::{emit, fail, parse_arg_value, OutputFormat};

pub(crate) fn cmd_classify(raw: &str, output: OutputFormat, quiet: bool) {
    let value = match TextOrNumber::try_from(&parse_arg_value(raw)) {
        Ok(v) => v,
        Err(e) => fail(&format!("error: {}", e), output, quiet),
    };
    let message = classify_by_primitive(&value);
    let kind = match value {
        TextOrNumber::Text(_) => "text",
        TextOrNumber::Number(_) => "number",
    };
    emit(&message, json!({ "kind": kind, "message": message }), output);
}

pub(crate) fn cmd_size(raw: &str, output: OutputFormat, quiet: bool) {
    let size = match chai_interchange::parse_cup_size(&parse_arg_value(raw)) {
        Ok(s) => s,
        Err(e) => fail(&format!("error: {}", e), output, quiet),
    };
    let message = order_size(&size);
    let size_json = match size {
        CupSize::Small => json!("small"),
        CupSize::Medium => json!("medium"),
        CupSize::Large => json!("large"),
        CupSize::Cups(n) => json!(n),
    };
    emit(&message, json!({ "size": size_json, "message": message }), output);
}

pub(crate) fn cmd_serve(message: Option<&str>, default: &str, output: OutputFormat) {
    let served = serve_chai(message, default);
    emit(&served, json!({ "message": served }), output);
}

pub(crate) fn cmd_vessel(name: &str, output: OutputFormat, quiet: bool) {
    let vessel: Vessel = match name.parse() {
        Ok(v) => v,
        Err(e) => fail(&format!("error: {}", e), output, quiet),
    };
    let message = serve_vessel(vessel);
    emit(&message, json!({ "vessel": name, "message": message }), output);
}
