use chai_classify::{find_current_order, AirlineSeat, RequestStatus};
use serde_json::json;

use crate::{emit, fail, OutputFormat};

pub(crate) fn cmd_status(literal: &str, output: OutputFormat, quiet: bool) {
    let status: RequestStatus = match literal.parse() {
        Ok(s) => s,
        Err(e) => fail(&format!("error: {}", e), output, quiet),
    };
    let text = if status.is_settled() {
        format!("{} (settled)", status)
    } else {
        format!("{} (in flight)", status)
    };
    emit(
        &text,
        json!({ "status": status, "settled": status.is_settled() }),
        output,
    );
}

pub(crate) fn cmd_seat(literal: &str, output: OutputFormat, quiet: bool) {
    let seat: AirlineSeat = match literal.parse() {
        Ok(s) => s,
        Err(e) => fail(&format!("error: {}", e), output, quiet),
    };
    emit(seat.as_str(), json!({ "seat": seat }), output);
}

pub(crate) fn cmd_current(orders: &[String], wanted: &str, fallback: &str, output: OutputFormat) {
    let current = find_current_order(orders, wanted, fallback);
    let text = current.clone().unwrap_or_else(|| "none".to_string());
    emit(&text, json!({ "current": current }), output);
}
