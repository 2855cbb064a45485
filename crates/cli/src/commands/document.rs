use std::path::Path;

use chai_classify::{
    has_spice_level, intensity, is_chai_order, is_string_array, make_chai, narrow_brew_order,
    price_menu, serve_order, BrewOrder, Rate,
};
use chai_interchange::{from_document, parse_chai, parse_menu, parse_order_request, parse_placed_order};
use serde_json::json;

use crate::{emit, fail, read_document, OutputFormat};

pub(crate) fn cmd_make(file: &Path, output: OutputFormat, quiet: bool) {
    let doc = read_document(file, output, quiet);
    let orders = match from_document(&doc) {
        Ok(o) => o,
        Err(e) => fail(
            &format!("error: invalid chai document '{}': {}", file.display(), e),
            output,
            quiet,
        ),
    };

    let messages: Vec<String> = orders.iter().map(make_chai).collect();
    let results: Vec<serde_json::Value> = orders
        .iter()
        .zip(&messages)
        .map(|(order, message)| {
            json!({
                "type": order.tag(),
                "intensity": intensity(order),
                "message": message,
            })
        })
        .collect();
    emit(&messages.join("\n"), json!(results), output);
}

pub(crate) fn cmd_inspect(file: &Path, output: OutputFormat, quiet: bool) {
    let doc = read_document(file, output, quiet);

    let chai_order = is_chai_order(&doc);
    let string_array = is_string_array(&doc);
    let spice_level = has_spice_level(&doc);
    let tagged = parse_chai(&doc).ok().map(|c| c.tag());
    let brew = narrow_brew_order(&doc).map(|b| match b {
        BrewOrder::Masala(_) => "masala",
        BrewOrder::Ginger(_) => "ginger",
    });

    let text = format!(
        "chai order:   {}\nstring array: {}\nspice level:  {}\ntagged chai:  {}\nbrew order:   {}",
        chai_order,
        string_array,
        spice_level,
        tagged.unwrap_or("-"),
        brew.unwrap_or("-"),
    );
    emit(
        &text,
        json!({
            "chai_order": chai_order,
            "string_array": string_array,
            "spice_level": spice_level,
            "tagged": tagged,
            "brew": brew,
        }),
        output,
    );
}

pub(crate) fn cmd_order(file: &Path, output: OutputFormat, quiet: bool) {
    let doc = read_document(file, output, quiet);
    let request = match parse_order_request(&doc) {
        Ok(r) => r,
        Err(e) => fail(
            &format!("error: invalid order '{}': {}", file.display(), e),
            output,
            quiet,
        ),
    };
    let message = serve_order(&request);
    emit(&message, json!({ "order": request, "message": message }), output);
}

pub(crate) fn cmd_place(file: &Path, output: OutputFormat, quiet: bool) {
    let doc = read_document(file, output, quiet);
    let order = match parse_placed_order(&doc) {
        Ok(o) => o,
        Err(e) => fail(
            &format!("error: invalid order form '{}': {}", file.display(), e),
            output,
            quiet,
        ),
    };
    let summary = order.summary();
    emit(&summary, json!({ "order": order, "summary": summary }), output);
}

pub(crate) fn cmd_menu(file: &Path, discount: f64, output: OutputFormat, quiet: bool) {
    if !discount.is_finite() || discount < 0.0 {
        fail(
            &format!("error: discount must be a non-negative number, got {}", discount),
            output,
            quiet,
        );
    }
    let doc = read_document(file, output, quiet);
    let menu = match parse_menu(&doc) {
        Ok(m) => m,
        Err(e) => fail(
            &format!("error: invalid menu '{}': {}", file.display(), e),
            output,
            quiet,
        ),
    };

    let priced = match price_menu(&menu, &Rate(discount)) {
        Ok(p) => p,
        Err(e) => fail(&format!("error: {}", e), output, quiet),
    };
    let text = priced
        .iter()
        .map(|p| {
            format!(
                "{:>3}  {:<12} {:>8.2} -> {:.2}",
                p.item.id, p.item.name, p.item.price, p.discounted
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    emit(&text, json!({ "discount": discount, "items": priced }), output);
}
