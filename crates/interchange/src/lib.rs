//! chai-interchange: typed chai records and validated JSON ingestion.
//!
//! Provides the typed shapes the classifier works on (tagged [`Chai`],
//! structural [`ChaiOrder`], [`CupSize`], menu records) and one parse
//! function per shape that turns an open `serde_json::Value` into the typed
//! record or an [`InterchangeError`].
//!
//! Validation happens once, here. Consumers receive typed values and never
//! inspect raw JSON fields again.

pub mod deserialize;
pub mod types;

pub use deserialize::{
    from_document, json_kind, parse_brew_order, parse_chai, parse_chai_order, parse_cup_size,
    parse_menu, parse_order_request, parse_placed_order, parse_ratings, parse_string_array,
    InterchangeError,
};
pub use types::*;
