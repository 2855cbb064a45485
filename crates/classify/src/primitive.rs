//! Classification by primitive kind and by literal value.

use std::fmt;
use std::str::FromStr;

use chai_interchange::CupSize;

use crate::{ClassifyError, TextOrNumber};

/// Text is an order name, a number is an order id.
///
/// Two variants, so one check decides: anything that is not text is a
/// number. Empty text is still text.
pub fn classify_by_primitive(value: &TextOrNumber) -> String {
    let message = match value {
        TextOrNumber::Text(kind) => format!("Making {} Chai...", kind),
        TextOrNumber::Number(id) => format!("Chai Order: {}", id),
    };
    log::trace!("classified {:?}", value);
    message
}

/// Serve with an optional message. Absent or empty text falls back to
/// `default`.
pub fn serve_chai(msg: Option<&str>, default: &str) -> String {
    match msg {
        Some(m) if !m.is_empty() => format!("Serving {}", m),
        _ => format!("Serving {}", default),
    }
}

/// Every size literal is checked by name; only the numeric arm remains.
pub fn order_size(size: &CupSize) -> String {
    match size {
        CupSize::Small => "Small Cutting Chai...".to_string(),
        CupSize::Medium | CupSize::Large => "Make Extra Chai".to_string(),
        CupSize::Cups(n) => format!("Chai Order {}", n),
    }
}

pub fn greet(name: impl fmt::Display) -> String {
    format!("Hello {}", name)
}

/// Serving vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vessel {
    Kulhad,
    Cutting,
}

impl Vessel {
    pub const LITERALS: &'static [&'static str] = &["kulhad", "cutting"];
}

impl FromStr for Vessel {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kulhad" => Ok(Vessel::Kulhad),
            "cutting" => Ok(Vessel::Cutting),
            _ => Err(ClassifyError::UnknownLiteral {
                literal: s.to_string(),
                expected: Vessel::LITERALS,
            }),
        }
    }
}

pub fn serve_vessel(vessel: Vessel) -> String {
    match vessel {
        Vessel::Kulhad => "Serving Kulhad Chai...".to_string(),
        Vessel::Cutting => "Serving Cutting Chai...".to_string(),
    }
}
