//! Closed literal unions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ClassifyError;

/// Request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Success,
    Error,
}

impl RequestStatus {
    pub const LITERALS: &'static [&'static str] = &["pending", "success", "error"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Success => "success",
            RequestStatus::Error => "error",
        }
    }

    /// Pending is the only non-final status.
    pub fn is_settled(&self) -> bool {
        match self {
            RequestStatus::Pending => false,
            RequestStatus::Success | RequestStatus::Error => true,
        }
    }
}

impl FromStr for RequestStatus {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "success" => Ok(RequestStatus::Success),
            "error" => Ok(RequestStatus::Error),
            _ => Err(ClassifyError::UnknownLiteral {
                literal: s.to_string(),
                expected: RequestStatus::LITERALS,
            }),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seat position in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirlineSeat {
    Aisle,
    Window,
    Middle,
}

impl AirlineSeat {
    pub const LITERALS: &'static [&'static str] = &["aisle", "window", "middle"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AirlineSeat::Aisle => "aisle",
            AirlineSeat::Window => "window",
            AirlineSeat::Middle => "middle",
        }
    }
}

impl FromStr for AirlineSeat {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aisle" => Ok(AirlineSeat::Aisle),
            "window" => Ok(AirlineSeat::Window),
            "middle" => Ok(AirlineSeat::Middle),
            _ => Err(ClassifyError::UnknownLiteral {
                literal: s.to_string(),
                expected: AirlineSeat::LITERALS,
            }),
        }
    }
}

impl fmt::Display for AirlineSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find `wanted` among `orders`.
///
/// Returns `wanted` if present, `fallback` if the list was non-empty but
/// `wanted` never appeared, and `None` for an empty list.
pub fn find_current_order<S: AsRef<str>>(
    orders: &[S],
    wanted: &str,
    fallback: &str,
) -> Option<String> {
    if orders.is_empty() {
        return None;
    }
    let found = orders.iter().any(|order| order.as_ref() == wanted);
    Some(if found { wanted } else { fallback }.to_string())
}
