//! Typed records for every shape the classifier accepts.
//!
//! JSON field names follow the wire format (`type`, `spiceLevel`, ...); the
//! Rust field names are snake_case. Every record here is only ever built
//! through [`crate::deserialize`] or directly in code, so a value of one of
//! these types has already been validated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Tagged chai ─────────────────────────────────────────────────────

/// Payload of the `masala` variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasalaChai {
    pub spice_level: f64,
}

/// Payload of the `ginger` variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GingerChai {
    pub amount: f64,
}

/// Payload of the `elaichi` variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElaichiChai {
    pub aroma: f64,
}

/// A chai order discriminated by its literal `type` tag.
///
/// The set of variants is closed. Consumers match on it without a wildcard
/// arm, so a new variant fails to compile at every dispatch site until it is
/// handled there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Chai {
    Masala(MasalaChai),
    Ginger(GingerChai),
    Elaichi(ElaichiChai),
}

impl Chai {
    /// Every tag literal, in declaration order.
    pub const TAGS: [&'static str; 3] = ["masala", "ginger", "elaichi"];

    /// The literal tag carried on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            Chai::Masala(_) => "masala",
            Chai::Ginger(_) => "ginger",
            Chai::Elaichi(_) => "elaichi",
        }
    }
}

/// The two-variant subset narrowed by field presence rather than by tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BrewOrder {
    Masala(MasalaChai),
    Ginger(GingerChai),
}

// ── Structural orders ───────────────────────────────────────────────

/// A free-form order validated by shape: a text `type` and a numeric `sugar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaiOrder {
    #[serde(rename = "type")]
    pub kind: String,
    pub sugar: f64,
}

/// Either a structured [`ChaiOrder`] or a custom text request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrderRequest {
    Order(ChaiOrder),
    Custom(String),
}

/// Cup size: three literals or a plain number of cups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CupSize {
    Small,
    Medium,
    Large,
    Cups(f64),
}

impl CupSize {
    pub const LITERALS: [&'static str; 3] = ["small", "medium", "large"];
}

// ── Menu ────────────────────────────────────────────────────────────

/// One entry on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

/// Menu items in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn find(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }
}

/// A submitted order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub name: String,
    pub cups: u32,
}

impl PlacedOrder {
    pub fn summary(&self) -> String {
        format!("Placed {} {}", self.name, self.cups)
    }
}

/// Flavour name to rating.
pub type ChaiRatings = BTreeMap<String, f64>;
