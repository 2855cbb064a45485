//! Exhaustive dispatch over the tagged [`Chai`] union.
//!
//! Dispatch sites match every variant by name with no wildcard arm. Leaving
//! a variant out does not compile:
//!
//! ```compile_fail
//! use chai_classify::Chai;
//!
//! fn label(chai: &Chai) -> &'static str {
//!     match chai {
//!         Chai::Masala(_) => "masala",
//!         Chai::Ginger(_) => "ginger",
//!     }
//! }
//! ```
//!
//! and neither does a tag outside the closed set:
//!
//! ```compile_fail
//! use chai_classify::Chai;
//!
//! let chai = Chai::Chamomile;
//! ```
//!
//! With every arm present, it does:
//!
//! ```
//! use chai_classify::{make_chai, Chai, ElaichiChai};
//!
//! let chai = Chai::Elaichi(ElaichiChai { aroma: 5.0 });
//! assert_eq!(make_chai(&chai), "Elaichi Chai");
//! ```

use chai_interchange::{BrewOrder, Chai};

/// One message per variant.
pub fn make_chai(order: &Chai) -> String {
    log::trace!("dispatching {} chai", order.tag());
    match order {
        Chai::Masala(_) => "Masala Chai".to_string(),
        Chai::Ginger(_) => "Ginger Chai".to_string(),
        Chai::Elaichi(_) => "Elaichi Chai".to_string(),
    }
}

/// The strength-like payload of each variant, for reporting.
pub fn intensity(order: &Chai) -> f64 {
    match order {
        Chai::Masala(m) => m.spice_level,
        Chai::Ginger(g) => g.amount,
        Chai::Elaichi(e) => e.aroma,
    }
}

/// The spice level, present only on the masala side of a brew order.
pub fn spice_level(order: &BrewOrder) -> Option<f64> {
    match order {
        BrewOrder::Masala(m) => Some(m.spice_level),
        BrewOrder::Ginger(_) => None,
    }
}
