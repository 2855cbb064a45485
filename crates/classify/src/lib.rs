//! chai-classify: the chai value classifier.
//!
//! Three ways of deciding which variant a value is, each producing a
//! variant-specific message:
//!
//! - by primitive kind ([`classify_by_primitive`], [`order_size`]),
//! - by structural predicate over open JSON ([`is_chai_order`],
//!   [`narrow_chai_order`] and the other guards),
//! - by literal tag over the closed [`Chai`] union ([`make_chai`]).
//!
//! All classification functions are pure. Building their typed input from
//! raw JSON is the only fallible step: scalars through
//! [`TextOrNumber::try_from`], records through `chai-interchange`.

pub mod dispatch;
pub mod error;
pub mod guard;
pub mod literal;
pub mod menu;
pub mod primitive;
pub mod value;

pub use chai_interchange::{
    BrewOrder, Chai, ChaiOrder, ChaiRatings, CupSize, ElaichiChai, GingerChai, MasalaChai, Menu,
    MenuItem, OrderRequest, PlacedOrder,
};
pub use dispatch::{intensity, make_chai, spice_level};
pub use error::ClassifyError;
pub use guard::{
    has_spice_level, is_chai_order, is_string_array, narrow_brew_order, narrow_chai_order,
    narrow_string_array, serve_order,
};
pub use literal::{find_current_order, AirlineSeat, RequestStatus};
pub use menu::{apply_discount, price_menu, rating_for, DiscountCalculator, PricedItem, Rate, HALF_OFF};
pub use primitive::{classify_by_primitive, greet, order_size, serve_chai, serve_vessel, Vessel};
pub use value::{Primitive, TextOrNumber};
