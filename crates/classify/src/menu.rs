//! Menu pricing.

use chai_interchange::{ChaiRatings, Menu, MenuItem};
use serde::Serialize;

use crate::ClassifyError;

/// Maps a price to a discounted price.
///
/// Implemented for any `Fn(f64) -> f64`, so a closure works as a calculator.
pub trait DiscountCalculator {
    fn discount(&self, price: f64) -> f64;
}

impl<F> DiscountCalculator for F
where
    F: Fn(f64) -> f64,
{
    fn discount(&self, price: f64) -> f64 {
        self(price)
    }
}

/// Fixed-rate discount: the price is multiplied by `rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate(pub f64);

impl DiscountCalculator for Rate {
    fn discount(&self, price: f64) -> f64 {
        price * self.0
    }
}

/// Half price.
pub const HALF_OFF: Rate = Rate(0.5);

pub fn apply_discount(price: f64, calculator: &impl DiscountCalculator) -> f64 {
    calculator.discount(price)
}

/// A menu item alongside its discounted price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub discounted: f64,
}

/// Price every item. Fails on the first item whose discounted price is
/// infinite or NaN.
pub fn price_menu(
    menu: &Menu,
    calculator: &impl DiscountCalculator,
) -> Result<Vec<PricedItem>, ClassifyError> {
    menu.items
        .iter()
        .map(|item| {
            let discounted = apply_discount(item.price, calculator);
            if !discounted.is_finite() {
                return Err(ClassifyError::NonFinitePrice {
                    id: item.id,
                    name: item.name.clone(),
                    value: discounted,
                });
            }
            Ok(PricedItem {
                item: item.clone(),
                discounted,
            })
        })
        .collect()
}

/// Rating for a flavour, matched case-insensitively.
pub fn rating_for(ratings: &ChaiRatings, flavour: &str) -> Option<f64> {
    ratings
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(flavour))
        .map(|(_, rating)| *rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chai_interchange::parse_menu;
    use serde_json::json;

    fn menu() -> Menu {
        parse_menu(&json!([
            {"id": 1, "name": "Masala", "price": 25},
            {"id": 2, "name": "Ginger", "price": 50},
            {"id": 3, "name": "Lemon", "price": 60}
        ]))
        .unwrap()
    }

    #[test]
    fn test_half_off() {
        assert_eq!(apply_discount(30.0, &HALF_OFF), 15.0);
    }

    #[test]
    fn test_closure_calculator() {
        let minus_five = |p: f64| p - 5.0;
        assert_eq!(apply_discount(30.0, &minus_five), 25.0);
    }

    #[test]
    fn test_prices_whole_menu_in_order() {
        let priced = price_menu(&menu(), &Rate(0.25)).unwrap();
        assert_eq!(priced.len(), 3);
        assert_eq!(priced[0].item.name, "Masala");
        assert_eq!(priced[0].discounted, 6.25);
        assert_eq!(priced[2].discounted, 15.0);
    }

    #[test]
    fn test_priced_item_serializes_flat() {
        let priced = price_menu(&menu(), &HALF_OFF).unwrap();
        let v = serde_json::to_value(&priced[1]).unwrap();
        assert_eq!(v, json!({"id": 2, "name": "Ginger", "price": 50.0, "discounted": 25.0}));
    }

    #[test]
    fn test_overflowing_discount_rejected() {
        let menu = parse_menu(&json!([
            {"id": 1, "name": "Masala", "price": 25},
            {"id": 7, "name": "Gold", "price": 1e308}
        ]))
        .unwrap();
        let err = price_menu(&menu, &Rate(10.0)).unwrap_err();
        match err {
            ClassifyError::NonFinitePrice { id, ref name, value } => {
                assert_eq!(id, 7);
                assert_eq!(name, "Gold");
                assert!(value.is_infinite());
            }
            ref other => panic!("expected NonFinitePrice, got {:?}", other),
        }
        assert!(err.to_string().contains("item 7 ('Gold') is not finite"));
    }

    #[test]
    fn test_ratings_lookup() {
        let mut ratings = ChaiRatings::new();
        ratings.insert("masala".to_string(), 4.5);
        assert_eq!(rating_for(&ratings, "Masala"), Some(4.5));
        assert_eq!(rating_for(&ratings, "ginger"), None);
    }
}
