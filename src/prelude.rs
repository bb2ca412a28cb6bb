//! Best charge prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    BestChargeError, best_charge,
    cart::{Cart, CartEntry, CartError, parse_cart, parse_line},
    fixtures::{Fixture, FixtureError},
    items::{Menu, MenuError, MenuItem},
    pricing::{AppliedPromotion, LineItem, PricingError, PricingResult, evaluate},
    promotions::{
        Promotion, PromotionKind, half_price::HalfPricePromotion,
        threshold_discount::ThresholdDiscountPromotion,
    },
    receipt::{Receipt, ReceiptError, render},
};
