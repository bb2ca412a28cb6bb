//! Promotions

use crate::{
    cart::Cart,
    items::Menu,
    pricing::{PricingError, PricingResult},
    promotions::{half_price::HalfPricePromotion, threshold_discount::ThresholdDiscountPromotion},
};

pub mod half_price;
pub mod threshold_discount;

/// Kind of rule behind a promotion
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PromotionKind {
    /// Listed items at half price
    HalfPriceOnItems,

    /// Fixed amount off once the order reaches a threshold
    DiscountOverThreshold,
}

/// Promotion enum
#[derive(Debug, Clone)]
pub enum Promotion<'a> {
    /// Half price on the listed items
    HalfPriceOnItems(HalfPricePromotion),

    /// Fixed discount over a spend threshold
    DiscountOverThreshold(ThresholdDiscountPromotion<'a>),
}

impl<'a> Promotion<'a> {
    /// Return the promotion kind.
    pub fn kind(&self) -> PromotionKind {
        match self {
            Promotion::HalfPriceOnItems(_) => PromotionKind::HalfPriceOnItems,
            Promotion::DiscountOverThreshold(_) => PromotionKind::DiscountOverThreshold,
        }
    }

    /// Return the label printed on the receipt.
    pub fn label(&self) -> String {
        match self {
            Promotion::HalfPriceOnItems(half_price) => half_price.label().to_string(),
            Promotion::DiscountOverThreshold(threshold) => threshold.label(),
        }
    }

    /// Price the whole cart under this promotion alone.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a cart entry is not on the menu or money arithmetic fails.
    pub fn apply(&self, cart: &Cart, menu: &Menu<'a>) -> Result<PricingResult<'a>, PricingError> {
        match self {
            Promotion::HalfPriceOnItems(half_price) => half_price.apply(cart, menu),
            Promotion::DiscountOverThreshold(threshold) => threshold.apply(cart, menu),
        }
    }
}
