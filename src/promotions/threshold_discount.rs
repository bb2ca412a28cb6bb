//! Threshold Discount
//!
//! A fixed amount off the whole order once its undiscounted total reaches a threshold.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    cart::Cart,
    items::Menu,
    pricing::{AppliedPromotion, PricingError, PricingResult, major_units},
    promotions::PromotionKind,
};

/// `discount` off when the order total is at least `threshold`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThresholdDiscountPromotion<'a> {
    threshold: Money<'a, Currency>,
    discount: Money<'a, Currency>,
}

impl<'a> ThresholdDiscountPromotion<'a> {
    /// Create a new threshold discount promotion.
    pub fn new(threshold: Money<'a, Currency>, discount: Money<'a, Currency>) -> Self {
        Self {
            threshold,
            discount,
        }
    }

    /// Return the minimum order total
    pub fn threshold(&self) -> Money<'a, Currency> {
        self.threshold
    }

    /// Return the amount taken off
    pub fn discount(&self) -> Money<'a, Currency> {
        self.discount
    }

    /// Return the receipt label, e.g. `满30减6元`.
    pub fn label(&self) -> String {
        format!(
            "满{}减{}元",
            major_units(&self.threshold),
            major_units(&self.discount)
        )
    }

    /// Price the cart, taking the discount off if the subtotal reaches the threshold.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a cart entry is not on the menu or money arithmetic fails.
    pub fn apply(&self, cart: &Cart, menu: &Menu<'a>) -> Result<PricingResult<'a>, PricingError> {
        let mut result = PricingResult::undiscounted(cart, menu)?;

        if result.subtotal.gte(&self.threshold)? {
            result.total = result.subtotal.sub(self.discount)?;
            result.applied_promotion = Some(AppliedPromotion {
                kind: PromotionKind::DiscountOverThreshold,
                label: self.label(),
                discounted_item_names: SmallVec::new(),
                economization: self.discount,
            });
        }

        Ok(result)
    }
}
