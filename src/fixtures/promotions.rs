//! Promotion Fixtures

use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, items::parse_price},
    promotions::{
        Promotion, half_price::HalfPricePromotion, threshold_discount::ThresholdDiscountPromotion,
    },
};

/// Wrapper for promotions in YAML. Order is significant: earlier promotions win ties.
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Promotion records in catalog order
    pub promotions: Vec<PromotionFixture>,
}

/// Promotion fixture from YAML
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionFixture {
    /// Half price on the listed items
    HalfPriceOnItems {
        /// Eligible item ids
        items: Vec<String>,
    },

    /// Fixed discount over a threshold
    DiscountOverThreshold {
        /// Minimum order total (e.g., "30.00 CNY")
        threshold: String,

        /// Amount taken off (e.g., "6.00 CNY")
        discount: String,
    },

    /// Any other `type`; skipped when loading
    #[serde(other)]
    Unsupported,
}

impl PromotionFixture {
    /// Convert to a `Promotion`, or `None` for unsupported promotion types.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is invalid, or the discount is zero or exceeds the threshold.
    pub fn try_into_promotion(self) -> Result<Option<Promotion<'static>>, FixtureError> {
        match self {
            PromotionFixture::HalfPriceOnItems { items } => Ok(Some(Promotion::HalfPriceOnItems(
                HalfPricePromotion::new(items),
            ))),
            PromotionFixture::DiscountOverThreshold {
                threshold,
                discount,
            } => {
                let threshold = parse_price(&threshold)?;
                let discount = parse_price(&discount)?;

                if threshold.currency() != discount.currency() {
                    return Err(FixtureError::CurrencyMismatch(
                        threshold.currency().iso_alpha_code.to_string(),
                        discount.currency().iso_alpha_code.to_string(),
                    ));
                }

                if discount.is_zero() {
                    return Err(FixtureError::InvalidPromotionData(format!(
                        "discount over {threshold} is zero"
                    )));
                }

                if discount.amount() > threshold.amount() {
                    return Err(FixtureError::InvalidPromotionData(format!(
                        "discount {discount} exceeds threshold {threshold}"
                    )));
                }

                Ok(Some(Promotion::DiscountOverThreshold(
                    ThresholdDiscountPromotion::new(threshold, discount),
                )))
            }
            PromotionFixture::Unsupported => Ok(None),
        }
    }
}
