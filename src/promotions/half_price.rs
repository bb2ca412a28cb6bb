//! Half Price
//!
//! Every listed item is sold at half its line total.

use rustc_hash::FxHashSet;
use rusty_money::Money;
use smallvec::SmallVec;

use crate::{
    cart::Cart,
    items::Menu,
    pricing::{
        AppliedPromotion, LineItem, PricingError, PricingResult, price_entry, sum_line_totals,
    },
    promotions::PromotionKind,
};

/// Receipt label for half price promotions.
pub const HALF_PRICE_LABEL: &str = "指定菜品半价";

/// Half price on a set of menu items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfPricePromotion {
    items: FxHashSet<String>,
}

impl HalfPricePromotion {
    /// Create a new half price promotion on the given item ids.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Return whether the item id is discounted by this promotion.
    pub fn is_eligible(&self, item_id: &str) -> bool {
        self.items.contains(item_id)
    }

    /// Return the eligible item ids
    pub fn items(&self) -> &FxHashSet<String> {
        &self.items
    }

    /// Return the receipt label
    pub fn label(&self) -> &'static str {
        HALF_PRICE_LABEL
    }

    /// Price the cart with every eligible line halved.
    ///
    /// Halves are exact, so an odd minor-unit line total leaves a fraction of a
    /// minor unit. The promotion counts as applied only when at least one line was eligible.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a cart entry is not on the menu or money arithmetic fails.
    pub fn apply<'a>(
        &self,
        cart: &Cart,
        menu: &Menu<'a>,
    ) -> Result<PricingResult<'a>, PricingError> {
        let mut line_items: SmallVec<[LineItem<'a>; 10]> = SmallVec::new();
        let mut discounted_item_names: SmallVec<[String; 4]> = SmallVec::new();
        let mut total = Money::from_minor(0, menu.currency());
        let mut economization = Money::from_minor(0, menu.currency());

        for entry in cart {
            let (item, line) = price_entry(entry, menu)?;

            if self.is_eligible(item.id()) {
                let half = line.line_total.div(2)?;

                total = total.add(half)?;
                economization = economization.add(half)?;
                discounted_item_names.push(item.name().to_string());
            } else {
                total = total.add(line.line_total)?;
            }

            line_items.push(line);
        }

        let applied_promotion = (!discounted_item_names.is_empty()).then(|| AppliedPromotion {
            kind: PromotionKind::HalfPriceOnItems,
            label: HALF_PRICE_LABEL.to_string(),
            discounted_item_names,
            economization,
        });

        let subtotal = sum_line_totals(&line_items, menu.currency())?;

        Ok(PricingResult {
            line_items,
            applied_promotion,
            subtotal,
            total,
        })
    }
}
