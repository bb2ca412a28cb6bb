//! Pricing
//!
//! Evaluates every promotion against the whole cart and keeps the cheapest candidate.

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    cart::{Cart, CartEntry},
    items::{Menu, MenuItem},
    promotions::{Promotion, PromotionKind},
};

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A cart entry references an id that is not on the menu.
    #[error("unknown item id: {0}")]
    UnknownItem(String),

    /// Price times quantity does not fit in a decimal amount.
    #[error("line total for item {0} overflowed")]
    Overflow(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// One priced line of the order
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    /// Display name of the menu item
    pub name: String,

    /// Ordered quantity
    pub quantity: u32,

    /// Unit price times quantity, before any promotion
    pub line_total: Money<'a, Currency>,
}

/// The promotion a candidate used, and what it saved.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPromotion<'a> {
    /// Which rule produced the discount
    pub kind: PromotionKind,

    /// Display label (e.g. `满30减6元`)
    pub label: String,

    /// Names of the discounted items, for item based promotions
    pub discounted_item_names: SmallVec<[String; 4]>,

    /// Amount saved against the undiscounted total
    pub economization: Money<'a, Currency>,
}

/// Pricing of the whole order under a single promotion (or none).
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult<'a> {
    /// Line items in cart order
    pub line_items: SmallVec<[LineItem<'a>; 10]>,

    /// Promotion used, if it actually discounted anything
    pub applied_promotion: Option<AppliedPromotion<'a>>,

    /// Sum of the line totals
    pub subtotal: Money<'a, Currency>,

    /// Amount to pay
    pub total: Money<'a, Currency>,
}

impl<'a> PricingResult<'a> {
    /// Price the cart without any promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if an item is missing from the menu or arithmetic fails.
    pub fn undiscounted(cart: &Cart, menu: &Menu<'a>) -> Result<Self, PricingError> {
        let line_items: SmallVec<[LineItem<'a>; 10]> = cart
            .iter()
            .map(|entry| price_entry(entry, menu).map(|(_, line)| line))
            .collect::<Result<_, _>>()?;

        let subtotal = sum_line_totals(&line_items, menu.currency())?;

        Ok(PricingResult {
            line_items,
            applied_promotion: None,
            subtotal,
            total: subtotal,
        })
    }

    /// Calculate the savings against the undiscounted subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }
}

/// Evaluate each promotion against the full cart and return the cheapest result.
///
/// The undiscounted baseline is always the first candidate, so an empty promotion list
/// prices the order at full price. A later candidate only wins with a strictly lower total.
/// Totals are compared as exact decimal amounts.
///
/// # Errors
///
/// Returns a [`PricingError`] if a cart entry is not on the menu or money arithmetic fails.
#[instrument(
    level = "debug",
    skip_all,
    fields(entries = cart.len(), promotions = promotions.len())
)]
pub fn evaluate<'a>(
    cart: &Cart,
    menu: &Menu<'a>,
    promotions: &[Promotion<'a>],
) -> Result<PricingResult<'a>, PricingError> {
    let mut best = PricingResult::undiscounted(cart, menu)?;

    debug!(total = %major_units(&best.total), "baseline candidate");

    for (idx, promotion) in promotions.iter().enumerate() {
        let candidate = promotion.apply(cart, menu)?;

        debug!(
            idx,
            promotion = %promotion.label(),
            applied = candidate.applied_promotion.is_some(),
            total = %major_units(&candidate.total),
            "promotion candidate"
        );

        if candidate.total.lt(&best.total)? {
            best = candidate;
        }
    }

    Ok(best)
}

/// Look up a cart entry and compute its undiscounted line.
///
/// # Errors
///
/// Returns [`PricingError::UnknownItem`] for ids missing from the menu and
/// [`PricingError::Overflow`] if the line total does not fit.
pub(crate) fn price_entry<'m, 'a>(
    entry: &CartEntry,
    menu: &'m Menu<'a>,
) -> Result<(&'m MenuItem<'a>, LineItem<'a>), PricingError> {
    let item = menu
        .get(entry.item_id())
        .ok_or_else(|| PricingError::UnknownItem(entry.item_id().to_string()))?;

    let line_total = item
        .price()
        .mul(entry.quantity())
        .map_err(|_err| PricingError::Overflow(entry.item_id().to_string()))?;

    let line = LineItem {
        name: item.name().to_string(),
        quantity: entry.quantity(),
        line_total,
    };

    Ok((item, line))
}

/// Sum the line totals, starting from zero in the given currency.
pub(crate) fn sum_line_totals<'a>(
    lines: &[LineItem<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, MoneyError> {
    lines
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, line| {
            acc.add(line.line_total)
        })
}

/// Exact amount in major units with trailing zeros removed (`20`, `4.5`, `0.025`).
pub fn major_units(money: &Money<'_, Currency>) -> Decimal {
    money.amount().normalize()
}
