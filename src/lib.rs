//! Best Charge
//!
//! Prices a restaurant order under each available promotion, keeps the cheapest one and
//! renders the order details receipt.
//!
//! ```
//! use best_charge::{best_charge, fixtures::Fixture};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fixture = Fixture::builtin()?;
//! let receipt = best_charge(["ITEM0013 x 4"], fixture.menu()?, fixture.promotions())?;
//!
//! assert!(receipt.ends_with("总计：24元\n==================================="));
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

use crate::{
    cart::{CartError, parse_cart},
    items::Menu,
    pricing::{PricingError, evaluate},
    promotions::Promotion,
    receipt::render,
};

pub mod cart;
pub mod config;
pub mod fixtures;
pub mod items;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod receipt;

/// Errors raised while pricing an order end to end.
#[derive(Debug, Error, PartialEq)]
pub enum BestChargeError {
    /// A cart line could not be parsed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The cart could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Parse the cart lines, pick the cheapest promotion and render the receipt.
///
/// # Errors
///
/// Returns a [`BestChargeError`] if a line is malformed or references an unknown item.
pub fn best_charge<'a, I, S>(
    lines: I,
    menu: &Menu<'a>,
    promotions: &[Promotion<'a>],
) -> Result<String, BestChargeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cart = parse_cart(lines)?;
    let result = evaluate(&cart, menu, promotions)?;

    Ok(render(&result))
}
