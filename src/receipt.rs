//! Receipt
//!
//! Renders a [`PricingResult`] as the order details text.

use std::{fmt, io};

use thiserror::Error;

use crate::{
    pricing::{AppliedPromotion, PricingResult, major_units},
    promotions::PromotionKind,
};

const HEADER: &str = "============= 订餐明细 =============";
const SEPARATOR: &str = "-----------------------------------";
const FOOTER: &str = "===================================";

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Printable receipt for a priced order.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'r, 'a> {
    result: &'r PricingResult<'a>,
}

impl<'r, 'a> Receipt<'r, 'a> {
    /// Create a receipt for the given pricing result.
    pub fn new(result: &'r PricingResult<'a>) -> Self {
        Self { result }
    }

    /// Writes the receipt to the given output.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        write!(out, "{self}")?;

        Ok(())
    }
}

impl fmt::Display for Receipt<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;

        for line in &self.result.line_items {
            writeln!(
                f,
                "{} x {} = {}元",
                line.name,
                line.quantity,
                major_units(&line.line_total)
            )?;
        }

        writeln!(f, "{SEPARATOR}")?;

        if let Some(applied) = &self.result.applied_promotion {
            write_promotion(f, applied)?;
            writeln!(f, "{SEPARATOR}")?;
        }

        writeln!(f, "总计：{}元", major_units(&self.result.total))?;
        write!(f, "{FOOTER}")
    }
}

fn write_promotion(f: &mut fmt::Formatter<'_>, applied: &AppliedPromotion<'_>) -> fmt::Result {
    writeln!(f, "使用优惠:")?;

    match applied.kind {
        PromotionKind::HalfPriceOnItems => writeln!(
            f,
            "{}({})，省{}元",
            applied.label,
            applied.discounted_item_names.join("，"),
            major_units(&applied.economization)
        ),
        PromotionKind::DiscountOverThreshold => writeln!(
            f,
            "{}，省{}元",
            applied.label,
            major_units(&applied.economization)
        ),
    }
}

/// Render the receipt text for a pricing result.
pub fn render(result: &PricingResult<'_>) -> String {
    Receipt::new(result).to_string()
}
