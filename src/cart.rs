//! Cart
//!
//! Parses cart lines of the form `"<id> x <quantity>"` into entries.

use std::num::ParseIntError;

use thiserror::Error;

/// Separator between the item id and its quantity.
pub const SEPARATOR: char = 'x';

/// Errors raised while parsing cart lines. `line` is the zero-based input line index.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The line has no `x` separator.
    #[error("line {line}: expected '<id> x <quantity>'")]
    MissingSeparator {
        /// Input line index
        line: usize,
    },

    /// Nothing before the separator.
    #[error("line {line}: missing item id")]
    EmptyItemId {
        /// Input line index
        line: usize,
    },

    /// The quantity is not an unsigned integer.
    #[error("line {line}: invalid quantity {quantity:?}: {source}")]
    InvalidQuantity {
        /// Input line index
        line: usize,

        /// Raw quantity text
        quantity: String,

        /// Integer parse failure
        source: ParseIntError,
    },

    /// The quantity is zero.
    #[error("line {line}: quantity must be greater than zero")]
    ZeroQuantity {
        /// Input line index
        line: usize,
    },
}

/// A single selected item and how many of it were ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    item_id: String,
    quantity: u32,
}

impl CartEntry {
    /// Create a new cart entry.
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }

    /// The menu item id
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// The ordered quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered cart entries. Repeated ids stay as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create a cart from entries.
    pub fn new(entries: impl Into<Vec<CartEntry>>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Iterate over the entries in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'c> IntoIterator for &'c Cart {
    type Item = &'c CartEntry;
    type IntoIter = std::slice::Iter<'c, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse one cart line, splitting on the first `x`.
///
/// # Errors
///
/// Returns a [`CartError`] describing why the line is malformed; `index` is reported back
/// as the error's line number.
pub fn parse_line(index: usize, line: &str) -> Result<CartEntry, CartError> {
    let (id, quantity) = line
        .split_once(SEPARATOR)
        .ok_or(CartError::MissingSeparator { line: index })?;

    let id = id.trim();
    let quantity = quantity.trim();

    if id.is_empty() {
        return Err(CartError::EmptyItemId { line: index });
    }

    let quantity = quantity
        .parse::<u32>()
        .map_err(|source| CartError::InvalidQuantity {
            line: index,
            quantity: quantity.to_string(),
            source,
        })?;

    if quantity == 0 {
        return Err(CartError::ZeroQuantity { line: index });
    }

    Ok(CartEntry::new(id, quantity))
}

/// Parse every line of a cart.
///
/// # Errors
///
/// Returns the first [`CartError`] encountered.
pub fn parse_cart<I, S>(lines: I) -> Result<Cart, CartError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_line(index, line.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Cart { entries })
}
