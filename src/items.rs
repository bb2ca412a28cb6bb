//! Items

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors related to menu construction.
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    /// An item's currency differs from the menu currency (item id, item currency, menu currency).
    #[error("Item {0} has currency {1}, but menu has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// The same item id was listed more than once.
    #[error("Item {0} is listed more than once")]
    DuplicateItem(String),
}

/// A dish on the menu
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem<'a> {
    id: String,
    name: String,
    price: Money<'a, Currency>,
}

impl<'a> MenuItem<'a> {
    /// Creates a new menu item
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Returns the item id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

/// Menu of items keyed by id, all priced in a single currency.
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    items: FxHashMap<String, MenuItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Menu<'a> {
    /// Create an empty menu.
    pub fn new(currency: &'static Currency) -> Self {
        Menu {
            items: FxHashMap::default(),
            currency,
        }
    }

    /// Create a menu with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `MenuError` if an item is priced in another currency or an id repeats.
    pub fn with_items(
        items: impl IntoIterator<Item = MenuItem<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, MenuError> {
        let mut menu = Menu::new(currency);

        items.into_iter().try_for_each(|item| menu.insert(item))?;

        Ok(menu)
    }

    /// Add an item to the menu.
    ///
    /// # Errors
    ///
    /// Returns a `MenuError` if the item is priced in another currency or its id is taken.
    pub fn insert(&mut self, item: MenuItem<'a>) -> Result<(), MenuError> {
        if item.price().currency() != self.currency {
            let item_currency = item.price().currency().iso_alpha_code;

            return Err(MenuError::CurrencyMismatch(
                item.id,
                item_currency,
                self.currency.iso_alpha_code,
            ));
        }

        if self.items.contains_key(item.id()) {
            return Err(MenuError::DuplicateItem(item.id));
        }

        self.items.insert(item.id.clone(), item);

        Ok(())
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem<'a>> {
        self.items.get(id)
    }

    /// Iterate over the items (in no particular order).
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem<'a>> {
        self.items.values()
    }

    /// Get the number of items on the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the menu is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the menu.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
