//! Fixtures
//!
//! Loads the menu and promotion catalogs from YAML files.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    fixtures::{items::ItemsFixture, promotions::PromotionsFixture},
    items::{Menu, MenuError, MenuItem},
    promotions::Promotion,
};

pub mod items;
pub mod promotions;

const BUILTIN_ITEMS: &str = include_str!("../../fixtures/items/default.yml");
const BUILTIN_PROMOTIONS: &str = include_str!("../../fixtures/promotions/default.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid promotion data
    #[error("Invalid promotion data: {0}")]
    InvalidPromotionData(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No items loaded
    #[error("No items loaded; cannot build a menu")]
    NoItems,

    /// Menu construction error
    #[error("Failed to build menu: {0}")]
    Menu(#[from] MenuError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Menu built from the loaded items
    menu: Option<Menu<'a>>,

    /// Promotions in catalog order
    promotions: Vec<Promotion<'a>>,

    /// Currency shared by every loaded price
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            menu: None,
            promotions: Vec::new(),
            currency: None,
        }
    }

    /// Load the catalog compiled into the crate: the restaurant's four dishes and its two
    /// promotions (`满30减6元`, then half price on 黄焖鸡 and 凉皮).
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML is invalid.
    pub fn builtin() -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_items_str(BUILTIN_ITEMS)?
            .load_promotions_str(BUILTIN_PROMOTIONS)?;

        Ok(fixture)
    }

    /// Load items from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_items(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("items").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        debug!(path = %file_path.display(), "loading items");

        self.load_items_str(&contents)
    }

    /// Load items from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a price is invalid, currencies
    /// differ or an id repeats.
    pub fn load_items_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ItemsFixture = serde_norway::from_str(contents)?;

        for item_fixture in fixture.items {
            let item = MenuItem::try_from(item_fixture)?;
            let currency = self.check_currency(item.price().currency())?;

            self.menu
                .get_or_insert_with(|| Menu::new(currency))
                .insert(item)?;
        }

        Ok(self)
    }

    /// Load promotions from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a promotion is invalid.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("promotions")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;

        debug!(path = %file_path.display(), "loading promotions");

        self.load_promotions_str(&contents)
    }

    /// Load promotions from YAML text. Unsupported promotion types are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or a promotion is invalid.
    pub fn load_promotions_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PromotionsFixture = serde_norway::from_str(contents)?;

        for (idx, promotion_fixture) in fixture.promotions.into_iter().enumerate() {
            let Some(promotion) = promotion_fixture.try_into_promotion()? else {
                warn!(idx, "skipping promotion with unsupported type");
                continue;
            };

            if let Promotion::DiscountOverThreshold(threshold) = &promotion {
                self.check_currency(threshold.threshold().currency())?;
            }

            self.promotions.push(promotion);
        }

        Ok(self)
    }

    /// Load a complete fixture set (items and promotions with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in(name, "./fixtures")
    }

    /// Load a complete fixture set from the given base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(name: &str, base_path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_items(name)?.load_promotions(name)?;

        Ok(fixture)
    }

    /// Get the menu
    ///
    /// # Errors
    ///
    /// Returns an error if no items have been loaded.
    pub fn menu(&self) -> Result<&Menu<'a>, FixtureError> {
        self.menu.as_ref().ok_or(FixtureError::NoItems)
    }

    /// Get all promotions in catalog order
    pub fn promotions(&self) -> &[Promotion<'a>] {
        &self.promotions
    }

    /// Record the fixture currency on first use and reject any other currency after that.
    fn check_currency(
        &mut self,
        currency: &'static Currency,
    ) -> Result<&'static Currency, FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(existing) => Ok(existing),
            None => {
                self.currency = Some(currency);
                Ok(currency)
            }
        }
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
