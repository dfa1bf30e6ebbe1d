//! HTTP form bodies and their conversion to domain values.
//!
//! Fields arrive as raw text and are parsed here, so a bad value becomes a
//! warning on the re-rendered page instead of an extractor rejection. The
//! checks are the same ones the form widgets enforce in the browser.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::pages::MAX_UPDATE_ID;
use crate::domain::menu::{Availability, MenuItemDraft};
use crate::domain::ordering::OrderStatus;
use crate::domain::shared::{DomainError, MenuItemId, Money, OrderId};

/// A form field failed widget-level validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Field is not a number.
    #[error("{field} must be a number")]
    NotANumber {
        /// Field label.
        field: &'static str,
    },

    /// Numeric field outside the widget's range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Field label.
        field: &'static str,
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
    },

    /// Price below zero.
    #[error("{field} cannot be negative")]
    NegativePrice {
        /// Field label.
        field: &'static str,
    },

    /// Price beyond what the REAL column reads back.
    #[error("{field} is too large")]
    PriceTooLarge {
        /// Field label.
        field: &'static str,
    },

    /// Enum text outside the offered options.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Add-item form on the Menu page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddMenuItemForm {
    /// Item name.
    pub name: String,
    /// Category.
    pub category: String,
    /// Price text.
    pub price: String,
    /// `Yes` or `No`.
    pub available: String,
}

impl AddMenuItemForm {
    /// Convert to a draft.
    ///
    /// # Errors
    ///
    /// Returns error if the price or availability is invalid.
    pub fn into_draft(self) -> Result<MenuItemDraft, FormError> {
        Ok(MenuItemDraft {
            price: parse_price("Price", &self.price)?,
            available: self.available.parse::<Availability>()?,
            name: self.name,
            category: self.category,
        })
    }
}

/// Delete-item form on the Menu page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteMenuItemForm {
    /// Id text.
    pub item_id: String,
}

impl DeleteMenuItemForm {
    /// Parse the id.
    ///
    /// # Errors
    ///
    /// Returns error if the id is not a positive integer.
    pub fn item_id(&self) -> Result<MenuItemId, FormError> {
        parse_id("Item ID", &self.item_id, i64::MAX).map(MenuItemId::new)
    }
}

/// Update-item form on the Menu page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMenuItemForm {
    /// Id text, 1 to 5000.
    pub update_id: String,
    /// Replacement name.
    pub new_name: String,
    /// Replacement category.
    pub new_category: String,
    /// Replacement price text.
    pub new_price: String,
    /// Replacement availability.
    pub new_available: String,
}

impl UpdateMenuItemForm {
    /// Parse into the target id and the replacement fields.
    ///
    /// # Errors
    ///
    /// Returns error if the id, price or availability is invalid.
    pub fn into_parts(self) -> Result<(MenuItemId, MenuItemDraft), FormError> {
        let id = parse_id("Item ID", &self.update_id, MAX_UPDATE_ID).map(MenuItemId::new)?;
        let draft = MenuItemDraft {
            price: parse_price("New Price", &self.new_price)?,
            available: self.new_available.parse::<Availability>()?,
            name: self.new_name,
            category: self.new_category,
        };
        Ok((id, draft))
    }
}

/// Status form on the Order Status page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateOrderStatusForm {
    /// Id text.
    pub order_id: String,
    /// `Pending` or `Completed`.
    pub status: String,
}

impl UpdateOrderStatusForm {
    /// Parse into the target id and status.
    ///
    /// # Errors
    ///
    /// Returns error if the id or status is invalid.
    pub fn into_parts(self) -> Result<(OrderId, OrderStatus), FormError> {
        let id = parse_id("Order ID", &self.order_id, i64::MAX).map(OrderId::new)?;
        let status = self.status.parse::<OrderStatus>()?;
        Ok((id, status))
    }
}

/// Collect the repeated `items` fields of the Place Order form.
#[must_use]
pub fn selected_items(fields: Vec<(String, String)>) -> Vec<String> {
    fields
        .into_iter()
        .filter(|(key, _)| key == "items")
        .map(|(_, value)| value)
        .collect()
}

fn parse_id(field: &'static str, raw: &str, max: i64) -> Result<i64, FormError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber { field })?;
    if !(1..=max).contains(&value) {
        return Err(FormError::OutOfRange { field, min: 1, max });
    }
    Ok(value)
}

fn parse_price(field: &'static str, raw: &str) -> Result<Money, FormError> {
    let value = Decimal::from_str(raw.trim()).map_err(|_| FormError::NotANumber { field })?;
    let price = Money::new(value).round();
    if price.is_negative() {
        return Err(FormError::NegativePrice { field });
    }
    if !price.fits_real_column() {
        return Err(FormError::PriceTooLarge { field });
    }
    Ok(price)
}
