//! Order pricing.
//!
//! Turns a selection of menu item names into the joined item text and the
//! total that get stored with a new order.

use thiserror::Error;

use crate::domain::menu::MenuItem;
use crate::domain::shared::Money;

/// Separator between item names in the stored items text.
pub const ITEM_SEPARATOR: &str = ", ";

/// Values handed to storage when an order is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Selected names joined with [`ITEM_SEPARATOR`].
    pub items: String,
    /// Sum of the matching menu prices.
    pub total_price: Money,
}

/// Why a selection could not be priced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// No names were selected.
    #[error("Please select at least one item.")]
    EmptySelection,

    /// The summed prices overflow, or would not read back from storage.
    #[error("Order total is too large to record.")]
    TotalTooLarge,
}

/// Price a selection against the current menu.
///
/// The join is by name: every menu item whose name appears in the selection
/// contributes its price once, so two items sharing a name are both
/// counted. Repeated names in the selection collapse to the first
/// occurrence. Names with no matching item add nothing.
///
/// # Errors
///
/// Returns [`PricingError::EmptySelection`] for an empty selection and
/// [`PricingError::TotalTooLarge`] when the total cannot be stored.
pub fn price_selection<S: AsRef<str>>(
    menu: &[MenuItem],
    selection: &[S],
) -> Result<OrderDraft, PricingError> {
    let mut names: Vec<&str> = Vec::with_capacity(selection.len());
    for name in selection {
        let name = name.as_ref();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Err(PricingError::EmptySelection);
    }

    let total_price = menu
        .iter()
        .filter(|item| names.contains(&item.name.as_str()))
        .try_fold(Money::ZERO, |total, item| total.checked_add(item.price))
        .filter(Money::fits_real_column)
        .ok_or(PricingError::TotalTooLarge)?;

    Ok(OrderDraft {
        items: names.join(ITEM_SEPARATOR),
        total_price,
    })
}
