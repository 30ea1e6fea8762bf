//! Collection wrapper types for displaying groups of catalog entries.
//!
//! This module provides wrapper types that format slices of catalog entries
//! with consistent structure and empty collection handling.

use std::fmt;

use super::Money;
use crate::{
    models::{AddOn, Product},
    wizard::PlanSelector,
};

/// Newtype wrapper for displaying the product lines of a catalog.
///
/// # Examples
///
/// ```rust
/// use ordercraft_core::{display::Products, models::Catalog};
///
/// let catalog = Catalog::builtin();
/// let output = Products(catalog.list_products()).to_string();
/// assert!(output.contains("## CRM Professional (`crm-pro`)"));
/// assert!(output.contains("Professional Advanced"));
/// ```
pub struct Products<'a>(pub &'a [Product]);

impl Products<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Products<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No products found.");
        }
        for product in self.0 {
            write!(f, "{product}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the add-ons of a catalog.
pub struct AddOns<'a>(pub &'a [AddOn]);

impl AddOns<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for AddOns<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No add-ons available.");
        }
        for add_on in self.0 {
            writeln!(f, "{add_on}")?;
        }
        Ok(())
    }
}

/// The plans of the product line chosen in stage 2 with their effective
/// prices, marking the chosen plan.
pub struct PlanChoices<'a> {
    pub product: &'a Product,
    pub selector: &'a PlanSelector,
}

impl<'a> PlanChoices<'a> {
    pub fn new(product: &'a Product, selector: &'a PlanSelector) -> Self {
        Self { product, selector }
    }
}

impl fmt::Display for PlanChoices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.product.name)?;
        writeln!(f)?;
        for plan in &self.product.plans {
            let chosen = self.selector.selected_plan_id() == Some(plan.id.as_str());
            let price = self.selector.effective_price(plan);
            write!(
                f,
                "- ({}) {} (`{}`): {}/{}",
                if chosen { "x" } else { " " },
                plan.name,
                plan.id,
                Money(price),
                plan.price_interval.as_str()
            )?;
            if self.selector.price_override(&plan.id).is_some() {
                write!(f, " (list {})", Money(plan.default_price))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
