//! Contract date and price derivations.
//!
//! Everything here is a pure function of its arguments. The wizard calls
//! into it from the contract-terms stage (end date) and the review stage
//! (totals).

use jiff::{civil::Date, Span};
use serde::Serialize;

use crate::models::{AddOnSelection, Catalog, Order};

/// Computes the last day of a contract that starts on `start` and runs for
/// `months` calendar months.
///
/// The start date is moved forward by `months` months, with the day
/// constrained to the last day of the target month when it would overflow
/// (Jan 31 + 1 month is Feb 28/29), and then one day is subtracted. The
/// window is therefore inclusive on both ends.
///
/// Returns `None` when `months` is zero or the result leaves the supported
/// calendar range.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use ordercraft_core::pricing::contract_end_date;
///
/// assert_eq!(contract_end_date(date(2024, 3, 1), 12), Some(date(2025, 2, 28)));
/// assert_eq!(contract_end_date(date(2024, 1, 31), 1), Some(date(2024, 2, 28)));
/// ```
pub fn contract_end_date(start: Date, months: u32) -> Option<Date> {
    if months == 0 {
        return None;
    }
    let span = Span::new().try_months(i64::from(months)).ok()?;
    start.checked_add(span).ok()?.yesterday().ok()
}

/// One priced add-on line of the review.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddOnLine {
    pub add_on_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Derived monthly pricing of an order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct OrderTotals {
    pub plan_price: f64,
    pub add_on_lines: Vec<AddOnLine>,
    pub add_ons_total: f64,
    pub total: f64,
}

/// Prices each selection against the catalog.
///
/// Ids missing from the catalog price at zero and keep their id as the name.
pub fn add_on_lines(selections: &[AddOnSelection], catalog: &Catalog) -> Vec<AddOnLine> {
    selections
        .iter()
        .map(|selection| {
            let (name, unit_price) = match catalog.find_add_on(&selection.add_on_id) {
                Some(add_on) => (add_on.name.clone(), add_on.price),
                None => (selection.add_on_id.clone(), 0.0),
            };
            AddOnLine {
                add_on_id: selection.add_on_id.clone(),
                name,
                unit_price,
                quantity: selection.quantity,
                line_total: unit_price * f64::from(selection.quantity),
            }
        })
        .collect()
}

/// Σ (add-on price × quantity) over the selections.
pub fn add_ons_total(selections: &[AddOnSelection], catalog: &Catalog) -> f64 {
    add_on_lines(selections, catalog)
        .iter()
        .map(|line| line.line_total)
        .sum()
}

/// Plan price plus add-ons total. An order without a committed plan price
/// counts the plan as zero.
pub fn order_total(order: &Order, catalog: &Catalog) -> f64 {
    order.plan_price() + add_ons_total(&order.selected_add_ons, catalog)
}

/// Full pricing breakdown for the review stage.
pub fn order_totals(order: &Order, catalog: &Catalog) -> OrderTotals {
    let add_on_lines = add_on_lines(&order.selected_add_ons, catalog);
    let add_ons_total = add_on_lines.iter().map(|line| line.line_total).sum();
    let plan_price = order.plan_price();
    OrderTotals {
        plan_price,
        add_on_lines,
        add_ons_total,
        total: plan_price + add_ons_total,
    }
}
