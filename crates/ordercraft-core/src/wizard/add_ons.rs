//! Stage 4: add-on selection state.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::{
    error::{Result, ValidationErrors, WizardError},
    models::{AddOnSelection, Catalog, Order, OrderUpdate},
    params::AddOnsInput,
};

/// Checked add-ons and their quantities while the review stage is open.
///
/// Unchecking keeps the recorded quantity so re-checking restores it.
#[derive(Debug, Clone, Default)]
pub struct AddOnSelector {
    checked: Vec<String>,
    quantities: HashMap<String, u32>,
    finalized: bool,
}

impl AddOnSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the selector from the add-ons already on the order.
    pub fn seeded(order: &Order) -> Self {
        Self {
            checked: order
                .selected_add_ons
                .iter()
                .map(|s| s.add_on_id.clone())
                .collect(),
            quantities: order
                .selected_add_ons
                .iter()
                .map(|s| (s.add_on_id.clone(), s.quantity))
                .collect(),
            finalized: false,
        }
    }

    pub fn is_checked(&self, add_on_id: &str) -> bool {
        self.checked.iter().any(|id| id == add_on_id)
    }

    /// Recorded quantity, kept even while the add-on is unchecked.
    pub fn quantity(&self, add_on_id: &str) -> Option<u32> {
        self.quantities.get(add_on_id).copied()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub(crate) fn set_finalized(&mut self, finalized: bool) {
        self.finalized = finalized;
    }

    /// The finalized summary is read-only until the review is reopened.
    fn require_editable(&self) -> Result<()> {
        if self.finalized {
            Err(WizardError::Finalized)
        } else {
            Ok(())
        }
    }

    /// Checks an add-on; a first check records quantity 1.
    pub fn check(&mut self, catalog: &Catalog, add_on_id: &str) -> Result<()> {
        self.require_editable()?;
        let add_on_id = known_add_on(catalog, add_on_id)?;
        if !self.is_checked(add_on_id) {
            self.checked.push(add_on_id.to_string());
        }
        self.quantities.entry(add_on_id.to_string()).or_insert(1);
        debug!("checked add-on {add_on_id}");
        Ok(())
    }

    /// Unchecks an add-on, keeping its recorded quantity.
    pub fn uncheck(&mut self, catalog: &Catalog, add_on_id: &str) -> Result<()> {
        self.require_editable()?;
        let add_on_id = known_add_on(catalog, add_on_id)?;
        self.checked.retain(|id| id != add_on_id);
        debug!("unchecked add-on {add_on_id}");
        Ok(())
    }

    /// Records a typed quantity.
    ///
    /// The leading whole number of the text is used, so `"3 seats"` is 3 and
    /// `"1.5"` is 1. Text without leading digits and negative numbers count
    /// as 0.
    pub fn set_quantity(&mut self, catalog: &Catalog, add_on_id: &str, raw: &str) -> Result<u32> {
        self.require_editable()?;
        let add_on_id = known_add_on(catalog, add_on_id)?;
        let quantity = parse_quantity(raw);
        self.quantities.insert(add_on_id.to_string(), quantity);
        debug!("add-on {add_on_id} quantity {quantity}");
        Ok(quantity)
    }

    /// Current selection in check order.
    pub fn selections(&self) -> Vec<AddOnSelection> {
        self.checked
            .iter()
            .map(|id| AddOnSelection::new(id.clone(), self.quantity(id).unwrap_or(1)))
            .collect()
    }

    /// Replaces the whole selection with a validated submission.
    pub fn submit(&mut self, catalog: &Catalog, input: &AddOnsInput) -> Result<OrderUpdate> {
        self.require_editable()?;
        let mut errors = ValidationErrors::new();
        let mut seen = HashSet::new();
        let mut selections = Vec::with_capacity(input.selected_add_ons.len());

        for (index, requested) in input.selected_add_ons.iter().enumerate() {
            let add_on_id = requested.add_on_id.trim();
            let id_field = format!("selectedAddOns.{index}.addOnId");
            if catalog.find_add_on(add_on_id).is_none() {
                errors.push(id_field, format!("Unknown add-on '{add_on_id}'"));
            } else if !seen.insert(add_on_id) {
                errors.push(id_field, format!("Add-on '{add_on_id}' is selected twice"));
            }

            let quantity_field = format!("selectedAddOns.{index}.quantity");
            match u32::try_from(requested.quantity) {
                Ok(quantity) => selections.push(AddOnSelection::new(add_on_id, quantity)),
                Err(_) if requested.quantity < 0 => {
                    errors.push(quantity_field, "Quantity cannot be negative");
                }
                Err(_) => errors.push(quantity_field, "Quantity is too large"),
            }
        }

        if !errors.is_empty() {
            return Err(WizardError::Validation(errors));
        }

        self.checked = selections.iter().map(|s| s.add_on_id.clone()).collect();
        for selection in &selections {
            self.quantities
                .insert(selection.add_on_id.clone(), selection.quantity);
        }
        Ok(OrderUpdate::AddOns {
            selected_add_ons: selections,
        })
    }
}

fn parse_quantity(raw: &str) -> u32 {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || digits == 0 {
        return 0;
    }
    rest[..digits].parse::<u32>().unwrap_or(u32::MAX)
}

fn known_add_on<'a>(catalog: &Catalog, add_on_id: &'a str) -> Result<&'a str> {
    let add_on_id = add_on_id.trim();
    if catalog.find_add_on(add_on_id).is_some() {
        return Ok(add_on_id);
    }
    let mut errors = ValidationErrors::new();
    errors.push("addOnId", format!("Unknown add-on '{add_on_id}'"));
    Err(WizardError::Validation(errors))
}
