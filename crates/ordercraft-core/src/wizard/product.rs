//! Stage 2: product line and plan selection with per-plan price overrides.

use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    error::{Result, ValidationErrors, WizardError},
    models::{Catalog, OrderUpdate, Plan, Product},
    params::ProductSelectionInput,
};

/// Transient stage-2 state.
///
/// Price overrides are keyed by plan id and belong to the current product
/// line: switching to another product line clears them together with the
/// chosen plan. They are distinct from the order's committed
/// `custom_plan_price`, which is only written on submit.
#[derive(Debug, Clone, Default)]
pub struct PlanSelector {
    product_line_id: Option<String>,
    selected_plan_id: Option<String>,
    price_overrides: HashMap<String, f64>,
}

impl PlanSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_line_id(&self) -> Option<&str> {
        self.product_line_id.as_deref()
    }

    pub fn selected_plan_id(&self) -> Option<&str> {
        self.selected_plan_id.as_deref()
    }

    /// Override recorded for a plan in the current product line.
    pub fn price_override(&self, plan_id: &str) -> Option<f64> {
        self.price_overrides.get(plan_id).copied()
    }

    /// Override if one was recorded, otherwise the plan's default price.
    pub fn effective_price(&self, plan: &Plan) -> f64 {
        self.price_override(&plan.id).unwrap_or(plan.default_price)
    }

    /// Chooses a product line. Choosing a different line than the current
    /// one resets the plan choice and all price overrides.
    pub fn select_product<'c>(&mut self, catalog: &'c Catalog, product_id: &str) -> Result<&'c Product> {
        let product_id = product_id.trim();
        let product = catalog.find_product(product_id).ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.push("productLineId", unknown_product_message(product_id));
            WizardError::Validation(errors)
        })?;
        if self.product_line_id.as_deref() != Some(product_id) {
            self.switch_product(product_id);
        }
        Ok(product)
    }

    /// Chooses a plan of the current product line and returns its effective
    /// price.
    pub fn select_plan(&mut self, catalog: &Catalog, plan_id: &str) -> Result<f64> {
        let plan_id = plan_id.trim();
        let plan = self
            .product_line_id
            .as_deref()
            .and_then(|product_id| catalog.find_plan_in_product(product_id, plan_id))
            .ok_or_else(|| {
                let mut errors = ValidationErrors::new();
                errors.push(
                    "selectedPlanId",
                    format!("Plan '{plan_id}' is not part of the selected product line"),
                );
                WizardError::Validation(errors)
            })?;
        self.selected_plan_id = Some(plan.id.clone());
        Ok(self.effective_price(plan))
    }

    /// Applies a typed price edit for a plan of the current product line.
    ///
    /// Text that does not parse as a non-negative number is ignored and the
    /// previous price stays in effect. Returns the plan's effective price, or
    /// `None` when the plan is not part of the current product line.
    pub fn edit_price(&mut self, catalog: &Catalog, plan_id: &str, raw: &str) -> Option<f64> {
        let product_id = self.product_line_id.as_deref()?;
        let plan = catalog.find_plan_in_product(product_id, plan_id.trim())?;

        match raw.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => {
                debug!("price override for {}: {price}", plan.id);
                self.price_overrides.insert(plan.id.clone(), price);
            }
            _ => warn!("ignoring price edit {raw:?} for {}", plan.id),
        }
        Some(self.effective_price(plan))
    }

    /// Validates a stage-2 submission and commits it to the selector.
    ///
    /// A `custom_price` in the input is recorded as the override of the
    /// submitted plan. Nothing changes when validation fails.
    pub fn submit(&mut self, catalog: &Catalog, input: &ProductSelectionInput) -> Result<OrderUpdate> {
        let mut errors = ValidationErrors::new();
        let product_id = input.product_line_id.trim();
        let plan_id = input.selected_plan_id.trim();

        let product = if product_id.is_empty() {
            errors.push("productLineId", "Product line is required");
            None
        } else {
            let product = catalog.find_product(product_id);
            if product.is_none() {
                errors.push("productLineId", unknown_product_message(product_id));
            }
            product
        };

        let plan = if plan_id.is_empty() {
            errors.push("selectedPlanId", "Plan selection is required");
            None
        } else {
            let plan = product.and_then(|p| p.find_plan(plan_id));
            if plan.is_none() {
                errors.push(
                    "selectedPlanId",
                    format!("Plan '{plan_id}' is not part of the selected product line"),
                );
            }
            plan
        };

        if let Some(price) = input.custom_price {
            if !(price.is_finite() && price >= 0.0) {
                errors.push("customPrice", "Price must be a non-negative number");
            }
        }

        let Some(plan) = plan else {
            return Err(WizardError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(WizardError::Validation(errors));
        }

        if self.product_line_id.as_deref() != Some(product_id) {
            self.switch_product(product_id);
        }
        self.selected_plan_id = Some(plan.id.clone());
        if let Some(price) = input.custom_price {
            self.price_overrides.insert(plan.id.clone(), price);
        }

        Ok(OrderUpdate::ProductSelection {
            selected_plan_id: plan.id.clone(),
            custom_plan_price: self.effective_price(plan),
        })
    }

    fn switch_product(&mut self, product_id: &str) {
        debug!(
            "product line {:?} -> {product_id}, clearing {} price override(s)",
            self.product_line_id,
            self.price_overrides.len()
        );
        self.product_line_id = Some(product_id.to_string());
        self.selected_plan_id = None;
        self.price_overrides.clear();
    }
}

fn unknown_product_message(product_id: &str) -> String {
    if product_id.is_empty() {
        "Product line is required".to_string()
    } else {
        format!("Unknown product line '{product_id}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(product: &str, plan: &str, price: Option<f64>) -> ProductSelectionInput {
        ProductSelectionInput {
            product_line_id: product.to_string(),
            selected_plan_id: plan.to_string(),
            custom_price: price,
        }
    }

    fn committed_price(update: &OrderUpdate) -> f64 {
        match update {
            OrderUpdate::ProductSelection {
                custom_plan_price, ..
            } => *custom_plan_price,
            other => panic!("unexpected update {other:?}"),
        }
    }

    #[test]
    fn test_default_price_without_override() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        let update = selector
            .submit(&catalog, &input("crm-pro", "crm-pro-advanced", None))
            .unwrap();
        assert_eq!(
            update,
            OrderUpdate::ProductSelection {
                selected_plan_id: "crm-pro-advanced".to_string(),
                custom_plan_price: 79.0,
            }
        );
    }

    #[test]
    fn test_override_survives_switching_plans() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        selector.select_product(&catalog, "crm-pro").unwrap();
        assert_eq!(selector.edit_price(&catalog, "crm-pro-advanced", "65"), Some(65.0));

        selector.select_plan(&catalog, "crm-pro-yearly").unwrap();
        assert_eq!(selector.select_plan(&catalog, "crm-pro-advanced").unwrap(), 65.0);

        let update = selector
            .submit(&catalog, &input("crm-pro", "crm-pro-advanced", None))
            .unwrap();
        assert_eq!(committed_price(&update), 65.0);
    }

    #[test]
    fn test_switching_product_clears_overrides() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        selector.select_product(&catalog, "crm-pro").unwrap();
        selector.edit_price(&catalog, "crm-pro-advanced", "65");
        selector.select_plan(&catalog, "crm-pro-advanced").unwrap();

        selector.select_product(&catalog, "crm-basic").unwrap();
        assert_eq!(selector.selected_plan_id(), None);
        assert_eq!(selector.price_override("crm-pro-advanced"), None);

        selector.select_product(&catalog, "crm-pro").unwrap();
        let update = selector
            .submit(&catalog, &input("crm-pro", "crm-pro-advanced", None))
            .unwrap();
        assert_eq!(committed_price(&update), 79.0);
    }

    #[test]
    fn test_reselecting_same_product_keeps_overrides() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        selector.select_product(&catalog, "crm-pro").unwrap();
        selector.edit_price(&catalog, "crm-pro-monthly", "40");
        selector.select_product(&catalog, "crm-pro").unwrap();
        assert_eq!(selector.price_override("crm-pro-monthly"), Some(40.0));
    }

    #[test]
    fn test_unparsable_price_keeps_previous_value() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        selector.select_product(&catalog, "crm-pro").unwrap();
        assert_eq!(selector.edit_price(&catalog, "crm-pro-advanced", "abc"), Some(79.0));
        selector.edit_price(&catalog, "crm-pro-advanced", "70.5");
        assert_eq!(selector.edit_price(&catalog, "crm-pro-advanced", ""), Some(70.5));
        assert_eq!(selector.edit_price(&catalog, "crm-pro-advanced", "-3"), Some(70.5));
    }

    #[test]
    fn test_zero_override_is_honoured() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        let update = selector
            .submit(&catalog, &input("crm-pro", "crm-pro-advanced", Some(0.0)))
            .unwrap();
        assert_eq!(committed_price(&update), 0.0);
    }

    #[test]
    fn test_edit_price_outside_current_product_is_ignored() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        assert_eq!(selector.edit_price(&catalog, "crm-pro-advanced", "10"), None);
        selector.select_product(&catalog, "crm-basic").unwrap();
        assert_eq!(selector.edit_price(&catalog, "crm-pro-advanced", "10"), None);
    }

    #[test]
    fn test_plan_from_other_product_rejected() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        let err = selector
            .submit(&catalog, &input("crm-basic", "crm-pro-advanced", None))
            .unwrap_err();
        assert_eq!(err.validation_errors().unwrap().fields(), vec!["selectedPlanId"]);
        assert_eq!(selector.product_line_id(), None);
    }

    #[test]
    fn test_all_field_errors_reported_together() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        let err = selector
            .submit(&catalog, &input("crm-unknown", "", Some(-5.0)))
            .unwrap_err();
        assert_eq!(
            err.validation_errors().unwrap().fields(),
            vec!["productLineId", "selectedPlanId", "customPrice"]
        );
    }

    #[test]
    fn test_failed_submit_leaves_overrides_alone() {
        let catalog = Catalog::builtin();
        let mut selector = PlanSelector::new();
        selector.select_product(&catalog, "crm-pro").unwrap();
        selector.edit_price(&catalog, "crm-pro-advanced", "65");

        assert!(selector
            .submit(&catalog, &input("crm-basic", "crm-nope", None))
            .is_err());
        assert_eq!(selector.product_line_id(), Some("crm-pro"));
        assert_eq!(selector.price_override("crm-pro-advanced"), Some(65.0));
    }
}
