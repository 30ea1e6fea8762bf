//! Review-stage operations for the Session.

use log::{debug, info};

use super::{AddOnSelector, Session};
use crate::{
    error::{Result, WizardError},
    models::{AddOnSelection, OrderSummary, OrderUpdate, Stage},
    pricing::{self, OrderTotals},
};

impl Session {
    /// Stage-4 transient state.
    pub fn add_on_selector(&self) -> &AddOnSelector {
        &self.add_on_selector
    }

    /// Checks an add-on and syncs the order's selection.
    ///
    /// # Errors
    ///
    /// - `WizardError::Validation` for an unknown add-on
    /// - `WizardError::Finalized` until `back_to_review` reopens the review
    pub fn check_add_on(&mut self, add_on_id: &str) -> Result<&[AddOnSelection]> {
        self.add_on_selector.check(&self.catalog, add_on_id)?;
        Ok(self.sync_add_ons())
    }

    /// Unchecks an add-on and syncs the order's selection.
    pub fn uncheck_add_on(&mut self, add_on_id: &str) -> Result<&[AddOnSelection]> {
        self.add_on_selector.uncheck(&self.catalog, add_on_id)?;
        Ok(self.sync_add_ons())
    }

    /// Records a typed quantity and syncs the order's selection.
    pub fn set_add_on_quantity(&mut self, add_on_id: &str, raw: &str) -> Result<&[AddOnSelection]> {
        self.add_on_selector
            .set_quantity(&self.catalog, add_on_id, raw)?;
        Ok(self.sync_add_ons())
    }

    /// Pricing breakdown of the order as it stands.
    pub fn totals(&self) -> OrderTotals {
        pricing::order_totals(&self.order, &self.catalog)
    }

    /// Review aggregation of the order with catalog names and totals.
    pub fn summary(&self) -> OrderSummary {
        let plan_id = self.order.selected_plan_id.as_deref();
        let plan = plan_id.and_then(|id| self.catalog.find_plan(id));
        let product = plan_id.and_then(|id| self.catalog.product_for_plan(id));

        OrderSummary {
            customer_name: self.order.customer_name.clone(),
            customer_address: self.order.customer_address.clone(),
            product_name: product.map(|p| p.name.clone()),
            plan_name: plan.map(|p| p.name.clone()),
            price_interval: plan.map(|p| p.price_interval),
            start_date: self.order.start_date,
            end_date: self.order.end_date,
            contract_period_in_months: self.order.contract_period_in_months,
            totals: self.totals(),
            finalized: self.add_on_selector.is_finalized(),
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.add_on_selector.is_finalized()
    }

    /// Switches the review to its read-only finalized state.
    ///
    /// This is a display transition only; the order is not changed.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InactiveStage` unless the review stage is
    /// active.
    pub fn finalize(&mut self) -> Result<OrderSummary> {
        self.require_review()?;
        self.add_on_selector.set_finalized(true);
        info!(
            "order for '{}' finalized at {}",
            self.order.customer_name,
            self.totals().total
        );
        Ok(self.summary())
    }

    /// Returns from the finalized summary to the editable review.
    pub fn back_to_review(&mut self) -> Result<OrderSummary> {
        self.require_review()?;
        self.add_on_selector.set_finalized(false);
        Ok(self.summary())
    }

    fn require_review(&self) -> Result<()> {
        let current = self.current_stage();
        if current == Stage::ReviewFinalize {
            Ok(())
        } else {
            Err(WizardError::InactiveStage {
                required: Stage::ReviewFinalize,
                current,
            })
        }
    }

    fn sync_add_ons(&mut self) -> &[AddOnSelection] {
        let selected_add_ons = self.add_on_selector.selections();
        debug!("syncing {} add-on(s)", selected_add_ons.len());
        self.merge(OrderUpdate::AddOns { selected_add_ons });
        &self.order.selected_add_ons
    }
}
