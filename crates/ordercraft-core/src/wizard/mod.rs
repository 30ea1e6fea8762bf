//! The order-configuration wizard.
//!
//! A [`Session`] is the explicitly owned context of one editor working
//! through the four stages. It owns the [`Order`] being built, the
//! [`StageController`] and the transient state of the stages that edit live
//! (the stage-2 [`PlanSelector`] and the stage-4 [`AddOnSelector`]). The
//! [`Catalog`] is shared read-only.
//!
//! ```text
//! ┌──────────────┐   StageInput   ┌──────────────┐  OrderUpdate  ┌─────────┐
//! │  Rendering   │───────────────▶│   Stage      │──────────────▶│  Order  │
//! │ (CLI, MCP)   │◀───────────────│  validators  │  Order::apply │         │
//! └──────────────┘  field errors  └──────────────┘               └─────────┘
//!        │ advance / retreat / go_to                                  ▲
//!        ▼                                                            │
//! ┌──────────────┐                                    totals / summary│
//! │  Stage       │                                    ┌───────────────┘
//! │  controller  │                                    │ pricing
//! └──────────────┘                                    │
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: catalog resolution and [`Session`] construction
//! - [`controller`]: the four-state navigation machine
//! - [`customer`], [`product`], [`contract`], [`add_ons`]: one validator per
//!   stage
//! - [`review`]: stage-4 live editing, totals, summary and finalization
//!
//! # Usage
//!
//! ```rust
//! use ordercraft_core::{
//!     params::{CustomerInfoInput, StageInput},
//!     Session, Stage,
//! };
//!
//! # fn example() -> ordercraft_core::Result<()> {
//! let mut session = Session::builtin();
//! session.submit_stage(
//!     1,
//!     StageInput::CustomerInfo(CustomerInfoInput {
//!         customer_name: "Acme Corp".to_string(),
//!         pre_populate: false,
//!         address: None,
//!     }),
//! )?;
//! assert_eq!(session.current_stage(), Stage::ProductSelection);
//! assert_eq!(session.order().customer_name, "Acme Corp");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::sync::Arc;

use log::debug;

pub mod add_ons;
pub mod builder;
pub mod contract;
pub mod controller;
pub mod customer;
pub mod product;
pub mod review;

#[cfg(test)]
mod tests;

pub use add_ons::AddOnSelector;
pub use builder::SessionBuilder;
pub use controller::StageController;
pub use product::PlanSelector;

use crate::{
    error::{Result, WizardError},
    models::{Catalog, Order, OrderUpdate, Product, Stage},
    params::{ContractTermsInput, StageInput},
};

/// One editor's wizard session.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    order: Order,
    controller: StageController,
    plan_selector: PlanSelector,
    add_on_selector: AddOnSelector,
}

impl Session {
    /// Starts a fresh session over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            order: Order::default(),
            controller: StageController::new(),
            plan_selector: PlanSelector::new(),
            add_on_selector: AddOnSelector::new(),
        }
    }

    /// Starts a fresh session over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the order as built so far.
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn current_stage(&self) -> Stage {
        self.controller.current()
    }

    /// Validates `input` as stage `n` and merges it into the order.
    ///
    /// On success the session moves to the stage after `n` (staying on the
    /// last stage). On failure nothing changes and every failing field is
    /// reported.
    ///
    /// # Errors
    ///
    /// - `WizardError::OutOfRange` when `n` is not in 1..=4
    /// - `WizardError::StageMismatch` when `input` belongs to another stage
    /// - `WizardError::Validation` with all field errors
    /// - `WizardError::Finalized` for add-ons while the review is finalized
    pub fn submit_stage(&mut self, n: i64, input: StageInput) -> Result<OrderUpdate> {
        let stage = Stage::from_number(n).ok_or(WizardError::OutOfRange { requested: n })?;
        if input.stage() != stage {
            return Err(WizardError::StageMismatch {
                stage,
                input: input.stage(),
            });
        }

        let update = match &input {
            StageInput::CustomerInfo(input) => customer::validate_customer_info(input)?,
            StageInput::ProductSelection(input) => {
                self.plan_selector.submit(&self.catalog, input)?
            }
            StageInput::ContractTerms(input) => contract::validate_contract_terms(input)?,
            StageInput::AddOns(input) => self.add_on_selector.submit(&self.catalog, input)?,
        };

        self.merge(update.clone());
        self.enter(stage.next().unwrap_or(stage));
        Ok(update)
    }

    /// Moves one stage forward without validation.
    pub fn advance(&mut self) -> Stage {
        let mut controller = self.controller;
        let stage = controller.advance();
        self.enter(stage);
        stage
    }

    /// Moves one stage back.
    pub fn retreat(&mut self) -> Stage {
        let mut controller = self.controller;
        let stage = controller.retreat();
        self.enter(stage);
        stage
    }

    /// Jumps to stage `n`.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::OutOfRange` when `n` is not in 1..=4.
    pub fn go_to(&mut self, n: i64) -> Result<Stage> {
        let mut controller = self.controller;
        let stage = controller.go_to(n)?;
        self.enter(stage);
        Ok(stage)
    }

    /// Discards the order and all transient stage state.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.order = Order::default();
        self.controller = StageController::new();
        self.plan_selector = PlanSelector::new();
        self.add_on_selector = AddOnSelector::new();
    }

    /// Stage-2 transient state.
    pub fn plan_selector(&self) -> &PlanSelector {
        &self.plan_selector
    }

    /// Chooses a product line for stage 2.
    pub fn select_product(&mut self, product_id: &str) -> Result<&Product> {
        self.plan_selector.select_product(&self.catalog, product_id)
    }

    /// Chooses a plan of the current product line; returns its effective
    /// price.
    pub fn select_plan(&mut self, plan_id: &str) -> Result<f64> {
        self.plan_selector.select_plan(&self.catalog, plan_id)
    }

    /// Applies a typed price edit; see [`PlanSelector::edit_price`].
    pub fn set_plan_price(&mut self, plan_id: &str, raw: &str) -> Option<f64> {
        self.plan_selector.edit_price(&self.catalog, plan_id, raw)
    }

    /// Effective price of a plan of the current product line.
    pub fn effective_price(&self, plan_id: &str) -> Option<f64> {
        let product_id = self.plan_selector.product_line_id()?;
        self.catalog
            .find_plan_in_product(product_id, plan_id)
            .map(|plan| self.plan_selector.effective_price(plan))
    }

    /// Product line currently chosen in stage 2.
    pub fn selected_product(&self) -> Option<&Product> {
        self.plan_selector
            .product_line_id()
            .and_then(|id| self.catalog.find_product(id))
    }

    /// End date for live display of the contract-terms form.
    pub fn preview_end_date(&self, input: &ContractTermsInput) -> Option<jiff::civil::Date> {
        contract::preview_end_date(input)
    }

    /// The single order mutation path.
    fn merge(&mut self, update: OrderUpdate) {
        debug!("merging {} update", update.stage().as_str());
        self.order.apply(update);
    }

    /// Makes `stage` active, reopening the review when it is entered from
    /// elsewhere.
    fn enter(&mut self, stage: Stage) {
        let previous = self.controller.current();
        self.controller.set(stage);
        if stage == previous {
            return;
        }
        if stage == Stage::ReviewFinalize {
            self.add_on_selector = AddOnSelector::seeded(&self.order);
        } else if previous == Stage::ReviewFinalize {
            self.add_on_selector.set_finalized(false);
        }
    }
}
