//! Core library for the ordercraft order-configuration wizard.
//!
//! This crate provides the business logic for building a customer order in
//! four stages: customer information, product selection, contract terms and
//! review with add-ons. It owns the order model, the stage controller, the
//! per-stage validators and the pricing calculator. Rendering lives in the
//! CLI crate.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Money, dates, listings and the
//!   stage tracker
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use ordercraft_core::{
//!     SessionBuilder, Stage,
//!     params::{ContractTermsInput, CustomerInfoInput, ProductSelectionInput, StageInput},
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_catalog(ordercraft_core::Catalog::builtin())
//!     .build()?;
//!
//! session.submit_stage(1, StageInput::CustomerInfo(CustomerInfoInput {
//!     customer_name: "Acme Corp".to_string(),
//!     ..Default::default()
//! }))?;
//! session.submit_stage(2, StageInput::ProductSelection(ProductSelectionInput {
//!     product_line_id: "crm-pro".to_string(),
//!     selected_plan_id: "crm-pro-advanced".to_string(),
//!     custom_price: None,
//! }))?;
//! session.submit_stage(3, StageInput::ContractTerms(ContractTermsInput {
//!     start_date: "2024-03-01".to_string(),
//!     contract_period: "12".to_string(),
//!     custom_duration: None,
//! }))?;
//! assert_eq!(session.current_stage(), Stage::ReviewFinalize);
//!
//! session.check_add_on("api-access")?;
//! session.set_add_on_quantity("api-access", "2")?;
//! println!("{}", session.summary());
//! assert_eq!(session.totals().total, 129.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod pricing;
pub mod wizard;

// Re-export commonly used types
pub use display::{
    AddOns, ContractDate, FieldErrors, Money, OperationStatus, PlanChoices, Products,
    StageProgress,
};
pub use error::{Result, ValidationError, ValidationErrors, WizardError};
pub use models::{
    AddOn, AddOnSelection, Address, Catalog, Order, OrderSummary, OrderUpdate, Plan,
    PriceInterval, Product, Stage,
};
pub use params::{
    AddOnId, AddOnQuantity, AddOnQuantityEdit, AddOnsInput, AddressInput, ContractTermsInput,
    CustomerInfoInput, GoToStage, PlanPriceEdit, ProductSelectionInput, SelectPlan, SelectProduct,
    StageInput,
};
pub use pricing::{OrderTotals, contract_end_date, order_total, order_totals};
pub use wizard::{AddOnSelector, PlanSelector, Session, SessionBuilder, StageController};
