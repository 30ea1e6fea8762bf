//! Data models for the catalog, the order and the wizard stages.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so formatting stays separate from the data.
//!
//! - [`Catalog`] with its [`Product`], [`Plan`] and [`AddOn`] entries is
//!   immutable once loaded.
//! - [`Order`] is the record accumulated across the stages. It is only ever
//!   changed through [`Order::apply`] with an [`OrderUpdate`].
//! - [`Stage`] names the four wizard steps.
//! - [`OrderSummary`] is the review-stage aggregation.
//!
//! # Examples
//!
//! ```rust
//! use ordercraft_core::models::{Order, OrderUpdate};
//!
//! let mut order = Order::default();
//! order.apply(OrderUpdate::ProductSelection {
//!     selected_plan_id: "crm-pro-advanced".to_string(),
//!     custom_plan_price: 79.0,
//! });
//! assert_eq!(order.plan_price(), 79.0);
//! assert_eq!(order.contract_period_in_months, 12);
//! ```

pub mod catalog;
pub mod order;
pub mod stage;
pub mod summary;


pub use catalog::{AddOn, Catalog, Plan, PriceInterval, Product};
pub use order::{AddOnSelection, Address, Order, OrderUpdate, DEFAULT_CONTRACT_MONTHS};
pub use stage::Stage;
pub use summary::OrderSummary;
