//! Parameter structures for wizard operations
//!
//! These are the raw inputs the rendering layers (CLI, MCP) hand to the
//! core. They mirror the form fields of each stage and carry no validation of
//! their own: the stage validators in [`crate::wizard`] turn them into
//! [`OrderUpdate`](crate::models::OrderUpdate)s or field errors.
//!
//! ## Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers convert their own argument types into these via `From`
//! impls, or wrap them transparently (MCP) to add schema generation. JSON
//! schema derives are only compiled with the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Stage;

/// Raw address fields of the customer-info form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddressInput {
    /// Street address (required when pre-populating)
    #[serde(default)]
    pub address_line1: String,
    /// Suite, floor, etc.
    #[serde(default)]
    pub address_line2: Option<String>,
    /// City (required when pre-populating)
    #[serde(default)]
    pub city: String,
    /// State (required when pre-populating)
    #[serde(default)]
    pub state: String,
    /// Zip code (required when pre-populating)
    #[serde(default)]
    pub zip_code: String,
}

/// Stage 1 submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CustomerInfoInput {
    /// Customer account name (required)
    #[serde(default)]
    pub customer_name: String,
    /// Whether to record the customer's address on the order
    #[serde(default)]
    pub pre_populate: bool,
    /// Address fields; discarded unless `pre_populate` is true
    #[serde(default)]
    pub address: Option<AddressInput>,
}

/// Stage 2 submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProductSelectionInput {
    /// Product line id from the catalog
    #[serde(default)]
    pub product_line_id: String,
    /// Plan id belonging to the product line
    #[serde(default)]
    pub selected_plan_id: String,
    /// Optional price override for the selected plan
    #[serde(default)]
    pub custom_price: Option<f64>,
}

/// Stage 3 submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ContractTermsInput {
    /// Contract start date as YYYY-MM-DD
    #[serde(default)]
    pub start_date: String,
    /// One of "6", "12", "24", "36" or "custom"
    #[serde(default)]
    pub contract_period: String,
    /// Number of months when `contract_period` is "custom"
    #[serde(default)]
    pub custom_duration: Option<i64>,
}

/// One requested add-on line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddOnQuantity {
    /// Add-on id from the catalog
    pub add_on_id: String,
    /// Number of units (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Stage 4 submission: the complete add-on selection in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddOnsInput {
    #[serde(default)]
    pub selected_add_ons: Vec<AddOnQuantity>,
}

/// Raw input of any stage, as passed to `Session::submit_stage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageInput {
    CustomerInfo(CustomerInfoInput),
    ProductSelection(ProductSelectionInput),
    ContractTerms(ContractTermsInput),
    #[serde(rename = "review_finalize")]
    AddOns(AddOnsInput),
}

impl StageInput {
    /// The stage this input belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            StageInput::CustomerInfo(_) => Stage::CustomerInfo,
            StageInput::ProductSelection(_) => Stage::ProductSelection,
            StageInput::ContractTerms(_) => Stage::ContractTerms,
            StageInput::AddOns(_) => Stage::ReviewFinalize,
        }
    }
}

/// Parameters for jumping directly to a stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GoToStage {
    /// One-based stage number (1-4)
    pub stage: i64,
}

/// Parameters naming a product line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectProduct {
    pub product_line_id: String,
}

/// Parameters naming a plan of the selected product line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectPlan {
    pub plan_id: String,
}

/// Live edit of a plan's price, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanPriceEdit {
    pub plan_id: String,
    /// Raw price text; unparsable input keeps the previous price
    pub price: String,
}

/// Parameters naming an add-on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddOnId {
    pub add_on_id: String,
}

/// Live edit of an add-on quantity, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddOnQuantityEdit {
    pub add_on_id: String,
    /// Raw quantity text; non-numeric input counts as 0
    pub quantity: String,
}
