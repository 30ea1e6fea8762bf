//! The order record accumulated across the wizard stages.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Stage;

/// Contract period a fresh order starts with.
pub const DEFAULT_CONTRACT_MONTHS: u32 = 12;

/// Customer address captured when pre-population is requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// One selected add-on and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddOnSelection {
    pub add_on_id: String,
    pub quantity: u32,
}

impl AddOnSelection {
    pub fn new(add_on_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            add_on_id: add_on_id.into(),
            quantity,
        }
    }
}

/// The single record being built by a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub customer_name: String,

    /// Present only when the customer opted to pre-populate
    pub customer_address: Option<Address>,

    pub selected_plan_id: Option<String>,

    /// Effective plan price committed at stage 2
    pub custom_plan_price: Option<f64>,

    pub start_date: Option<Date>,

    pub contract_period_in_months: u32,

    /// Derived from `start_date` and `contract_period_in_months`
    pub end_date: Option<Date>,

    #[serde(default)]
    pub selected_add_ons: Vec<AddOnSelection>,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_address: None,
            selected_plan_id: None,
            custom_plan_price: None,
            start_date: None,
            contract_period_in_months: DEFAULT_CONTRACT_MONTHS,
            end_date: None,
            selected_add_ons: Vec::new(),
        }
    }
}

impl Order {
    /// Merges a validated stage update into the order.
    ///
    /// This is the only mutation path: every field an update carries is
    /// replaced wholesale, fields it does not carry are left untouched.
    pub fn apply(&mut self, update: OrderUpdate) {
        match update {
            OrderUpdate::CustomerInfo {
                customer_name,
                customer_address,
            } => {
                self.customer_name = customer_name;
                self.customer_address = customer_address;
            }
            OrderUpdate::ProductSelection {
                selected_plan_id,
                custom_plan_price,
            } => {
                self.selected_plan_id = Some(selected_plan_id);
                self.custom_plan_price = Some(custom_plan_price);
            }
            OrderUpdate::ContractTerms {
                start_date,
                contract_period_in_months,
                end_date,
            } => {
                self.start_date = Some(start_date);
                self.contract_period_in_months = contract_period_in_months;
                self.end_date = Some(end_date);
            }
            OrderUpdate::AddOns { selected_add_ons } => {
                self.selected_add_ons = selected_add_ons;
            }
        }
    }

    /// Plan price used for totals; zero until a plan has been committed.
    pub fn plan_price(&self) -> f64 {
        self.custom_plan_price.unwrap_or(0.0)
    }

    /// Quantity recorded for an add-on, if it is selected.
    pub fn add_on_quantity(&self, add_on_id: &str) -> Option<u32> {
        self.selected_add_ons
            .iter()
            .find(|s| s.add_on_id == add_on_id)
            .map(|s| s.quantity)
    }
}

/// A validated partial update produced by one stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum OrderUpdate {
    CustomerInfo {
        customer_name: String,
        customer_address: Option<Address>,
    },
    ProductSelection {
        selected_plan_id: String,
        custom_plan_price: f64,
    },
    ContractTerms {
        start_date: Date,
        contract_period_in_months: u32,
        end_date: Date,
    },
    #[serde(rename = "review_finalize")]
    AddOns { selected_add_ons: Vec<AddOnSelection> },
}

impl OrderUpdate {
    /// The stage that produces this kind of update.
    pub fn stage(&self) -> Stage {
        match self {
            OrderUpdate::CustomerInfo { .. } => Stage::CustomerInfo,
            OrderUpdate::ProductSelection { .. } => Stage::ProductSelection,
            OrderUpdate::ContractTerms { .. } => Stage::ContractTerms,
            OrderUpdate::AddOns { .. } => Stage::ReviewFinalize,
        }
    }
}
