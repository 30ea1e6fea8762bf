//! Read-only aggregation shown by the review stage.

use jiff::civil::Date;
use serde::Serialize;

use super::{Address, PriceInterval};
use crate::pricing::OrderTotals;

/// Snapshot of the order joined with catalog names and computed totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderSummary {
    pub customer_name: String,
    pub customer_address: Option<Address>,
    pub product_name: Option<String>,
    pub plan_name: Option<String>,
    pub price_interval: Option<PriceInterval>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub contract_period_in_months: u32,
    pub totals: OrderTotals,
    /// Terminal read-only display state
    pub finalized: bool,
}
