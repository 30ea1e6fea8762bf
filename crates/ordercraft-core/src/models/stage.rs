//! The four wizard stages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the wizard stages, in navigation order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Stage 1: customer name and optional address
    #[default]
    CustomerInfo,

    /// Stage 2: product line, plan and effective price
    ProductSelection,

    /// Stage 3: start date, contract period and derived end date
    ContractTerms,

    /// Stage 4: add-ons, totals and finalization
    ReviewFinalize,
}

impl Stage {
    /// All stages in navigation order.
    pub const ALL: [Stage; 4] = [
        Stage::CustomerInfo,
        Stage::ProductSelection,
        Stage::ContractTerms,
        Stage::ReviewFinalize,
    ];

    /// One-based stage number.
    pub fn number(&self) -> u8 {
        match self {
            Stage::CustomerInfo => 1,
            Stage::ProductSelection => 2,
            Stage::ContractTerms => 3,
            Stage::ReviewFinalize => 4,
        }
    }

    /// Resolve a one-based stage number, `None` outside 1..=4.
    pub fn from_number(n: i64) -> Option<Stage> {
        match n {
            1 => Some(Stage::CustomerInfo),
            2 => Some(Stage::ProductSelection),
            3 => Some(Stage::ContractTerms),
            4 => Some(Stage::ReviewFinalize),
            _ => None,
        }
    }

    /// The following stage, `None` from the last one.
    pub fn next(&self) -> Option<Stage> {
        Stage::from_number(i64::from(self.number()) + 1)
    }

    /// The preceding stage, `None` from the first one.
    pub fn previous(&self) -> Option<Stage> {
        Stage::from_number(i64::from(self.number()) - 1)
    }

    /// Human-readable title shown in the navigation tracker.
    pub fn title(&self) -> &'static str {
        match self {
            Stage::CustomerInfo => "Customer Information",
            Stage::ProductSelection => "Product Selection",
            Stage::ContractTerms => "Contract Terms",
            Stage::ReviewFinalize => "Review & Finalize",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::CustomerInfo => "customer_info",
            Stage::ProductSelection => "product_selection",
            Stage::ContractTerms => "contract_terms",
            Stage::ReviewFinalize => "review_finalize",
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(n) = normalized.parse::<i64>() {
            return Stage::from_number(n).ok_or_else(|| format!("Invalid stage: {s}"));
        }
        match normalized.as_str() {
            "customer_info" | "customer" => Ok(Stage::CustomerInfo),
            "product_selection" | "product" => Ok(Stage::ProductSelection),
            "contract_terms" | "contract" => Ok(Stage::ContractTerms),
            "review_finalize" | "review" => Ok(Stage::ReviewFinalize),
            _ => Err(format!("Invalid stage: {s}")),
        }
    }
}
