//! Static product, plan and add-on catalog.
//!
//! The catalog is loaded once when a session starts and is never mutated
//! afterwards. Sessions share it through an `Arc`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogResultExt, Result, WizardError};

/// Billing interval of a plan's price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PriceInterval {
    #[default]
    #[serde(rename = "mo", alias = "monthly")]
    Monthly,
    #[serde(rename = "yr", alias = "yearly")]
    Yearly,
}

impl PriceInterval {
    /// Short suffix used after a price, e.g. `$79/mo`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceInterval::Monthly => "mo",
            PriceInterval::Yearly => "yr",
        }
    }
}

/// A purchasable plan belonging to a product line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub default_price: f64,
    #[serde(default)]
    pub price_interval: PriceInterval,
}

/// A product line and its plans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub plans: Vec<Plan>,
}

impl Product {
    /// Finds a plan of this product by id.
    pub fn find_plan(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }
}

/// An optional extra billed per unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub price_label: String,
}

/// Read-only lookup table of products and add-ons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    #[serde(default)]
    add_ons: Vec<AddOn>,
}

impl Catalog {
    /// Builds a catalog after checking it is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Catalog` when ids collide, a product has no
    /// plans, or a price is negative or not finite.
    pub fn new(products: Vec<Product>, add_ons: Vec<AddOn>) -> Result<Self> {
        let catalog = Self { products, add_ons };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).catalog_context("Malformed catalog document")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog JSON document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| WizardError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        fn plan(id: &str, name: &str, price: f64, interval: PriceInterval) -> Plan {
            Plan {
                id: id.to_string(),
                name: name.to_string(),
                default_price: price,
                price_interval: interval,
            }
        }
        fn add_on(id: &str, name: &str, price: f64, label: &str) -> AddOn {
            AddOn {
                id: id.to_string(),
                name: name.to_string(),
                price,
                price_label: label.to_string(),
            }
        }
        use PriceInterval::{Monthly, Yearly};

        Self {
            products: vec![
                Product {
                    id: "crm-basic".to_string(),
                    name: "CRM Basic".to_string(),
                    plans: vec![
                        plan("crm-basic-monthly", "Basic Monthly", 29.0, Monthly),
                        plan("crm-basic-yearly", "Basic Yearly", 290.0, Yearly),
                    ],
                },
                Product {
                    id: "crm-pro".to_string(),
                    name: "CRM Professional".to_string(),
                    plans: vec![
                        plan("crm-pro-monthly", "Professional Monthly", 79.0, Monthly),
                        plan("crm-pro-advanced", "Professional Advanced", 79.0, Monthly),
                        plan("crm-pro-yearly", "Professional Yearly", 790.0, Yearly),
                    ],
                },
                Product {
                    id: "crm-enterprise".to_string(),
                    name: "CRM Enterprise".to_string(),
                    plans: vec![
                        plan("crm-enterprise-monthly", "Enterprise Monthly", 149.0, Monthly),
                        plan("crm-enterprise-yearly", "Enterprise Yearly", 1490.0, Yearly),
                    ],
                },
            ],
            add_ons: vec![
                add_on("api-access", "API Access", 25.0, "$25/mo"),
                add_on("extra-storage", "Extra Storage (100 GB)", 10.0, "$10/mo per 100 GB"),
                add_on("additional-seats", "Additional Seats", 15.0, "$15/mo per seat"),
                add_on("priority-support", "Priority Support", 99.0, "$99/mo"),
                add_on("advanced-analytics", "Advanced Analytics", 49.0, "$49/mo"),
            ],
        }
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn list_add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Finds a plan by id across all products.
    pub fn find_plan(&self, plan_id: &str) -> Option<&Plan> {
        self.products.iter().find_map(|p| p.find_plan(plan_id))
    }

    /// Finds the product line a plan belongs to.
    pub fn product_for_plan(&self, plan_id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.find_plan(plan_id).is_some())
    }

    /// Finds a plan only if it belongs to `product_id`.
    pub fn find_plan_in_product(&self, product_id: &str, plan_id: &str) -> Option<&Plan> {
        self.find_product(product_id)
            .and_then(|p| p.find_plan(plan_id))
    }

    pub fn find_add_on(&self, add_on_id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == add_on_id)
    }

    fn validate(&self) -> Result<()> {
        let mut product_ids = HashSet::new();
        let mut plan_ids = HashSet::new();

        for product in &self.products {
            if product.id.trim().is_empty() {
                return Err(WizardError::catalog("Product id must not be empty"));
            }
            if !product_ids.insert(product.id.as_str()) {
                return Err(WizardError::catalog(format!(
                    "Duplicate product id '{}'",
                    product.id
                )));
            }
            if product.plans.is_empty() {
                return Err(WizardError::catalog(format!(
                    "Product '{}' has no plans",
                    product.id
                )));
            }
            for plan in &product.plans {
                if !plan_ids.insert(plan.id.as_str()) {
                    return Err(WizardError::catalog(format!(
                        "Duplicate plan id '{}'",
                        plan.id
                    )));
                }
                check_price(&plan.id, plan.default_price)?;
            }
        }

        let mut add_on_ids = HashSet::new();
        for add_on in &self.add_ons {
            if !add_on_ids.insert(add_on.id.as_str()) {
                return Err(WizardError::catalog(format!(
                    "Duplicate add-on id '{}'",
                    add_on.id
                )));
            }
            check_price(&add_on.id, add_on.price)?;
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_price(id: &str, price: f64) -> Result<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(WizardError::catalog(format!(
            "Price of '{id}' must be a non-negative number, got {price}"
        )))
    }
}
